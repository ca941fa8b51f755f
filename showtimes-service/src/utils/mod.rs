pub mod connection;
pub mod file;
