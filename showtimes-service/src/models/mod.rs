pub mod responses;
pub mod showtimes;
