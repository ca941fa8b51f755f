use axum::extract::connect_info::Connected;
use axum::serve::IncomingStream;
use std::fmt;

/// Server-side port of the socket that accepted a connection.
///
/// Captured once per connection by `into_make_service_with_connect_info` and
/// handed to handlers through `ConnectInfo<LocalPort>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalPort(pub Option<u16>);

impl fmt::Display for LocalPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(port) => write!(f, "{}", port),
            None => f.write_str("unknown"),
        }
    }
}

impl Connected<IncomingStream<'_>> for LocalPort {
    fn connect_info(target: IncomingStream<'_>) -> Self {
        LocalPort(target.local_addr().ok().map(|addr| addr.port()))
    }
}
