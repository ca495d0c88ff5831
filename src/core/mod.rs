//! Transports serving the tool dispatcher

pub mod http;
pub mod stdio;

pub use http::*;
pub use stdio::StdioServer;
