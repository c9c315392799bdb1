// cmstat-api: HTTP transport for cable modem status pages

pub mod client;
pub mod error;
pub mod transport;

pub use client::PageClient;
pub use error::Error;
pub use transport::TransportConfig;
