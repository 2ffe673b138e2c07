//! Transport layer for the Ashby SDK.

pub mod http;

pub use http::HttpTransport;
