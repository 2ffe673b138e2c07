// MCP (Model Context Protocol) server exposing the Ashby ATS API as tools

pub mod config;
pub mod dispatcher;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::McpConfig;
pub use dispatcher::{DispatchError, Dispatcher};
pub use server::McpServer;
