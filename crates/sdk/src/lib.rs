//! # Ashby SDK
//!
//! Minimal async client for the Ashby ATS HTTP API.
//!
//! Every Ashby endpoint is a `POST` taking a JSON object and answering with the
//! envelope `{ "success": bool, "results"?: any, "errors"?: [..] }`. The client
//! sends exactly one request per call and never retries.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ashby_sdk::{AshbyClient, AshbyResult, Outcome};
//!
//! #[tokio::main]
//! async fn main() -> AshbyResult<()> {
//!     let client = AshbyClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let body = serde_json::json!({ "limit": 10 });
//!     match client.call("/job.list", &body).await? {
//!         Outcome::Success(results) => println!("{results:#}"),
//!         Outcome::Failure(errors) => eprintln!("Ashby rejected the call: {errors}"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod transport;

pub use client::{AshbyClient, AshbyClientBuilder};
pub use config::{ClientConfig, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use envelope::{Envelope, Outcome};
pub use error::{AshbyError, AshbyResult};
