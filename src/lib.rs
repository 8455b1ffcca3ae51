//! # Opttab MCP - client for the Opttab AI model API
//!
//! A thin client over the Opttab MCP HTTP API. Every operation maps to a
//! single request: the payload is built from the arguments, the static
//! credential headers are attached, and the JSON response is returned as-is.
//!
//! ## Architecture
//!
//! - **API**: [`ApiClient`], its builder, and typed request payloads
//! - **App**: The demonstration walkthrough run by the binary
//! - **Config**: Configuration management
//! - **Error**: Error taxonomy shared by all of the above

pub mod api;
pub mod app;
pub mod config;
pub mod error;

pub use api::{ApiClient, ApiClientBuilder};
pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
