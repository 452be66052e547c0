//! # HTTP Server Module
//!
//! Axum routes over the string service.
//!
//! # Endpoints
//!
//! - `POST /strings` - Analyze and store a string
//! - `GET /strings` - List with structured filters
//! - `GET /strings/filter-by-natural-language` - List with a free-text query
//! - `GET /strings/:value` - Look up by raw value
//! - `DELETE /strings/:value` - Delete by raw value
//! - `/health`, `/metrics` - Observability

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod string_routes;

pub use config::{ConfigError, ServerConfig};
pub use errors::ErrorResponse;
pub use server::{build_router, HttpServer};
