//! strand-analyzer - deterministic string analysis with structured and
//! natural-language filtering
//!
//! - [`analyzer`]: pure per-string analysis and content identifiers
//! - [`store`]: keyed record storage behind the [`store::RecordStore`] trait
//! - [`query`]: filter coercion, natural-language rules and predicate evaluation
//! - [`service`]: request orchestration over an injected store
//! - [`http_server`]: axum routes, configuration and error rendering

pub mod analyzer;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod service;
pub mod store;
