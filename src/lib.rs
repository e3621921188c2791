//! Greeting Service Library
//!
//! A small HTTP service that validates a name and returns a greeting.
//!
//! ```text
//!   GET /hello?name=..&uppercase=..       GET /health
//!            │                                 │
//!            ▼                                 ▼
//!   http::handlers::hello              http::handlers::health
//!            │
//!            ▼
//!   greeting::validate_name → generate_greeting → format_greeting
//! ```

pub mod config;
pub mod greeting;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
