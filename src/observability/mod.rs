//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (key-value fields)
//!     → request spans from tower-http TraceLayer, tagged with x-request-id
//!
//! Consumers:
//!     → logging.rs fmt subscriber (stdout)
//! ```

pub mod logging;

pub use logging::init_logging;
