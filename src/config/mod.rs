//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ServiceConfig::default()
//!     → loader.rs (overlay TOML file, then HOST / PORT environment)
//!     → CLI flags (applied by the binary)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty or missing file is a valid config
//! - Validation separates syntactic (serde) from semantic checks
//! - Environment lookup is injectable so overrides are testable

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_env_overrides, load_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, ServiceConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
