//! Greeting core.
//!
//! # Data Flow
//! ```text
//! raw name (untrusted)
//!     → validation.rs (emptiness → length → character class)
//!     → message.rs generate_greeting (trim, "Hello, {name}!")
//!     → message.rs format_greeting (optional uppercase)
//!     → greeting text
//! ```
//!
//! # Design Decisions
//! - Every function is pure: no I/O, no shared state
//! - Validation errors are a closed enum so callers branch on kind, not text
//! - Letter and whitespace checks use full Unicode classification

pub mod message;
pub mod validation;

pub use message::{format_greeting, generate_greeting, DEFAULT_GREETING};
pub use validation::{validate_name, NameError, MAX_NAME_LEN};
