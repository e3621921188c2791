//! Greeting generation and formatting.

/// Greeting returned when no name is given.
pub const DEFAULT_GREETING: &str = "Hello, World!";

/// Build a greeting for `name`.
///
/// Surrounding whitespace is trimmed; internal whitespace is kept as-is.
/// No validation happens here, callers run [`super::validate_name`] first.
pub fn generate_greeting(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return DEFAULT_GREETING.to_string();
    }
    format!("Hello, {name}!")
}

/// Apply output formatting to a greeting.
///
/// Uppercasing uses the full Unicode mapping, so the result may be longer
/// than the input (`ß` becomes `SS`).
pub fn format_greeting(greeting: &str, uppercase: bool) -> String {
    if uppercase {
        greeting.to_uppercase()
    } else {
        greeting.to_string()
    }
}
