//! Endpoint handlers.
//!
//! - `GET /hello?name=<n>&uppercase=true` → `{"message": "..."}` or 400 `{"error": "..."}`
//! - `GET /health` → `{"status": "healthy"}`

use axum::{extract::RawQuery, Json};
use url::form_urlencoded;

use crate::greeting::{format_greeting, generate_greeting, validate_name};
use crate::http::response::{ApiError, HealthResponse, MessageResponse};

/// Query parameters accepted by `/hello`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelloParams {
    /// Raw, untrimmed name. Empty when absent.
    pub name: String,
    /// True only for the literal value `true`.
    pub uppercase: bool,
}

impl HelloParams {
    /// Parse a form-urlencoded query string. The first occurrence of a key wins.
    ///
    /// Malformed pairs (a bad `%` escape, or any `;`) are skipped
    /// rather than decoded literally.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut name = None;
        let mut uppercase = None;

        let pairs = query
            .unwrap_or_default()
            .split('&')
            .filter(|segment| is_well_formed_pair(segment))
            .flat_map(|segment| form_urlencoded::parse(segment.as_bytes()));

        for (key, value) in pairs {
            match key.as_ref() {
                "name" if name.is_none() => name = Some(value.into_owned()),
                "uppercase" if uppercase.is_none() => uppercase = Some(value == "true"),
                _ => {}
            }
        }

        Self {
            name: name.unwrap_or_default(),
            uppercase: uppercase.unwrap_or(false),
        }
    }
}

fn is_well_formed_pair(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains(';') && has_valid_escapes(segment)
}

/// Every `%` must be followed by two hex digits.
fn has_valid_escapes(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

/// `GET /hello`
pub async fn hello(RawQuery(query): RawQuery) -> Result<Json<MessageResponse>, ApiError> {
    let params = HelloParams::from_query(query.as_deref());

    if !params.name.is_empty() {
        if let Err(e) = validate_name(&params.name) {
            tracing::debug!(error = %e, name_len = params.name.len(), "Rejected name");
            return Err(e.into());
        }
    }

    let message = format_greeting(&generate_greeting(&params.name), params.uppercase);
    Ok(Json(MessageResponse { message }))
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_absent() {
        assert_eq!(HelloParams::from_query(None), HelloParams::default());
        assert_eq!(HelloParams::from_query(Some("")), HelloParams::default());
    }

    #[test]
    fn test_params_decoding() {
        let params = HelloParams::from_query(Some("name=John+Doe&uppercase=true"));
        assert_eq!(params.name, "John Doe");
        assert!(params.uppercase);

        let params = HelloParams::from_query(Some("name=O%27Brien"));
        assert_eq!(params.name, "O'Brien");
        assert!(!params.uppercase);
    }

    #[test]
    fn test_uppercase_requires_literal_true() {
        for value in ["TRUE", "1", "yes", ""] {
            let params = HelloParams::from_query(Some(format!("uppercase={value}").as_str()));
            assert!(!params.uppercase, "{value:?}");
        }
    }

    #[test]
    fn test_first_value_wins() {
        let params = HelloParams::from_query(Some("name=Ann&name=Bob&uppercase=false&uppercase=true"));
        assert_eq!(params.name, "Ann");
        assert!(!params.uppercase);
    }

    #[test]
    fn test_malformed_pairs_are_skipped() {
        assert_eq!(HelloParams::from_query(Some("name=%zz")), HelloParams::default());
        assert_eq!(HelloParams::from_query(Some("name=Ann%")), HelloParams::default());
        assert_eq!(HelloParams::from_query(Some("na;me=Ann")), HelloParams::default());
        assert_eq!(HelloParams::from_query(Some("name=Ann;Bob")), HelloParams::default());

        let params = HelloParams::from_query(Some("name=%zz&name=Ann&uppercase=%4"));
        assert_eq!(params.name, "Ann");
        assert!(!params.uppercase);

        let params = HelloParams::from_query(Some("&&name=Bo%62&uppercase=true"));
        assert_eq!(params.name, "Bob");
        assert!(params.uppercase);
    }

    #[tokio::test]
    async fn test_hello_malformed_escape_uses_default() {
        let Json(body) = hello(RawQuery(Some("name=%zz".into()))).await.unwrap();
        assert_eq!(body.message, "Hello, World!");
    }

    #[tokio::test]
    async fn test_hello_default() {
        let Json(body) = hello(RawQuery(None)).await.unwrap();
        assert_eq!(body.message, "Hello, World!");
    }

    #[tokio::test]
    async fn test_hello_blank_name_is_rejected() {
        let err = hello(RawQuery(Some("name=+++".into()))).await.unwrap_err();
        assert_eq!(err.to_string(), "name cannot be empty");
    }

    #[tokio::test]
    async fn test_hello_uppercase() {
        let Json(body) = hello(RawQuery(Some("name=%20Jos%C3%A9%20&uppercase=true".into())))
            .await
            .unwrap();
        assert_eq!(body.message, "HELLO, JOSÉ!");
    }
}
