//! Tolerant JSON body handling.
//!
//! The upstream API has been observed serving otherwise-valid JSON with
//! trailing garbage after the closing brace. Recover the document by cutting
//! at the last delimiter matching the opening one before handing the text to
//! serde.

use serde::de::DeserializeOwned;

use crate::error::FetchError;

/// Trim a response body down to the JSON document it starts with.
///
/// Returns the body unchanged (modulo surrounding whitespace) when no
/// recovery applies; the subsequent parse reports the real problem then.
pub(crate) fn salvage_json(body: &str) -> &str {
    let trimmed = body.trim();

    let cut = if trimmed.starts_with('{') {
        trimmed.rfind('}').map(|i| i + 1)
    } else if trimmed.starts_with('[') {
        trimmed.rfind(']').map(|i| i + 1)
    } else {
        None
    };

    match cut {
        Some(end) => &trimmed[..end],
        None => trimmed,
    }
}

/// Parse a response body, salvaging trailing garbage first.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(salvage_json(body)).map_err(|e| FetchError::InvalidPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_body_passes_through() {
        assert_eq!(salvage_json(r#"{"id": 1}"#), r#"{"id": 1}"#);
        assert_eq!(salvage_json(" [1, 2] \n"), "[1, 2]");
    }

    #[test]
    fn test_trailing_garbage_is_trimmed() {
        assert_eq!(salvage_json("{\"id\": 1}\ngarbage after"), r#"{"id": 1}"#);
        assert_eq!(salvage_json("[1, 2]<!-- proxy -->"), "[1, 2]");
    }

    #[test]
    fn test_parse_recovers_object() {
        let parsed: serde_json::Value = parse_body("{\"total\": 50}trailing").unwrap();
        assert_eq!(parsed["total"], 50);
    }

    #[test]
    fn test_hopeless_body_is_invalid_payload() {
        let result: Result<serde_json::Value, _> = parse_body("<html>not json</html>");
        assert!(matches!(result, Err(FetchError::InvalidPayload(_))));
    }
}
