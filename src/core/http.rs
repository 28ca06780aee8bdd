//! HTTP utilities for schedule API communication

use crate::API_KEY_ENV_VAR;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use tracing::warn;

/// Build the request headers for the schedule API.
///
/// The `Authorization` header carries the raw key from `BALLDONTLIE_API_KEY`
/// and is omitted when the variable is unset, blank or not a valid header value.
pub fn schedule_header_map() -> HeaderMap {
    header_map_with_key(std::env::var(API_KEY_ENV_VAR).ok().as_deref())
}

pub(crate) fn header_map_with_key(api_key: Option<&str>) -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) {
        match HeaderValue::from_str(key) {
            Ok(value) => {
                h.insert(AUTHORIZATION, value);
            }
            Err(e) => warn!("ignoring {}: {}", API_KEY_ENV_VAR, e),
        }
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_map_with_key() {
        let headers = header_map_with_key(Some("abc-123"));
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "abc-123");
    }

    #[test]
    fn test_header_map_without_key() {
        let headers = header_map_with_key(None);
        assert!(headers.contains_key(ACCEPT));
        assert!(!headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_header_map_blank_key_is_ignored() {
        let headers = header_map_with_key(Some("   "));
        assert!(!headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_header_map_invalid_key_is_dropped() {
        let headers = header_map_with_key(Some("abc\ndef"));
        assert!(headers.contains_key(ACCEPT));
        assert!(!headers.contains_key(AUTHORIZATION));
    }
}
