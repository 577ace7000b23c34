//! OData query construction and Graph error classification
//!
//! The Graph API uses OData conventions: `$filter` expressions with
//! single-quoted string literals, and a structured error body of the shape
//! `{"error": {"code": ..., "message": ...}}`. This module owns both ends of
//! that contract: escaping user input into filter clauses, and turning
//! failure responses into one [`ApiError`].

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::ApiError;

/// Characters left unencoded, matching JavaScript's `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Escape a free-text value for use inside a single-quoted OData literal.
///
/// Percent-encodes first, then doubles any embedded quote so it survives the
/// quote syntax: `O'Brien` becomes `O%27%27Brien`.
pub fn escape_filter_value(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT)
        .to_string()
        .replace('\'', "%27%27")
}

/// Build a ` and startswith(Field,'value')` filter clause
pub fn startswith_clause(field: &str, value: &str) -> String {
    format!(" and startswith({},'{}')", field, escape_filter_value(value))
}

/// Filter options for the deleted-groups listing
#[derive(Debug, Clone, Default)]
pub struct DeletedGroupFilter {
    /// Match groups whose displayName starts with this value
    pub display_name: Option<String>,

    /// Match groups whose mailNickname starts with this value
    pub mail_nickname: Option<String>,
}

impl DeletedGroupFilter {
    /// Build the request path for listing deleted Microsoft 365 groups.
    ///
    /// The fixed type filter restricts results to Unified (Microsoft 365)
    /// groups; optional `startswith` clauses narrow by display name and mail
    /// nickname. `$top` is a page-size hint, the service still paginates via
    /// `@odata.nextLink`.
    pub fn to_path(&self, page_size: usize) -> String {
        let mut path = String::from(
            "/v1.0/directory/deletedItems/Microsoft.Graph.Group?$filter=groupTypes/any(c:c+eq+'Unified')",
        );

        if let Some(ref name) = self.display_name {
            path.push_str(&startswith_clause("DisplayName", name));
        }
        if let Some(ref nickname) = self.mail_nickname {
            path.push_str(&startswith_clause("MailNickname", nickname));
        }

        path.push_str(&format!("&$top={}", page_size));
        path
    }
}

/// Structured Graph error body
#[derive(Debug, Deserialize)]
struct GraphErrorBody {
    error: GraphErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GraphErrorDetail {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// Classify a failed Graph response into a normalized [`ApiError`].
///
/// Prefers the structured `error.code` when the body parses; falls back to
/// the HTTP status otherwise. Total: every (status, body) pair maps to
/// exactly one error kind.
pub fn classify_failure(status: StatusCode, body: &str) -> ApiError {
    if let Ok(parsed) = serde_json::from_str::<GraphErrorBody>(body) {
        let GraphErrorDetail { code, message } = parsed.error;

        return match code.as_str() {
            "Authorization_RequestDenied" | "InvalidAuthenticationToken" => {
                ApiError::AuthFailure(message)
            }
            "Request_ResourceNotFound" | "ResourceNotFound" => ApiError::NotFound(message),
            "TooManyRequests" | "activityLimitReached" => ApiError::Throttled(message),
            _ => match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::AuthFailure(message),
                StatusCode::NOT_FOUND => ApiError::NotFound(message),
                StatusCode::TOO_MANY_REQUESTS => ApiError::Throttled(message),
                _ => ApiError::UnknownBackend { code, message },
            },
        };
    }

    // Unstructured failure: classify from the status line alone
    let reason = status
        .canonical_reason()
        .unwrap_or("unexpected status")
        .to_string();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::AuthFailure(reason),
        StatusCode::NOT_FOUND => ApiError::NotFound(reason),
        StatusCode::TOO_MANY_REQUESTS => ApiError::Throttled(reason),
        _ => ApiError::UnknownBackend {
            code: status.as_u16().to_string(),
            message: reason,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_value_unchanged() {
        assert_eq!(escape_filter_value("Finance"), "Finance");
    }

    #[test]
    fn test_escape_doubles_embedded_quote() {
        assert_eq!(escape_filter_value("O'Brien"), "O%27%27Brien");
    }

    #[test]
    fn test_escape_percent_encodes_reserved_chars() {
        assert_eq!(escape_filter_value("a b&c"), "a%20b%26c");
        assert_eq!(escape_filter_value("100%"), "100%25");
    }

    #[test]
    fn test_startswith_clause() {
        assert_eq!(
            startswith_clause("DisplayName", "O'Brien"),
            " and startswith(DisplayName,'O%27%27Brien')"
        );
    }

    #[test]
    fn test_deleted_group_path_no_filters() {
        let path = DeletedGroupFilter::default().to_path(100);
        assert_eq!(
            path,
            "/v1.0/directory/deletedItems/Microsoft.Graph.Group?$filter=groupTypes/any(c:c+eq+'Unified')&$top=100"
        );
    }

    #[test]
    fn test_deleted_group_path_with_both_filters() {
        let filter = DeletedGroupFilter {
            display_name: Some("Finance".to_string()),
            mail_nickname: Some("fin".to_string()),
        };
        let path = filter.to_path(100);

        assert!(path.contains("groupTypes/any(c:c+eq+'Unified')"));
        assert!(path.contains(" and startswith(DisplayName,'Finance')"));
        assert!(path.contains(" and startswith(MailNickname,'fin')"));
        assert!(path.ends_with("&$top=100"));
        // Display-name clause comes before the mail-nickname clause
        let dn = path.find("DisplayName").unwrap();
        let mn = path.find("MailNickname").unwrap();
        assert!(dn < mn);
    }

    #[test]
    fn test_deleted_group_path_escapes_filter_value() {
        let filter = DeletedGroupFilter {
            display_name: Some("O'Brien".to_string()),
            mail_nickname: None,
        };
        let path = filter.to_path(100);
        assert!(path.contains("startswith(DisplayName,'O%27%27Brien')"));
    }

    #[test]
    fn test_classify_structured_auth_code() {
        let body = r#"{"error":{"code":"Authorization_RequestDenied","message":"Insufficient privileges"}}"#;
        match classify_failure(StatusCode::FORBIDDEN, body) {
            ApiError::AuthFailure(msg) => assert_eq!(msg, "Insufficient privileges"),
            other => panic!("Expected AuthFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_structured_not_found_code() {
        let body = r#"{"error":{"code":"Request_ResourceNotFound","message":"No such team"}}"#;
        match classify_failure(StatusCode::NOT_FOUND, body) {
            ApiError::NotFound(msg) => assert_eq!(msg, "No such team"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_structured_throttle_code() {
        let body = r#"{"error":{"code":"TooManyRequests","message":"Slow down"}}"#;
        match classify_failure(StatusCode::TOO_MANY_REQUESTS, body) {
            ApiError::Throttled(msg) => assert_eq!(msg, "Slow down"),
            other => panic!("Expected Throttled, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_unmapped_code_falls_back_to_status() {
        // Unknown code but a recognizable status still classifies
        let body = r#"{"error":{"code":"SomeNewCode","message":"denied"}}"#;
        match classify_failure(StatusCode::UNAUTHORIZED, body) {
            ApiError::AuthFailure(msg) => assert_eq!(msg, "denied"),
            other => panic!("Expected AuthFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_unmapped_code_and_status_is_unknown_backend() {
        let body = r#"{"error":{"code":"Service_Unavailable","message":"try later"}}"#;
        match classify_failure(StatusCode::SERVICE_UNAVAILABLE, body) {
            ApiError::UnknownBackend { code, message } => {
                assert_eq!(code, "Service_Unavailable");
                assert_eq!(message, "try later");
            }
            other => panic!("Expected UnknownBackend, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_unparseable_body_uses_status() {
        match classify_failure(StatusCode::UNAUTHORIZED, "<html>nope</html>") {
            ApiError::AuthFailure(_) => (),
            other => panic!("Expected AuthFailure, got {:?}", other),
        }

        match classify_failure(StatusCode::INTERNAL_SERVER_ERROR, "oops") {
            ApiError::UnknownBackend { code, .. } => assert_eq!(code, "500"),
            other => panic!("Expected UnknownBackend, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_429_without_body() {
        match classify_failure(StatusCode::TOO_MANY_REQUESTS, "") {
            ApiError::Throttled(_) => (),
            other => panic!("Expected Throttled, got {:?}", other),
        }
    }
}
