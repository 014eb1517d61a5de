use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE,
};
use axum::http::{HeaderMap, HeaderValue};

pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";
pub const MAX_AGE: &str = "86400";

// Sent instead of omitting the header when the origin is not allowed.
// Browsers treat it the same, but existing clients see the header either way.
const DISALLOWED_ORIGIN: &str = "null";

// Static allow-list plus one trusted suffix for preview deployments
// (e.g. https://abc123.ex-translate.pages.dev).
pub struct OriginPolicy {
    allowed: Vec<String>,
    trusted_suffix: String,
}

impl OriginPolicy {
    pub fn new(allowed: Vec<String>, trusted_suffix: String) -> Self {
        Self {
            allowed,
            trusted_suffix,
        }
    }

    // Parse from a comma-separated CLI value, e.g.
    // "http://localhost:3000,https://extranslator.samolab.com"
    pub fn from_list(origins: &str, trusted_suffix: &str) -> Self {
        let allowed = origins
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self::new(allowed, trusted_suffix.to_string())
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed.iter().any(|a| a == origin) || origin.ends_with(&self.trusted_suffix)
    }

    // CORS headers for a response. Always present, on every status;
    // Allow-Origin echoes the origin when allowed, otherwise the literal
    // "null" sentinel.
    pub fn response_headers(&self, origin: Option<&str>) -> HeaderMap {
        let allow_origin = match origin {
            Some(o) if self.is_allowed(o) => {
                HeaderValue::from_str(o).unwrap_or(HeaderValue::from_static(DISALLOWED_ORIGIN))
            }
            _ => HeaderValue::from_static(DISALLOWED_ORIGIN),
        };

        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
        headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static(MAX_AGE));
        headers
    }
}
