//! Assertions over requests captured by the fake transport.

use http::header::AUTHORIZATION;
use http::Method;

use crate::transport::HttpRequest;

/// Assert that `request` is a POST.
///
/// # Panics
/// Panics if the method is anything else.
pub fn assert_post(request: &HttpRequest) {
    assert_eq!(
        request.method,
        Method::POST,
        "expected POST to {}, got {}",
        request.url,
        request.method
    );
}

/// Assert that the `Authorization` header equals `expected` exactly.
///
/// # Panics
/// Panics if the header is missing or differs.
pub fn assert_authorization(request: &HttpRequest, expected: &str) {
    match request.header(AUTHORIZATION) {
        Some(actual) => assert_eq!(
            actual, expected,
            "Authorization header mismatch for {}",
            request.url
        ),
        None => panic!("request to {} has no Authorization header", request.url),
    }
}

/// Assert that the body is UTF-8 text containing `needle`.
///
/// # Panics
/// Panics if the body is missing, not UTF-8, or lacks `needle`.
pub fn assert_body_contains(request: &HttpRequest, needle: &str) {
    let body = request
        .body_text()
        .unwrap_or_else(|| panic!("request to {} has no text body", request.url));
    assert!(
        body.contains(needle),
        "body {:?} of request to {} does not contain {:?}",
        body,
        request.url,
        needle
    );
}

/// Assert that the request URL ends with `path`.
///
/// # Panics
/// Panics if it does not.
pub fn assert_path(request: &HttpRequest, path: &str) {
    assert!(
        request.url.ends_with(path),
        "expected request to {}, got {}",
        path,
        request.url
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertions_accept_matching_request() {
        let request = HttpRequest::post("https://example.com/api/heros/tranformations")
            .with_header(AUTHORIZATION, http::HeaderValue::from_static("Bearer t"))
            .with_body("id=42");

        assert_post(&request);
        assert_authorization(&request, "Bearer t");
        assert_body_contains(&request, "id=42");
        assert_path(&request, "/api/heros/tranformations");
    }

    #[test]
    #[should_panic(expected = "no Authorization header")]
    fn test_missing_authorization_panics() {
        assert_authorization(&HttpRequest::post("https://example.com"), "Bearer t");
    }
}
