//! Security headers for every response.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::http::header::{CONTENT_SECURITY_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS};
use axum::middleware::Next;
use axum::response::Response;

/// No scripts, no framing. Images may come from any host since hub assets
/// are arbitrary URLs; styles and fonts are limited to https.
pub const CONTENT_SECURITY_POLICY_VALUE: &str = "default-src 'self'; img-src * data:; \
    style-src 'self' 'unsafe-inline' https:; font-src https: data:; script-src 'none'; \
    object-src 'none'; base-uri 'none'; frame-ancestors 'none'";

/// Adds CSP, `X-Frame-Options: DENY`, and `X-Content-Type-Options: nosniff`.
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CONTENT_SECURITY_POLICY_VALUE),
    );
    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    response
}
