use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::utils::header_utils::extract_client_ip;

/// Request ID wrapper for tracking requests through the system
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Settings shared by every access-log middleware invocation
#[derive(Clone, Copy, Debug)]
pub struct AccessLogSettings {
    /// Requests slower than this are also warned about in the application log
    pub slow_request_threshold: Duration,
}

/// Middleware to generate unique request IDs for correlation
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get("X-Request-ID")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(request_id.clone()));

    let mut response = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("X-Request-ID", header_value);
    }

    response
}

/// Middleware to log all HTTP requests to the access log
pub async fn access_log_middleware(
    State(settings): State<AccessLogSettings>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let client_ip = extract_client_ip(&req).unwrap_or_else(|| "unknown".to_string());
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let response = next.run(req).await;

    let status = response.status();
    let duration = start.elapsed();

    tracing::info!(
        target: "access_log",
        request_id = %request_id,
        client_ip = %client_ip,
        method = %method,
        path = %path,
        status = status.as_u16(),
        duration_ms = duration.as_millis() as u64,
        user_agent = %user_agent,
        "HTTP request completed"
    );

    if duration > settings.slow_request_threshold {
        tracing::warn!(
            request_id = %request_id,
            path = %path,
            duration_ms = duration.as_millis() as u64,
            threshold_ms = settings.slow_request_threshold.as_millis() as u64,
            "Slow request detected"
        );
    }

    response
}
