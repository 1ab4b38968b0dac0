use axum::extract::{ConnectInfo, Request};
use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Extract the client IP address from a request
///
/// Prefers the first X-Forwarded-For entry, then X-Real-IP (both set by
/// reverse proxies), then the peer address of the connection.
pub fn extract_client_ip(req: &Request) -> Option<String> {
    forwarded_ip(req.headers()).or_else(|| {
        req.extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
    })
}

/// Extract the client IP address from proxy headers only
///
/// # Examples
///
/// ```
/// use axum::http::HeaderMap;
/// use radio_read::utils::header_utils::forwarded_ip;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.1".parse().unwrap());
/// assert_eq!(forwarded_ip(&headers), Some("203.0.113.7".to_string()));
/// ```
pub fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    if let Some(forwarded) = headers.get("x-forwarded-for") {
        if let Ok(value) = forwarded.to_str() {
            if let Some(first) = value.split(',').map(str::trim).find(|ip| !ip.is_empty()) {
                return Some(first.to_string());
            }
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip") {
        if let Ok(value) = real_ip.to_str() {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_forwarded_for_first_entry() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "198.51.100.2, 10.0.0.1".parse().unwrap());
        assert_eq!(forwarded_ip(&headers), Some("198.51.100.2".to_string()));
    }

    #[test]
    fn test_real_ip_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", "198.51.100.9".parse().unwrap());
        assert_eq!(forwarded_ip(&headers), Some("198.51.100.9".to_string()));
    }

    #[test]
    fn test_forwarded_for_preferred_over_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "198.51.100.2".parse().unwrap());
        headers.insert("x-real-ip", "198.51.100.9".parse().unwrap());
        assert_eq!(forwarded_ip(&headers), Some("198.51.100.2".to_string()));
    }

    #[test]
    fn test_no_headers() {
        assert_eq!(forwarded_ip(&HeaderMap::new()), None);
    }

    #[test]
    fn test_connect_info_fallback() {
        let mut req = axum::http::Request::builder()
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let addr: SocketAddr = "127.0.0.1:4000".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));

        assert_eq!(extract_client_ip(&req), Some("127.0.0.1".to_string()));
    }

    #[test]
    fn test_unknown_client() {
        let req = axum::http::Request::builder()
            .uri("/")
            .body(Body::empty())
            .unwrap();
        assert_eq!(extract_client_ip(&req), None);
    }
}
