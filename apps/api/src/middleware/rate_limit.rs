//! Fixed-window rate limiting backed by Redis.
//!
//! One counter per (client identity, request path), bumped with INCR; the
//! window expiry is set when the counter is first created. Redis being
//! unreachable fails open with a logged warning — scoring must not depend on
//! the counter's availability.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use redis::AsyncCommands;
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

pub async fn rate_limit(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let client = client_identity(request.headers(), addr);
    let path = request.uri().path().to_string();
    let key = format!("ratelimit:{client}:{path}");

    match current_window_count(&state, &key).await {
        Ok(count) if count > state.config.rate_limit_max => {
            warn!(%client, %path, count, "rate limit exceeded");
            return Err(AppError::RateLimited);
        }
        Ok(_) => {}
        Err(e) => warn!(error = %e, "rate limiter unavailable, failing open"),
    }

    Ok(next.run(request).await)
}

/// Atomically bumps the window counter; a freshly created counter gets the
/// window TTL.
async fn current_window_count(state: &AppState, key: &str) -> redis::RedisResult<i64> {
    let mut conn = state.redis.get_multiplexed_async_connection().await?;
    let count: i64 = conn.incr(key, 1i64).await?;
    if count == 1 {
        let _: i64 = conn.expire(key, state.config.rate_limit_window_secs).await?;
    }
    Ok(count)
}

/// Proxy-provided client address when present, socket peer address otherwise.
fn client_identity(headers: &HeaderMap, addr: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| addr.ip().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn addr() -> SocketAddr {
        "10.0.0.7:4444".parse().unwrap()
    }

    #[test]
    fn test_client_identity_prefers_forwarded_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        assert_eq!(client_identity(&headers, addr()), "203.0.113.9");
    }

    #[test]
    fn test_client_identity_falls_back_to_peer_ip() {
        assert_eq!(client_identity(&HeaderMap::new(), addr()), "10.0.0.7");
    }
}
