//! Axum forwarding server applying the proxy rules at request-routing time.
//!
//! Every inbound request hits the fallback handler, which picks the first
//! matching rule, replays the request against the rule's target over a shared
//! `reqwest::Client`, and relays status, headers, and body back. No error
//! taxonomy of its own — status codes are the whole contract: 404 when no
//! rule matches, 502 when the upstream cannot be reached.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderName, StatusCode},
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tracing::{debug, warn};

use crate::rules::{route, ProxyRule};

#[derive(Clone)]
struct ProxyState {
    rules: Arc<Vec<ProxyRule>>,
    http: reqwest::Client,
}

pub fn app(rules: Vec<ProxyRule>) -> Router {
    let state = ProxyState {
        rules: Arc::new(rules),
        http: reqwest::Client::new(),
    };
    Router::new().fallback(forward).with_state(state)
}

pub async fn run(listener: TcpListener, rules: Vec<ProxyRule>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(rules)).await
}

/// Headers that are connection-scoped and must not cross the proxy
/// (RFC 7230 §6.1).
fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

/// Forward one request according to the first matching rule.
///
/// When the rule says `change_origin`, the inbound `Host` header is dropped
/// so the HTTP client derives it from the target URL and the upstream sees a
/// same-origin request. `Content-Length` is recomputed from the relayed body.
async fn forward(
    State(state): State<ProxyState>,
    request: Request,
) -> Result<Response, StatusCode> {
    let path = request.uri().path().to_string();
    let Some(rule) = route(&state.rules, &path) else {
        debug!(%path, "no proxy rule matches");
        return Err(StatusCode::NOT_FOUND);
    };

    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or(path);
    let url = rule.upstream_url(&path_and_query);
    debug!(from = %path_and_query, to = %url, "forwarding");

    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    let mut upstream = state.http.request(parts.method, url.as_str());
    for (name, value) in &parts.headers {
        if is_hop_by_hop(name) || *name == header::CONTENT_LENGTH {
            continue;
        }
        if rule.change_origin && *name == header::HOST {
            continue;
        }
        upstream = upstream.header(name.clone(), value.clone());
    }

    let upstream_response = upstream.body(body).send().await.map_err(|e| {
        warn!(%url, error = %e, "upstream request failed");
        StatusCode::BAD_GATEWAY
    })?;

    let status = upstream_response.status().as_u16();
    let headers = upstream_response.headers().clone();
    let bytes = upstream_response
        .bytes()
        .await
        .map_err(|_| StatusCode::BAD_GATEWAY)?;

    let mut response = Response::builder().status(status);
    for (name, value) in &headers {
        if is_hop_by_hop(name) {
            continue;
        }
        response = response.header(name.clone(), value.clone());
    }
    response
        .body(Body::from(bytes))
        .map_err(|_| StatusCode::BAD_GATEWAY)
}
