//! End-to-end forwarding tests through real sockets.
//!
//! # Design
//! The mock shop backend stands in for the upstreams: rules are data, so each
//! test points a freshly built rule set at a server it just started. Requests
//! go through ureq, the same way the core crate's integration tests drive the
//! backend directly.

use dev_proxy::{ProxyRule, RewriteRule};

/// Start the mock shop backend on a random port and return its address.
fn start_upstream() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

/// Start the proxy with the given rules on a random port.
fn start_proxy(rules: Vec<ProxyRule>) -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            dev_proxy::run(listener, rules).await
        })
        .unwrap();
    });

    addr
}

fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

/// A `/api/zen`-style rule pointed at the given upstream.
fn rewrite_rule(upstream: std::net::SocketAddr) -> ProxyRule {
    ProxyRule {
        prefix: "/api/zen".to_string(),
        target: format!("http://{upstream}"),
        rewrite: Some(RewriteRule {
            prefix: "/api/zen".to_string(),
            replacement: "/api".to_string(),
        }),
        change_origin: true,
    }
}

/// A `/api/data`-style pass-through rule pointed at the given upstream.
fn passthrough_rule(upstream: std::net::SocketAddr) -> ProxyRule {
    ProxyRule {
        prefix: "/api".to_string(),
        target: format!("http://{upstream}"),
        rewrite: None,
        change_origin: true,
    }
}

#[test]
fn rewritten_prefix_reaches_the_upstream_mount() {
    let upstream = start_upstream();
    let proxy = start_proxy(vec![rewrite_rule(upstream)]);

    // /api/zen/users is rewritten to /api/users, which the upstream serves
    let mut response = agent()
        .get(&format!("http://{proxy}/api/zen/users"))
        .call()
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.body_mut().read_to_string().unwrap(), "[]");
}

#[test]
fn passthrough_forwards_path_unchanged() {
    let upstream = start_upstream();
    let proxy = start_proxy(vec![passthrough_rule(upstream)]);

    let response = agent()
        .get(&format!("http://{proxy}/api/products"))
        .call()
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
}

#[test]
fn method_headers_and_body_are_relayed() {
    let upstream = start_upstream();
    let proxy = start_proxy(vec![passthrough_rule(upstream)]);
    let agent = agent();

    // create through the proxy; the Json extractor upstream rejects the
    // request unless the content-type header made it across
    let mut response = agent
        .post(&format!("http://{proxy}/api/users"))
        .content_type("application/json")
        .send(r#"{"name":"Ada","email":"ada@example.com"}"#.as_bytes())
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let created = response.body_mut().read_to_string().unwrap();
    assert!(created.contains("\"name\":\"Ada\""));

    // and read it back through the proxy
    let mut response = agent
        .get(&format!("http://{proxy}/api/users/1"))
        .call()
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.body_mut().read_to_string().unwrap().contains("Ada"));
}

#[test]
fn unmatched_path_returns_404() {
    let upstream = start_upstream();
    let proxy = start_proxy(vec![rewrite_rule(upstream)]);

    let response = agent()
        .get(&format!("http://{proxy}/assets/logo.svg"))
        .call()
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
}

#[test]
fn dead_upstream_returns_502() {
    // nothing listens on port 1
    let proxy = start_proxy(vec![ProxyRule {
        prefix: "/api".to_string(),
        target: "http://127.0.0.1:1".to_string(),
        rewrite: None,
        change_origin: true,
    }]);

    let response = agent()
        .get(&format!("http://{proxy}/api/users"))
        .call()
        .unwrap();

    assert_eq!(response.status().as_u16(), 502);
}

#[test]
fn upstream_error_statuses_pass_through() {
    let upstream = start_upstream();
    let proxy = start_proxy(vec![passthrough_rule(upstream)]);

    let response = agent()
        .get(&format!("http://{proxy}/api/users/99"))
        .call()
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
}
