//! Development proxy: declarative path-prefix forwarding for the local dev
//! server.
//!
//! # Design
//! Rules live in [`rules`] as plain data, so path matching and rewriting are
//! unit-testable without a running server; [`server`] applies them with axum
//! and a shared reqwest client. This is development tooling only — production
//! deployments never run this binary.

pub mod rules;
pub mod server;

pub use rules::{dev_rules, route, ProxyRule, RewriteRule};
pub use server::{app, run};
