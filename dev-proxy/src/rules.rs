//! Forwarding rules for the development proxy.
//!
//! # Design
//! A rewrite is a plain `(prefix, replacement)` string pair applied by a pure
//! function, so rules can be unit-tested with no server running. Rule types
//! are serde-(de)serializable: the built-in set in [`dev_rules`] can be
//! replaced wholesale by a JSON file at startup.

use serde::{Deserialize, Serialize};

/// Replaces a leading path prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteRule {
    pub prefix: String,
    pub replacement: String,
}

impl RewriteRule {
    /// Returns `None` when the path does not start with the prefix.
    pub fn apply(&self, path: &str) -> Option<String> {
        path.strip_prefix(&self.prefix)
            .map(|rest| format!("{}{}", self.replacement, rest))
    }
}

/// One forwarding rule: requests whose path starts with `prefix` go to
/// `target`, optionally rewritten first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyRule {
    pub prefix: String,
    pub target: String,
    #[serde(default)]
    pub rewrite: Option<RewriteRule>,
    /// Drop the inbound `Host` header so the upstream sees its own origin.
    #[serde(default = "default_change_origin")]
    pub change_origin: bool,
}

fn default_change_origin() -> bool {
    true
}

impl ProxyRule {
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }

    /// Join the target with the (possibly rewritten) path and query.
    pub fn upstream_url(&self, path_and_query: &str) -> String {
        let forwarded = match &self.rewrite {
            Some(rewrite) => rewrite
                .apply(path_and_query)
                .unwrap_or_else(|| path_and_query.to_string()),
            None => path_and_query.to_string(),
        };
        format!("{}{}", self.target.trim_end_matches('/'), forwarded)
    }
}

/// First matching rule wins, like the dev server these rules were lifted from.
pub fn route<'a>(rules: &'a [ProxyRule], path: &str) -> Option<&'a ProxyRule> {
    rules.iter().find(|rule| rule.matches(path))
}

/// The built-in development rules:
///
/// 1. `/api/zen` → the public quotes API, with the mount prefix rewritten to
///    the upstream's own `/api` root;
/// 2. `/api/data` → the local backend, path untouched.
pub fn dev_rules() -> Vec<ProxyRule> {
    vec![
        ProxyRule {
            prefix: "/api/zen".to_string(),
            target: "https://zenquotes.io".to_string(),
            rewrite: Some(RewriteRule {
                prefix: "/api/zen".to_string(),
                replacement: "/api".to_string(),
            }),
            change_origin: true,
        },
        ProxyRule {
            prefix: "/api/data".to_string(),
            target: "http://localhost:8080".to_string(),
            rewrite: None,
            change_origin: true,
        },
    ]
}
