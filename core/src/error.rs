//! Error type for the shop API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers routinely distinguish
//! "no such record" from "the server returned an unexpected status." Transport
//! failures stay separate from HTTP-level failures: `Transport` means no
//! response arrived at all, while `Http` carries whatever non-2xx the server
//! actually produced, raw status and body included.

use std::fmt;

/// Errors returned by `ShopClient` parse methods and `ShopApi` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the addressed record does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    Http { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The transport failed before any response was available.
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Transport(msg) => {
                write!(f, "transport failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
