//! API access layer for the shop backend.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the CRUD
//! surface of three resources — users, products, orders — without touching
//! the network (host-does-IO pattern). [`ShopApi`] composes the two halves
//! over an injected [`Transport`] when a ready-made call surface is wanted.
//!
//! # Design
//! - `ShopClient` is stateless — base URL and default headers, set once at
//!   construction and never mutated.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit and mockable.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.
//! - Orders are immutable once placed: no update or delete is exposed.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use api::{ShopApi, Transport};
pub use client::ShopClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{
    CreateOrder, CreateProduct, CreateUser, Order, OrderItem, OrderStatus, Product, UpdateProduct,
    UpdateUser, User,
};
