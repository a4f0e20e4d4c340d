//! Stateless HTTP request builder and response parser for the shop API.
//!
//! # Design
//! `ShopClient` holds a base URL and the fixed default header set, and carries
//! no mutable state between calls. Each CRUD operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. The caller executes the actual HTTP
//! round-trip, keeping the core deterministic and free of I/O dependencies.
//!
//! Orders have no update or delete operation — an order is immutable once
//! placed.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    CreateOrder, CreateProduct, CreateUser, Order, Product, UpdateProduct, UpdateUser, User,
};

/// Stateless client for the shop API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. Every built request carries the default header set,
/// which always includes `content-type: application/json`.
#[derive(Debug, Clone)]
pub struct ShopClient {
    base_url: String,
    default_headers: Vec<(String, String)>,
}

impl ShopClient {
    /// `base_url` is the API root, e.g. `http://localhost:3000/api`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_headers: vec![(
                "content-type".to_string(),
                "application/json".to_string(),
            )],
        }
    }

    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers: self.default_headers.clone(),
            body: None,
        }
    }

    fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut request = self.request(method, path);
        request.body = Some(body);
        Ok(request)
    }

    // --- users ---

    pub fn build_list_users(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/users")
    }

    pub fn build_get_user(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/users/{id}"))
    }

    pub fn build_create_user(&self, input: &CreateUser) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/users", input)
    }

    pub fn build_update_user(&self, id: u64, input: &UpdateUser) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, &format!("/users/{id}"), input)
    }

    pub fn build_delete_user(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/users/{id}"))
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        parse_json(response, 201)
    }

    pub fn parse_update_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_delete_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    // --- products ---

    pub fn build_list_products(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/products")
    }

    pub fn build_get_product(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/products/{id}"))
    }

    pub fn build_create_product(&self, input: &CreateProduct) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/products", input)
    }

    pub fn build_update_product(
        &self,
        id: u64,
        input: &UpdateProduct,
    ) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, &format!("/products/{id}"), input)
    }

    pub fn build_delete_product(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/products/{id}"))
    }

    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_get_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_create_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        parse_json(response, 201)
    }

    pub fn parse_update_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_delete_product(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    // --- orders ---

    pub fn build_list_orders(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/orders")
    }

    pub fn build_get_order(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/orders/{id}"))
    }

    pub fn build_create_order(&self, input: &CreateOrder) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "/orders", input)
    }

    pub fn parse_list_orders(&self, response: HttpResponse) -> Result<Vec<Order>, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_get_order(&self, response: HttpResponse) -> Result<Order, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_create_order(&self, response: HttpResponse) -> Result<Order, ApiError> {
        parse_json(response, 201)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Check the status, then deserialize the body.
fn parse_json<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
