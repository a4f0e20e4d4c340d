//! High-level API surface over an injected transport.
//!
//! # Design
//! `ShopApi` composes the build/parse halves of `ShopClient` with a
//! [`Transport`] implementation, exposing one method per operation the way
//! the view layer consumes them. The transport is injected so tests run
//! against a recorded fake instead of a socket. Nothing here retains state
//! between calls or coordinates concurrent use; all methods take `&self`.

use crate::client::ShopClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{
    CreateOrder, CreateProduct, CreateUser, Order, Product, UpdateProduct, UpdateUser, User,
};

/// Executes a single HTTP round-trip.
///
/// Implementations perform exactly one outbound request per call — no
/// retries. A failure to obtain any response (refused connection, broken
/// socket) is reported as [`ApiError::Transport`]; every received response,
/// success or not, is returned as data for the parse layer to interpret.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// One method per exported operation of the API module.
///
/// Orders carry no update or delete — an order is immutable once placed.
pub struct ShopApi<T: Transport> {
    client: ShopClient,
    transport: T,
}

impl<T: Transport> ShopApi<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: ShopClient::new(base_url),
            transport,
        }
    }

    pub fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.transport.execute(self.client.build_list_users())?;
        self.client.parse_list_users(response)
    }

    pub fn get_user(&self, id: u64) -> Result<User, ApiError> {
        let response = self.transport.execute(self.client.build_get_user(id))?;
        self.client.parse_get_user(response)
    }

    pub fn create_user(&self, input: &CreateUser) -> Result<User, ApiError> {
        let response = self.transport.execute(self.client.build_create_user(input)?)?;
        self.client.parse_create_user(response)
    }

    pub fn update_user(&self, id: u64, input: &UpdateUser) -> Result<User, ApiError> {
        let response = self
            .transport
            .execute(self.client.build_update_user(id, input)?)?;
        self.client.parse_update_user(response)
    }

    pub fn delete_user(&self, id: u64) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_delete_user(id))?;
        self.client.parse_delete_user(response)
    }

    pub fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.transport.execute(self.client.build_list_products())?;
        self.client.parse_list_products(response)
    }

    pub fn get_product(&self, id: u64) -> Result<Product, ApiError> {
        let response = self.transport.execute(self.client.build_get_product(id))?;
        self.client.parse_get_product(response)
    }

    pub fn create_product(&self, input: &CreateProduct) -> Result<Product, ApiError> {
        let response = self
            .transport
            .execute(self.client.build_create_product(input)?)?;
        self.client.parse_create_product(response)
    }

    pub fn update_product(&self, id: u64, input: &UpdateProduct) -> Result<Product, ApiError> {
        let response = self
            .transport
            .execute(self.client.build_update_product(id, input)?)?;
        self.client.parse_update_product(response)
    }

    pub fn delete_product(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .transport
            .execute(self.client.build_delete_product(id))?;
        self.client.parse_delete_product(response)
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        let response = self.transport.execute(self.client.build_list_orders())?;
        self.client.parse_list_orders(response)
    }

    pub fn get_order(&self, id: u64) -> Result<Order, ApiError> {
        let response = self.transport.execute(self.client.build_get_order(id))?;
        self.client.parse_get_order(response)
    }

    pub fn create_order(&self, input: &CreateOrder) -> Result<Order, ApiError> {
        let response = self
            .transport
            .execute(self.client.build_create_order(input)?)?;
        self.client.parse_create_order(response)
    }
}
