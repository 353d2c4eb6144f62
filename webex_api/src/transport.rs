//! The boundary between the endpoint wrappers and whatever actually talks HTTP.

use std::future::Future;

use serde_json::Value;

use crate::{
    request::{ItemsKey, Request},
    Error,
};

/// One page of a paginated collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub items: Vec<Value>,
    /// Request for the following page. `None` once the collection is exhausted.
    pub next: Option<Request>,
}

/// Sends request descriptors and returns parsed JSON.
///
/// Implementations own authentication, status checking and the vendor's page
/// continuation scheme. Errors are returned as-is to the caller; wrappers
/// never retry.
pub trait Transport {
    /// Sends a single request and returns the parsed body (`null` when the
    /// body is empty). Fails when the status differs from `request.expected`.
    fn request(&self, request: &Request) -> impl Future<Output = Result<Value, Error>>;

    /// Fetches one page of a collection, extracting items from `items_key`.
    fn fetch_page(
        &self,
        request: &Request,
        items_key: &ItemsKey,
    ) -> impl Future<Output = Result<Page, Error>>;
}
