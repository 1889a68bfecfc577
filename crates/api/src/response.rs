//! Shared response envelope types for API handlers.
//!
//! Every response uses the `{ "success": bool, ... }` envelope: successful
//! handlers wrap their payload in [`ApiResponse`], failures are produced by
//! `AppError`'s `IntoResponse` impl with `success: false`.

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a payload in the success envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Payload for paginated list endpoints.
///
/// `total_pages` is `ceil(total / limit)`, computed once here so every list
/// endpoint agrees on the arithmetic.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

impl<T: Serialize> Paginated<T> {
    /// Build a page payload from one page of items and the unfiltered total.
    pub fn new(items: Vec<T>, total: i64, page: i64, limit: i64) -> Self {
        Self {
            items,
            total,
            page,
            limit,
            total_pages: petshop_core::pagination::total_pages(total, limit),
        }
    }
}
