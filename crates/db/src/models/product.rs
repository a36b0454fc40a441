//! Product entity model and DTOs.

use inventory_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    /// Units on hand. Non-negative by convention; the database does not check.
    pub stock: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub stock: i32,
}

/// DTO for updating an existing product. All fields are optional.
///
/// `Some(0)` is a real stock level, not an omission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub stock: Option<i32>,
}
