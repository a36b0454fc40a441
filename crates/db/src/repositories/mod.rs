//! Repository layer.
//!
//! [`EntityRepo`] implements list/get/create/update/delete once, generic over
//! an [`EntitySchema`]. Each per-table module binds the schema (table, column
//! list, mutable fields) and exports a `*Repo` alias.

pub mod entity_repo;
pub mod product_repo;
pub mod user_repo;

pub use entity_repo::{EntityRepo, EntitySchema, Field, FieldValue};
pub use product_repo::{ProductRepo, ProductSchema};
pub use user_repo::{UserRepo, UserSchema};
