//! HTTP handlers, one module per resource.
//!
//! Handlers stay thin: extract, call the repository from `AppState`, wrap
//! the result in a response envelope. Repository failures convert into
//! [`crate::error::AppError`] through `?`.

pub mod products;
pub mod users;
