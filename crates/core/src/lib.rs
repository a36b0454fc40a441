//! Shared primitives for the inventory service.
//!
//! Holds the id/timestamp aliases used by every table and the domain error
//! taxonomy that the repository and HTTP layers translate into.

pub mod error;
pub mod types;
