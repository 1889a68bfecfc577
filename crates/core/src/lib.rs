//! Shared domain types for the pet-shop platform.
//!
//! This crate has no internal dependencies so both the repository layer and
//! the API server (and any future CLI tooling) can use it.

pub mod error;
pub mod pagination;
pub mod roles;
pub mod types;
