//! Shared domain types, errors, and validation for the portfolio backend.

pub mod error;
pub mod types;
pub mod validate;
