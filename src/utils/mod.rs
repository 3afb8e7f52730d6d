//! Validation limits and filesystem helpers.

pub mod fs;
pub mod validation;
