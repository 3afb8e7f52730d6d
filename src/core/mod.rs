//! Core data types shared by the locator, parsers and CLI.
//!
//! - [`ValueKind`]: numeric or timestamp
//! - [`Value`], [`Series`]: dynamically typed values and reference series, as read from files
//! - [`Query`], [`Located`]: the shape of a lookup and of its result
//!
//! The generic locator in [`crate::matching`] works on plain slices (`&[f64]`,
//! `&[DateTime<Utc>]`); [`Series`] exists for data whose kind is only known at
//! runtime.

pub mod query;
pub mod types;
