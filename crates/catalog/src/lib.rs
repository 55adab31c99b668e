//! Catalog domain module.
//!
//! This crate contains the business rules for video catalog categories,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod validation;

pub use category::{Category, CategoryInput};
pub use codeflix_core::{CategoryId, Entity};
pub use validation::{CategoryError, DESCRIPTION_MAX_LEN, NAME_MAX_LEN, NAME_MIN_LEN};
