//! Repository functions for the domain layer (generic over ConnectionTrait).

pub mod carts;
pub mod products;

pub use crate::adapters::paging::{Page, PageWindow};
