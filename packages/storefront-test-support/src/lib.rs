//! Test support for the storefront crates.
//!
//! Logging init shared by unit and integration tests, unique-name helpers, and
//! assertions over GraphQL and problem+json responses that do not depend on
//! backend types.

pub mod graphql;
pub mod problem_details;
pub mod test_logging;
pub mod unique_helpers;
