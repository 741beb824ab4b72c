//! Unique test data via ULIDs, so tests sharing a database never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use storefront_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("cart");
/// let b = unique_str("cart");
/// assert_ne!(a, b);
/// assert!(a.starts_with("cart-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A fresh cart username.
pub fn unique_username() -> String {
    unique_str("shopper")
}
