use sea_orm::ConnectionTrait;
use tracing::{info, warn};

use crate::errors::domain::DomainError;
use crate::repos::carts::{self, Cart};

/// Insert a cart for `username`.
///
/// The username is taken as-is. A duplicate surfaces as
/// `DomainError::Conflict(ConflictKind::CartUsername, _)` from the unique index;
/// there is no pre-check, so concurrent creators race on the constraint.
pub async fn create_cart<C: ConnectionTrait>(conn: &C, username: &str) -> Result<Cart, DomainError> {
    match carts::create_cart(conn, username).await {
        Ok(cart) => {
            info!(cart_id = cart.id, "cart created");
            Ok(cart)
        }
        Err(e) => {
            warn!(error = %e, "cart creation failed");
            Err(e)
        }
    }
}
