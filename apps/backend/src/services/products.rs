use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::errors::domain::DomainError;
use crate::repos::products::{self, Product};

/// Inventory never drops below this through `decrement_inventory`.
pub const INVENTORY_FLOOR: i32 = 1;

/// Result of asking for one unit of a product.
#[derive(Debug, Clone, PartialEq)]
pub enum DecrementOutcome {
    /// Inventory was above the floor and has been reduced by one.
    Decremented(Product),
    /// Inventory is at (or below) the floor, or unknown; nothing was written.
    AtFloor(Product),
    /// No product has this title; nothing was written.
    NotFound,
}

impl DecrementOutcome {
    pub fn product(&self) -> Option<&Product> {
        match self {
            DecrementOutcome::Decremented(p) | DecrementOutcome::AtFloor(p) => Some(p),
            DecrementOutcome::NotFound => None,
        }
    }

    pub fn into_product(self) -> Option<Product> {
        match self {
            DecrementOutcome::Decremented(p) | DecrementOutcome::AtFloor(p) => Some(p),
            DecrementOutcome::NotFound => None,
        }
    }
}

/// Decrement the inventory of the product titled `title` by one.
///
/// The check and the write are one conditional UPDATE, so two concurrent
/// callers can never both consume the same unit.
pub async fn decrement_inventory<C: ConnectionTrait>(
    conn: &C,
    title: &str,
) -> Result<DecrementOutcome, DomainError> {
    let decremented = products::decrement_inventory_above(conn, title, INVENTORY_FLOOR).await?;
    let product = products::find_product_by_title(conn, title).await?;

    let outcome = match (product, decremented) {
        (Some(product), true) => {
            info!(
                product_id = product.id,
                inventory = ?product.inventory,
                "inventory decremented"
            );
            DecrementOutcome::Decremented(product)
        }
        (Some(product), false) => {
            debug!(
                product_id = product.id,
                inventory = ?product.inventory,
                "inventory at floor, unchanged"
            );
            DecrementOutcome::AtFloor(product)
        }
        (None, _) => {
            debug!("decrement requested for unknown product title");
            DecrementOutcome::NotFound
        }
    };

    Ok(outcome)
}
