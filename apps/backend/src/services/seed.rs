//! Out-of-band product seeding. The GraphQL API has no create-product
//! operation; the `storefront-seed` binary loads catalogues through here.

use sea_orm::ConnectionTrait;
use serde::Deserialize;
use tracing::info;

use crate::adapters::products_sea::ProductCreate;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::carts;
use crate::repos::products::{self, Product};

/// One catalogue entry. `cart` names an existing cart by username.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SeedProduct {
    pub title: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub inventory: Option<i32>,
    #[serde(default)]
    pub cart: Option<String>,
}

/// Insert every entry in order. Stops at the first failure; run it inside a
/// transaction to keep the load all-or-nothing.
pub async fn seed_products<C: ConnectionTrait>(
    conn: &C,
    entries: &[SeedProduct],
) -> Result<Vec<Product>, DomainError> {
    let mut inserted = Vec::with_capacity(entries.len());

    for entry in entries {
        let mut dto = ProductCreate {
            title: entry.title.clone(),
            price: entry.price,
            inventory: entry.inventory,
            cart_id: None,
        };
        if let Some(username) = &entry.cart {
            let cart = carts::find_cart_by_username(conn, username)
                .await?
                .ok_or_else(|| {
                    DomainError::not_found(
                        NotFoundKind::Cart,
                        format!("no cart for username '{username}'"),
                    )
                })?;
            dto = dto.with_cart(cart.id);
        }
        inserted.push(products::create_product(conn, dto).await?);
    }

    info!(count = inserted.len(), "products seeded");
    Ok(inserted)
}
