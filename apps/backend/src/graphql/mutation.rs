use async_graphql::{Context, ErrorExtensions, Object, Result};

use super::app_state;
use super::types::{CartObject, CreateCartPayload, UpdateProductPayload};
use crate::db::with_txn;
use crate::services::{carts as carts_service, products as products_service};
use crate::AppError;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a cart for `username`. Fails with `CART_USERNAME_TAKEN` when the
    /// username is already in use.
    async fn create_cart(&self, ctx: &Context<'_>, username: String) -> Result<CreateCartPayload> {
        let state = app_state(ctx)?;
        let cart = with_txn(state, move |txn| {
            Box::pin(async move {
                carts_service::create_cart(txn, &username)
                    .await
                    .map_err(AppError::from)
            })
        })
        .await
        .map_err(|e| e.extend())?;

        Ok(CreateCartPayload {
            cart: CartObject(cart),
        })
    }

    /// Take one unit of the product whose title is `username`.
    ///
    /// Inventory is decremented only while it is above one. Missing products and
    /// products at the floor are reported through `outcome`, not as errors.
    async fn update_product(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Title of the product (historical argument name)")] username: String,
    ) -> Result<UpdateProductPayload> {
        let state = app_state(ctx)?;
        let outcome = with_txn(state, move |txn| {
            Box::pin(async move {
                products_service::decrement_inventory(txn, &username)
                    .await
                    .map_err(AppError::from)
            })
        })
        .await
        .map_err(|e| e.extend())?;

        Ok(UpdateProductPayload::from(outcome))
    }
}
