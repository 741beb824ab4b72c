use async_graphql::connection::query;
use async_graphql::{Context, ErrorExtensions, Object, Result, ID};
use tracing::debug;

use super::cursor;
use super::types::{
    cart_connection, product_connection, CartConnection, CartObject, Node, ProductConnection,
    ProductObject,
};
use super::{app_state, global_id};
use crate::repos::{carts, products};
use crate::AppError;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Fetch any object by its global id. Unknown or malformed ids yield null.
    async fn node(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Node>> {
        let Some((type_name, pk)) = global_id::decode(&id) else {
            debug!(id = %id.as_str(), "node lookup with undecodable id");
            return Ok(None);
        };

        let db = app_state(ctx)?.db();
        let node = match type_name.as_str() {
            ProductObject::TYPE_NAME => products::find_product_by_id(db, pk)
                .await
                .map_err(|e| AppError::from(e).extend())?
                .map(|p| Node::from(ProductObject(p))),
            CartObject::TYPE_NAME => carts::find_cart_by_id(db, pk)
                .await
                .map_err(|e| AppError::from(e).extend())?
                .map(|c| Node::from(CartObject(c))),
            _ => None,
        };
        Ok(node)
    }

    /// All products in table order.
    async fn all_products(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<ProductConnection> {
        let db = app_state(ctx)?.db();
        query(
            after,
            before,
            first,
            last,
            |after, before, first, last| async move {
                let page = products::list_products(db, cursor::window(after, before, first, last))
                    .await
                    .map_err(|e| AppError::from(e).extend())?;
                Ok::<_, async_graphql::Error>(product_connection(page))
            },
        )
        .await
    }

    /// All carts in table order.
    async fn all_carts(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<CartConnection> {
        let db = app_state(ctx)?.db();
        query(
            after,
            before,
            first,
            last,
            |after, before, first, last| async move {
                let page = carts::list_carts(db, cursor::window(after, before, first, last))
                    .await
                    .map_err(|e| AppError::from(e).extend())?;
                Ok::<_, async_graphql::Error>(cart_connection(page))
            },
        )
        .await
    }
}
