//! GraphQL object types over the cart and product tables.

use async_graphql::connection::{query, Connection, Edge};
use async_graphql::{Context, Enum, ErrorExtensions, Interface, Object, Result, SimpleObject, ID};

use super::cursor::{self, RowCursor};
use super::{app_state, global_id};
use crate::repos::carts::{self, Cart};
use crate::repos::products::{self, Product};
use crate::repos::Page;
use crate::services::products::DecrementOutcome;
use crate::AppError;

/// Extra connection field: rows in the whole listing.
#[derive(SimpleObject)]
pub struct TotalCount {
    pub total_count: u64,
}

pub type ProductConnection = Connection<RowCursor, ProductObject, TotalCount>;
pub type CartConnection = Connection<RowCursor, CartObject, TotalCount>;

/// Relay `Node` interface. Every implementor is reachable through `node(id:)`.
#[derive(Interface)]
#[graphql(field(name = "id", ty = "ID"))]
pub enum Node {
    Product(ProductObject),
    Cart(CartObject),
}

pub struct ProductObject(pub Product);

impl ProductObject {
    pub const TYPE_NAME: &'static str = "ProductObject";
}

#[Object]
impl ProductObject {
    /// Global id.
    async fn id(&self) -> ID {
        ID(global_id::encode(Self::TYPE_NAME, self.0.id))
    }

    /// Primary key of the row.
    async fn uuid(&self) -> i32 {
        self.0.id
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn price(&self) -> Option<f64> {
        self.0.price
    }

    async fn inventory(&self) -> Option<i32> {
        self.0.inventory
    }

    async fn cart_id(&self) -> Option<i32> {
        self.0.cart_id
    }

    /// Cart owning this product, if any.
    async fn cart(&self, ctx: &Context<'_>) -> Result<Option<CartObject>> {
        let Some(cart_id) = self.0.cart_id else {
            return Ok(None);
        };
        let state = app_state(ctx)?;
        let cart = carts::find_cart_by_id(state.db(), cart_id)
            .await
            .map_err(|e| AppError::from(e).extend())?;
        Ok(cart.map(CartObject))
    }
}

pub struct CartObject(pub Cart);

impl CartObject {
    pub const TYPE_NAME: &'static str = "CartObject";
}

#[Object]
impl CartObject {
    /// Global id.
    async fn id(&self) -> ID {
        ID(global_id::encode(Self::TYPE_NAME, self.0.id))
    }

    /// Primary key of the row.
    async fn uuid(&self) -> i32 {
        self.0.id
    }

    async fn username(&self) -> &str {
        &self.0.username
    }

    /// Products owned by this cart, in table order.
    async fn products(
        &self,
        ctx: &Context<'_>,
        after: Option<String>,
        before: Option<String>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<ProductConnection> {
        let state = app_state(ctx)?;
        let cart_id = self.0.id;
        query(
            after,
            before,
            first,
            last,
            |after, before, first, last| async move {
                let window = cursor::window(after, before, first, last);
                let page = products::list_products_in_cart(state.db(), cart_id, window)
                    .await
                    .map_err(|e| AppError::from(e).extend())?;
                Ok::<_, async_graphql::Error>(product_connection(page))
            },
        )
        .await
    }
}

pub fn product_connection(page: Page<Product>) -> ProductConnection {
    let mut connection = Connection::with_additional_fields(
        page.has_previous_page,
        page.has_next_page,
        TotalCount {
            total_count: page.total_count,
        },
    );
    connection.edges.extend(
        page.rows
            .into_iter()
            .map(|product| Edge::new(RowCursor(product.id), ProductObject(product))),
    );
    connection
}

pub fn cart_connection(page: Page<Cart>) -> CartConnection {
    let mut connection = Connection::with_additional_fields(
        page.has_previous_page,
        page.has_next_page,
        TotalCount {
            total_count: page.total_count,
        },
    );
    connection.edges.extend(
        page.rows
            .into_iter()
            .map(|cart| Edge::new(RowCursor(cart.id), CartObject(cart))),
    );
    connection
}

/// Payload of `createCart`.
#[derive(SimpleObject)]
#[graphql(name = "CreateCart")]
pub struct CreateCartPayload {
    pub cart: CartObject,
}

/// What `updateProduct` did.
#[derive(Enum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InventoryOutcome {
    /// Inventory was reduced by one.
    Decremented,
    /// Inventory is already at the floor of one; nothing changed.
    AtFloor,
    /// No product has the given title; nothing changed.
    NotFound,
}

/// Payload of `updateProduct`.
#[derive(SimpleObject)]
#[graphql(name = "UpdateProduct")]
pub struct UpdateProductPayload {
    pub product: Option<ProductObject>,
    pub outcome: InventoryOutcome,
}

impl From<DecrementOutcome> for UpdateProductPayload {
    fn from(outcome: DecrementOutcome) -> Self {
        let kind = match &outcome {
            DecrementOutcome::Decremented(_) => InventoryOutcome::Decremented,
            DecrementOutcome::AtFloor(_) => InventoryOutcome::AtFloor,
            DecrementOutcome::NotFound => InventoryOutcome::NotFound,
        };
        Self {
            product: outcome.into_product().map(ProductObject),
            outcome: kind,
        }
    }
}
