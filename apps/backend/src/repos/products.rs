//! Product repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::products_sea::{self as products_adapter, ProductCreate};
use crate::errors::domain::DomainError;
use crate::repos::{Page, PageWindow};

/// Product domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub price: Option<f64>,
    pub inventory: Option<i32>,
    pub cart_id: Option<i32>,
}

/// Insert a product. Not reachable from the GraphQL API; used by the seed CLI.
pub async fn create_product<C: ConnectionTrait>(
    conn: &C,
    dto: ProductCreate,
) -> Result<Product, DomainError> {
    let product = products_adapter::create_product(conn, dto).await?;
    Ok(Product::from(product))
}

pub async fn find_product_by_id<C: ConnectionTrait>(
    conn: &C,
    product_id: i32,
) -> Result<Option<Product>, DomainError> {
    let product = products_adapter::find_product_by_id(conn, product_id).await?;
    Ok(product.map(Product::from))
}

pub async fn find_product_by_title<C: ConnectionTrait>(
    conn: &C,
    title: &str,
) -> Result<Option<Product>, DomainError> {
    let product = products_adapter::find_product_by_title(conn, title).await?;
    Ok(product.map(Product::from))
}

/// Returns true when a row was decremented.
pub async fn decrement_inventory_above<C: ConnectionTrait>(
    conn: &C,
    title: &str,
    floor: i32,
) -> Result<bool, DomainError> {
    let changed = products_adapter::decrement_inventory_above(conn, title, floor).await?;
    Ok(changed > 0)
}

pub async fn list_products<C: ConnectionTrait>(
    conn: &C,
    window: PageWindow,
) -> Result<Page<Product>, DomainError> {
    let page = products_adapter::list_products(conn, window).await?;
    Ok(page.map(Product::from))
}

pub async fn list_products_in_cart<C: ConnectionTrait>(
    conn: &C,
    cart_id: i32,
    window: PageWindow,
) -> Result<Page<Product>, DomainError> {
    let page = products_adapter::list_products_in_cart(conn, cart_id, window).await?;
    Ok(page.map(Product::from))
}

impl From<crate::entities::products::Model> for Product {
    fn from(model: crate::entities::products::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            price: model.price,
            inventory: model.inventory,
            cart_id: model.cart_id,
        }
    }
}
