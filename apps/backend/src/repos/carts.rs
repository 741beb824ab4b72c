//! Cart repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::carts_sea::{self as carts_adapter, CartCreate};
use crate::errors::domain::DomainError;
use crate::repos::{Page, PageWindow};

/// Cart domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub id: i32,
    pub username: String,
}

pub async fn create_cart<C: ConnectionTrait>(
    conn: &C,
    username: &str,
) -> Result<Cart, DomainError> {
    let cart = carts_adapter::create_cart(conn, CartCreate::new(username)).await?;
    Ok(Cart::from(cart))
}

pub async fn find_cart_by_id<C: ConnectionTrait>(
    conn: &C,
    cart_id: i32,
) -> Result<Option<Cart>, DomainError> {
    let cart = carts_adapter::find_cart_by_id(conn, cart_id).await?;
    Ok(cart.map(Cart::from))
}

pub async fn find_cart_by_username<C: ConnectionTrait>(
    conn: &C,
    username: &str,
) -> Result<Option<Cart>, DomainError> {
    let cart = carts_adapter::find_cart_by_username(conn, username).await?;
    Ok(cart.map(Cart::from))
}

pub async fn list_carts<C: ConnectionTrait>(
    conn: &C,
    window: PageWindow,
) -> Result<Page<Cart>, DomainError> {
    let page = carts_adapter::list_carts(conn, window).await?;
    Ok(page.map(Cart::from))
}

impl From<crate::entities::carts::Model> for Cart {
    fn from(model: crate::entities::carts::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
        }
    }
}
