//! SeaORM adapter for the carts table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use super::paging::{fetch_window, Page, PageWindow};
use crate::entities::carts;

pub mod dto;

pub use dto::CartCreate;

pub async fn create_cart<C: ConnectionTrait>(
    conn: &C,
    dto: CartCreate,
) -> Result<carts::Model, sea_orm::DbErr> {
    let cart_active = carts::ActiveModel {
        id: NotSet,
        username: Set(dto.username),
    };

    cart_active.insert(conn).await
}

pub async fn find_cart_by_id<C: ConnectionTrait>(
    conn: &C,
    cart_id: i32,
) -> Result<Option<carts::Model>, sea_orm::DbErr> {
    carts::Entity::find_by_id(cart_id).one(conn).await
}

pub async fn find_cart_by_username<C: ConnectionTrait>(
    conn: &C,
    username: &str,
) -> Result<Option<carts::Model>, sea_orm::DbErr> {
    carts::Entity::find()
        .filter(carts::Column::Username.eq(username))
        .one(conn)
        .await
}

pub async fn list_carts<C: ConnectionTrait>(
    conn: &C,
    window: PageWindow,
) -> Result<Page<carts::Model>, sea_orm::DbErr> {
    fetch_window(conn, carts::Entity::find(), carts::Column::Id, window).await
}
