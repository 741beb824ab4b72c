//! SeaORM adapter for the products table.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use super::paging::{fetch_window, Page, PageWindow};
use crate::entities::products;

pub mod dto;

pub use dto::ProductCreate;

pub async fn create_product<C: ConnectionTrait>(
    conn: &C,
    dto: ProductCreate,
) -> Result<products::Model, sea_orm::DbErr> {
    let product_active = products::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        price: Set(dto.price),
        inventory: Set(dto.inventory),
        cart_id: Set(dto.cart_id),
    };

    product_active.insert(conn).await
}

pub async fn find_product_by_id<C: ConnectionTrait>(
    conn: &C,
    product_id: i32,
) -> Result<Option<products::Model>, sea_orm::DbErr> {
    products::Entity::find_by_id(product_id).one(conn).await
}

pub async fn find_product_by_title<C: ConnectionTrait>(
    conn: &C,
    title: &str,
) -> Result<Option<products::Model>, sea_orm::DbErr> {
    products::Entity::find()
        .filter(products::Column::Title.eq(title))
        .one(conn)
        .await
}

/// Decrement inventory by one when it is above `floor`, in a single statement.
///
/// Returns the number of rows changed (0 or 1).
pub async fn decrement_inventory_above<C: ConnectionTrait>(
    conn: &C,
    title: &str,
    floor: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = products::Entity::update_many()
        .col_expr(
            products::Column::Inventory,
            Expr::col(products::Column::Inventory).sub(1),
        )
        .filter(products::Column::Title.eq(title))
        .filter(products::Column::Inventory.gt(floor))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

pub async fn list_products<C: ConnectionTrait>(
    conn: &C,
    window: PageWindow,
) -> Result<Page<products::Model>, sea_orm::DbErr> {
    fetch_window(conn, products::Entity::find(), products::Column::Id, window).await
}

pub async fn list_products_in_cart<C: ConnectionTrait>(
    conn: &C,
    cart_id: i32,
    window: PageWindow,
) -> Result<Page<products::Model>, sea_orm::DbErr> {
    let select = products::Entity::find().filter(products::Column::CartId.eq(cart_id));
    fetch_window(conn, select, products::Column::Id, window).await
}
