//! SeaORM adapters. Functions here return `sea_orm::DbErr`; the repos layer
//! maps it to `DomainError`.

pub mod carts_sea;
pub mod paging;
pub mod products_sea;
