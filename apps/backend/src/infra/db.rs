//! Database connection and schema bootstrap.
//!
//! There is no migration history: tables and indexes are created from the
//! entity definitions at startup when they do not exist yet.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema,
};
use tracing::{debug, info};

use crate::config::db::{db_url, DbProfile};
use crate::entities::{Carts, Products};
use crate::error::AppError;

/// Open a connection pool for the profile.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;

    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false);
    if profile.is_memory() {
        // Every pooled connection to sqlite::memory: is a separate database.
        opts.max_connections(1).min_connections(1);
    }

    let db = Database::connect(opts)
        .await
        .map_err(|e| AppError::db_unavailable(format!("failed to open database: {e}")))?;

    info!(profile = ?profile, "database connected");
    Ok(db)
}

/// Create the `carts` and `products` tables and their indexes if absent.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    create_table_for(db, Carts).await?;
    create_table_for(db, Products).await?;
    debug!("schema ensured");
    Ok(())
}

async fn create_table_for<E: EntityTrait>(
    db: &DatabaseConnection,
    entity: E,
) -> Result<(), sea_orm::DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(backend.build(&table)).await?;

    for mut index in schema.create_index_from_entity(entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }
    Ok(())
}

/// Connect and make sure the schema exists. Single entrypoint used by the
/// server, the seed CLI and tests.
pub async fn bootstrap_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let db = connect_db(profile).await?;
    ensure_schema(&db).await?;
    Ok(db)
}
