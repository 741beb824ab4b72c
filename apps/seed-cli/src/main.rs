use std::path::PathBuf;

use clap::Parser;
use storefront::config::db::DbProfile;
use storefront::db::with_txn;
use storefront::infra::state::build_state;
use storefront::services::seed::{seed_products, SeedProduct};
use storefront::AppError;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "storefront-seed")]
#[command(about = "Load products into the storefront database")]
struct Args {
    /// JSON file holding an array of {title, price, inventory, cart?}
    file: PathBuf,

    /// SQLite database file (defaults to STOREFRONT_DB_PATH, then data.sqlite)
    #[arg(long)]
    db_path: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("storefront=info,storefront_seed=info,sqlx=warn,sea_orm=warn")
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        error!(error = %e, "seeding failed");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.file).map_err(|e| {
        AppError::config(format!("cannot read {}: {e}", args.file.display()))
    })?;
    let entries: Vec<SeedProduct> = serde_json::from_str(&raw).map_err(|e| {
        AppError::config(format!("{} is not a product array: {e}", args.file.display()))
    })?;

    let state = build_state()
        .with_db(DbProfile::SqliteFile { path: args.db_path })
        .build()
        .await?;

    let inserted = with_txn(&state, |txn| {
        Box::pin(async move { seed_products(txn, &entries).await.map_err(AppError::from) })
    })
    .await?;

    for product in &inserted {
        info!(id = product.id, title = %product.title, cart_id = ?product.cart_id, "seeded");
    }
    info!(count = inserted.len(), "done");
    Ok(())
}
