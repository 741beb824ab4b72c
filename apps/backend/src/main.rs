use actix_web::{web, App, HttpServer};
use storefront::config::db::DbProfile;
use storefront::config::server::ServerConfig;
use storefront::graphql::build_schema;
use storefront::infra::state::build_state;
use storefront::middleware::{RequestTrace, StructuredLogger};
use storefront::{routes, telemetry};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_db(DbProfile::default()).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };
    info!("database ready");

    let schema = web::Data::new(build_schema(app_state.clone()));
    let data = web::Data::new(app_state);

    info!(host = %server.host, port = server.port, "starting storefront");

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .app_data(schema.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
