use actix_web::web;

pub mod graphql;
pub mod health;

/// Register every HTTP route. `main.rs` and the integration tests share this so
/// both serve the same surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Greeting: /
    cfg.route("/", web::get().to(health::root));

    // Liveness: /health
    cfg.configure(health::configure_routes);

    // GraphQL endpoint and GraphiQL explorer: /graphql
    cfg.configure(graphql::configure_routes);
}
