use actix_web::guard::{self, GuardContext};
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use tracing::debug;

use crate::graphql::StorefrontSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

async fn execute(schema: web::Data<StorefrontSchema>, req: GraphQLRequest) -> GraphQLResponse {
    let req = req.into_inner();
    debug!(operation = ?req.operation_name, "executing graphql request");
    schema.execute(req).await.into()
}

async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Browsers navigating to `/graphql` get the explorer; API clients doing a GET
/// get the query executed.
fn accepts_html(ctx: &GuardContext<'_>) -> bool {
    ctx.head()
        .headers()
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(GRAPHQL_PATH)
            .route(web::get().guard(guard::fn_guard(accepts_html)).to(graphiql))
            .route(web::get().to(execute))
            .route(web::post().to(execute)),
    );
}
