use actix_web::http::header;
use actix_web::test;
use serde_json::Value;
use storefront_test_support::graphql::expect_data;

use crate::support::factory::seed_product;
use crate::support::{create_test_app, test_state};

#[actix_web::test]
async fn browser_get_serves_graphiql() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await?;

    let req = test::TestRequest::get()
        .uri("/graphql")
        .insert_header((header::ACCEPT, "text/html,application/xhtml+xml,*/*;q=0.8"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec())?;
    assert!(html.to_lowercase().contains("graphiql"));
    assert!(html.contains("/graphql"));
    Ok(())
}

#[actix_web::test]
async fn api_get_executes_query_string() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    seed_product(state.db(), "mug", 2).await;
    let app = create_test_app(state).build().await?;

    let req = test::TestRequest::get()
        .uri("/graphql?query=%7BallProducts%7BtotalCount%7D%7D")
        .insert_header((header::ACCEPT, "application/json"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(expect_data(&body)["allProducts"]["totalCount"], 1);
    Ok(())
}

#[actix_web::test]
async fn post_executes_query() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await?;

    let req = test::TestRequest::post()
        .uri("/graphql")
        .set_json(serde_json::json!({ "query": "{ allCarts { totalCount } }" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(expect_data(&body)["allCarts"]["totalCount"], 0);
    Ok(())
}

#[actix_web::test]
async fn syntax_errors_come_back_as_graphql_errors() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await?;

    let req = test::TestRequest::post()
        .uri("/graphql")
        .set_json(serde_json::json!({ "query": "{ allCarts { " }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
    Ok(())
}
