use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use storefront_test_support::graphql::expect_data;

use crate::support::factory::{seed_cart, seed_products};
use crate::support::{create_test_app, gql, test_state};

const PRODUCTS_PAGE: &str = r#"
    query Page($first: Int, $after: String, $last: Int, $before: String) {
        allProducts(first: $first, after: $after, last: $last, before: $before) {
            totalCount
            edges { cursor node { uuid title } }
            pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
        }
    }
"#;

fn connection(resp: &Value) -> &Value {
    &expect_data(resp)["allProducts"]
}

fn cursor_str(connection: &Value, which: &str) -> String {
    connection["pageInfo"][which]
        .as_str()
        .unwrap_or_else(|| panic!("{which} missing in {connection:#}"))
        .to_string()
}

#[actix_web::test]
async fn lists_all_rows_in_insertion_order() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    let seeded = seed_products(state.db(), "item", 5).await;
    let app = create_test_app(state).build().await?;

    let resp = gql::post_vars(&app, PRODUCTS_PAGE, json!({})).await;
    let conn = connection(&resp);

    let expected: Vec<String> = seeded.iter().map(|p| p.title.clone()).collect();
    assert_eq!(gql::titles(conn), expected);
    assert_eq!(conn["totalCount"], 5);
    assert_eq!(conn["pageInfo"]["hasNextPage"], false);
    assert_eq!(conn["pageInfo"]["hasPreviousPage"], false);
    Ok(())
}

#[actix_web::test]
async fn cursors_encode_the_primary_key() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    let seeded = seed_products(state.db(), "item", 2).await;
    let app = create_test_app(state).build().await?;

    let resp = gql::post_vars(&app, PRODUCTS_PAGE, json!({})).await;
    let edges = connection(&resp)["edges"].as_array().expect("edges").clone();

    for (edge, product) in edges.iter().zip(&seeded) {
        let expected = STANDARD.encode(format!("cursor:{}", product.id));
        assert_eq!(edge["cursor"], expected.as_str());
        assert_eq!(edge["node"]["uuid"], product.id);
    }
    Ok(())
}

#[actix_web::test]
async fn forward_pagination_walks_every_row_once() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    seed_products(state.db(), "item", 5).await;
    let app = create_test_app(state).build().await?;

    let page1 = gql::post_vars(&app, PRODUCTS_PAGE, json!({ "first": 2 })).await;
    let c1 = connection(&page1);
    assert_eq!(gql::titles(c1), vec!["item-0", "item-1"]);
    assert_eq!(c1["pageInfo"]["hasNextPage"], true);
    assert_eq!(c1["pageInfo"]["hasPreviousPage"], false);
    assert_eq!(c1["totalCount"], 5);

    let page2 = gql::post_vars(
        &app,
        PRODUCTS_PAGE,
        json!({ "first": 2, "after": cursor_str(c1, "endCursor") }),
    )
    .await;
    let c2 = connection(&page2);
    assert_eq!(gql::titles(c2), vec!["item-2", "item-3"]);
    assert_eq!(c2["pageInfo"]["hasNextPage"], true);
    assert_eq!(c2["pageInfo"]["hasPreviousPage"], true);

    let page3 = gql::post_vars(
        &app,
        PRODUCTS_PAGE,
        json!({ "first": 2, "after": cursor_str(c2, "endCursor") }),
    )
    .await;
    let c3 = connection(&page3);
    assert_eq!(gql::titles(c3), vec!["item-4"]);
    assert_eq!(c3["pageInfo"]["hasNextPage"], false);
    assert_eq!(c3["pageInfo"]["hasPreviousPage"], true);
    Ok(())
}

#[actix_web::test]
async fn backward_pagination_from_the_tail() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    seed_products(state.db(), "item", 5).await;
    let app = create_test_app(state).build().await?;

    let tail = gql::post_vars(&app, PRODUCTS_PAGE, json!({ "last": 2 })).await;
    let c1 = connection(&tail);
    assert_eq!(gql::titles(c1), vec!["item-3", "item-4"]);
    assert_eq!(c1["pageInfo"]["hasPreviousPage"], true);
    assert_eq!(c1["pageInfo"]["hasNextPage"], false);

    let before = gql::post_vars(
        &app,
        PRODUCTS_PAGE,
        json!({ "last": 2, "before": cursor_str(c1, "startCursor") }),
    )
    .await;
    let c2 = connection(&before);
    assert_eq!(gql::titles(c2), vec!["item-1", "item-2"]);
    assert_eq!(c2["pageInfo"]["hasPreviousPage"], true);
    assert_eq!(c2["pageInfo"]["hasNextPage"], true);
    Ok(())
}

#[actix_web::test]
async fn empty_table_yields_empty_connection() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await?;

    let resp = gql::post_vars(&app, PRODUCTS_PAGE, json!({ "first": 10 })).await;
    let conn = connection(&resp);
    assert_eq!(conn["edges"], json!([]));
    assert_eq!(conn["totalCount"], 0);
    assert!(conn["pageInfo"]["endCursor"].is_null());
    Ok(())
}

#[actix_web::test]
async fn garbage_cursor_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    seed_products(state.db(), "item", 2).await;
    let app = create_test_app(state).build().await?;

    let resp = gql::post_vars(&app, PRODUCTS_PAGE, json!({ "first": 1, "after": "%%%" })).await;
    assert!(resp["errors"].as_array().is_some_and(|e| !e.is_empty()));
    Ok(())
}

#[actix_web::test]
async fn carts_are_listed_in_insertion_order() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    for name in ["carol", "alice", "bob"] {
        seed_cart(state.db(), name).await;
    }
    let app = create_test_app(state).build().await?;

    let resp = gql::post(
        &app,
        "{ allCarts(first: 2) { totalCount edges { node { username } } pageInfo { hasNextPage } } }",
    )
    .await;
    let conn = &expect_data(&resp)["allCarts"];
    let names: Vec<&str> = conn["edges"]
        .as_array()
        .expect("edges")
        .iter()
        .filter_map(|e| e["node"]["username"].as_str())
        .collect();

    assert_eq!(names, vec!["carol", "alice"]);
    assert_eq!(conn["totalCount"], 3);
    assert_eq!(conn["pageInfo"]["hasNextPage"], true);
    Ok(())
}

const CARTS_PAGE: &str = r#"
    query Page($first: Int, $after: String, $last: Int, $before: String) {
        allCarts(first: $first, after: $after, last: $last, before: $before) {
            totalCount
            edges { cursor node { uuid username } }
            pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
        }
    }
"#;

fn usernames(connection: &Value) -> Vec<String> {
    connection["edges"]
        .as_array()
        .expect("edges")
        .iter()
        .map(|e| e["node"]["username"].as_str().expect("username").to_string())
        .collect()
}

#[actix_web::test]
async fn cart_pages_walk_forward_and_back() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    let mut seeded = Vec::new();
    for name in ["carol", "alice", "bob"] {
        seeded.push(seed_cart(state.db(), name).await);
    }
    let app = create_test_app(state).build().await?;

    let page1 = gql::post_vars(&app, CARTS_PAGE, json!({ "first": 2 })).await;
    let c1 = &expect_data(&page1)["allCarts"];
    assert_eq!(usernames(c1), vec!["carol", "alice"]);
    assert_eq!(c1["totalCount"], 3);
    assert_eq!(c1["pageInfo"]["hasNextPage"], true);
    assert_eq!(c1["pageInfo"]["hasPreviousPage"], false);
    for (edge, cart) in c1["edges"].as_array().expect("edges").iter().zip(&seeded) {
        let expected = STANDARD.encode(format!("cursor:{}", cart.id));
        assert_eq!(edge["cursor"], expected.as_str());
    }

    let page2 = gql::post_vars(
        &app,
        CARTS_PAGE,
        json!({ "first": 2, "after": cursor_str(c1, "endCursor") }),
    )
    .await;
    let c2 = &expect_data(&page2)["allCarts"];
    assert_eq!(usernames(c2), vec!["bob"]);
    assert_eq!(c2["pageInfo"]["hasNextPage"], false);
    assert_eq!(c2["pageInfo"]["hasPreviousPage"], true);

    let tail = gql::post_vars(&app, CARTS_PAGE, json!({ "last": 2 })).await;
    let c3 = &expect_data(&tail)["allCarts"];
    assert_eq!(usernames(c3), vec!["alice", "bob"]);
    assert_eq!(c3["pageInfo"]["hasPreviousPage"], true);
    assert_eq!(c3["pageInfo"]["hasNextPage"], false);

    let head = gql::post_vars(
        &app,
        CARTS_PAGE,
        json!({ "last": 2, "before": cursor_str(c3, "startCursor") }),
    )
    .await;
    let c4 = &expect_data(&head)["allCarts"];
    assert_eq!(usernames(c4), vec!["carol"]);
    assert_eq!(c4["pageInfo"]["hasPreviousPage"], false);
    assert_eq!(c4["pageInfo"]["hasNextPage"], true);
    Ok(())
}
