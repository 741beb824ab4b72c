use serde_json::json;
use storefront::graphql::global_id;
use storefront::repos::carts;
use storefront_test_support::graphql::{assert_single_error_code, expect_data};
use storefront_test_support::unique_helpers::unique_username;

use crate::support::factory::{seed_cart, seed_product, seed_product_in_cart};
use crate::support::{create_test_app, gql, test_state};

const CREATE_CART: &str = r#"
    mutation Create($username: String!) {
        createCart(username: $username) { cart { id uuid username } }
    }
"#;

#[actix_web::test]
async fn create_cart_returns_the_new_cart() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    let app = create_test_app(state.clone()).build().await?;
    let username = unique_username();

    let resp = gql::post_vars(&app, CREATE_CART, json!({ "username": username })).await;
    let cart = &expect_data(&resp)["createCart"]["cart"];

    assert_eq!(cart["username"], username.as_str());
    let uuid = cart["uuid"].as_i64().expect("uuid") as i32;
    assert!(uuid > 0);
    assert_eq!(cart["id"], global_id::encode("CartObject", uuid).as_str());

    let stored = carts::find_cart_by_username(state.db(), &username)
        .await?
        .expect("cart persisted");
    assert_eq!(stored.id, uuid);
    Ok(())
}

#[actix_web::test]
async fn each_cart_gets_a_fresh_identity() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await?;

    let first = gql::post_vars(&app, CREATE_CART, json!({ "username": unique_username() })).await;
    let second = gql::post_vars(&app, CREATE_CART, json!({ "username": unique_username() })).await;

    let a = expect_data(&first)["createCart"]["cart"]["uuid"].as_i64();
    let b = expect_data(&second)["createCart"]["cart"]["uuid"].as_i64();
    assert_ne!(a, b);
    Ok(())
}

#[actix_web::test]
async fn duplicate_username_is_rejected_with_code() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    let app = create_test_app(state.clone()).build().await?;
    let username = unique_username();

    let ok = gql::post_vars(&app, CREATE_CART, json!({ "username": username })).await;
    expect_data(&ok);

    let dup = gql::post_vars(&app, CREATE_CART, json!({ "username": username })).await;
    assert_single_error_code(&dup, "CART_USERNAME_TAKEN");
    assert_eq!(dup["errors"][0]["extensions"]["status"], 409);
    assert_eq!(dup["errors"][0]["path"], json!(["createCart"]));

    let page = carts::list_carts(state.db(), storefront::repos::PageWindow::default()).await?;
    assert_eq!(page.total_count, 1, "failed insert must roll back");
    Ok(())
}

#[actix_web::test]
async fn empty_username_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let app = create_test_app(test_state().await).build().await?;

    let resp = gql::post_vars(&app, CREATE_CART, json!({ "username": "" })).await;
    assert_eq!(expect_data(&resp)["createCart"]["cart"]["username"], "");
    Ok(())
}

#[actix_web::test]
async fn cart_lists_its_products_and_products_link_back() -> Result<(), Box<dyn std::error::Error>>
{
    let state = test_state().await;
    let cart = seed_cart(state.db(), "ann").await;
    seed_product_in_cart(state.db(), "mug", 3, cart.id).await;
    seed_product(state.db(), "loose", 3).await;
    seed_product_in_cart(state.db(), "pen", 2, cart.id).await;
    let app = create_test_app(state).build().await?;

    let resp = gql::post(
        &app,
        r#"{
            allCarts {
                edges { node {
                    username
                    products { totalCount edges { node { title cartId cart { username } } } }
                } }
            }
        }"#,
    )
    .await;
    let data = expect_data(&resp);
    let products = &data["allCarts"]["edges"][0]["node"]["products"];

    assert_eq!(products["totalCount"], 2);
    assert_eq!(gql::titles(products), vec!["mug", "pen"]);
    for edge in products["edges"].as_array().expect("edges") {
        assert_eq!(edge["node"]["cartId"], cart.id);
        assert_eq!(edge["node"]["cart"]["username"], "ann");
    }
    Ok(())
}

#[actix_web::test]
async fn product_without_cart_has_null_cart() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    seed_product(state.db(), "loose", 3).await;
    let app = create_test_app(state).build().await?;

    let resp = gql::post(&app, "{ allProducts { edges { node { cartId cart { uuid } } } } }").await;
    let node = &expect_data(&resp)["allProducts"]["edges"][0]["node"];
    assert!(node["cartId"].is_null());
    assert!(node["cart"].is_null());
    Ok(())
}
