use storefront::db::with_txn;
use storefront::errors::domain::{ConflictKind, DomainError};
use storefront::repos::{carts, PageWindow};
use storefront::services::carts::create_cart;
use storefront::{AppError, ErrorCode};
use storefront_test_support::unique_helpers::unique_username;

use crate::support::test_state;

#[tokio::test]
async fn create_cart_persists_username() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    let username = unique_username();

    let cart = create_cart(state.db(), &username).await?;
    assert_eq!(cart.username, username);

    let found = carts::find_cart_by_id(state.db(), cart.id).await?;
    assert_eq!(found, Some(cart));
    Ok(())
}

#[tokio::test]
async fn duplicate_username_is_a_cart_conflict() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;
    create_cart(state.db(), "ann").await?;

    let err = create_cart(state.db(), "ann").await.unwrap_err();
    assert!(
        matches!(err, DomainError::Conflict(ConflictKind::CartUsername, _)),
        "got {err:?}"
    );

    let app_err = AppError::from(err);
    assert_eq!(app_err.code(), ErrorCode::CartUsernameTaken);
    assert_eq!(app_err.status().as_u16(), 409);
    Ok(())
}

#[tokio::test]
async fn rolled_back_cart_is_not_visible() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await;

    let result: Result<(), AppError> = with_txn(&state, |txn| {
        Box::pin(async move {
            create_cart(txn, "ghost").await?;
            Err(AppError::internal("abort after insert"))
        })
    })
    .await;
    assert!(result.is_err());

    let page = carts::list_carts(state.db(), PageWindow::default()).await?;
    assert_eq!(page.total_count, 0);
    Ok(())
}
