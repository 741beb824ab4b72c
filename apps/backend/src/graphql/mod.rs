//! GraphQL schema: relay node lookup, product/cart connections and the two
//! write operations.

pub mod cursor;
pub mod global_id;
pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{Context, EmptySubscription, Schema};

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use crate::state::app_state::AppState;

pub type StorefrontSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema once at startup with the shared state attached.
pub fn build_schema(state: AppState) -> StorefrontSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub(crate) fn app_state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a AppState> {
    ctx.data::<AppState>()
}
