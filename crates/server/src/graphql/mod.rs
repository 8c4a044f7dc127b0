//! GraphQL schema wiring.
//!
//! The wire contract is intentionally small:
//!
//! ```graphql
//! type Query {
//!   hello: String!
//!   messages: [String!]!
//!   serverTime: String!
//! }
//! type Mutation {
//!   addMessage(message: String!): [String!]!
//! }
//! ```

pub mod mutation;
pub mod query;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use crate::store::MessageStore;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The full schema type for the playground.
pub type PlaygroundSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the shared message store injected as context data.
pub fn build_schema(store: Arc<MessageStore>) -> PlaygroundSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}
