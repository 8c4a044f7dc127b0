//! Read resolvers.

use std::sync::Arc;

use async_graphql::{Context, Object};
use chrono::{SecondsFormat, Utc};

use crate::store::MessageStore;

/// Constant greeting returned by `hello`.
pub(crate) const GREETING: &str = "Hello from the GraphQL server!";

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Static greeting, mostly useful as a connectivity check.
    async fn hello(&self) -> &'static str {
        GREETING
    }

    /// Snapshot of the message list, in insertion order.
    async fn messages(&self, ctx: &Context<'_>) -> Vec<String> {
        ctx.data_unchecked::<Arc<MessageStore>>().snapshot()
    }

    /// Current server time as ISO-8601 with millisecond precision,
    /// evaluated at call time rather than cached.
    async fn server_time(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
