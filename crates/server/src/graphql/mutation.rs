//! Write resolvers.

use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::store::MessageStore;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Trim, validate and append a message, returning the full updated
    /// list. Rejections surface as `BAD_USER_INPUT` with the field-level
    /// detail under `extensions.fields.message`.
    async fn add_message(&self, ctx: &Context<'_>, message: String) -> Result<Vec<String>> {
        let store = ctx.data_unchecked::<Arc<MessageStore>>();
        store.add(&message).map_err(|e| e.extend())
    }
}
