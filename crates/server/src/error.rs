//! Validation errors for the `addMessage` mutation.
//!
//! Callers must be able to tell a validation rejection apart from a
//! transport or server failure, so every rejection carries a stable
//! machine code plus a field-level detail message in the GraphQL error
//! extensions:
//!
//! ```json
//! { "code": "BAD_USER_INPUT", "fields": { "message": "<detail>" } }
//! ```

use async_graphql::{value, Error, ErrorExtensions};
use thiserror::Error;

/// Machine-readable code attached to every validation failure.
pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";

/// Rejections raised before the store is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Message cannot be empty.")]
    Empty,
    #[error("Message cannot exceed 200 characters.")]
    TooLong,
}

impl ErrorExtensions for ValidationError {
    fn extend(&self) -> Error {
        let detail = self.to_string();
        Error::new("Validation failed").extend_with(|_, e| {
            e.set("code", BAD_USER_INPUT);
            e.set("fields", value!({ "message": detail }));
        })
    }
}
