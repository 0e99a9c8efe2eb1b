//! Request bodies for metaprops.
//!
//! These are the envelopes exchanged with a metadata repository when
//! properties are created or updated on behalf of an external system:
//! - [`MetadataCorrelationProperties`]: how an element maps to its
//!   counterpart in a third-party asset manager
//! - [`UpdateRequestBody`]: correlation plus the effective time of the change
//! - [`ExternalReferenceRequestBody`]: an [`ExternalReferenceProperties`]
//!   payload with an optional anchor
//!
//! Nested payloads are held in [`Arc`](std::sync::Arc)s, so cloning an
//! envelope shares them; mutate through the `*_mut` accessors, which copy
//! on write.
//!
//! [`ExternalReferenceProperties`]: metaprops_model::ExternalReferenceProperties

mod correlation;
mod request;

pub use correlation::{KeyPattern, MetadataCorrelationProperties, SynchronizationDirection};
pub use request::{ExternalReferenceRequestBody, UpdateRequestBody};

/// Result type alias using [`RequestError`].
pub type Result<T> = std::result::Result<T, RequestError>;

/// Errors raised while reading or writing request bodies.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The body is not valid JSON, or an envelope field has the wrong shape.
    #[error("invalid request body: {0}")]
    Json(#[from] serde_json::Error),

    /// A nested property payload was rejected.
    #[error("invalid {field}: {source}")]
    Property {
        field: &'static str,
        #[source]
        source: metaprops_types::Error,
    },

    /// The body failed before any field was read (size limit or bad JSON).
    #[error(transparent)]
    Payload(#[from] metaprops_types::Error),
}
