//! Foundation types for metaprops.
//!
//! This crate defines the building blocks every property shape is made of:
//! - [`PropertyBag`]: the open, string-keyed overflow map for properties
//!   that have not been promoted to typed fields
//! - [`Effectivity`] and the [`EffectiveDated`] trait: the validity window
//!   (`effectiveFrom` / `effectiveTo`) plus the extension bag
//! - [`Timestamp`]: millisecond-precision instants, written as epoch
//!   milliseconds
//! - [`null_as_default`]: tolerant reading of `null` for collection and
//!   integer fields
//! - [`FieldDump`]: the `TypeName{field=value, ...}` rendering used by the
//!   `Display` impls of the model types
//!
//! Concrete classification kinds, the discriminator registry and the request
//! envelopes live in `metaprops-model` and `metaprops-rest`.

mod bag;
mod dump;
mod effectivity;
mod nullable;
mod timestamp;

pub use bag::PropertyBag;
pub use dump::FieldDump;
pub use effectivity::{EffectiveDated, Effectivity};
pub use nullable::null_as_default;
pub use timestamp::Timestamp;

/// Name of the wire field carrying the type discriminator.
pub const DISCRIMINATOR_FIELD: &str = "class";

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while encoding or decoding property payloads.
///
/// Every variant is reported synchronously to the caller; nothing here is
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The payload names a discriminator that is not registered for the family.
    #[error("unknown {family} discriminator: {tag:?}")]
    UnknownDiscriminator { family: &'static str, tag: String },

    /// The payload carries no discriminator at all.
    #[error("missing `class` discriminator for {family}")]
    MissingDiscriminator { family: &'static str },

    /// The discriminator is registered, but names a different shape than the
    /// one being decoded.
    #[error("expected {expected}, payload is tagged {found:?}")]
    DiscriminatorMismatch { expected: &'static str, found: String },

    /// A field's wire value could not be converted to its declared type.
    #[error("malformed value for {type_name}: {source}")]
    MalformedValue {
        type_name: &'static str,
        source: serde_json::Error,
    },

    #[error("payload of {size} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },
}

impl Error {
    /// Builds a [`Error::MalformedValue`] from a plain message.
    pub fn malformed(type_name: &'static str, message: impl std::fmt::Display) -> Self {
        Self::MalformedValue {
            type_name,
            source: <serde_json::Error as serde::de::Error>::custom(message),
        }
    }
}

/// Copy construction from an optional template.
///
/// Copying from an absent template is not an error: it yields the default,
/// pristine instance.
pub trait FromTemplate: Clone + Default {
    fn from_template(template: Option<&Self>) -> Self {
        template.cloned().unwrap_or_default()
    }
}

impl<T: Clone + Default> FromTemplate for T {}
