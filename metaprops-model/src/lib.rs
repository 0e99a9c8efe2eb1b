//! Property and classification model for metaprops.
//!
//! Defines the shapes exchanged with external metadata systems:
//! - [`ClassificationProperties`]: the closed set of classification kinds,
//!   each tagged on the wire by a `class` discriminator
//! - [`GovernanceClassification`]: the governance family, itself a
//!   classification kind with further sub-kinds
//! - [`QueryTargetProperties`]: one ordered sub-query of a derived value
//! - [`ExternalReferenceProperties`]: a reference to an outside resource
//! - [`TypeRegistry`]: the discriminator registries, built once and read
//!   without locking
//! - [`PropertyCodec`]: byte-level decoding with typed errors
//!
//! Every kind embeds an [`Effectivity`](metaprops_types::Effectivity) and so
//! carries a validity window and an extension bag.
//!
//! # Example
//!
//! ```
//! use metaprops_model::{ClassificationProperties, PropertyCodec};
//! use metaprops_types::EffectiveDated;
//!
//! let payload = br#"{
//!     "class": "RetentionClassificationProperties",
//!     "status": 2,
//!     "confidence": 80,
//!     "steward": "u123",
//!     "effectiveFrom": "2024-01-01T00:00:00Z"
//! }"#;
//!
//! let codec = PropertyCodec::default();
//! let props = codec.decode_classification(payload).unwrap();
//! assert_eq!(props.type_name(), "RetentionClassificationProperties");
//! assert!(props.effective_to().is_none());
//! assert!(props.extended_properties().is_none());
//! ```

#[macro_use]
mod macros;

mod asset;
mod classification;
mod codec;
mod glossary;
mod governance;
mod query;
mod reference;
pub mod registry;

pub use asset::{
    ActivityDescriptionProperties, AssetOriginProperties, DataFieldValuesProperties,
    OwnerProperties, SecurityTagsProperties,
};
pub use classification::{ClassificationProperties, CLASSIFICATIONS};
pub use codec::{CodecConfig, PropertyCodec, DEFAULT_MAX_PAYLOAD_BYTES};
pub use glossary::{
    CanonicalVocabularyProperties, EditingGlossaryProperties, GlossaryTermContextDefinition,
    StagingGlossaryProperties, SubjectAreaMemberProperties, TaxonomyProperties,
};
pub use governance::{
    GovernanceClassification, GovernanceClassificationBase, GovernanceClassificationProperties,
    GovernanceClassificationStatus, GovernanceDetails, RetentionClassificationProperties,
    GOVERNANCE_CLASSIFICATIONS,
};
pub use query::{evaluation_order, order_for_evaluation, QueryTargetProperties};
pub use reference::ExternalReferenceProperties;
pub use registry::{decode_tagged, Tagged, TypeRegistry};
