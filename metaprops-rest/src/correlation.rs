use metaprops_types::FieldDump;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How the external identifier of a correlated element is managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyPattern {
    /// Unique key allocated and used within the scope of one system.
    LocalKey,
    /// Key allocated locally that may be reused once the element is deleted.
    RecycledKey,
    /// Key derived from an attribute of the element.
    NaturalKey,
    /// Key copied from another system.
    MirrorKey,
    /// Key formed from the keys of several systems.
    AggregateKey,
    /// Key supplied by the caller of the system.
    CallersKey,
    /// Key that never changes once assigned.
    StableKey,
    Other,
}

impl KeyPattern {
    pub const fn ordinal(self) -> i32 {
        match self {
            Self::LocalKey => 0,
            Self::RecycledKey => 1,
            Self::NaturalKey => 2,
            Self::MirrorKey => 3,
            Self::AggregateKey => 4,
            Self::CallersKey => 5,
            Self::StableKey => 6,
            Self::Other => 99,
        }
    }
}

impl fmt::Display for KeyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LocalKey => "LOCAL_KEY",
            Self::RecycledKey => "RECYCLED_KEY",
            Self::NaturalKey => "NATURAL_KEY",
            Self::MirrorKey => "MIRROR_KEY",
            Self::AggregateKey => "AGGREGATE_KEY",
            Self::CallersKey => "CALLERS_KEY",
            Self::StableKey => "STABLE_KEY",
            Self::Other => "OTHER",
        };
        f.write_str(name)
    }
}

/// Which way changes flow between the repository and the third party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SynchronizationDirection {
    BothDirections,
    FromThirdParty,
    ToThirdParty,
    Other,
}

impl SynchronizationDirection {
    pub const fn ordinal(self) -> i32 {
        match self {
            Self::BothDirections => 0,
            Self::FromThirdParty => 1,
            Self::ToThirdParty => 2,
            Self::Other => 99,
        }
    }
}

impl fmt::Display for SynchronizationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BothDirections => "BOTH_DIRECTIONS",
            Self::FromThirdParty => "FROM_THIRD_PARTY",
            Self::ToThirdParty => "TO_THIRD_PARTY",
            Self::Other => "OTHER",
        };
        f.write_str(name)
    }
}

/// Links an element to its identifier in a third-party asset manager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataCorrelationProperties {
    #[serde(rename = "assetManagerGUID", default, skip_serializing_if = "Option::is_none")]
    pub asset_manager_guid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_manager_name: Option<String>,

    /// Identifier of the element in the third party.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_identifier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_identifier_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_identifier_usage: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_identifier_source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_pattern: Option<KeyPattern>,

    /// Extra values the third party needs to map the element.
    #[serde(
        default,
        deserialize_with = "metaprops_types::null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub mapping_properties: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synchronization_direction: Option<SynchronizationDirection>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synchronization_description: Option<String>,
}

impl fmt::Display for MetadataCorrelationProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDump::new(f, "MetadataCorrelationProperties")
            .text("assetManagerGUID", self.asset_manager_guid.as_deref())
            .text("assetManagerName", self.asset_manager_name.as_deref())
            .text("externalIdentifier", self.external_identifier.as_deref())
            .text("externalIdentifierName", self.external_identifier_name.as_deref())
            .text("externalIdentifierUsage", self.external_identifier_usage.as_deref())
            .text("externalIdentifierSource", self.external_identifier_source.as_deref())
            .optional("keyPattern", self.key_pattern.as_ref())
            .entries("mappingProperties", &self.mapping_properties)
            .optional("synchronizationDirection", self.synchronization_direction.as_ref())
            .text(
                "synchronizationDescription",
                self.synchronization_description.as_deref(),
            )
            .finish()
    }
}
