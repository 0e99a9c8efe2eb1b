//! Governance classifications.
//!
//! `GovernanceClassificationBase` is both a concrete kind and the root of a
//! family: `GovernanceClassificationProperties` and
//! `RetentionClassificationProperties` extend it. All three embed the shared
//! [`GovernanceDetails`] and compare it as one unit before their own fields.

use crate::registry::{Tagged, TypeRegistry};
use metaprops_types::{EffectiveDated, Effectivity, FieldDump, Timestamp};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Registry of the governance family, keyed by `class`.
pub static GOVERNANCE_CLASSIFICATIONS: LazyLock<TypeRegistry<GovernanceClassification>> =
    LazyLock::new(|| {
        TypeRegistry::new("GovernanceClassificationBase")
            .register::<GovernanceClassificationBase>()
            .register::<GovernanceClassificationProperties>()
            .register::<RetentionClassificationProperties>()
    });

/// Well-known values of [`GovernanceDetails::status`].
///
/// The wire carries the raw integer; values outside this list are kept as
/// they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GovernanceClassificationStatus {
    Discovered,
    Proposed,
    Imported,
    Validated,
    Deprecated,
    Obsolete,
    Other,
}

impl GovernanceClassificationStatus {
    pub const fn ordinal(self) -> i32 {
        match self {
            Self::Discovered => 0,
            Self::Proposed => 1,
            Self::Imported => 2,
            Self::Validated => 3,
            Self::Deprecated => 4,
            Self::Obsolete => 5,
            Self::Other => 99,
        }
    }

    pub const fn from_ordinal(ordinal: i32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Discovered),
            1 => Some(Self::Proposed),
            2 => Some(Self::Imported),
            3 => Some(Self::Validated),
            4 => Some(Self::Deprecated),
            5 => Some(Self::Obsolete),
            99 => Some(Self::Other),
            _ => None,
        }
    }
}

/// Fields common to every governance classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceDetails {
    #[serde(default, deserialize_with = "metaprops_types::null_as_default")]
    pub status: i32,

    /// Confidence in the classification, 0 (none) to 100 (excellent). The
    /// range is not enforced.
    #[serde(default, deserialize_with = "metaprops_types::null_as_default")]
    pub confidence: i32,

    /// Identifier of whoever maintains the classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steward: Option<String>,

    /// Type of the element `steward` identifies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steward_type_name: Option<String>,

    /// Property of that element holding `steward`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steward_property_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl GovernanceDetails {
    /// The status as a well-known value, if it is one.
    pub fn status_kind(&self) -> Option<GovernanceClassificationStatus> {
        GovernanceClassificationStatus::from_ordinal(self.status)
    }

    pub fn set_status_kind(&mut self, status: GovernanceClassificationStatus) {
        self.status = status.ordinal();
    }

    fn dump(&self, dump: &mut FieldDump<'_, '_>) {
        dump.value("status", &self.status)
            .value("confidence", &self.confidence)
            .text("steward", self.steward.as_deref())
            .text("stewardTypeName", self.steward_type_name.as_deref())
            .text("stewardPropertyName", self.steward_property_name.as_deref())
            .text("source", self.source.as_deref())
            .text("notes", self.notes.as_deref());
    }
}

/// The governance classification root, usable on its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "class")]
pub struct GovernanceClassificationBase {
    #[serde(flatten)]
    pub governance: GovernanceDetails,

    #[serde(flatten)]
    pub effectivity: Effectivity,
}

classification_kind!(GovernanceClassificationBase { governance });

impl fmt::Display for GovernanceClassificationBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dump = FieldDump::new(f, "GovernanceClassificationBase");
        self.governance.dump(&mut dump);
        dump.effectivity(&self.effectivity).finish()
    }
}

/// A governance classification carrying a level from a governance
/// definition's scale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct GovernanceClassificationProperties {
    #[serde(flatten)]
    pub governance: GovernanceDetails,

    #[serde(default, deserialize_with = "metaprops_types::null_as_default")]
    pub level_identifier: i32,

    #[serde(flatten)]
    pub effectivity: Effectivity,
}

classification_kind!(GovernanceClassificationProperties {
    governance,
    level_identifier,
});

impl fmt::Display for GovernanceClassificationProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dump = FieldDump::new(f, "GovernanceClassificationProperties");
        dump.value("levelIdentifier", &self.level_identifier);
        self.governance.dump(&mut dump);
        dump.effectivity(&self.effectivity).finish()
    }
}

/// Retention rules for the classified element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct RetentionClassificationProperties {
    #[serde(flatten)]
    pub governance: GovernanceDetails,

    /// Element whose lifetime drives the retention period.
    #[serde(rename = "associatedGUID", default, skip_serializing_if = "Option::is_none")]
    pub associated_guid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_after: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_after: Option<Timestamp>,

    #[serde(flatten)]
    pub effectivity: Effectivity,
}

classification_kind!(RetentionClassificationProperties {
    governance,
    associated_guid,
    archive_after,
    delete_after,
});

impl fmt::Display for RetentionClassificationProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dump = FieldDump::new(f, "RetentionClassificationProperties");
        dump.text("associatedGUID", self.associated_guid.as_deref())
            .optional("archiveAfter", self.archive_after.as_ref())
            .optional("deleteAfter", self.delete_after.as_ref());
        self.governance.dump(&mut dump);
        dump.effectivity(&self.effectivity).finish()
    }
}

/// Any member of the governance family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GovernanceClassification {
    Base(GovernanceClassificationBase),
    Classification(GovernanceClassificationProperties),
    Retention(RetentionClassificationProperties),
}

impl GovernanceClassification {
    /// The registered discriminator of the concrete shape.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Base(props) => props.type_name(),
            Self::Classification(props) => props.type_name(),
            Self::Retention(props) => props.type_name(),
        }
    }

    pub fn details(&self) -> &GovernanceDetails {
        match self {
            Self::Base(props) => &props.governance,
            Self::Classification(props) => &props.governance,
            Self::Retention(props) => &props.governance,
        }
    }

    pub fn details_mut(&mut self) -> &mut GovernanceDetails {
        match self {
            Self::Base(props) => &mut props.governance,
            Self::Classification(props) => &mut props.governance,
            Self::Retention(props) => &mut props.governance,
        }
    }
}

impl EffectiveDated for GovernanceClassification {
    fn effectivity(&self) -> &Effectivity {
        match self {
            Self::Base(props) => &props.effectivity,
            Self::Classification(props) => &props.effectivity,
            Self::Retention(props) => &props.effectivity,
        }
    }

    fn effectivity_mut(&mut self) -> &mut Effectivity {
        match self {
            Self::Base(props) => &mut props.effectivity,
            Self::Classification(props) => &mut props.effectivity,
            Self::Retention(props) => &mut props.effectivity,
        }
    }
}

impl From<GovernanceClassificationBase> for GovernanceClassification {
    fn from(props: GovernanceClassificationBase) -> Self {
        Self::Base(props)
    }
}

impl From<GovernanceClassificationProperties> for GovernanceClassification {
    fn from(props: GovernanceClassificationProperties) -> Self {
        Self::Classification(props)
    }
}

impl From<RetentionClassificationProperties> for GovernanceClassification {
    fn from(props: RetentionClassificationProperties) -> Self {
        Self::Retention(props)
    }
}

impl fmt::Display for GovernanceClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base(props) => fmt::Display::fmt(props, f),
            Self::Classification(props) => fmt::Display::fmt(props, f),
            Self::Retention(props) => fmt::Display::fmt(props, f),
        }
    }
}

impl Serialize for GovernanceClassification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Base(props) => props.serialize(serializer),
            Self::Classification(props) => props.serialize(serializer),
            Self::Retention(props) => props.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for GovernanceClassification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = serde_json::Map::deserialize(deserializer)?;
        GOVERNANCE_CLASSIFICATIONS
            .decode_map(fields)
            .map_err(serde::de::Error::custom)
    }
}
