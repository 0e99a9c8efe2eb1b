//! The closed set of classification kinds.

use crate::asset::{
    ActivityDescriptionProperties, AssetOriginProperties, DataFieldValuesProperties,
    OwnerProperties, SecurityTagsProperties,
};
use crate::glossary::{
    CanonicalVocabularyProperties, EditingGlossaryProperties, GlossaryTermContextDefinition,
    StagingGlossaryProperties, SubjectAreaMemberProperties, TaxonomyProperties,
};
use crate::governance::{
    GovernanceClassification, GovernanceClassificationBase, GovernanceClassificationProperties,
    RetentionClassificationProperties, GOVERNANCE_CLASSIFICATIONS,
};
use crate::registry::{Tagged, TypeRegistry};
use metaprops_types::{EffectiveDated, Effectivity};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Registry of every classification kind, including the governance family.
pub static CLASSIFICATIONS: LazyLock<TypeRegistry<ClassificationProperties>> =
    LazyLock::new(|| {
        TypeRegistry::new("ClassificationProperties")
            .register::<ActivityDescriptionProperties>()
            .register::<AssetOriginProperties>()
            .register::<CanonicalVocabularyProperties>()
            .register::<DataFieldValuesProperties>()
            .register::<EditingGlossaryProperties>()
            .register::<GlossaryTermContextDefinition>()
            .register_family(&GOVERNANCE_CLASSIFICATIONS)
            .register::<OwnerProperties>()
            .register::<SecurityTagsProperties>()
            .register::<StagingGlossaryProperties>()
            .register::<SubjectAreaMemberProperties>()
            .register::<TaxonomyProperties>()
    });

/// A classification of any registered kind.
///
/// Values of different kinds never compare equal, whatever their fields
/// hold. On the wire every kind is a flat object whose `class` field names
/// the kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassificationProperties {
    ActivityDescription(ActivityDescriptionProperties),
    AssetOrigin(AssetOriginProperties),
    CanonicalVocabulary(CanonicalVocabularyProperties),
    DataFieldValues(DataFieldValuesProperties),
    EditingGlossary(EditingGlossaryProperties),
    GlossaryTermContext(GlossaryTermContextDefinition),
    Governance(GovernanceClassification),
    Owner(OwnerProperties),
    SecurityTags(SecurityTagsProperties),
    StagingGlossary(StagingGlossaryProperties),
    SubjectAreaMember(SubjectAreaMemberProperties),
    Taxonomy(TaxonomyProperties),
}

macro_rules! each_kind {
    ($value:expr, $props:ident => $body:expr) => {
        match $value {
            ClassificationProperties::ActivityDescription($props) => $body,
            ClassificationProperties::AssetOrigin($props) => $body,
            ClassificationProperties::CanonicalVocabulary($props) => $body,
            ClassificationProperties::DataFieldValues($props) => $body,
            ClassificationProperties::EditingGlossary($props) => $body,
            ClassificationProperties::GlossaryTermContext($props) => $body,
            ClassificationProperties::Governance($props) => $body,
            ClassificationProperties::Owner($props) => $body,
            ClassificationProperties::SecurityTags($props) => $body,
            ClassificationProperties::StagingGlossary($props) => $body,
            ClassificationProperties::SubjectAreaMember($props) => $body,
            ClassificationProperties::Taxonomy($props) => $body,
        }
    };
}

impl ClassificationProperties {
    /// The registered discriminator of the concrete kind.
    pub fn type_name(&self) -> &'static str {
        each_kind!(self, props => props.type_name())
    }

    /// The governance classification, if this is one.
    pub fn as_governance(&self) -> Option<&GovernanceClassification> {
        match self {
            Self::Governance(props) => Some(props),
            _ => None,
        }
    }
}

impl EffectiveDated for ClassificationProperties {
    fn effectivity(&self) -> &Effectivity {
        each_kind!(self, props => props.effectivity())
    }

    fn effectivity_mut(&mut self) -> &mut Effectivity {
        each_kind!(self, props => props.effectivity_mut())
    }
}

impl fmt::Display for ClassificationProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        each_kind!(self, props => fmt::Display::fmt(props, f))
    }
}

impl Serialize for ClassificationProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        each_kind!(self, props => props.serialize(serializer))
    }
}

impl<'de> Deserialize<'de> for ClassificationProperties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = serde_json::Map::deserialize(deserializer)?;
        CLASSIFICATIONS
            .decode_map(fields)
            .map_err(serde::de::Error::custom)
    }
}

macro_rules! from_kind {
    ($($kind:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$kind> for ClassificationProperties {
                fn from(props: $kind) -> Self {
                    Self::$variant(props)
                }
            }
        )*
    };
}

from_kind! {
    ActivityDescriptionProperties => ActivityDescription,
    AssetOriginProperties => AssetOrigin,
    CanonicalVocabularyProperties => CanonicalVocabulary,
    DataFieldValuesProperties => DataFieldValues,
    EditingGlossaryProperties => EditingGlossary,
    GlossaryTermContextDefinition => GlossaryTermContext,
    GovernanceClassification => Governance,
    OwnerProperties => Owner,
    SecurityTagsProperties => SecurityTags,
    StagingGlossaryProperties => StagingGlossary,
    SubjectAreaMemberProperties => SubjectAreaMember,
    TaxonomyProperties => Taxonomy,
}

impl From<GovernanceClassificationBase> for ClassificationProperties {
    fn from(props: GovernanceClassificationBase) -> Self {
        Self::Governance(props.into())
    }
}

impl From<GovernanceClassificationProperties> for ClassificationProperties {
    fn from(props: GovernanceClassificationProperties) -> Self {
        Self::Governance(props.into())
    }
}

impl From<RetentionClassificationProperties> for ClassificationProperties {
    fn from(props: RetentionClassificationProperties) -> Self {
        Self::Governance(props.into())
    }
}
