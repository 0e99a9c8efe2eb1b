use crate::registry::Tagged;
use metaprops_types::{EffectiveDated, Effectivity, FieldDump};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A reference to a resource held outside the catalog, such as a paper, a
/// web page or a standard.
///
/// Unlike the classification kinds, equality and hashing here include the
/// extension bag along with every other field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct ExternalReferenceProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "metaprops_types::null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub additional_properties: BTreeMap<String, String>,

    /// Open metadata type to create, when it is a subtype of the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_abstract: Option<String>,

    #[serde(
        default,
        deserialize_with = "metaprops_types::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub authors: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,

    #[serde(flatten)]
    pub effectivity: Effectivity,
}

impl Tagged for ExternalReferenceProperties {
    const TYPE_NAME: &'static str = "ExternalReferenceProperties";
}

impl EffectiveDated for ExternalReferenceProperties {
    fn effectivity(&self) -> &Effectivity {
        &self.effectivity
    }

    fn effectivity_mut(&mut self) -> &mut Effectivity {
        &mut self.effectivity
    }
}

impl fmt::Display for ExternalReferenceProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDump::new(f, "ExternalReferenceProperties")
            .text("referenceId", self.reference_id.as_deref())
            .text("referenceTitle", self.reference_title.as_deref())
            .text("referenceAbstract", self.reference_abstract.as_deref())
            .list("authors", &self.authors)
            .text("url", self.url.as_deref())
            .text("sources", self.sources.as_deref())
            .text("license", self.license.as_deref())
            .text("copyright", self.copyright.as_deref())
            .text("attribution", self.attribution.as_deref())
            .text("qualifiedName", self.qualified_name.as_deref())
            .entries("additionalProperties", &self.additional_properties)
            .text("typeName", self.type_name.as_deref())
            .effectivity(&self.effectivity)
            .finish()
    }
}
