//! Classification kinds attached to glossaries, glossary terms and subject
//! areas.

use metaprops_types::{Effectivity, FieldDump};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marks a glossary whose terms are unique within the stated scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct CanonicalVocabularyProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    #[serde(flatten)]
    pub effectivity: Effectivity,
}

classification_kind!(CanonicalVocabularyProperties { scope });

impl fmt::Display for CanonicalVocabularyProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDump::new(f, "CanonicalVocabularyProperties")
            .text("scope", self.scope.as_deref())
            .effectivity(&self.effectivity)
            .finish()
    }
}

/// Marks a glossary that is a working copy being edited.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct EditingGlossaryProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub effectivity: Effectivity,
}

classification_kind!(EditingGlossaryProperties { description });

impl fmt::Display for EditingGlossaryProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDump::new(f, "EditingGlossaryProperties")
            .text("description", self.description.as_deref())
            .effectivity(&self.effectivity)
            .finish()
    }
}

/// Marks a glossary that stages content before it is published.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct StagingGlossaryProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub effectivity: Effectivity,
}

classification_kind!(StagingGlossaryProperties { description });

impl fmt::Display for StagingGlossaryProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDump::new(f, "StagingGlossaryProperties")
            .text("description", self.description.as_deref())
            .effectivity(&self.effectivity)
            .finish()
    }
}

/// Marks a glossary term as describing the context in which other terms
/// apply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct GlossaryTermContextDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    #[serde(flatten)]
    pub effectivity: Effectivity,
}

classification_kind!(GlossaryTermContextDefinition { description, scope });

impl fmt::Display for GlossaryTermContextDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDump::new(f, "GlossaryTermContextDefinition")
            .text("description", self.description.as_deref())
            .text("scope", self.scope.as_deref())
            .effectivity(&self.effectivity)
            .finish()
    }
}

/// Links an element to a subject area by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct SubjectAreaMemberProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_area_name: Option<String>,

    #[serde(flatten)]
    pub effectivity: Effectivity,
}

classification_kind!(SubjectAreaMemberProperties { subject_area_name });

impl fmt::Display for SubjectAreaMemberProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDump::new(f, "SubjectAreaMemberProperties")
            .text("subjectAreaName", self.subject_area_name.as_deref())
            .effectivity(&self.effectivity)
            .finish()
    }
}

/// Marks a glossary whose categories form a taxonomy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct TaxonomyProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizing_principle: Option<String>,

    #[serde(flatten)]
    pub effectivity: Effectivity,
}

classification_kind!(TaxonomyProperties { organizing_principle });

impl fmt::Display for TaxonomyProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDump::new(f, "TaxonomyProperties")
            .text("organizingPrinciple", self.organizing_principle.as_deref())
            .effectivity(&self.effectivity)
            .finish()
    }
}
