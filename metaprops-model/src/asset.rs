//! Classification kinds describing assets: where they come from, who owns
//! them, what their fields contain, how they are secured, and what activity
//! they represent.

use metaprops_types::{Effectivity, FieldDump, PropertyBag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Marks an element as describing an activity (project, meeting, task...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct ActivityDescriptionProperties {
    /// Ordinal of the activity type.
    #[serde(default, deserialize_with = "metaprops_types::null_as_default")]
    pub activity_type: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub effectivity: Effectivity,
}

classification_kind!(ActivityDescriptionProperties {
    activity_type,
    description,
});

impl fmt::Display for ActivityDescriptionProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDump::new(f, "ActivityDescriptionProperties")
            .value("activityType", &self.activity_type)
            .text("description", self.description.as_deref())
            .effectivity(&self.effectivity)
            .finish()
    }
}

/// Records the organization and business capability an asset originates
/// from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct AssetOriginProperties {
    #[serde(rename = "organizationGUID", default, skip_serializing_if = "Option::is_none")]
    pub organization_guid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_property_name: Option<String>,

    #[serde(rename = "businessCapabilityGUID", default, skip_serializing_if = "Option::is_none")]
    pub business_capability_guid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_capability_property_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "metaprops_types::null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub other_origin_values: BTreeMap<String, String>,

    #[serde(flatten)]
    pub effectivity: Effectivity,
}

classification_kind!(AssetOriginProperties {
    organization_guid,
    organization_property_name,
    business_capability_guid,
    business_capability_property_name,
    other_origin_values,
});

impl fmt::Display for AssetOriginProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDump::new(f, "AssetOriginProperties")
            .text("organizationGUID", self.organization_guid.as_deref())
            .text("organizationPropertyName", self.organization_property_name.as_deref())
            .text("businessCapabilityGUID", self.business_capability_guid.as_deref())
            .text(
                "businessCapabilityPropertyName",
                self.business_capability_property_name.as_deref(),
            )
            .entries("otherOriginValues", &self.other_origin_values)
            .effectivity(&self.effectivity)
            .finish()
    }
}

/// Describes the values expected in a data field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct DataFieldValuesProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(
        default,
        deserialize_with = "metaprops_types::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sample_values: Vec<String>,

    /// Regular expressions the values match.
    #[serde(
        default,
        deserialize_with = "metaprops_types::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub data_pattern: Vec<String>,

    /// Regular expressions the field name matches.
    #[serde(
        default,
        deserialize_with = "metaprops_types::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub name_pattern: Vec<String>,

    #[serde(flatten)]
    pub effectivity: Effectivity,
}

classification_kind!(DataFieldValuesProperties {
    default_value,
    sample_values,
    data_pattern,
    name_pattern,
});

impl fmt::Display for DataFieldValuesProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDump::new(f, "DataFieldValuesProperties")
            .text("defaultValue", self.default_value.as_deref())
            .list("sampleValues", &self.sample_values)
            .list("dataPattern", &self.data_pattern)
            .list("namePattern", &self.name_pattern)
            .effectivity(&self.effectivity)
            .finish()
    }
}

/// Identifies the owner of an element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct OwnerProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Type of the element `owner` identifies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_type_name: Option<String>,

    /// Property of that element holding `owner`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_property_name: Option<String>,

    #[serde(flatten)]
    pub effectivity: Effectivity,
}

classification_kind!(OwnerProperties {
    owner,
    owner_type_name,
    owner_property_name,
});

impl fmt::Display for OwnerProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDump::new(f, "OwnerProperties")
            .text("owner", self.owner.as_deref())
            .text("ownerTypeName", self.owner_type_name.as_deref())
            .text("ownerPropertyName", self.owner_property_name.as_deref())
            .effectivity(&self.effectivity)
            .finish()
    }
}

/// Security labels and access groups used by enforcement points.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "camelCase")]
pub struct SecurityTagsProperties {
    #[serde(
        default,
        deserialize_with = "metaprops_types::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub security_labels: Vec<String>,

    #[serde(
        default,
        deserialize_with = "metaprops_types::null_as_default",
        skip_serializing_if = "PropertyBag::is_empty"
    )]
    pub security_properties: PropertyBag,

    /// Operation name to the groups allowed to perform it.
    #[serde(
        default,
        deserialize_with = "metaprops_types::null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub access_groups: BTreeMap<String, Vec<String>>,

    #[serde(flatten)]
    pub effectivity: Effectivity,
}

classification_kind!(SecurityTagsProperties {
    security_labels,
    security_properties,
    access_groups,
});

impl fmt::Display for SecurityTagsProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let security_properties = self.security_properties.clone().non_empty();
        FieldDump::new(f, "SecurityTagsProperties")
            .list("securityLabels", &self.security_labels)
            .optional("securityProperties", security_properties.as_ref())
            .entries(
                "accessGroups",
                self.access_groups
                    .iter()
                    .map(|(operation, groups)| (operation, format!("[{}]", groups.join(", ")))),
            )
            .effectivity(&self.effectivity)
            .finish()
    }
}
