use crate::correlation::MetadataCorrelationProperties;
use crate::{RequestError, Result};
use metaprops_model::{decode_tagged, ExternalReferenceProperties, PropertyCodec};
use metaprops_types::{FieldDump, Timestamp};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

const ELEMENT_PROPERTIES: &str = "elementProperties";

/// Fields common to every update request: how the element correlates with
/// the calling system, and when the change takes effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_correlation_properties: Option<Arc<MetadataCorrelationProperties>>,

    /// Time at which the repository should evaluate the request; `None`
    /// means now.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_time: Option<Timestamp>,
}

impl UpdateRequestBody {
    /// Mutable access to the correlation properties, creating them if absent.
    ///
    /// Correlation shared with other request bodies is copied first.
    pub fn metadata_correlation_properties_mut(&mut self) -> &mut MetadataCorrelationProperties {
        Arc::make_mut(
            self.metadata_correlation_properties
                .get_or_insert_with(Default::default),
        )
    }

    pub fn from_json(codec: &PropertyCodec, bytes: &[u8]) -> Result<Self> {
        Ok(codec.decode_untagged(bytes)?)
    }

    pub fn to_json(&self, codec: &PropertyCodec) -> Result<Vec<u8>> {
        Ok(codec.encode(self)?)
    }
}

impl fmt::Display for UpdateRequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDump::new(f, "UpdateRequestBody")
            .optional(
                "metadataCorrelationProperties",
                self.metadata_correlation_properties.as_ref(),
            )
            .optional("effectiveTime", self.effective_time.as_ref())
            .finish()
    }
}

/// Creates or updates an external reference, optionally anchored to another
/// element.
///
/// Equality and hashing cover the payload, the anchor and the inherited
/// request fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalReferenceRequestBody {
    #[serde(
        default,
        deserialize_with = "tagged_reference",
        skip_serializing_if = "Option::is_none"
    )]
    pub element_properties: Option<Arc<ExternalReferenceProperties>>,

    /// Element whose lifetime bounds the reference.
    #[serde(rename = "anchorGUID", default, skip_serializing_if = "Option::is_none")]
    pub anchor_guid: Option<String>,

    #[serde(flatten)]
    pub request: UpdateRequestBody,
}

impl ExternalReferenceRequestBody {
    pub fn new(element_properties: ExternalReferenceProperties) -> Self {
        Self {
            element_properties: Some(Arc::new(element_properties)),
            ..Default::default()
        }
    }

    /// Mutable access to the payload, creating it if absent.
    ///
    /// A payload shared with other request bodies is copied first.
    pub fn element_properties_mut(&mut self) -> &mut ExternalReferenceProperties {
        Arc::make_mut(self.element_properties.get_or_insert_with(Default::default))
    }

    /// Decodes a request body, reporting a rejected payload with its own
    /// typed error.
    pub fn from_json(codec: &PropertyCodec, bytes: &[u8]) -> Result<Self> {
        let mut fields: Map<String, Value> = serde_json::from_value(codec.parse(bytes)?)?;

        let element_properties = match fields.remove(ELEMENT_PROPERTIES) {
            None | Some(Value::Null) => None,
            Some(value) => {
                let props = decode_tagged::<ExternalReferenceProperties>(value).map_err(|source| {
                    RequestError::Property {
                        field: ELEMENT_PROPERTIES,
                        source,
                    }
                })?;
                Some(Arc::new(props))
            }
        };

        let body: Self = serde_json::from_value(Value::Object(fields))?;
        debug!(
            anchor = body.anchor_guid.as_deref(),
            has_properties = element_properties.is_some(),
            "decoded external reference request"
        );
        Ok(Self {
            element_properties,
            ..body
        })
    }

    pub fn to_json(&self, codec: &PropertyCodec) -> Result<Vec<u8>> {
        Ok(codec.encode(self)?)
    }
}

impl fmt::Display for ExternalReferenceRequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        FieldDump::new(f, "ExternalReferenceRequestBody")
            .optional("elementProperties", self.element_properties.as_ref())
            .text("anchorGUID", self.anchor_guid.as_deref())
            .optional(
                "metadataCorrelationProperties",
                self.request.metadata_correlation_properties.as_ref(),
            )
            .optional("effectiveTime", self.request.effective_time.as_ref())
            .finish()
    }
}

fn tagged_reference<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Arc<ExternalReferenceProperties>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => decode_tagged(value)
            .map(|props| Some(Arc::new(props)))
            .map_err(D::Error::custom),
    }
}
