//! Byte-level entry points for property payloads.

use crate::classification::{ClassificationProperties, CLASSIFICATIONS};
use crate::governance::{GovernanceClassification, GOVERNANCE_CLASSIFICATIONS};
use crate::registry::{decode_tagged, Tagged};
use metaprops_types::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Default upper bound on the size of a decoded payload (4 MiB).
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 4 * 1024 * 1024;

/// Configuration for [`PropertyCodec`].
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Payloads larger than this are rejected before parsing.
    pub max_payload_bytes: usize,
    /// Indent encoded output.
    pub pretty: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
            pretty: false,
        }
    }
}

/// Encodes and decodes property payloads, reporting failures as
/// [`metaprops_types::Error`].
#[derive(Debug, Clone, Default)]
pub struct PropertyCodec {
    config: CodecConfig,
}

impl PropertyCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decodes any registered classification kind.
    pub fn decode_classification(&self, bytes: &[u8]) -> Result<ClassificationProperties> {
        CLASSIFICATIONS.decode_value(self.parse(bytes)?)
    }

    /// Decodes a member of the governance family.
    pub fn decode_governance(&self, bytes: &[u8]) -> Result<GovernanceClassification> {
        GOVERNANCE_CLASSIFICATIONS.decode_value(self.parse(bytes)?)
    }

    /// Decodes one specific tagged shape.
    pub fn decode<V: Tagged>(&self, bytes: &[u8]) -> Result<V> {
        decode_tagged(self.parse(bytes)?)
    }

    /// Decodes a shape that carries no discriminator.
    pub fn decode_untagged<V: DeserializeOwned>(&self, bytes: &[u8]) -> Result<V> {
        serde_json::from_value(self.parse(bytes)?).map_err(|source| Error::MalformedValue {
            type_name: std::any::type_name::<V>(),
            source,
        })
    }

    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        let bytes = if self.config.pretty {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };
        Ok(bytes)
    }

    pub fn encode_to_string<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let text = if self.config.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }

    /// Checks the size limit and parses the bytes as JSON.
    pub fn parse(&self, bytes: &[u8]) -> Result<Value> {
        let limit = self.config.max_payload_bytes;
        if bytes.len() > limit {
            warn!(size = bytes.len(), limit, "rejecting oversized payload");
            return Err(Error::PayloadTooLarge {
                size: bytes.len(),
                limit,
            });
        }
        Ok(serde_json::from_slice(bytes)?)
    }
}
