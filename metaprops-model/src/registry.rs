//! Discriminator registries.
//!
//! A [`TypeRegistry`] maps the registered `class` names of one family of
//! shapes to the decoders that build them. Registries are built once,
//! stored in `LazyLock` statics and only read afterwards, so lookups need no
//! locking. A family may absorb another family's registry; resolution then
//! recurses into it and always ends at exactly one concrete shape.

use metaprops_types::{Error, Result, DISCRIMINATOR_FIELD};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, warn};

/// A concrete shape with a registered discriminator.
///
/// Implementors serialize the discriminator themselves (`#[serde(tag =
/// "class")]`), as a sibling of their data fields.
pub trait Tagged: Serialize + DeserializeOwned {
    /// The registered `class` name.
    const TYPE_NAME: &'static str;

    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }
}

type Decoder<T> = Box<dyn Fn(Map<String, Value>) -> Result<T> + Send + Sync>;

/// Closed mapping from discriminator to decoder for one family of shapes.
pub struct TypeRegistry<T> {
    family: &'static str,
    decoders: HashMap<&'static str, Decoder<T>>,
}

impl<T: 'static> TypeRegistry<T> {
    /// Creates an empty registry for the named family.
    pub fn new(family: &'static str) -> Self {
        Self {
            family,
            decoders: HashMap::new(),
        }
    }

    /// Registers a concrete shape under its `TYPE_NAME`.
    #[must_use]
    pub fn register<V>(mut self) -> Self
    where
        V: Tagged + Into<T> + 'static,
    {
        self.insert(
            V::TYPE_NAME,
            Box::new(|fields| decode_fields::<V>(fields).map(Into::into)),
        );
        self
    }

    /// Registers every discriminator of a sub-family, resolving through it.
    #[must_use]
    pub fn register_family<F>(mut self, family: &'static TypeRegistry<F>) -> Self
    where
        F: Into<T> + 'static,
    {
        for tag in family.tags() {
            self.insert(
                tag,
                Box::new(move |fields| family.decode_map(fields).map(Into::into)),
            );
        }
        self
    }

    fn insert(&mut self, tag: &'static str, decoder: Decoder<T>) {
        let previous = self.decoders.insert(tag, decoder);
        debug_assert!(previous.is_none(), "duplicate discriminator {tag}");
    }

    /// Name of the family, used in errors and logs.
    pub fn family(&self) -> &'static str {
        self.family
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.decoders.contains_key(tag)
    }

    /// Registered discriminators, sorted.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.decoders.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// Decodes a JSON value, which must be an object carrying `class`.
    pub fn decode_value(&self, value: Value) -> Result<T> {
        match value {
            Value::Object(fields) => self.decode_map(fields),
            other => Err(Error::malformed(
                self.family,
                format!("expected an object, found {}", json_kind(&other)),
            )),
        }
    }

    /// Decodes the fields of an object, dispatching on `class`.
    pub fn decode_map(&self, fields: Map<String, Value>) -> Result<T> {
        let tag = match discriminator(&fields, self.family)? {
            Some(tag) => tag.to_owned(),
            None => return Err(Error::MissingDiscriminator { family: self.family }),
        };

        match self.decoders.get(tag.as_str()) {
            Some(decode) => {
                debug!(family = self.family, class = %tag, "resolving property payload");
                decode(fields)
            }
            None => {
                warn!(family = self.family, class = %tag, "rejecting unknown discriminator");
                Err(Error::UnknownDiscriminator {
                    family: self.family,
                    tag,
                })
            }
        }
    }
}

/// Reads the discriminator of an object, if there is one.
///
/// A present but non-string `class` is a malformed payload.
pub fn discriminator<'a>(
    fields: &'a Map<String, Value>,
    family: &'static str,
) -> Result<Option<&'a str>> {
    match fields.get(DISCRIMINATOR_FIELD) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(tag)) => Ok(Some(tag)),
        Some(other) => Err(Error::malformed(
            family,
            format!("`class` must be a string, found {}", json_kind(other)),
        )),
    }
}

/// Decodes one specific shape.
///
/// The static type already fixes the shape, so a missing `class` is
/// accepted; any other discriminator than `V::TYPE_NAME` is rejected.
pub fn decode_tagged<V: Tagged>(value: Value) -> Result<V> {
    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(Error::malformed(
                V::TYPE_NAME,
                format!("expected an object, found {}", json_kind(&other)),
            ));
        }
    };

    if let Some(tag) = discriminator(&fields, V::TYPE_NAME)? {
        if tag != V::TYPE_NAME {
            warn!(expected = V::TYPE_NAME, class = tag, "rejecting foreign discriminator");
            return Err(Error::DiscriminatorMismatch {
                expected: V::TYPE_NAME,
                found: tag.to_owned(),
            });
        }
    }
    decode_fields(fields)
}

fn decode_fields<V: Tagged>(mut fields: Map<String, Value>) -> Result<V> {
    fields.insert(
        DISCRIMINATOR_FIELD.to_owned(),
        Value::String(V::TYPE_NAME.to_owned()),
    );
    serde_json::from_value(Value::Object(fields)).map_err(|source| Error::MalformedValue {
        type_name: V::TYPE_NAME,
        source,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
