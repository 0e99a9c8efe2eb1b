use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` as the field's default value.
///
/// For fields whose absent state is their default (bags, lists, maps, plain
/// integers). Pair it with `#[serde(default)]` so a missing key reads the
/// same as `null`:
///
/// ```
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Sample {
///     #[serde(default, deserialize_with = "metaprops_types::null_as_default")]
///     values: Vec<String>,
/// }
///
/// let sample: Sample = serde_json::from_str(r#"{"values":null}"#).unwrap();
/// assert!(sample.values.is_empty());
/// ```
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
