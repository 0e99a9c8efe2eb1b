use crate::{EffectiveDated, Effectivity};
use std::fmt::{self, Display};

/// Writes the `TypeName{field=value, ...}` form used by the model types'
/// `Display` impls.
///
/// Text values are quoted `'like this'`, absent values (and empty
/// collections, which are the same as absent on the wire) render as `null`.
/// Fields appear in the order they are added.
///
/// ```
/// use metaprops_types::FieldDump;
/// use std::fmt;
///
/// struct Owner { owner: Option<String>, rank: i32 }
///
/// impl fmt::Display for Owner {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         FieldDump::new(f, "Owner")
///             .text("owner", self.owner.as_deref())
///             .value("rank", &self.rank)
///             .finish()
///     }
/// }
///
/// let owner = Owner { owner: Some("u1".into()), rank: 2 };
/// assert_eq!(owner.to_string(), "Owner{owner='u1', rank=2}");
/// ```
pub struct FieldDump<'a, 'b> {
    fmt: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> FieldDump<'a, 'b> {
    pub fn new(fmt: &'a mut fmt::Formatter<'b>, type_name: &str) -> Self {
        let result = write!(fmt, "{type_name}{{");
        Self {
            fmt,
            result,
            has_fields: false,
        }
    }

    fn write_field(&mut self, name: &str, value: fmt::Arguments<'_>) -> &mut Self {
        if self.result.is_ok() {
            let separator = if self.has_fields { ", " } else { "" };
            self.result = write!(self.fmt, "{separator}{name}={value}");
            self.has_fields = true;
        }
        self
    }

    /// A quoted text field.
    pub fn text(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        match value {
            Some(text) => self.write_field(name, format_args!("'{text}'")),
            None => self.write_field(name, format_args!("null")),
        }
    }

    /// An always-present field, rendered unquoted.
    pub fn value(&mut self, name: &str, value: &dyn Display) -> &mut Self {
        self.write_field(name, format_args!("{value}"))
    }

    /// An optional field, rendered unquoted.
    pub fn optional<T: Display>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        match value {
            Some(value) => self.write_field(name, format_args!("{value}")),
            None => self.write_field(name, format_args!("null")),
        }
    }

    /// A list rendered as `[a, b]`.
    pub fn list<T: Display>(&mut self, name: &str, values: &[T]) -> &mut Self {
        if values.is_empty() {
            return self.write_field(name, format_args!("null"));
        }
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        self.write_field(name, format_args!("[{joined}]"))
    }

    /// A map rendered as `{key=value, ...}`.
    pub fn entries<I, K, V>(&mut self, name: &str, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Display,
        V: Display,
    {
        let rendered = entries
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>();
        if rendered.is_empty() {
            return self.write_field(name, format_args!("null"));
        }
        let joined = rendered.join(", ");
        self.write_field(name, format_args!("{{{joined}}}"))
    }

    /// The inherited `effectiveFrom`, `effectiveTo` and `extendedProperties`
    /// fields, in that order.
    pub fn effectivity(&mut self, window: &Effectivity) -> &mut Self {
        let extended = window.extended_properties();
        self.optional("effectiveFrom", window.effective_from.as_ref())
            .optional("effectiveTo", window.effective_to.as_ref())
            .optional("extendedProperties", extended.as_ref())
    }

    pub fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.fmt.write_str("}")
    }
}
