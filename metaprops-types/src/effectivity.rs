//! Validity windows and the extension bag shared by every property shape.
//!
//! Shapes embed an [`Effectivity`] by composition (flattened on the wire)
//! and implement [`EffectiveDated`] to expose it.

use crate::{PropertyBag, Timestamp};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// The `[effectiveFrom, effectiveTo)` window plus the overflow bag.
///
/// No ordering is enforced between the two bounds: an inverted window is a
/// caller error that validation collaborators may report, but it is stored
/// as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effectivity {
    /// Start of the window; `None` means since the beginning of time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<Timestamp>,

    /// End of the window; `None` means indefinitely into the future.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<Timestamp>,

    #[serde(
        default,
        deserialize_with = "crate::null_as_default",
        skip_serializing_if = "PropertyBag::is_empty"
    )]
    extended_properties: PropertyBag,
}

impl Effectivity {
    /// Creates a window with no extension properties.
    #[must_use]
    pub fn new(effective_from: Option<Timestamp>, effective_to: Option<Timestamp>) -> Self {
        Self {
            effective_from,
            effective_to,
            extended_properties: PropertyBag::new(),
        }
    }

    /// Compares the window bounds only, ignoring the extension bag.
    pub fn same_window(&self, other: &Self) -> bool {
        self.effective_from == other.effective_from && self.effective_to == other.effective_to
    }

    /// Hashes exactly the fields compared by [`Effectivity::same_window`].
    pub fn hash_window<H: Hasher>(&self, state: &mut H) {
        self.effective_from.hash(state);
        self.effective_to.hash(state);
    }
}

/// Accessors for anything carrying an [`Effectivity`].
pub trait EffectiveDated {
    fn effectivity(&self) -> &Effectivity;

    fn effectivity_mut(&mut self) -> &mut Effectivity;

    fn effective_from(&self) -> Option<Timestamp> {
        self.effectivity().effective_from
    }

    fn set_effective_from(&mut self, effective_from: Option<Timestamp>) {
        self.effectivity_mut().effective_from = effective_from;
    }

    fn effective_to(&self) -> Option<Timestamp> {
        self.effectivity().effective_to
    }

    fn set_effective_to(&mut self, effective_to: Option<Timestamp>) {
        self.effectivity_mut().effective_to = effective_to;
    }

    /// Returns an independent copy of the extension bag, or `None` when it
    /// is absent or empty.
    fn extended_properties(&self) -> Option<PropertyBag> {
        let bag = &self.effectivity().extended_properties;
        if bag.is_empty() { None } else { Some(bag.clone()) }
    }

    /// Replaces the extension bag; `None` or an empty bag clears it.
    fn set_extended_properties(&mut self, extended_properties: Option<PropertyBag>) {
        self.effectivity_mut().extended_properties = extended_properties.unwrap_or_default();
    }

    /// Whether `at` falls inside `[effectiveFrom, effectiveTo)`.
    ///
    /// Missing bounds are open. An inverted window contains no instant.
    fn is_effective_at(&self, at: Timestamp) -> bool {
        let window = self.effectivity();
        window.effective_from.is_none_or(|from| from <= at)
            && window.effective_to.is_none_or(|to| at < to)
    }
}

impl EffectiveDated for Effectivity {
    fn effectivity(&self) -> &Effectivity {
        self
    }

    fn effectivity_mut(&mut self) -> &mut Effectivity {
        self
    }
}
