/// Implements the shared plumbing of a classification kind: its registered
/// discriminator, [`EffectiveDated`](metaprops_types::EffectiveDated)
/// access to the embedded `effectivity`, and structural equality/hashing.
///
/// Equality covers the effectivity window plus exactly the listed fields.
/// The extension bag is not compared, matching the root classification
/// shape; hashing uses the same field set.
macro_rules! classification_kind {
    ($kind:ident { $($field:ident),* $(,)? }) => {
        impl $crate::registry::Tagged for $kind {
            const TYPE_NAME: &'static str = stringify!($kind);
        }

        impl ::metaprops_types::EffectiveDated for $kind {
            fn effectivity(&self) -> &::metaprops_types::Effectivity {
                &self.effectivity
            }

            fn effectivity_mut(&mut self) -> &mut ::metaprops_types::Effectivity {
                &mut self.effectivity
            }
        }

        impl PartialEq for $kind {
            fn eq(&self, other: &Self) -> bool {
                self.effectivity.same_window(&other.effectivity)
                    $(&& self.$field == other.$field)*
            }
        }

        impl Eq for $kind {}

        impl ::std::hash::Hash for $kind {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                self.effectivity.hash_window(state);
                $(::std::hash::Hash::hash(&self.$field, state);)*
            }
        }
    };
}
