use alloc::borrow::Cow;

use serde::de::value::StrDeserializer;
use serde::de::{DeserializeSeed, EnumAccess, VariantAccess, Visitor};
use tracing::trace;

use super::{Context, IndexedContainer, KeyedContainer, MockDeserializer};
use crate::error::MockError;
use crate::overrides::{Lookup, OverrideValue};
use crate::path::Path;

/// Enum access: picks a variant, then decodes its payload below
/// `path.<Variant>`.
///
/// The variant is named by a text override at the enum's own path; without
/// one, or when the name is not a declared variant, the first declared
/// variant is used.
#[derive(Debug)]
pub struct VariantContainer<'a> {
    cx: Context<'a>,
    parent: Path,
    name: &'static str,
}

impl<'a> VariantContainer<'a> {
    pub(crate) fn select(cx: Context<'a>, parent: Path, variants: &'static [&'static str]) -> Self {
        let requested = match cx.lookup(&parent) {
            Lookup::Value(OverrideValue::Text(name)) => Some(name.as_str()),
            _ => None,
        };
        let chosen = requested.and_then(|name| variants.iter().copied().find(|v| *v == name));
        if let (Some(requested), None) = (requested, chosen) {
            trace!("{parent}: no variant named {requested:?}, using the first one");
        }
        let name = chosen.or_else(|| variants.first().copied()).unwrap_or_default();
        Self { cx, parent, name }
    }

    /// The path of the enum value.
    pub fn parent(&self) -> &Path {
        &self.parent
    }

    /// The selected variant.
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn payload_path(&self) -> Path {
        self.parent.field(self.name)
    }
}

impl<'de, 'a> EnumAccess<'de> for VariantContainer<'a> {
    type Error = MockError;
    type Variant = Self;

    fn variant_seed<V: DeserializeSeed<'de>>(
        self,
        seed: V,
    ) -> Result<(V::Value, Self::Variant), Self::Error> {
        let tag = seed.deserialize(StrDeserializer::<MockError>::new(self.name))?;
        Ok((tag, self))
    }
}

impl<'de, 'a> VariantAccess<'de> for VariantContainer<'a> {
    type Error = MockError;

    fn unit_variant(self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn newtype_variant_seed<T: DeserializeSeed<'de>>(
        self,
        seed: T,
    ) -> Result<T::Value, Self::Error> {
        let path = self.payload_path();
        seed.deserialize(MockDeserializer::at(self.cx, path.clone()))
            .map_err(|e| e.at(&path))
    }

    fn tuple_variant<V: Visitor<'de>>(self, len: usize, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_seq(IndexedContainer::with_len(self.cx, self.payload_path(), len))
    }

    fn struct_variant<V: Visitor<'de>>(
        self,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        let keys = fields.iter().map(|&field| Cow::Borrowed(field)).collect();
        visitor.visit_map(KeyedContainer::new(self.cx, self.payload_path(), keys))
    }
}
