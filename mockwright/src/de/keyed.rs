use alloc::borrow::Cow;
use alloc::vec::Vec;

use serde::de::value::StrDeserializer;
use serde::de::{DeserializeSeed, MapAccess};
use tracing::trace;

use super::{Context, MockDeserializer};
use crate::error::MockError;
use crate::path::Path;
use crate::policy::MockScalar;

/// Named-field access below one path.
///
/// Yields its keys in order. For structs these are the declared field names,
/// so every field the type asks for is present; for maps they are the names
/// discovered in the override store.
#[derive(Debug)]
pub struct KeyedContainer<'a> {
    cx: Context<'a>,
    path: Path,
    keys: Vec<Cow<'a, str>>,
    position: usize,
}

impl<'a> KeyedContainer<'a> {
    pub(crate) fn new(cx: Context<'a>, path: Path, keys: Vec<Cow<'a, str>>) -> Self {
        Self {
            cx,
            path,
            keys,
            position: 0,
        }
    }

    /// The path of the keyed value itself.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every key is reported present, overridden or not.
    pub fn contains(&self, _key: &str) -> bool {
        true
    }

    /// True iff the field's path is overridden with an explicit null.
    pub fn decode_nil(&self, key: &str) -> bool {
        self.cx.overrides().is_explicit_null(&self.path.field(key))
    }

    /// The field's override if it fits `S`, else the policy default.
    pub fn decode_scalar<S: MockScalar>(&self, key: &str) -> S {
        S::resolve(self.cx.lookup(&self.path.field(key)), self.cx.options())
    }

    /// A fresh context for the field.
    pub fn decode_nested(&self, key: &str) -> MockDeserializer<'a> {
        MockDeserializer::at(self.cx, self.path.field(key))
    }
}

impl<'de, 'a> MapAccess<'de> for KeyedContainer<'a> {
    type Error = MockError;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, Self::Error> {
        let Some(key) = self.keys.get(self.position) else {
            return Ok(None);
        };
        if !self.contains(key) {
            return Ok(None);
        }
        seed.deserialize(StrDeserializer::<MockError>::new(key))
            .map(Some)
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, Self::Error> {
        let Some(key) = self.keys.get(self.position) else {
            return Err(serde::de::Error::custom("value requested past the last key"));
        };
        let field = self.decode_nested(key);
        self.position += 1;
        trace!("{}: field", field.path());
        let path = field.path().clone();
        seed.deserialize(field).map_err(|e| e.at(&path))
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.keys.len() - self.position)
    }
}
