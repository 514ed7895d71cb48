//! The decoding context: a [`serde::Deserializer`] that manufactures data.
//!
//! [`MockDeserializer`] answers every request a `Deserialize` impl can make.
//! Scalars resolve at the context's own path through a [`ScalarContainer`];
//! structs, struct variants and maps get a [`KeyedContainer`]; sequences,
//! tuples and tuple variants get an [`IndexedContainer`]. Containers hand
//! out fresh contexts at child paths for nested values.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use serde::Deserializer as _;
use serde::de::{self, Visitor};
use tracing::trace;

use crate::error::MockError;
use crate::overrides::{Lookup, OverrideValue, Overrides};
use crate::path::Path;
use crate::policy::MockOptions;

mod indexed;
mod keyed;
mod scalar;
mod variant;

pub use indexed::IndexedContainer;
pub use keyed::KeyedContainer;
pub use scalar::ScalarContainer;
pub use variant::VariantContainer;

/// State shared by every context of one mock call.
#[derive(Clone, Copy, Debug)]
pub struct Context<'a> {
    overrides: &'a Overrides,
    options: &'a MockOptions,
}

impl<'a> Context<'a> {
    /// Bundle the override store with the policy options.
    pub fn new(overrides: &'a Overrides, options: &'a MockOptions) -> Self {
        Self { overrides, options }
    }

    /// The override store.
    pub fn overrides(&self) -> &'a Overrides {
        self.overrides
    }

    /// The policy options.
    pub fn options(&self) -> &'a MockOptions {
        self.options
    }

    pub(crate) fn lookup(&self, path: &Path) -> Lookup<'a> {
        let found = self.overrides.lookup(path);
        match found {
            Lookup::Missing => trace!("{path}: no override"),
            Lookup::Null => trace!("{path}: explicit null"),
            Lookup::Value(value) => trace!("{path}: override {value}"),
        }
        found
    }
}

/// A decoding context bound to one path.
///
/// Never mutated: nested locations get their own context.
#[derive(Clone, Debug)]
pub struct MockDeserializer<'a> {
    cx: Context<'a>,
    path: Path,
}

impl<'a> MockDeserializer<'a> {
    /// Context at the root path.
    pub fn root(cx: Context<'a>) -> Self {
        Self::at(cx, Path::root())
    }

    /// Context at `path`.
    pub fn at(cx: Context<'a>, path: Path) -> Self {
        Self { cx, path }
    }

    /// The location this context decodes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Single-value access to this context's own path.
    pub fn single_value_container(&self) -> ScalarContainer<'a> {
        ScalarContainer::new(self.cx, self.path.clone())
    }

    /// Named-field access below this path for the given field names.
    pub fn keyed_container(&self, keys: Vec<Cow<'a, str>>) -> KeyedContainer<'a> {
        KeyedContainer::new(self.cx, self.path.clone(), keys)
    }

    /// Sequence access below this path, sized by the `path[]` override.
    pub fn indexed_container(&self) -> IndexedContainer<'a> {
        IndexedContainer::new(self.cx, self.path.clone())
    }

    fn scalar_any<'de, V: Visitor<'de>>(&self, visitor: V) -> Result<V::Value, MockError> {
        match self.cx.lookup(&self.path) {
            Lookup::Value(OverrideValue::Bool(b)) => visitor.visit_bool(*b),
            Lookup::Value(OverrideValue::Int(n)) => visitor.visit_i64(*n),
            Lookup::Value(OverrideValue::UInt(n)) => visitor.visit_u64(*n),
            Lookup::Value(OverrideValue::Float(x)) => visitor.visit_f64(*x),
            Lookup::Value(OverrideValue::Text(s)) => visitor.visit_str(s),
            Lookup::Value(OverrideValue::Prebuilt(json)) => json
                .clone()
                .deserialize_any(visitor)
                .map_err(|e| MockError::prebuilt(e).at(&self.path)),
            Lookup::Value(OverrideValue::Null) | Lookup::Null => visitor.visit_unit(),
            Lookup::Missing => visitor.visit_i64(0),
        }
    }
}

macro_rules! forward_scalar {
    ($($method:ident => $visit:ident($t:ty)),* $(,)?) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
                visitor.$visit(self.single_value_container().decode_scalar::<$t>())
            }
        )*
    };
}

impl<'de, 'a> de::Deserializer<'de> for MockDeserializer<'a> {
    type Error = MockError;

    /// Self-describing types receive whatever the override holds, and the
    /// integer zero when nothing is overridden.
    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        self.scalar_any(visitor)
    }

    forward_scalar! {
        deserialize_bool => visit_bool(bool),
        deserialize_i8 => visit_i8(i8),
        deserialize_i16 => visit_i16(i16),
        deserialize_i32 => visit_i32(i32),
        deserialize_i64 => visit_i64(i64),
        deserialize_i128 => visit_i128(i128),
        deserialize_u8 => visit_u8(u8),
        deserialize_u16 => visit_u16(u16),
        deserialize_u32 => visit_u32(u32),
        deserialize_u64 => visit_u64(u64),
        deserialize_u128 => visit_u128(u128),
        deserialize_f32 => visit_f32(f32),
        deserialize_f64 => visit_f64(f64),
        deserialize_char => visit_char(char),
        deserialize_string => visit_string(String),
        deserialize_byte_buf => visit_byte_buf(Vec<u8>),
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        let text: String = self.single_value_container().decode_scalar();
        visitor.visit_str(&text)
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        let bytes: Vec<u8> = self.single_value_container().decode_scalar();
        visitor.visit_bytes(&bytes)
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        if self.single_value_container().decode_nil() {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        trace!("{}: newtype {name}", self.path);
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        let single = self.single_value_container();
        if let Some(json) = single.prebuilt(serde_json::Value::is_array) {
            return single.decode_prebuilt(json, |json| json.deserialize_seq(visitor));
        }
        visitor.visit_seq(self.indexed_container())
    }

    fn deserialize_tuple<V: Visitor<'de>>(
        self,
        len: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        let single = self.single_value_container();
        if let Some(json) = single.prebuilt(serde_json::Value::is_array) {
            return single.decode_prebuilt(json, |json| json.deserialize_tuple(len, visitor));
        }
        visitor.visit_seq(IndexedContainer::with_len(self.cx, self.path, len))
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        let single = self.single_value_container();
        if let Some(json) = single.prebuilt(serde_json::Value::is_array) {
            return single.decode_prebuilt(json, |json| {
                json.deserialize_tuple_struct(name, len, visitor)
            });
        }
        visitor.visit_seq(IndexedContainer::with_len(self.cx, self.path, len))
    }

    /// Maps hold one entry per field name that some override key reaches
    /// into below this path, and are empty otherwise.
    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        let single = self.single_value_container();
        if let Some(json) = single.prebuilt(serde_json::Value::is_object) {
            return single.decode_prebuilt(json, |json| json.deserialize_map(visitor));
        }
        let keys = self.cx.overrides().field_names_under(&self.path);
        trace!("{}: map with {} overridden keys", self.path, keys.len());
        visitor.visit_map(self.keyed_container(keys.into_iter().map(Cow::Owned).collect()))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        let single = self.single_value_container();
        if let Some(json) = single.prebuilt(serde_json::Value::is_object) {
            return single.decode_prebuilt(json, |json| {
                json.deserialize_struct(name, fields, visitor)
            });
        }
        trace!("{}: struct {name}", self.path);
        let keys = fields.iter().map(|&field| Cow::Borrowed(field)).collect();
        visitor.visit_map(self.keyed_container(keys))
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        let single = self.single_value_container();
        if let Some(json) = single.prebuilt(serde_json::Value::is_object) {
            return single.decode_prebuilt(json, |json| {
                json.deserialize_enum(name, variants, visitor)
            });
        }
        let variant = VariantContainer::select(self.cx, self.path, variants);
        trace!("{}: enum {name}::{}", variant.parent(), variant.name());
        visitor.visit_enum(variant)
    }

    fn deserialize_identifier<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        self.deserialize_str(visitor)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_unit()
    }
}
