//! The override store: caller-supplied values addressed by path.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};
use core::fmt;

use serde::Serialize;

use crate::error::MockError;
use crate::path::{Path, PathSegment};

/// A value supplied by the caller in place of a default.
#[derive(Clone, Debug, PartialEq)]
pub enum OverrideValue {
    /// Explicit null: optional fields at this path decode as `None`.
    Null,
    /// A boolean
    Bool(bool),
    /// A signed integer
    Int(i64),
    /// An unsigned integer too large for `Int`, or given as unsigned
    UInt(u64),
    /// A floating point number
    Float(f64),
    /// A string
    Text(String),
    /// A caller-built array or object, handed back verbatim when the target
    /// asks for a structure of the same kind.
    Prebuilt(serde_json::Value),
}

impl OverrideValue {
    /// Capture an already-built value.
    ///
    /// Scalars are normalized into the matching scalar variant; arrays and
    /// objects are kept as [`OverrideValue::Prebuilt`].
    pub fn prebuilt<T: Serialize + ?Sized>(value: &T) -> Result<Self, MockError> {
        let json = serde_json::to_value(value).map_err(MockError::prebuilt)?;
        Ok(Self::from(json))
    }

    /// Short human-readable name of the variant, used in trace output.
    pub fn kind(&self) -> &'static str {
        match self {
            OverrideValue::Null => "null",
            OverrideValue::Bool(_) => "bool",
            OverrideValue::Int(_) => "int",
            OverrideValue::UInt(_) => "uint",
            OverrideValue::Float(_) => "float",
            OverrideValue::Text(_) => "text",
            OverrideValue::Prebuilt(serde_json::Value::Array(_)) => "prebuilt array",
            OverrideValue::Prebuilt(_) => "prebuilt object",
        }
    }

    /// The value as a sequence length, if it is a non-negative integer.
    pub fn as_len(&self) -> Option<usize> {
        match self {
            OverrideValue::Int(n) => usize::try_from(*n).ok(),
            OverrideValue::UInt(n) => usize::try_from(*n).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for OverrideValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverrideValue::Null => f.write_str("null"),
            OverrideValue::Bool(b) => write!(f, "{b}"),
            OverrideValue::Int(n) => write!(f, "{n}"),
            OverrideValue::UInt(n) => write!(f, "{n}"),
            OverrideValue::Float(x) => write!(f, "{x}"),
            OverrideValue::Text(s) => write!(f, "{s:?}"),
            OverrideValue::Prebuilt(json) => write!(f, "{json}"),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for OverrideValue {
                fn from(v: $t) -> Self {
                    OverrideValue::$variant(<$wide>::from(v))
                }
            }
        )*
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64);
impl_from_int!(UInt as u64: u8, u16, u32, u64);

impl From<isize> for OverrideValue {
    fn from(v: isize) -> Self {
        OverrideValue::Int(v as i64)
    }
}

impl From<usize> for OverrideValue {
    fn from(v: usize) -> Self {
        OverrideValue::UInt(v as u64)
    }
}

impl From<f32> for OverrideValue {
    fn from(v: f32) -> Self {
        OverrideValue::Float(f64::from(v))
    }
}

impl From<f64> for OverrideValue {
    fn from(v: f64) -> Self {
        OverrideValue::Float(v)
    }
}

impl From<bool> for OverrideValue {
    fn from(v: bool) -> Self {
        OverrideValue::Bool(v)
    }
}

impl From<char> for OverrideValue {
    fn from(v: char) -> Self {
        OverrideValue::Text(v.to_string())
    }
}

impl From<&str> for OverrideValue {
    fn from(v: &str) -> Self {
        OverrideValue::Text(v.to_string())
    }
}

impl From<String> for OverrideValue {
    fn from(v: String) -> Self {
        OverrideValue::Text(v)
    }
}

impl<T: Into<OverrideValue>> From<Option<T>> for OverrideValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(OverrideValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for OverrideValue {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value;
        match json {
            Value::Null => OverrideValue::Null,
            Value::Bool(b) => OverrideValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    OverrideValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    OverrideValue::UInt(u)
                } else {
                    OverrideValue::Float(n.as_f64().unwrap_or_default())
                }
            }
            Value::String(s) => OverrideValue::Text(s),
            other => OverrideValue::Prebuilt(other),
        }
    }
}

/// Outcome of looking a path up in [`Overrides`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lookup<'a> {
    /// No override exists for the path
    Missing,
    /// The path is overridden with an explicit null
    Null,
    /// The path is overridden with a concrete value
    Value(&'a OverrideValue),
}

impl<'a> Lookup<'a> {
    /// The concrete value, if any.
    pub fn value(self) -> Option<&'a OverrideValue> {
        match self {
            Lookup::Value(v) => Some(v),
            Lookup::Missing | Lookup::Null => None,
        }
    }
}

/// Immutable map from path strings to override values.
///
/// Built once per mock call and shared by reference with every decoding
/// context derived from it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    entries: BTreeMap<String, OverrideValue>,
}

impl Overrides {
    /// An empty store: every location gets its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the override at `path`.
    pub fn with(mut self, path: impl Into<String>, value: impl Into<OverrideValue>) -> Self {
        self.insert(path, value);
        self
    }

    /// Add or replace the override at `path`; the last write wins.
    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<OverrideValue>) {
        self.entries.insert(path.into(), value.into());
    }

    /// Number of overridden paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve `path`, distinguishing a missing key from an explicit null.
    pub fn lookup(&self, path: &Path) -> Lookup<'_> {
        match self.entries.get(path.as_str()) {
            None => Lookup::Missing,
            Some(OverrideValue::Null) => Lookup::Null,
            Some(value) => Lookup::Value(value),
        }
    }

    /// True iff `path` is overridden with [`OverrideValue::Null`].
    pub fn is_explicit_null(&self, path: &Path) -> bool {
        matches!(self.lookup(path), Lookup::Null)
    }

    /// Names of the fields directly below `parent` that some override key
    /// reaches into, in sorted order.
    ///
    /// For keys `tags.color` and `tags.size[]` and parent `tags`, this is
    /// `{"color", "size"}`.
    pub fn field_names_under(&self, parent: &Path) -> BTreeSet<String> {
        let prefix = parent.segments();
        self.entries
            .keys()
            .filter_map(|key| {
                let mut segments = Path::from(key.as_str()).segments();
                if segments.len() <= prefix.len() || segments[..prefix.len()] != prefix[..] {
                    return None;
                }
                match segments.swap_remove(prefix.len()) {
                    PathSegment::Field(name) => Some(name),
                    PathSegment::Index(_) | PathSegment::Length => None,
                }
            })
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Overrides
where
    K: Into<String>,
    V: Into<OverrideValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut overrides = Overrides::new();
        for (path, value) in iter {
            overrides.insert(path, value);
        }
        overrides
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Overrides
where
    K: Into<String>,
    V: Into<OverrideValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Build an [`Overrides`] from `path => value` pairs.
///
/// Values go through [`Into<OverrideValue>`](OverrideValue), so plain
/// literals work; use [`OverrideValue::Null`] for an explicit null.
///
/// ```
/// use mockwright::{OverrideValue, overrides};
///
/// let o = overrides! {
///     "name" => "Ada",
///     "address.city" => "London",
///     "tags[]" => 0,
///     "nickname" => OverrideValue::Null,
/// };
/// assert_eq!(o.len(), 4);
/// ```
#[macro_export]
macro_rules! overrides {
    () => {
        $crate::Overrides::new()
    };
    ($($path:expr => $value:expr),+ $(,)?) => {{
        let mut overrides = $crate::Overrides::new();
        $(
            overrides.insert($path, $value);
        )+
        overrides
    }};
}
