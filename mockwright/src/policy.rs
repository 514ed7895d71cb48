//! Default-value policy.
//!
//! Every scalar the engine can hand out implements [`MockScalar`]: it knows
//! which [`OverrideValue`] variants it accepts and what to produce when none
//! fits. An override of the wrong kind is treated exactly like a missing one.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::overrides::{Lookup, OverrideValue};

/// Text handed out when no text override applies.
pub const DEFAULT_TEXT: &str = "mock";

/// Sequence length used when no `path[]` override applies.
pub const DEFAULT_LEN: usize = 1;

/// Tunables for the default-value policy.
///
/// `MockOptions::default()` is the standard policy: text is `"mock"` and
/// sequences hold one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockOptions {
    /// Number of elements in a sequence without a length override (default: 1)
    pub default_len: usize,
    /// Text for strings without an override (default: `"mock"`)
    pub default_text: String,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            default_len: DEFAULT_LEN,
            default_text: DEFAULT_TEXT.to_string(),
        }
    }
}

impl MockOptions {
    /// Create the standard options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `len` elements for sequences without a length override.
    pub fn default_len(mut self, len: usize) -> Self {
        self.default_len = len;
        self
    }

    /// Use `text` for strings without an override.
    pub fn default_text(mut self, text: impl Into<String>) -> Self {
        self.default_text = text.into();
        self
    }
}

/// A leaf value the engine can synthesize.
pub trait MockScalar: Sized {
    /// Name used in trace output.
    const KIND: &'static str;

    /// Convert a compatible override, or `None` if the kind does not fit.
    fn from_override(value: &OverrideValue) -> Option<Self>;

    /// The policy default.
    fn fallback(options: &MockOptions) -> Self;

    /// Resolve a looked-up override against the policy.
    fn resolve(lookup: Lookup<'_>, options: &MockOptions) -> Self {
        match lookup {
            Lookup::Value(value) => Self::from_override(value).unwrap_or_else(|| {
                tracing::trace!(
                    "{} override {value} does not fit {}, using default",
                    value.kind(),
                    Self::KIND
                );
                Self::fallback(options)
            }),
            Lookup::Null | Lookup::Missing => Self::fallback(options),
        }
    }
}

impl MockScalar for bool {
    const KIND: &'static str = "bool";

    fn from_override(value: &OverrideValue) -> Option<Self> {
        match value {
            OverrideValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn fallback(_: &MockOptions) -> Self {
        false
    }
}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl MockScalar for $t {
                const KIND: &'static str = stringify!($t);

                fn from_override(value: &OverrideValue) -> Option<Self> {
                    match value {
                        OverrideValue::Int(n) => <$t>::try_from(*n).ok(),
                        OverrideValue::UInt(n) => <$t>::try_from(*n).ok(),
                        _ => None,
                    }
                }

                fn fallback(_: &MockOptions) -> Self {
                    0
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl MockScalar for $t {
                const KIND: &'static str = stringify!($t);

                // Integers widen; floats never narrow into integer fields.
                #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
                fn from_override(value: &OverrideValue) -> Option<Self> {
                    match value {
                        OverrideValue::Float(x) => Some(*x as $t),
                        OverrideValue::Int(n) => Some(*n as $t),
                        OverrideValue::UInt(n) => Some(*n as $t),
                        _ => None,
                    }
                }

                fn fallback(_: &MockOptions) -> Self {
                    0.0
                }
            }
        )*
    };
}

impl_float!(f32, f64);

impl MockScalar for String {
    const KIND: &'static str = "text";

    fn from_override(value: &OverrideValue) -> Option<Self> {
        match value {
            OverrideValue::Text(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn fallback(options: &MockOptions) -> Self {
        options.default_text.clone()
    }
}

impl MockScalar for char {
    const KIND: &'static str = "char";

    fn from_override(value: &OverrideValue) -> Option<Self> {
        let OverrideValue::Text(s) = value else {
            return None;
        };
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    fn fallback(options: &MockOptions) -> Self {
        options.default_text.chars().next().unwrap_or('m')
    }
}

/// Owned byte strings (`serde_bytes`, `Vec<u8>` with `deserialize_bytes`).
impl MockScalar for Vec<u8> {
    const KIND: &'static str = "bytes";

    fn from_override(value: &OverrideValue) -> Option<Self> {
        match value {
            OverrideValue::Text(s) => Some(s.as_bytes().to_vec()),
            _ => None,
        }
    }

    fn fallback(options: &MockOptions) -> Self {
        options.default_text.as_bytes().to_vec()
    }
}
