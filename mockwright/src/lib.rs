#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
//! `mockwright` synthesizes fully-populated values of any
//! [`Deserialize`](serde::Deserialize) type for tests.
//!
//! The type's own `Deserialize` impl drives construction: every field,
//! element and scalar it asks for is looked up by path in a sparse set of
//! [`Overrides`], and anything not overridden gets a deterministic default.
//!
//! | kind | default |
//! |---|---|
//! | `bool` | `false` |
//! | strings | `"mock"` |
//! | integers and floats | `0` |
//! | sequences | one defaulted element |
//! | maps | empty |
//! | enums | first variant |
//! | `Option<T>` | `Some(default T)` |
//!
//! # Example
//!
//! ```
//! use mockwright::{Mock, OverrideValue, overrides};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Address {
//!     city: String,
//! }
//!
//! #[derive(Debug, Deserialize)]
//! struct User {
//!     name: String,
//!     age: u32,
//!     nickname: Option<String>,
//!     address: Address,
//!     scores: Vec<i32>,
//! }
//!
//! let user = User::mock(overrides! {
//!     "age" => 42,
//!     "address.city" => "Paris",
//!     "nickname" => OverrideValue::Null,
//!     "scores[]" => 3,
//!     "scores[2]" => 30,
//! })
//! .unwrap();
//!
//! assert_eq!(user.name, "mock");
//! assert_eq!(user.age, 42);
//! assert_eq!(user.nickname, None);
//! assert_eq!(user.address.city, "Paris");
//! assert_eq!(user.scores, [0, 0, 30]);
//! ```
//!
//! # Paths
//!
//! `field`, `field.nested`, `field[index]` and `field[]` (the length of the
//! sequence at `field`) compose to any depth: `users[0].address.city`. The
//! root value itself is addressed by the empty path, which is what
//! [`mock_base`] uses. Field names are not escaped, so a field literally
//! named `a.b` cannot be told apart from field `b` inside field `a`.

extern crate alloc;

use serde::de::DeserializeOwned;

mod error;
pub use error::{MockError, MockErrorKind};

mod overrides;
pub use overrides::{Lookup, OverrideValue, Overrides};

mod path;
pub use path::{Path, PathSegment};

mod policy;
pub use policy::{DEFAULT_LEN, DEFAULT_TEXT, MockOptions, MockScalar};

pub mod de;
pub use de::MockDeserializer;

/// Build a `T`, taking values from `overrides` and defaulting everything else.
///
/// Fails only when `T`'s own deserialization logic rejects what it was
/// given; the failure is logged and returned, and no partial value is kept.
pub fn mock<T: DeserializeOwned>(overrides: Overrides) -> Result<T, MockError> {
    mock_with_options(&overrides, &MockOptions::default())
}

/// Build a `T` whose root value is `value`.
///
/// Shorthand for `mock(overrides! { "" => value })`, meant for types that
/// decode as a single scalar.
pub fn mock_base<T: DeserializeOwned>(value: impl Into<OverrideValue>) -> Result<T, MockError> {
    mock(Overrides::new().with("", value))
}

/// Like [`mock`], with a non-standard default policy.
pub fn mock_with_options<T: DeserializeOwned>(
    overrides: &Overrides,
    options: &MockOptions,
) -> Result<T, MockError> {
    let type_name = core::any::type_name::<T>();
    tracing::debug!("mocking {type_name} with {} overrides", overrides.len());

    let cx = de::Context::new(overrides, options);
    T::deserialize(MockDeserializer::root(cx)).inspect_err(|err| {
        tracing::warn!("failed to mock {type_name}: {err}");
    })
}

/// Mock constructors on every deserializable type.
///
/// ```
/// use mockwright::Mock;
///
/// let n = u8::mock_base(7).unwrap();
/// assert_eq!(n, 7);
/// assert_eq!(String::mock_default().unwrap(), "mock");
/// ```
pub trait Mock: Sized {
    /// See [`mock`].
    fn mock(overrides: Overrides) -> Result<Self, MockError>;

    /// See [`mock_base`].
    fn mock_base(value: impl Into<OverrideValue>) -> Result<Self, MockError> {
        Self::mock(Overrides::new().with("", value))
    }

    /// Mock with no overrides at all.
    fn mock_default() -> Result<Self, MockError> {
        Self::mock(Overrides::new())
    }
}

impl<T: DeserializeOwned> Mock for T {
    fn mock(overrides: Overrides) -> Result<Self, MockError> {
        mock(overrides)
    }
}
