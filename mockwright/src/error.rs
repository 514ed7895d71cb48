use alloc::string::{String, ToString};
use core::fmt;

use crate::path::Path;

/// The reason a mock call failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockErrorKind {
    /// Raised by the target type's own deserialization logic, for example a
    /// validating `Deserialize` impl that rejects the default `"mock"` text.
    Custom(String),
    /// A [`Prebuilt`](crate::OverrideValue::Prebuilt) override could not be
    /// captured or could not be handed to the requested type.
    Prebuilt(String),
}

impl fmt::Display for MockErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MockErrorKind::Custom(msg) => f.write_str(msg),
            MockErrorKind::Prebuilt(msg) => write!(f, "prebuilt override rejected: {msg}"),
        }
    }
}

/// Error returned when a mock call cannot produce an instance.
///
/// Missing or mismatched overrides never produce this error; they fall back
/// to defaults. It only surfaces failures raised while the target type
/// decodes itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockError {
    /// What went wrong
    pub kind: MockErrorKind,
    /// Innermost location at which the failure was observed, if known
    pub path: Option<Path>,
}

impl MockError {
    /// Create an error without location.
    pub fn new(kind: MockErrorKind) -> Self {
        Self { kind, path: None }
    }

    pub(crate) fn prebuilt(err: impl fmt::Display) -> Self {
        Self::new(MockErrorKind::Prebuilt(err.to_string()))
    }

    /// Record `path` as the failure location unless a deeper one is already
    /// known.
    pub(crate) fn at(mut self, path: &Path) -> Self {
        if self.path.is_none() {
            self.path = Some(path.clone());
        }
        self
    }

    /// The failure location formatted for humans, `<root>` when unknown.
    pub fn path_string(&self) -> String {
        self.path
            .as_ref()
            .map_or_else(|| Path::root().to_string(), Path::to_string)
    }
}

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) if !path.is_root() => write!(f, "at {path}: {}", self.kind),
            _ => write!(f, "{}", self.kind),
        }
    }
}

impl core::error::Error for MockError {}

impl serde::de::Error for MockError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::new(MockErrorKind::Custom(msg.to_string()))
    }
}
