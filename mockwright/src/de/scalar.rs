use serde::de::DeserializeOwned;
use tracing::trace;

use super::{Context, MockDeserializer};
use crate::error::MockError;
use crate::overrides::{Lookup, OverrideValue};
use crate::path::Path;
use crate::policy::MockScalar;

/// Single-value access: decodes whatever lives at the context's own path.
///
/// This is what top-level scalars, newtype wrappers and
/// [`mock_base`](crate::mock_base) go through.
#[derive(Clone, Debug)]
pub struct ScalarContainer<'a> {
    cx: Context<'a>,
    path: Path,
}

impl<'a> ScalarContainer<'a> {
    pub(crate) fn new(cx: Context<'a>, path: Path) -> Self {
        Self { cx, path }
    }

    /// The path this container reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True iff this path is overridden with an explicit null.
    pub fn decode_nil(&self) -> bool {
        self.cx.overrides().is_explicit_null(&self.path)
    }

    /// The override at this path if it fits `S`, else the policy default.
    pub fn decode_scalar<S: MockScalar>(&self) -> S {
        S::resolve(self.cx.lookup(&self.path), self.cx.options())
    }

    /// Decode a nested value rooted at this path.
    pub fn decode_nested<T: DeserializeOwned>(&self) -> Result<T, MockError> {
        T::deserialize(MockDeserializer::at(self.cx, self.path.clone()))
    }

    /// A prebuilt override at this path, if its kind is accepted by the
    /// requested shape.
    pub(crate) fn prebuilt(
        &self,
        accepts: impl FnOnce(&serde_json::Value) -> bool,
    ) -> Option<serde_json::Value> {
        let Lookup::Value(OverrideValue::Prebuilt(json)) = self.cx.overrides().lookup(&self.path)
        else {
            return None;
        };
        if accepts(json) {
            trace!("{}: using prebuilt override", self.path);
            Some(json.clone())
        } else {
            trace!("{}: prebuilt override has the wrong shape, mocking instead", self.path);
            None
        }
    }

    /// Hand a prebuilt value to the requested type.
    pub(crate) fn decode_prebuilt<T>(
        &self,
        json: serde_json::Value,
        decode: impl FnOnce(serde_json::Value) -> Result<T, serde_json::Error>,
    ) -> Result<T, MockError> {
        decode(json).map_err(|e| MockError::prebuilt(e).at(&self.path))
    }
}
