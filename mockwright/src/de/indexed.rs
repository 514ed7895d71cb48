use serde::de::{DeserializeSeed, SeqAccess};
use tracing::trace;

use super::{Context, MockDeserializer};
use crate::error::MockError;
use crate::path::Path;
use crate::policy::MockScalar;

/// Positional access to a bounded sequence.
///
/// The element count is fixed when the container is created. Every decode
/// call advances to the next element first, then resolves it at
/// `path[current_index - 1]`.
#[derive(Debug)]
pub struct IndexedContainer<'a> {
    cx: Context<'a>,
    path: Path,
    count: usize,
    current_index: usize,
}

impl<'a> IndexedContainer<'a> {
    /// Sized by the `path[]` override, or the default length.
    pub(crate) fn new(cx: Context<'a>, path: Path) -> Self {
        let marker = path.length_marker();
        let count = match cx.lookup(&marker).value().and_then(|v| v.as_len()) {
            Some(count) => count,
            None => cx.options().default_len,
        };
        trace!("{path}: sequence of {count}");
        Self::with_len(cx, path, count)
    }

    /// Fixed arity, for tuples and arrays.
    pub(crate) fn with_len(cx: Context<'a>, path: Path, count: usize) -> Self {
        Self {
            cx,
            path,
            count,
            current_index: 0,
        }
    }

    /// Number of elements this container yields.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of elements decoded so far.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// True once every element has been decoded.
    pub fn is_at_end(&self) -> bool {
        self.current_index >= self.count
    }

    fn advance(&mut self) -> Path {
        self.current_index += 1;
        self.path.index(self.current_index - 1)
    }

    /// Advance, then report whether the element is an explicit null.
    pub fn decode_nil(&mut self) -> bool {
        let element = self.advance();
        self.cx.overrides().is_explicit_null(&element)
    }

    /// Advance, then resolve the element against the policy.
    pub fn decode_scalar<S: MockScalar>(&mut self) -> S {
        let element = self.advance();
        S::resolve(self.cx.lookup(&element), self.cx.options())
    }

    /// Advance, then return a fresh context for the element.
    pub fn decode_nested(&mut self) -> MockDeserializer<'a> {
        let element = self.advance();
        MockDeserializer::at(self.cx, element)
    }
}

impl<'de, 'a> SeqAccess<'de> for IndexedContainer<'a> {
    type Error = MockError;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, Self::Error> {
        if self.is_at_end() {
            return Ok(None);
        }
        let element = self.decode_nested();
        let path = element.path().clone();
        seed.deserialize(element).map(Some).map_err(|e| e.at(&path))
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.count.saturating_sub(self.current_index))
    }
}
