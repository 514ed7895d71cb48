//! Integration tests for mocking whole types through their `Deserialize` impls.

mod enums;
mod failures;
mod options;
mod paths;
mod sequences;
