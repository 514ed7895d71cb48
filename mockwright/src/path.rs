//! Override path addressing.
//!
//! A path names one location inside the value being synthesized, e.g.
//! `users[0].address.city`. It is built up one step at a time while the
//! target type describes itself, and compared verbatim against the keys of
//! [`Overrides`](crate::Overrides).
//!
//! Field names are not escaped: a field literally called `a.b` produces the
//! same path as field `b` nested under field `a`.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// A single step in a [`Path`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named field of a struct, struct variant or map: `.name`
    Field(String),
    /// A sequence element: `[n]`
    Index(usize),
    /// The length marker of a sequence: `[]`
    Length,
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{name}"),
            PathSegment::Index(i) => write!(f, "[{i}]"),
            PathSegment::Length => f.write_str("[]"),
        }
    }
}

/// The string address of a location in a mocked value.
///
/// The root is the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(String);

impl Path {
    /// The empty root path.
    pub const fn root() -> Self {
        Path(String::new())
    }

    /// Returns true for the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path as it appears in an override key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the field `name` below this one.
    ///
    /// At the root this is just `name`, elsewhere `parent.name`.
    pub fn field(&self, name: &str) -> Path {
        if self.0.is_empty() {
            Path(name.to_string())
        } else {
            let mut s = String::with_capacity(self.0.len() + 1 + name.len());
            s.push_str(&self.0);
            s.push('.');
            s.push_str(name);
            Path(s)
        }
    }

    /// Path of the element at `index` of the sequence at this path.
    pub fn index(&self, index: usize) -> Path {
        Path(alloc::format!("{}[{index}]", self.0))
    }

    /// Key under which the length of the sequence at this path is overridden.
    pub fn length_marker(&self) -> Path {
        Path(alloc::format!("{}[]", self.0))
    }

    /// Split this path back into the steps that built it.
    ///
    /// Bracketed text that is neither empty nor a decimal index is kept as
    /// part of the surrounding field name, since no builder produces it.
    pub fn segments(&self) -> Vec<PathSegment> {
        let mut segments = Vec::new();
        let mut name = String::new();
        let mut chars = self.0.char_indices().peekable();

        while let Some((at, c)) = chars.next() {
            match c {
                '.' => {
                    flush_field(&mut name, &mut segments);
                }
                '[' => {
                    let rest = &self.0[at + 1..];
                    let Some(close) = rest.find(']') else {
                        name.push(c);
                        continue;
                    };
                    let inner = &rest[..close];
                    let segment = if inner.is_empty() {
                        Some(PathSegment::Length)
                    } else if inner.bytes().all(|b| b.is_ascii_digit()) {
                        inner.parse().ok().map(PathSegment::Index)
                    } else {
                        None
                    };
                    match segment {
                        Some(segment) => {
                            flush_field(&mut name, &mut segments);
                            segments.push(segment);
                            // skip the bracketed text and the closing bracket
                            for _ in 0..=inner.chars().count() {
                                chars.next();
                            }
                        }
                        None => name.push(c),
                    }
                }
                _ => name.push(c),
            }
        }
        flush_field(&mut name, &mut segments);
        segments
    }
}

fn flush_field(name: &mut String, segments: &mut Vec<PathSegment>) {
    if !name.is_empty() {
        segments.push(PathSegment::Field(core::mem::take(name)));
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path(s.to_string())
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Path(s)
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Path::root(), |path, segment| match segment {
                PathSegment::Field(name) => path.field(&name),
                PathSegment::Index(i) => path.index(i),
                PathSegment::Length => path.length_marker(),
            })
    }
}
