//! Hierarchical error paths
//!
//! A [`FieldPath`] locates an error inside a model graph. Paths are built
//! leaf-first: the failing container produces an empty path and every
//! enclosing level (element index, field name) *prepends* its segment while
//! errors unwind, so the finished path reads root to leaf.
//!
//! ```rust,ignore
//! let mut path = FieldPath::root();
//! path.prepend_property("name");
//! path.prepend_index(2);
//! path.prepend_property("items");
//! assert_eq!(path.to_string(), "items[2].name");
//! ```

use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// SEGMENTS
// ============================================================================

/// A single step in a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named property of a model.
    Property(Cow<'static, str>),
    /// An element position inside an array.
    Index(usize),
}

impl PathSegment {
    /// Returns the property name, if this is a property segment.
    pub fn as_property(&self) -> Option<&str> {
        match self {
            Self::Property(name) => Some(name),
            Self::Index(_) => None,
        }
    }

    /// Returns the element index, if this is an index segment.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Property(_) => None,
            Self::Index(index) => Some(*index),
        }
    }
}

// ============================================================================
// FIELD PATH
// ============================================================================

/// Ordered sequence of property and index segments, outermost first.
///
/// Most paths are shallow, so segments live inline for up to four levels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: SmallVec<[PathSegment; 4]>,
}

impl FieldPath {
    /// The empty path, pointing at the value being verified itself.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds a path from segments given outermost first.
    pub fn from_segments(segments: impl IntoIterator<Item = PathSegment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Prepends a property segment.
    ///
    /// Empty names are ignored: relationships registered without an alias
    /// contribute no structural nesting.
    pub fn prepend_property(&mut self, name: impl Into<Cow<'static, str>>) {
        let name = name.into();
        if !name.is_empty() {
            self.segments.insert(0, PathSegment::Property(name));
        }
    }

    /// Prepends an element index segment.
    pub fn prepend_index(&mut self, index: usize) {
        self.segments.insert(0, PathSegment::Index(index));
    }

    /// Returns the segments, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true for the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns true if `prefix` matches the leading segments of this path.
    pub fn starts_with(&self, prefix: &FieldPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }
}

impl fmt::Display for FieldPath {
    /// Renders the accessor form used in user-facing responses,
    /// e.g. `items[2].name` or `[1]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Property(name) if i == 0 => f.write_str(name)?,
                PathSegment::Property(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
