//! Type definitions for paths.

use std::borrow::Cow;
use std::fmt;

/// A step in a path.
///
/// Either a member name (descends into an object) or an array index
/// (descends into an array). The index is signed so that negative values
/// coming from callers can be represented and rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment<'a> {
    /// Object member name.
    Name(Cow<'a, str>),
    /// Array element index.
    Index(i64),
}

/// A path, root to leaf.
pub type Path<'a> = Vec<PathSegment<'a>>;

impl<'a> PathSegment<'a> {
    /// Create a name segment.
    pub fn name(name: impl Into<Cow<'a, str>>) -> Self {
        PathSegment::Name(name.into())
    }

    /// Create an index segment.
    pub fn index(index: i64) -> Self {
        PathSegment::Index(index)
    }

    /// The member name, if this is a name segment.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            PathSegment::Name(name) => Some(name),
            PathSegment::Index(_) => None,
        }
    }

    /// The index, if this is an index segment.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            PathSegment::Index(index) => Some(*index),
            PathSegment::Name(_) => None,
        }
    }

    /// Detach the segment from any borrowed key.
    pub fn into_owned(self) -> PathSegment<'static> {
        match self {
            PathSegment::Name(name) => PathSegment::Name(Cow::Owned(name.into_owned())),
            PathSegment::Index(index) => PathSegment::Index(index),
        }
    }
}

impl fmt::Display for PathSegment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Name(name) => f.write_str(name),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl<'a> From<&'a str> for PathSegment<'a> {
    fn from(name: &'a str) -> Self {
        PathSegment::Name(Cow::Borrowed(name))
    }
}

impl<'a> From<&'a String> for PathSegment<'a> {
    fn from(name: &'a String) -> Self {
        PathSegment::Name(Cow::Borrowed(name.as_str()))
    }
}

impl From<String> for PathSegment<'static> {
    fn from(name: String) -> Self {
        PathSegment::Name(Cow::Owned(name))
    }
}

impl From<i32> for PathSegment<'_> {
    fn from(index: i32) -> Self {
        PathSegment::Index(i64::from(index))
    }
}

impl From<i64> for PathSegment<'_> {
    fn from(index: i64) -> Self {
        PathSegment::Index(index)
    }
}

impl From<u32> for PathSegment<'_> {
    fn from(index: u32) -> Self {
        PathSegment::Index(i64::from(index))
    }
}

impl From<usize> for PathSegment<'_> {
    fn from(index: usize) -> Self {
        // Anything past i64::MAX cannot address a real array anyway.
        PathSegment::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

/// Build a path from mixed name and index literals.
///
/// # Example
///
/// ```
/// use jpath::{path, PathSegment};
///
/// let p = path!["users", 0, "name"];
/// assert_eq!(p[0], PathSegment::name("users"));
/// assert_eq!(p[1], PathSegment::Index(0));
/// ```
#[macro_export]
macro_rules! path {
    () => {
        [] as [$crate::PathSegment<'static>; 0]
    };
    ($($segment:expr),+ $(,)?) => {
        [$($crate::PathSegment::from($segment)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_from_literals() {
        assert_eq!(PathSegment::from("foo"), PathSegment::name("foo"));
        assert_eq!(PathSegment::from(3), PathSegment::Index(3));
        assert_eq!(PathSegment::from(-1i64), PathSegment::Index(-1));
        assert_eq!(PathSegment::from(7usize), PathSegment::Index(7));
        assert_eq!(PathSegment::from(usize::MAX), PathSegment::Index(i64::MAX));
    }

    #[test]
    fn test_segment_accessors() {
        let name = PathSegment::name("a");
        assert_eq!(name.as_name(), Some("a"));
        assert_eq!(name.as_index(), None);

        let index = PathSegment::index(2);
        assert_eq!(index.as_index(), Some(2));
        assert_eq!(index.as_name(), None);
    }

    #[test]
    fn test_segment_display() {
        assert_eq!(PathSegment::name("foo").to_string(), "foo");
        assert_eq!(PathSegment::index(4).to_string(), "[4]");
    }

    #[test]
    fn test_path_macro() {
        let key = String::from("b");
        let p = path!["a", &key, 2];
        assert_eq!(p.len(), 3);
        assert_eq!(p[1], PathSegment::name("b"));
        assert_eq!(p[2], PathSegment::Index(2));

        let empty = path![];
        assert!(empty.is_empty());
    }

    #[test]
    fn test_into_owned() {
        let owned = {
            let key = String::from("temp");
            PathSegment::from(&key).into_owned()
        };
        assert_eq!(owned, PathSegment::name("temp"));
    }
}
