//! Path-based typed access into JSON trees.
//!
//! A path is a sequence of [`PathSegment`]s, each either a member name or an
//! array index. Paths can be:
//!
//! - read: [`read`] resolves to a node without touching the tree,
//! - written: [`write`] resolves to a node, creating missing objects, arrays
//!   and null filler elements on the way,
//! - read or written as typed values: [`get`] / [`set`] for scalars,
//!   [`get_vec`] / [`set_seq`] for arrays.
//!
//! Everything is written against the [`Tree`] trait, implemented here for
//! [`serde_json::Value`].
//!
//! # Example
//!
//! ```
//! use jpath::{get, get_vec, path, set, set_seq};
//! use serde_json::json;
//!
//! let mut doc = json!(null);
//! set(&mut doc, "Ada", &path!["users", 0, "name"]).unwrap();
//! set_seq(&mut doc, [90, 85], &path!["users", 0, "scores"]).unwrap();
//! assert_eq!(
//!     doc,
//!     json!({"users": [{"name": "Ada", "scores": [90, 85]}]})
//! );
//!
//! let name: &str = get(&doc, &path!["users", 0, "name"]).unwrap();
//! assert_eq!(name, "Ada");
//!
//! let scores: Vec<u32> = get_vec(&doc, &path!["users", 0, "scores"]).unwrap();
//! assert_eq!(scores, vec![90, 85]);
//!
//! // A string is not a number, and nothing is created on reads.
//! assert!(get::<_, i32>(&doc, &path!["users", 0, "name"]).is_err());
//! assert!(get::<_, i32>(&doc, &path!["users", 1]).is_err());
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Path, PathSegment};

pub mod validate;
pub use validate::{is_valid_segment, validate_path};

pub mod tree;
pub use tree::{NodeKind, Number, Tree};

mod util;
pub use util::{escape_component, format_path};

pub mod resolve;
pub use resolve::{read, read_mut, write};

pub mod value;
pub use value::{extract, get_value, set_value, FromScalar, Scalar, ScalarKind, ToScalar};

mod access;
pub use access::{get, get_into, set, set_tree};

mod collection;
pub use collection::{get_collection, get_vec, get_vec_into, set_seq};

mod document;
pub use document::Document;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JpathError {
    /// A segment did not resolve against the tree.
    #[error("NOT_FOUND: segment {position} does not resolve")]
    NotFound { position: usize },
    /// An empty name or negative index appeared in the path.
    #[error("INVALID_SEGMENT: segment {position} is an empty name or negative index")]
    InvalidSegment { position: usize },
    /// The node holds a different kind of value than requested.
    #[error("TYPE_MISMATCH: expected {expected}, found {found}")]
    TypeMismatch {
        expected: ScalarKind,
        found: NodeKind,
    },
    /// A sequence was requested from a node that is not an array.
    #[error("NOT_AN_ARRAY: found {found}")]
    NotAnArray { found: NodeKind },
    /// The tree cannot store the number (NaN or infinity).
    #[error("UNREPRESENTABLE_NUMBER")]
    UnrepresentableNumber,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_error_display() {
        assert_eq!(
            JpathError::NotFound { position: 2 }.to_string(),
            "NOT_FOUND: segment 2 does not resolve"
        );
        assert_eq!(
            JpathError::TypeMismatch {
                expected: ScalarKind::I32,
                found: NodeKind::String
            }
            .to_string(),
            "TYPE_MISMATCH: expected i32, found string"
        );
        assert_eq!(
            JpathError::NotAnArray {
                found: NodeKind::Object
            }
            .to_string(),
            "NOT_AN_ARRAY: found object"
        );
    }

    #[test]
    fn test_write_then_read_mixed_path() {
        let mut doc = Value::Null;
        set(&mut doc, 42u64, &path!["a", 0, "b"]).unwrap();
        assert_eq!(doc, json!({"a": [{"b": 42}]}));
        assert_eq!(get::<_, u64>(&doc, &path!["a", 0, "b"]), Ok(42));
        assert_eq!(read(&doc, &path!["a", 0]), Ok(&json!({"b": 42})));
    }

    #[test]
    fn test_overwrite_changes_container_kind() {
        let mut doc = json!({"a": {"x": 1}});
        set(&mut doc, true, &path!["a", 1]).unwrap();
        assert_eq!(doc, json!({"a": [null, true]}));
        set(&mut doc, "s", &path!["a", "y"]).unwrap();
        assert_eq!(doc, json!({"a": {"y": "s"}}));
    }

    #[test]
    fn test_read_never_creates() {
        let doc = json!({});
        assert!(get::<_, bool>(&doc, &path!["a", "b"]).is_err());
        assert_eq!(doc, json!({}));
    }
}
