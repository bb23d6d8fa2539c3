//! Path resolution: walk a sequence of segments from a root node.
//!
//! Read mode never touches the tree. Write mode creates whatever is missing
//! along the way and coerces nodes of the wrong kind, discarding their
//! content. Structure created by a write stays in place even when the
//! caller's later step fails.

use crate::tree::Tree;
use crate::types::PathSegment;
use crate::util::format_path;
use crate::validate::{array_index, validate_path};
use crate::JpathError;

fn not_found(path: &[PathSegment<'_>], position: usize) -> JpathError {
    log::trace!(
        "segment {} at position {position} of {} does not resolve",
        path[position],
        format_path(path)
    );
    JpathError::NotFound { position }
}

/// Resolve `path` against `root` without modifying anything.
///
/// A name segment resolves only against an object that has that member; an
/// index segment resolves only against an array longer than the index. The
/// empty path resolves to `root`.
///
/// # Errors
///
/// - `JpathError::InvalidSegment` - the path holds an empty name or negative index
/// - `JpathError::NotFound` - some segment does not resolve
///
/// # Example
///
/// ```
/// use jpath::{path, read};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": [10, 20]}});
/// assert_eq!(read(&doc, &path!["a", "b", 1]), Ok(&json!(20)));
/// assert!(read(&doc, &path!["a", "c"]).is_err());
/// ```
pub fn read<'a, V: Tree>(root: &'a V, path: &[PathSegment<'_>]) -> Result<&'a V, JpathError> {
    validate_path(path)?;

    let mut current = root;
    for (position, segment) in path.iter().enumerate() {
        let next = match segment {
            PathSegment::Name(name) => current.member(name),
            PathSegment::Index(index) => array_index(*index).and_then(|i| current.element(i)),
        };
        current = next.ok_or_else(|| not_found(path, position))?;
    }
    Ok(current)
}

/// Like [`read`], but hands out a mutable reference.
///
/// Nothing is created: a missing segment fails exactly as in [`read`].
pub fn read_mut<'a, V: Tree>(
    root: &'a mut V,
    path: &[PathSegment<'_>],
) -> Result<&'a mut V, JpathError> {
    validate_path(path)?;

    let mut current = root;
    for (position, segment) in path.iter().enumerate() {
        let next = match segment {
            PathSegment::Name(name) => current.member_mut(name),
            PathSegment::Index(index) => match array_index(*index) {
                Some(i) => current.element_mut(i),
                None => None,
            },
        };
        current = next.ok_or_else(|| not_found(path, position))?;
    }
    Ok(current)
}

/// Resolve `path` against `root`, creating missing structure.
///
/// For a name segment the current node is reset to an empty object unless
/// it already is one, and a null member is added when the name is absent.
/// For an index segment the current node is reset to an empty array unless
/// it already is one, and nulls are appended until the index exists.
///
/// # Errors
///
/// - `JpathError::InvalidSegment` - the path holds an empty name or negative
///   index; the path is checked before anything is modified
///
/// # Example
///
/// ```
/// use jpath::{path, write};
/// use serde_json::json;
///
/// let mut doc = json!(null);
/// *write(&mut doc, &path!["a", 1]).unwrap() = json!(true);
/// assert_eq!(doc, json!({"a": [null, true]}));
/// ```
pub fn write<'a, V: Tree>(
    root: &'a mut V,
    path: &[PathSegment<'_>],
) -> Result<&'a mut V, JpathError> {
    validate_path(path)?;

    let mut current = root;
    for (position, segment) in path.iter().enumerate() {
        let next = match segment {
            PathSegment::Name(name) => {
                if !current.is_object() {
                    if !current.is_null() {
                        log::debug!(
                            "replacing {} with an object at position {position} of {}",
                            current.kind(),
                            format_path(path)
                        );
                    }
                    current.set_object();
                }
                current.member_entry(name)
            }
            PathSegment::Index(index) => {
                let index = array_index(*index).ok_or(JpathError::InvalidSegment { position })?;
                if !current.is_array() {
                    if !current.is_null() {
                        log::debug!(
                            "replacing {} with an array at position {position} of {}",
                            current.kind(),
                            format_path(path)
                        );
                    }
                    current.set_array();
                }
                while current.array_len() <= index {
                    current.push_null();
                }
                current.element_mut(index)
            }
        };
        current = next.ok_or_else(|| not_found(path, position))?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::{json, Value};

    #[test]
    fn test_read_empty_path_is_root() {
        let doc = json!(123);
        assert_eq!(read(&doc, &path![]), Ok(&json!(123)));
    }

    #[test]
    fn test_read_object_member() {
        let doc = json!({"foo": "bar"});
        assert_eq!(read(&doc, &path!["foo"]), Ok(&json!("bar")));
        assert_eq!(
            read(&doc, &path!["missing"]),
            Err(JpathError::NotFound { position: 0 })
        );
    }

    #[test]
    fn test_read_name_against_non_object() {
        assert!(read(&json!([1, 2]), &path!["0"]).is_err());
        assert!(read(&json!("foo"), &path!["foo"]).is_err());
        assert!(read(&json!(null), &path!["foo"]).is_err());
    }

    #[test]
    fn test_read_index_against_non_array() {
        assert!(read(&json!({"0": 1}), &path![0]).is_err());
        assert!(read(&json!(5), &path![0]).is_err());
    }

    #[test]
    fn test_read_array_bounds() {
        let doc = json!([1, 2, 3]);
        assert_eq!(read(&doc, &path![2]), Ok(&json!(3)));
        assert_eq!(read(&doc, &path![3]), Err(JpathError::NotFound { position: 0 }));
    }

    #[test]
    fn test_read_bounds_by_length_not_capacity() {
        let mut arr = Vec::with_capacity(16);
        arr.push(json!(1));
        let doc = Value::Array(arr);
        assert!(read(&doc, &path![1]).is_err());
    }

    #[test]
    fn test_read_nested_failure_position() {
        let doc = json!({"a": {"b": [1]}});
        assert_eq!(
            read(&doc, &path!["a", "b", 4]),
            Err(JpathError::NotFound { position: 2 })
        );
        assert_eq!(
            read(&doc, &path!["a", "x", 0]),
            Err(JpathError::NotFound { position: 1 })
        );
    }

    #[test]
    fn test_read_explicit_null() {
        let doc = json!({"foo": null});
        assert_eq!(read(&doc, &path!["foo"]), Ok(&Value::Null));
    }

    #[test]
    fn test_read_negative_index() {
        let doc = json!([1, 2, 3]);
        assert_eq!(
            read(&doc, &path![-1]),
            Err(JpathError::InvalidSegment { position: 0 })
        );
    }

    #[test]
    fn test_read_mut_edits_in_place() {
        let mut doc = json!({"a": [1, 2]});
        *read_mut(&mut doc, &path!["a", 0]).unwrap() = json!("x");
        assert_eq!(doc, json!({"a": ["x", 2]}));
        assert!(read_mut(&mut doc, &path!["a", 5]).is_err());
        assert!(read_mut(&mut doc, &path!["b"]).is_err());
        assert_eq!(doc, json!({"a": ["x", 2]}));
    }

    #[test]
    fn test_write_existing_member() {
        let mut doc = json!({"a": 1, "b": 2});
        assert_eq!(write(&mut doc, &path!["b"]), Ok(&mut json!(2)));
        assert_eq!(doc, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_write_adds_null_member() {
        let mut doc = json!({"a": 1});
        assert_eq!(write(&mut doc, &path!["b"]), Ok(&mut Value::Null));
        assert_eq!(doc, json!({"a": 1, "b": null}));
    }

    #[test]
    fn test_write_pads_array_with_nulls() {
        let mut doc = json!([1]);
        *write(&mut doc, &path![3]).unwrap() = json!(4);
        assert_eq!(doc, json!([1, null, null, 4]));
    }

    #[test]
    fn test_write_existing_element() {
        let mut doc = json!([1, 2, 3]);
        *write(&mut doc, &path![1]).unwrap() = json!(20);
        assert_eq!(doc, json!([1, 20, 3]));
    }

    #[test]
    fn test_write_coerces_scalar_to_object() {
        let mut doc = json!(5);
        write(&mut doc, &path!["x"]).unwrap();
        assert_eq!(doc, json!({"x": null}));
    }

    #[test]
    fn test_write_coerces_object_to_array() {
        let mut doc = json!({"a": {"keep": true}});
        write(&mut doc, &path!["a", 0]).unwrap();
        assert_eq!(doc, json!({"a": [null]}));
    }

    #[test]
    fn test_write_coerces_array_to_object() {
        let mut doc = json!([1, 2]);
        write(&mut doc, &path!["k"]).unwrap();
        assert_eq!(doc, json!({"k": null}));
    }

    #[test]
    fn test_write_nested_vivification() {
        let mut doc = Value::Null;
        *write(&mut doc, &path!["a", "b", 2]).unwrap() = json!("v");
        assert_eq!(doc, json!({"a": {"b": [null, null, "v"]}}));
    }

    #[test]
    fn test_write_invalid_segment_leaves_tree_alone() {
        let mut doc = json!(5);
        assert_eq!(
            write(&mut doc, &path!["a", -1]),
            Err(JpathError::InvalidSegment { position: 1 })
        );
        assert_eq!(doc, json!(5));

        assert!(write(&mut doc, &path![""]).is_err());
        assert_eq!(doc, json!(5));
    }

    #[test]
    fn test_write_empty_path_is_root() {
        let mut doc = json!({"a": 1});
        *write(&mut doc, &path![]).unwrap() = json!(2);
        assert_eq!(doc, json!(2));
    }
}
