//! Sequence access: arrays read into, and written from, Rust collections.

use crate::resolve::{read, write};
use crate::tree::Tree;
use crate::types::PathSegment;
use crate::util::format_path;
use crate::value::{extract, set_value, FromScalar, ToScalar};
use crate::JpathError;

/// Read the array at `path` into any collection of `T`.
///
/// Every element must convert to `T`; one bad element fails the whole call.
///
/// # Errors
///
/// - `JpathError::InvalidSegment` / `JpathError::NotFound` - as for [`read`]
/// - `JpathError::NotAnArray` - the node at `path` is not an array
/// - `JpathError::TypeMismatch` - some element is not a `T`
///
/// # Example
///
/// ```
/// use std::collections::VecDeque;
/// use jpath::{get_collection, path};
/// use serde_json::json;
///
/// let doc = json!({"xs": [1, 2, 3]});
/// let xs: VecDeque<i32> = get_collection(&doc, &path!["xs"]).unwrap();
/// assert_eq!(xs, VecDeque::from([1, 2, 3]));
/// ```
pub fn get_collection<'a, V, T, C>(root: &'a V, path: &[PathSegment<'_>]) -> Result<C, JpathError>
where
    V: Tree,
    T: FromScalar<'a>,
    C: FromIterator<T>,
{
    let node = read(root, path)?;
    if !node.is_array() {
        log::trace!("{} is a {}, not an array", format_path(path), node.kind());
        return Err(JpathError::NotAnArray { found: node.kind() });
    }

    (0..node.array_len())
        .filter_map(|index| node.element(index).map(|element| (index, element)))
        .map(|(index, element)| {
            extract(element).inspect_err(|err| {
                log::trace!("element {index} of {}: {err}", format_path(path));
            })
        })
        .collect()
}

/// Read the array at `path` into a `Vec`.
pub fn get_vec<'a, V, T>(root: &'a V, path: &[PathSegment<'_>]) -> Result<Vec<T>, JpathError>
where
    V: Tree,
    T: FromScalar<'a>,
{
    get_collection(root, path)
}

/// Read the array at `path` into `out`, all or nothing.
///
/// `out` is replaced only when every element converted; otherwise it is
/// left exactly as it was.
pub fn get_vec_into<'a, V, T>(
    root: &'a V,
    out: &mut Vec<T>,
    path: &[PathSegment<'_>],
) -> Result<(), JpathError>
where
    V: Tree,
    T: FromScalar<'a>,
{
    let mut result = get_vec(root, path)?;
    std::mem::swap(out, &mut result);
    Ok(())
}

/// Write `items` as a fresh array at `path`, creating missing structure.
///
/// The array is built first and then replaces the node at `path`, so a
/// failing element leaves that node untouched.
///
/// # Errors
///
/// - `JpathError::InvalidSegment` - the path holds an empty name or negative index
/// - `JpathError::UnrepresentableNumber` - some element is a non-finite float
///
/// # Example
///
/// ```
/// use jpath::{path, set_seq};
/// use serde_json::json;
///
/// let mut doc = json!(null);
/// set_seq(&mut doc, ["a", "b"], &path!["tags"]).unwrap();
/// assert_eq!(doc, json!({"tags": ["a", "b"]}));
/// ```
pub fn set_seq<V, I>(root: &mut V, items: I, path: &[PathSegment<'_>]) -> Result<(), JpathError>
where
    V: Tree + Default,
    I: IntoIterator,
    I::Item: ToScalar,
{
    let node = write(root, path)?;

    let mut array = V::default();
    array.set_array();
    for item in items {
        let mut element = V::default();
        set_value(&mut element, &item.to_scalar())?;
        array.push(element);
    }
    *node = array;
    Ok(())
}
