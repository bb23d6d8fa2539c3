//! Typed get/set at a path.

use crate::resolve::{read, write};
use crate::tree::Tree;
use crate::types::PathSegment;
use crate::util::format_path;
use crate::value::{extract, set_value, FromScalar, ToScalar};
use crate::JpathError;

/// Read the value at `path` as `T`.
///
/// # Errors
///
/// - `JpathError::InvalidSegment` - the path holds an empty name or negative index
/// - `JpathError::NotFound` - the path does not resolve
/// - `JpathError::TypeMismatch` - the node there is not a `T`
///
/// # Example
///
/// ```
/// use jpath::{get, path};
/// use serde_json::json;
///
/// let doc = json!({"server": {"ports": [80, 443]}});
/// let port: u32 = get(&doc, &path!["server", "ports", 1]).unwrap();
/// assert_eq!(port, 443);
///
/// let name: Result<&str, _> = get(&doc, &path!["server", "name"]);
/// assert!(name.is_err());
/// ```
pub fn get<'a, V, T>(root: &'a V, path: &[PathSegment<'_>]) -> Result<T, JpathError>
where
    V: Tree,
    T: FromScalar<'a>,
{
    let node = read(root, path)?;
    extract(node).inspect_err(|err| {
        log::trace!("cannot read {}: {err}", format_path(path));
    })
}

/// Read the value at `path` into `out`.
///
/// `out` is assigned only on success; on any error it keeps the value it
/// had before the call.
pub fn get_into<'a, V, T>(
    root: &'a V,
    out: &mut T,
    path: &[PathSegment<'_>],
) -> Result<(), JpathError>
where
    V: Tree,
    T: FromScalar<'a>,
{
    *out = get(root, path)?;
    Ok(())
}

/// Write `value` at `path`, creating missing structure.
///
/// The node at `path` is overwritten whatever it held. Containers created
/// on the way stay in place even if storing the value itself fails.
///
/// # Errors
///
/// - `JpathError::InvalidSegment` - the path holds an empty name or negative index
/// - `JpathError::UnrepresentableNumber` - a non-finite float cannot be stored
///
/// # Example
///
/// ```
/// use jpath::{path, set};
/// use serde_json::json;
///
/// let mut doc = json!({});
/// set(&mut doc, "localhost", &path!["server", "host"]).unwrap();
/// set(&mut doc, 8080u32, &path!["server", "ports", 0]).unwrap();
/// assert_eq!(doc, json!({"server": {"host": "localhost", "ports": [8080]}}));
/// ```
pub fn set<V, T>(root: &mut V, value: T, path: &[PathSegment<'_>]) -> Result<(), JpathError>
where
    V: Tree,
    T: ToScalar,
{
    let node = write(root, path)?;
    set_value(node, &value.to_scalar()).inspect_err(|err| {
        log::trace!("cannot write {}: {err}", format_path(path));
    })
}

/// Deep-copy `value` to `path`, creating missing structure.
///
/// # Errors
///
/// Returns `JpathError::InvalidSegment` if the path holds an empty name or
/// negative index.
pub fn set_tree<V: Tree>(
    root: &mut V,
    value: &V,
    path: &[PathSegment<'_>],
) -> Result<(), JpathError> {
    write(root, path)?.copy_from(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use crate::tree::NodeKind;
    use crate::value::ScalarKind;
    use serde_json::{json, Value};

    #[test]
    fn test_get_scalars() {
        let doc = json!({"b": true, "i": -4, "f": 0.5, "s": "str"});
        assert_eq!(get::<_, bool>(&doc, &path!["b"]), Ok(true));
        assert_eq!(get::<_, i64>(&doc, &path!["i"]), Ok(-4));
        assert_eq!(get::<_, f64>(&doc, &path!["f"]), Ok(0.5));
        assert_eq!(get::<_, &str>(&doc, &path!["s"]), Ok("str"));
        assert_eq!(get::<_, String>(&doc, &path!["s"]), Ok("str".to_string()));
    }

    #[test]
    fn test_get_type_mismatch() {
        let doc = json!({"s": "str"});
        assert_eq!(
            get::<_, bool>(&doc, &path!["s"]),
            Err(JpathError::TypeMismatch {
                expected: ScalarKind::Bool,
                found: NodeKind::String
            })
        );
    }

    #[test]
    fn test_get_into_keeps_output_on_failure() {
        let doc = json!({"n": 5, "s": "x"});
        let mut out = 99i32;
        assert!(get_into(&doc, &mut out, &path!["missing"]).is_err());
        assert_eq!(out, 99);
        assert!(get_into(&doc, &mut out, &path!["s"]).is_err());
        assert_eq!(out, 99);
        assert!(get_into(&doc, &mut out, &path![-1]).is_err());
        assert_eq!(out, 99);
        get_into(&doc, &mut out, &path!["n"]).unwrap();
        assert_eq!(out, 5);
    }

    #[test]
    fn test_set_overwrites_without_type_check() {
        let mut doc = json!({"k": [1, 2, 3]});
        set(&mut doc, "now a string", &path!["k"]).unwrap();
        assert_eq!(doc, json!({"k": "now a string"}));
    }

    #[test]
    fn test_set_copies_strings() {
        let mut doc = Value::Null;
        {
            let source = String::from("owned by caller");
            set(&mut doc, &source, &path!["k"]).unwrap();
        }
        assert_eq!(doc, json!({"k": "owned by caller"}));
    }

    #[test]
    fn test_set_non_finite_keeps_created_structure() {
        let mut doc = Value::Null;
        assert_eq!(
            set(&mut doc, f32::NAN, &path!["a", 1]),
            Err(JpathError::UnrepresentableNumber)
        );
        assert_eq!(doc, json!({"a": [null, null]}));
    }

    #[test]
    fn test_set_tree() {
        let mut doc = json!({"a": 1});
        let sub = json!({"nested": [true, null]});
        set_tree(&mut doc, &sub, &path!["b", "c"]).unwrap();
        assert_eq!(doc, json!({"a": 1, "b": {"c": {"nested": [true, null]}}}));
        assert!(set_tree(&mut doc, &sub, &path![""]).is_err());
    }
}
