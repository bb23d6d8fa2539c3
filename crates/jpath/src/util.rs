use crate::types::PathSegment;

/// Escapes a name for display inside a formatted path.
///
/// `~` becomes `~0` and `/` becomes `~1`, so names never read as separators.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Format a path as a pointer-like string for diagnostics.
///
/// Names are escaped, indices are written as digits; the root path formats
/// as the empty string.
///
/// # Example
///
/// ```
/// use jpath::{format_path, path};
///
/// assert_eq!(format_path(&path!["a/b", 2]), "/a~1b/2");
/// assert_eq!(format_path(&path![]), "");
/// ```
pub fn format_path(path: &[PathSegment<'_>]) -> String {
    let mut out = String::new();
    for segment in path {
        out.push('/');
        match segment {
            PathSegment::Name(name) => out.push_str(&escape_component(name)),
            PathSegment::Index(index) => out.push_str(&index.to_string()),
        }
    }
    out
}
