//! Typed value bridge between tree nodes and Rust scalars.
//!
//! Reads are type-checked: a bool needs a bool node, a string needs a
//! string node, and every numeric kind accepts any number node, converting
//! with `as` semantics. Writes overwrite the node regardless of what it
//! held before.

use std::borrow::Cow;
use std::fmt;

use crate::tree::{NodeKind, Number, Tree};
use crate::JpathError;

/// The scalar kinds a node can be read as or written from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    String,
}

impl ScalarKind {
    /// The node kind a value of this scalar kind is stored as.
    pub fn node_kind(self) -> NodeKind {
        match self {
            ScalarKind::Bool => NodeKind::Bool,
            ScalarKind::String => NodeKind::String,
            _ => NodeKind::Number,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::Bool => "bool",
            ScalarKind::I32 => "i32",
            ScalarKind::U32 => "u32",
            ScalarKind::I64 => "i64",
            ScalarKind::U64 => "u64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::String => "string",
        };
        f.write_str(name)
    }
}

/// A scalar value tagged with its kind.
///
/// Strings read from a tree borrow from it; strings about to be written
/// may borrow from the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(Cow<'a, str>),
}

impl Scalar<'_> {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::I32(_) => ScalarKind::I32,
            Scalar::U32(_) => ScalarKind::U32,
            Scalar::I64(_) => ScalarKind::I64,
            Scalar::U64(_) => ScalarKind::U64,
            Scalar::F32(_) => ScalarKind::F32,
            Scalar::F64(_) => ScalarKind::F64,
            Scalar::Str(_) => ScalarKind::String,
        }
    }
}

/// Read `node` as a scalar of the requested kind.
///
/// # Errors
///
/// Returns `JpathError::TypeMismatch` when the node's kind cannot be read as
/// `kind`. Numbers convert between widths freely; nothing else converts.
///
/// # Example
///
/// ```
/// use jpath::{get_value, Scalar, ScalarKind};
/// use serde_json::json;
///
/// assert_eq!(get_value(&json!(3.7), ScalarKind::U32), Ok(Scalar::U32(3)));
/// assert!(get_value(&json!("3"), ScalarKind::U32).is_err());
/// ```
pub fn get_value<V: Tree>(node: &V, kind: ScalarKind) -> Result<Scalar<'_>, JpathError> {
    let scalar = match kind {
        ScalarKind::Bool => node.as_bool().map(Scalar::Bool),
        ScalarKind::I32 => node.as_number().map(|n| Scalar::I32(n.to_i32())),
        ScalarKind::U32 => node.as_number().map(|n| Scalar::U32(n.to_u32())),
        ScalarKind::I64 => node.as_number().map(|n| Scalar::I64(n.to_i64())),
        ScalarKind::U64 => node.as_number().map(|n| Scalar::U64(n.to_u64())),
        ScalarKind::F32 => node.as_number().map(|n| Scalar::F32(n.to_f32())),
        ScalarKind::F64 => node.as_number().map(|n| Scalar::F64(n.to_f64())),
        ScalarKind::String => node.as_str().map(|s| Scalar::Str(Cow::Borrowed(s))),
    };
    scalar.ok_or(JpathError::TypeMismatch {
        expected: kind,
        found: node.kind(),
    })
}

/// Overwrite `node` with `value`. Strings are copied into the tree.
///
/// # Errors
///
/// Returns `JpathError::UnrepresentableNumber` for a float the tree cannot
/// store (NaN or infinite with `serde_json`); the node is left untouched.
pub fn set_value<V: Tree>(node: &mut V, value: &Scalar<'_>) -> Result<(), JpathError> {
    match value {
        Scalar::Bool(b) => node.set_bool(*b),
        Scalar::I32(n) => node.set_number(Number::from(i64::from(*n)))?,
        Scalar::U32(n) => node.set_number(Number::PosInt(u64::from(*n)))?,
        Scalar::I64(n) => node.set_number(Number::from(*n))?,
        Scalar::U64(n) => node.set_number(Number::PosInt(*n))?,
        Scalar::F32(n) => node.set_number(Number::Float(f64::from(*n)))?,
        Scalar::F64(n) => node.set_number(Number::Float(*n))?,
        Scalar::Str(s) => node.set_string(s),
    }
    Ok(())
}

/// A Rust type that can be read out of a tree node.
pub trait FromScalar<'a>: Sized {
    /// The kind requested from the node.
    const KIND: ScalarKind;

    fn from_scalar(scalar: Scalar<'a>) -> Option<Self>;
}

/// A Rust value that can be written into a tree node.
pub trait ToScalar {
    fn to_scalar(&self) -> Scalar<'_>;
}

/// Read `node` as `T`.
///
/// # Errors
///
/// Returns `JpathError::TypeMismatch` when the node does not hold a `T`.
pub fn extract<'a, V: Tree, T: FromScalar<'a>>(node: &'a V) -> Result<T, JpathError> {
    let mismatch = JpathError::TypeMismatch {
        expected: T::KIND,
        found: node.kind(),
    };
    T::from_scalar(get_value(node, T::KIND)?).ok_or(mismatch)
}

macro_rules! impl_copy_scalar {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl<'a> FromScalar<'a> for $ty {
                const KIND: ScalarKind = ScalarKind::$variant;

                fn from_scalar(scalar: Scalar<'a>) -> Option<Self> {
                    match scalar {
                        Scalar::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }

            impl ToScalar for $ty {
                fn to_scalar(&self) -> Scalar<'_> {
                    Scalar::$variant(*self)
                }
            }
        )+
    };
}

impl_copy_scalar! {
    bool => Bool,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl<'a> FromScalar<'a> for &'a str {
    const KIND: ScalarKind = ScalarKind::String;

    fn from_scalar(scalar: Scalar<'a>) -> Option<Self> {
        match scalar {
            Scalar::Str(Cow::Borrowed(s)) => Some(s),
            _ => None,
        }
    }
}

impl<'a> FromScalar<'a> for String {
    const KIND: ScalarKind = ScalarKind::String;

    fn from_scalar(scalar: Scalar<'a>) -> Option<Self> {
        match scalar {
            Scalar::Str(s) => Some(s.into_owned()),
            _ => None,
        }
    }
}

impl<'a> FromScalar<'a> for Cow<'a, str> {
    const KIND: ScalarKind = ScalarKind::String;

    fn from_scalar(scalar: Scalar<'a>) -> Option<Self> {
        match scalar {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl ToScalar for str {
    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::Str(Cow::Borrowed(self))
    }
}

impl ToScalar for String {
    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::Str(Cow::Borrowed(self.as_str()))
    }
}

impl ToScalar for Cow<'_, str> {
    fn to_scalar(&self) -> Scalar<'_> {
        Scalar::Str(Cow::Borrowed(&**self))
    }
}

impl ToScalar for Scalar<'_> {
    fn to_scalar(&self) -> Scalar<'_> {
        match self {
            Scalar::Str(s) => Scalar::Str(Cow::Borrowed(&**s)),
            other => other.clone(),
        }
    }
}

impl<T: ToScalar + ?Sized> ToScalar for &T {
    fn to_scalar(&self) -> Scalar<'_> {
        (**self).to_scalar()
    }
}
