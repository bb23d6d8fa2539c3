//! The tree contract that path resolution and typed access are written against.
//!
//! A tree node is one of object, array, null or scalar (bool, number,
//! string). [`Tree`] is implemented for [`serde_json::Value`]; any other
//! dynamically-typed document can plug in by implementing it.

use std::fmt;

use serde_json::{Map, Value};

use crate::JpathError;

/// The kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "bool",
            NodeKind::Number => "number",
            NodeKind::String => "string",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// A numeric node value, in whichever representation the tree stores it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Non-negative integer.
    PosInt(u64),
    /// Negative integer.
    NegInt(i64),
    /// Floating point.
    Float(f64),
}

impl Number {
    pub fn to_i32(self) -> i32 {
        match self {
            Number::PosInt(n) => n as i32,
            Number::NegInt(n) => n as i32,
            Number::Float(n) => n as i32,
        }
    }

    pub fn to_u32(self) -> u32 {
        match self {
            Number::PosInt(n) => n as u32,
            Number::NegInt(n) => n as u32,
            Number::Float(n) => n as u32,
        }
    }

    pub fn to_i64(self) -> i64 {
        match self {
            Number::PosInt(n) => n as i64,
            Number::NegInt(n) => n,
            Number::Float(n) => n as i64,
        }
    }

    pub fn to_u64(self) -> u64 {
        match self {
            Number::PosInt(n) => n,
            Number::NegInt(n) => n as u64,
            Number::Float(n) => n as u64,
        }
    }

    pub fn to_f32(self) -> f32 {
        match self {
            Number::PosInt(n) => n as f32,
            Number::NegInt(n) => n as f32,
            Number::Float(n) => n as f32,
        }
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Number::PosInt(n) => n as f64,
            Number::NegInt(n) => n as f64,
            Number::Float(n) => n,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        if n < 0 {
            Number::NegInt(n)
        } else {
            Number::PosInt(n as u64)
        }
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::PosInt(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}

/// Structural queries and mutations needed to walk and edit a tree.
///
/// Mutators that change a node's kind (`set_null`, `set_object`,
/// `set_array` and the scalar setters) discard whatever the node held.
pub trait Tree: Clone {
    fn kind(&self) -> NodeKind;

    fn is_null(&self) -> bool {
        self.kind() == NodeKind::Null
    }

    fn is_bool(&self) -> bool {
        self.kind() == NodeKind::Bool
    }

    fn is_number(&self) -> bool {
        self.kind() == NodeKind::Number
    }

    fn is_string(&self) -> bool {
        self.kind() == NodeKind::String
    }

    fn is_array(&self) -> bool {
        self.kind() == NodeKind::Array
    }

    fn is_object(&self) -> bool {
        self.kind() == NodeKind::Object
    }

    /// Look up an object member by exact key. `None` if absent or not an object.
    fn member(&self, name: &str) -> Option<&Self>;

    fn member_mut(&mut self, name: &str) -> Option<&mut Self>;

    /// Return the member named `name`, adding it with a null value first if
    /// absent. The key is copied into the tree.
    ///
    /// The node must already be an object.
    fn member_entry(&mut self, name: &str) -> Option<&mut Self>;

    /// Element at `index` within the array's logical length.
    fn element(&self, index: usize) -> Option<&Self>;

    fn element_mut(&mut self, index: usize) -> Option<&mut Self>;

    /// Logical length of an array node, `0` for anything else.
    fn array_len(&self) -> usize;

    /// Append a null element. Does nothing unless the node is an array.
    fn push_null(&mut self);

    /// Append `value`. Does nothing unless the node is an array.
    fn push(&mut self, value: Self);

    fn set_null(&mut self);

    /// Reset to an empty object.
    fn set_object(&mut self);

    /// Reset to an empty array.
    fn set_array(&mut self);

    fn as_bool(&self) -> Option<bool>;

    fn as_number(&self) -> Option<Number>;

    fn as_str(&self) -> Option<&str>;

    fn set_bool(&mut self, value: bool);

    /// Store a number. Fails for values the tree cannot represent, in which
    /// case the node is left as it was.
    fn set_number(&mut self, value: Number) -> Result<(), JpathError>;

    /// Store a string, copying `value` into the tree.
    fn set_string(&mut self, value: &str);

    /// Deep-copy `other` into this node.
    fn copy_from(&mut self, other: &Self) {
        *self = other.clone();
    }
}

impl Tree for Value {
    fn kind(&self) -> NodeKind {
        match self {
            Value::Null => NodeKind::Null,
            Value::Bool(_) => NodeKind::Bool,
            Value::Number(_) => NodeKind::Number,
            Value::String(_) => NodeKind::String,
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Object,
        }
    }

    fn member(&self, name: &str) -> Option<&Self> {
        self.as_object()?.get(name)
    }

    fn member_mut(&mut self, name: &str) -> Option<&mut Self> {
        self.as_object_mut()?.get_mut(name)
    }

    fn member_entry(&mut self, name: &str) -> Option<&mut Self> {
        let map = self.as_object_mut()?;
        Some(map.entry(name).or_insert(Value::Null))
    }

    fn element(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut Self> {
        self.as_array_mut()?.get_mut(index)
    }

    fn array_len(&self) -> usize {
        self.as_array().map_or(0, Vec::len)
    }

    fn push_null(&mut self) {
        self.push(Value::Null);
    }

    fn push(&mut self, value: Self) {
        if let Value::Array(arr) = self {
            arr.push(value);
        }
    }

    fn set_null(&mut self) {
        *self = Value::Null;
    }

    fn set_object(&mut self) {
        *self = Value::Object(Map::new());
    }

    fn set_array(&mut self) {
        *self = Value::Array(Vec::new());
    }

    fn as_bool(&self) -> Option<bool> {
        Value::as_bool(self)
    }

    fn as_number(&self) -> Option<Number> {
        let n = match self {
            Value::Number(n) => n,
            _ => return None,
        };
        if let Some(u) = n.as_u64() {
            Some(Number::PosInt(u))
        } else if let Some(i) = n.as_i64() {
            Some(Number::NegInt(i))
        } else {
            n.as_f64().map(Number::Float)
        }
    }

    fn as_str(&self) -> Option<&str> {
        Value::as_str(self)
    }

    fn set_bool(&mut self, value: bool) {
        *self = Value::Bool(value);
    }

    fn set_number(&mut self, value: Number) -> Result<(), JpathError> {
        let n = match value {
            Number::PosInt(u) => serde_json::Number::from(u),
            Number::NegInt(i) => serde_json::Number::from(i),
            Number::Float(f) => {
                serde_json::Number::from_f64(f).ok_or(JpathError::UnrepresentableNumber)?
            }
        };
        *self = Value::Number(n);
        Ok(())
    }

    fn set_string(&mut self, value: &str) {
        *self = Value::String(value.to_owned());
    }
}
