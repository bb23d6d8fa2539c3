//! An owning document: a root tree plus the path API bound to it.

use serde_json::Value;

use crate::tree::Tree;
use crate::types::PathSegment;
use crate::value::{FromScalar, ToScalar};
use crate::{access, collection, resolve, JpathError};

/// Owns the root of a tree and resolves every path against it.
///
/// # Example
///
/// ```
/// use jpath::{path, Document};
///
/// let mut doc = Document::new();
/// doc.set(true, &path!["flags", "debug"]).unwrap();
/// doc.set_seq([1, 2], &path!["levels"]).unwrap();
///
/// let debug: bool = doc.get(&path!["flags", "debug"]).unwrap();
/// assert!(debug);
/// assert_eq!(doc.get_vec::<i32>(&path!["levels"]).unwrap(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document<V = Value> {
    root: V,
}

impl Document {
    /// Create a `serde_json` document whose root is null.
    pub fn new() -> Self {
        Self { root: Value::Null }
    }
}

impl<V: Tree> Document<V> {
    pub fn from_root(root: V) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &V {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut V {
        &mut self.root
    }

    pub fn into_root(self) -> V {
        self.root
    }

    /// See [`resolve::read`].
    pub fn read(&self, path: &[PathSegment<'_>]) -> Result<&V, JpathError> {
        resolve::read(&self.root, path)
    }

    /// See [`resolve::read_mut`].
    pub fn read_mut(&mut self, path: &[PathSegment<'_>]) -> Result<&mut V, JpathError> {
        resolve::read_mut(&mut self.root, path)
    }

    /// See [`resolve::write`].
    pub fn write(&mut self, path: &[PathSegment<'_>]) -> Result<&mut V, JpathError> {
        resolve::write(&mut self.root, path)
    }

    pub fn get<'a, T: FromScalar<'a>>(&'a self, path: &[PathSegment<'_>]) -> Result<T, JpathError> {
        access::get(&self.root, path)
    }

    pub fn get_into<'a, T: FromScalar<'a>>(
        &'a self,
        out: &mut T,
        path: &[PathSegment<'_>],
    ) -> Result<(), JpathError> {
        access::get_into(&self.root, out, path)
    }

    pub fn set<T: ToScalar>(&mut self, value: T, path: &[PathSegment<'_>]) -> Result<(), JpathError> {
        access::set(&mut self.root, value, path)
    }

    pub fn set_tree(&mut self, value: &V, path: &[PathSegment<'_>]) -> Result<(), JpathError> {
        access::set_tree(&mut self.root, value, path)
    }

    pub fn get_collection<'a, T, C>(&'a self, path: &[PathSegment<'_>]) -> Result<C, JpathError>
    where
        T: FromScalar<'a>,
        C: FromIterator<T>,
    {
        collection::get_collection(&self.root, path)
    }

    pub fn get_vec<'a, T: FromScalar<'a>>(
        &'a self,
        path: &[PathSegment<'_>],
    ) -> Result<Vec<T>, JpathError> {
        collection::get_vec(&self.root, path)
    }

    pub fn get_vec_into<'a, T: FromScalar<'a>>(
        &'a self,
        out: &mut Vec<T>,
        path: &[PathSegment<'_>],
    ) -> Result<(), JpathError> {
        collection::get_vec_into(&self.root, out, path)
    }
}

impl<V: Tree + Default> Document<V> {
    pub fn set_seq<I>(&mut self, items: I, path: &[PathSegment<'_>]) -> Result<(), JpathError>
    where
        I: IntoIterator,
        I::Item: ToScalar,
    {
        collection::set_seq(&mut self.root, items, path)
    }
}

impl<V: Tree> From<V> for Document<V> {
    fn from(root: V) -> Self {
        Self::from_root(root)
    }
}
