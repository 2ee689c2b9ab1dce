//! Write-side adapters for draining a buffer.
//!
//! A `Sink<T>` accepts values of type `T`, converting them into whatever the
//! underlying collection stores. A `Vec<f64>` is a `Sink<i32>`, a
//! `Vec<Box<dyn Error>>` is a `Sink<io::Error>`, and so on: output may be
//! typed more generally than the buffer it drains.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

pub trait Sink<T> {
    fn accept(&mut self, item: T);
}

impl<T, U: From<T>> Sink<T> for Vec<U> {
    fn accept(&mut self, item: T) {
        self.push(U::from(item));
    }
}

impl<T, U: From<T>> Sink<T> for VecDeque<U> {
    fn accept(&mut self, item: T) {
        self.push_back(U::from(item));
    }
}

impl<T, U: From<T> + Ord> Sink<T> for BTreeSet<U> {
    fn accept(&mut self, item: T) {
        self.insert(U::from(item));
    }
}

impl<T, U, S> Sink<T> for HashSet<U, S>
where
    U: From<T> + Eq + Hash,
    S: BuildHasher,
{
    fn accept(&mut self, item: T) {
        self.insert(U::from(item));
    }
}
