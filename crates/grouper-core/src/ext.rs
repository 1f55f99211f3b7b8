use crate::engine::{group_by, group_by_with};
use crate::equality::KeyEquality;
use crate::group::GroupCollection;
use std::hash::Hash;

/// Grouping adapters for any iterator.
pub trait GroupByExt: Iterator {
    fn group_by_key<K, F>(self, key_of: F) -> GroupCollection<K, Self::Item>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        group_by(self, key_of)
    }

    fn group_by_key_with<K, F, Q>(self, key_of: F, equality: Q) -> GroupCollection<K, Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> K,
        Q: KeyEquality<K>,
    {
        group_by_with(self, key_of, equality)
    }
}

impl<T: ?Sized> GroupByExt for T where T: Iterator {}
