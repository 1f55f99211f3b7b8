//! Groups and ordered group collections.
//!
//! A [`GroupCollection`] is built once by the engine and only read afterwards:
//! accessors hand out shared references, and every refinement (`select`,
//! `filter`, `order_by`, ...) produces a new value instead of editing the
//! collection in place.

use crate::error::{CallerError, GroupingError, Result};
use serde::Serialize;
use std::ops::Index;

/// A key together with its members, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group<K, T> {
    key: K,
    members: Vec<T>,
}

impl<K, T> Group<K, T> {
    pub(crate) fn new(key: K, first: T) -> Self {
        Self {
            key,
            members: vec![first],
        }
    }

    pub(crate) fn push(&mut self, member: T) {
        self.members.push(member);
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn members(&self) -> &[T] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for groups produced by the engine.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The member that created this group.
    pub fn first(&self) -> Option<&T> {
        self.members.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }

    pub fn into_parts(self) -> (K, Vec<T>) {
        (self.key, self.members)
    }

    /// Replaces the key, keeping the members.
    pub fn with_key<K2>(self, key: K2) -> Group<K2, T> {
        Group {
            key,
            members: self.members,
        }
    }

    /// Projects every member, keeping order.
    pub fn map_members<R, F>(self, f: F) -> Group<K, R>
    where
        F: FnMut(T) -> R,
    {
        Group {
            key: self.key,
            members: self.members.into_iter().map(f).collect(),
        }
    }
}

impl<K, T> IntoIterator for Group<K, T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a Group<K, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// Ordered sequence of groups.
///
/// Unless an ordering step was applied, groups appear in the order their key
/// was first encountered in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupCollection<K, T> {
    groups: Vec<Group<K, T>>,
}

impl<K, T> Default for GroupCollection<K, T> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<K, T> GroupCollection<K, T> {
    pub(crate) fn from_groups(groups: Vec<Group<K, T>>) -> Self {
        Self { groups }
    }

    pub(crate) fn group_mut(&mut self, index: usize) -> &mut Group<K, T> {
        &mut self.groups[index]
    }

    pub(crate) fn push_group(&mut self, group: Group<K, T>) {
        self.groups.push(group);
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group<K, T>> {
        self.groups.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Group<K, T>> {
        self.groups.get(index)
    }

    pub fn as_slice(&self) -> &[Group<K, T>] {
        &self.groups
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.groups.iter().map(Group::key)
    }

    /// First group whose key equals `key`.
    pub fn find(&self, key: &K) -> Option<&Group<K, T>>
    where
        K: PartialEq,
    {
        self.groups.iter().find(|g| g.key == *key)
    }

    /// Number of elements across all groups.
    pub fn total_members(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn into_vec(self) -> Vec<Group<K, T>> {
        self.groups
    }

    /// Transforms each group, preserving collection order.
    pub fn select<'a, R, F>(&'a self, f: F) -> Vec<R>
    where
        F: FnMut(&'a Group<K, T>) -> R,
    {
        self.groups.iter().map(f).collect()
    }

    /// Like [`select`](Self::select), but stops at the first projector
    /// failure and returns no partial result.
    pub fn try_select<R, E, F>(&self, mut f: F) -> Result<Vec<R>>
    where
        E: Into<CallerError>,
        F: FnMut(&Group<K, T>) -> std::result::Result<R, E>,
    {
        self.groups
            .iter()
            .enumerate()
            .map(|(index, group)| {
                f(group).map_err(|e| GroupingError::Projector {
                    index,
                    source: e.into(),
                })
            })
            .collect()
    }

    /// Copies the groups satisfying `predicate`, keeping their relative order.
    /// `self` is left untouched.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        K: Clone,
        T: Clone,
        P: FnMut(&Group<K, T>) -> bool,
    {
        Self::from_groups(
            self.groups
                .iter()
                .filter(|g| predicate(*g))
                .cloned()
                .collect(),
        )
    }

    /// Consuming form of [`filter`](Self::filter) that moves groups instead of
    /// cloning them.
    pub fn into_filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&Group<K, T>) -> bool,
    {
        Self::from_groups(self.groups.into_iter().filter(|g| predicate(g)).collect())
    }

    /// Fallible [`filter`](Self::filter). The first predicate failure aborts
    /// the call.
    pub fn try_filter<E, P>(&self, mut predicate: P) -> Result<Self>
    where
        K: Clone,
        T: Clone,
        E: Into<CallerError>,
        P: FnMut(&Group<K, T>) -> std::result::Result<bool, E>,
    {
        let mut kept = Vec::new();
        for (index, group) in self.groups.iter().enumerate() {
            let keep = predicate(group).map_err(|e| GroupingError::Predicate {
                index,
                source: e.into(),
            })?;
            if keep {
                kept.push(group.clone());
            }
        }
        Ok(Self::from_groups(kept))
    }

    /// Stable sort by a derived key; ties keep their prior relative order.
    pub fn order_by<S, F>(mut self, sort_key: F) -> Self
    where
        S: Ord,
        F: FnMut(&Group<K, T>) -> S,
    {
        // sort_by_cached_key is stable and evaluates sort_key once per group.
        self.groups.sort_by_cached_key(sort_key);
        self
    }

    /// Stable descending sort; ties keep their prior relative order.
    pub fn order_by_descending<S, F>(mut self, mut sort_key: F) -> Self
    where
        S: Ord,
        F: FnMut(&Group<K, T>) -> S,
    {
        self.groups
            .sort_by_cached_key(|g| std::cmp::Reverse(sort_key(g)));
        self
    }

    /// Replaces every key with one derived from its group, e.g. a
    /// representative member for display.
    pub fn map_keys<K2, F>(self, mut f: F) -> GroupCollection<K2, T>
    where
        F: FnMut(&Group<K, T>) -> K2,
    {
        GroupCollection::from_groups(
            self.groups
                .into_iter()
                .map(|g| {
                    let key = f(&g);
                    g.with_key(key)
                })
                .collect(),
        )
    }

    /// Projects each member of each group.
    pub fn map_members<R, F>(self, mut f: F) -> GroupCollection<K, R>
    where
        F: FnMut(T) -> R,
    {
        GroupCollection::from_groups(
            self.groups
                .into_iter()
                .map(|g| g.map_members(&mut f))
                .collect(),
        )
    }

    /// `(key, members)` pairs in collection order.
    pub fn into_pairs(self) -> Vec<(K, Vec<T>)> {
        self.groups.into_iter().map(Group::into_parts).collect()
    }
}

impl<K, T> Index<usize> for GroupCollection<K, T> {
    type Output = Group<K, T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.groups[index]
    }
}

impl<K, T> IntoIterator for GroupCollection<K, T> {
    type Item = Group<K, T>;
    type IntoIter = std::vec::IntoIter<Group<K, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, K, T> IntoIterator for &'a GroupCollection<K, T> {
    type Item = &'a Group<K, T>;
    type IntoIter = std::slice::Iter<'a, Group<K, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> GroupCollection<char, &'static str> {
        let mut b = Group::new('b', "blueberry");
        b.push("banana");
        let mut c = Group::new('c', "chimpanzee");
        c.push("cheese");
        let mut a = Group::new('a', "abacus");
        a.push("apple");
        GroupCollection::from_groups(vec![b, c, a])
    }

    #[test]
    fn accessors_expose_groups_in_order() {
        let groups = sample();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!['b', 'c', 'a']);
        assert_eq!(groups[1].members(), &["chimpanzee", "cheese"]);
        assert_eq!(groups.find(&'a').map(Group::len), Some(2));
        assert_eq!(groups.find(&'z'), None);
        assert_eq!(groups.total_members(), 6);
    }

    #[test]
    fn order_by_sorts_by_key() {
        let ordered = sample().order_by(|g| *g.key());
        assert_eq!(ordered.keys().copied().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn order_by_keeps_ties_in_prior_order() {
        // every group has two members, so the sort key ties everywhere
        let ordered = sample().order_by(|g| g.len());
        assert_eq!(ordered.keys().copied().collect::<Vec<_>>(), vec!['b', 'c', 'a']);

        let descending = sample().order_by_descending(|g| g.len());
        assert_eq!(descending.keys().copied().collect::<Vec<_>>(), vec!['b', 'c', 'a']);
    }

    #[test]
    fn order_by_descending_reverses_distinct_keys() {
        let ordered = sample().order_by_descending(|g| *g.key());
        assert_eq!(ordered.keys().copied().collect::<Vec<_>>(), vec!['c', 'b', 'a']);
    }

    #[test]
    fn select_and_filter_leave_source_untouched() {
        let groups = sample();
        let snapshot = groups.clone();

        let counts = groups.select(|g| (*g.key(), g.len()));
        assert_eq!(counts, vec![('b', 2), ('c', 2), ('a', 2)]);
        assert_eq!(groups, snapshot);

        let filtered = groups.filter(|g| *g.key() != 'c');
        assert_eq!(filtered.keys().copied().collect::<Vec<_>>(), vec!['b', 'a']);
        assert_eq!(groups, snapshot);
    }

    #[test]
    fn try_filter_reports_failing_group() {
        let groups = sample();
        let err = groups
            .try_filter(|g| {
                if *g.key() == 'c' {
                    Err("no c allowed")
                } else {
                    Ok(true)
                }
            })
            .unwrap_err();

        assert!(matches!(err, GroupingError::Predicate { index: 1, .. }));
    }

    #[test]
    fn try_select_collects_all_or_nothing() {
        let groups = sample();
        let keys: Vec<char> = groups
            .try_select(|g| Ok::<_, std::fmt::Error>(*g.key()))
            .unwrap();
        assert_eq!(keys, vec!['b', 'c', 'a']);

        let err = groups
            .try_select(|g| if *g.key() == 'a' { Err("boom") } else { Ok(g.len()) })
            .unwrap_err();
        assert_eq!(err.index(), Some(2));
    }

    #[test]
    fn map_keys_and_members_preserve_order() {
        let renamed = sample()
            .map_keys(|g| g.first().map(|s| s.to_uppercase()).unwrap_or_default())
            .map_members(str::len);

        assert_eq!(
            renamed.into_pairs(),
            vec![
                ("BLUEBERRY".to_string(), vec![9, 6]),
                ("CHIMPANZEE".to_string(), vec![10, 6]),
                ("ABACUS".to_string(), vec![6, 5]),
            ]
        );
    }

    #[test]
    fn serializes_as_list_of_groups() {
        let groups = GroupCollection::from_groups(vec![Group::new(1, "x")]);
        let json = serde_json::to_string(&groups).unwrap();
        assert_eq!(json, r#"[{"key":1,"members":["x"]}]"#);
    }
}
