//! Single-pass partitioning of a sequence into key groups.
//!
//! The engine scans the source once. Each key is hashed through the active
//! [`KeyEquality`] strategy to find a bucket of candidate groups, and the
//! candidates are confirmed with `equals`, so hash collisions never merge
//! distinct keys. Groups live in a `Vec` in creation order; the bucket index
//! only stores positions into it, which keeps the output order independent of
//! hash iteration order.

use crate::equality::{DefaultEquality, KeyEquality};
use crate::error::{CallerError, GroupingError, Result};
use crate::group::{Group, GroupCollection};
use crate::settings::GroupingSettings;
use std::collections::HashMap;
use std::convert::Infallible;
use std::hash::Hash;

#[derive(Debug, Clone, Default)]
pub struct GroupingEngine {
    settings: GroupingSettings,
}

impl GroupingEngine {
    pub fn new(settings: GroupingSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GroupingSettings {
        &self.settings
    }

    /// Groups `source` by `key_of` using structural key equality.
    pub fn group_by<T, K, I, F>(&self, source: I, key_of: F) -> GroupCollection<K, T>
    where
        I: IntoIterator<Item = T>,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        self.group_by_with(source, key_of, DefaultEquality)
    }

    /// Groups `source` by `key_of`, deciding key equality with `equality`.
    ///
    /// The first key seen for a group is the one stored on it.
    pub fn group_by_with<T, K, I, F, Q>(
        &self,
        source: I,
        mut key_of: F,
        equality: Q,
    ) -> GroupCollection<K, T>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> K,
        Q: KeyEquality<K>,
    {
        match self.partition(source, |e| Ok::<K, Infallible>(key_of(e)), equality) {
            Ok(groups) => groups,
            Err((_, never)) => match never {},
        }
    }

    /// Groups `source` with a fallible key selector.
    ///
    /// The first selector failure aborts the whole call; no partially grouped
    /// collection is returned.
    pub fn try_group_by<T, K, E, I, F, Q>(
        &self,
        source: I,
        key_of: F,
        equality: Q,
    ) -> Result<GroupCollection<K, T>>
    where
        I: IntoIterator<Item = T>,
        E: Into<CallerError>,
        F: FnMut(&T) -> std::result::Result<K, E>,
        Q: KeyEquality<K>,
    {
        self.partition(source, key_of, equality)
            .map_err(|(index, e)| {
                self.settings
                    .log(&format!("grouping aborted: key selector failed on element {}", index));
                GroupingError::KeySelector {
                    index,
                    source: e.into(),
                }
            })
    }

    /// Groups each group's members again by a secondary key.
    ///
    /// Not implemented: always returns [`GroupingError::NotImplemented`].
    pub fn nested_group_by<T, K, K2, I, F, G>(
        &self,
        _source: I,
        _key_of: F,
        _inner_key_of: G,
    ) -> Result<GroupCollection<K, GroupCollection<K2, T>>>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> K,
        G: FnMut(&T) -> K2,
    {
        self.settings.log("nested_group_by requested but not implemented");
        Err(GroupingError::not_implemented("nested_group_by"))
    }

    fn partition<T, K, E, I, F, Q>(
        &self,
        source: I,
        mut key_of: F,
        equality: Q,
    ) -> std::result::Result<GroupCollection<K, T>, (usize, E)>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> std::result::Result<K, E>,
        Q: KeyEquality<K>,
    {
        let mut groups = GroupCollection::default();
        let mut buckets: HashMap<u64, Vec<usize>> =
            HashMap::with_capacity(self.settings.capacity_hint);
        let mut scanned = 0usize;

        for (index, element) in source.into_iter().enumerate() {
            let key = key_of(&element).map_err(|e| (index, e))?;
            let slots = buckets.entry(equality.hash_of(&key)).or_default();
            let existing = slots
                .iter()
                .copied()
                .find(|&slot| equality.equals(groups[slot].key(), &key));

            match existing {
                Some(slot) => {
                    groups.group_mut(slot).push(element);
                    #[cfg(feature = "trace")]
                    self.trace_placement(index, slot, false);
                }
                None => {
                    let slot = groups.len();
                    slots.push(slot);
                    groups.push_group(Group::new(key, element));
                    #[cfg(feature = "trace")]
                    self.trace_placement(index, slot, true);
                }
            }
            scanned = index + 1;
        }

        if self.settings.is_logging() {
            self.settings.log(&format!(
                "grouped {} elements into {} groups",
                scanned,
                groups.len()
            ));
        }

        Ok(groups)
    }

    #[cfg(feature = "trace")]
    fn trace_placement(&self, index: usize, slot: usize, created: bool) {
        if self.settings.is_logging() {
            let action = if created { "opened" } else { "joined" };
            self.settings
                .log(&format!("element {} {} group {}", index, action, slot));
        }
    }
}

/// [`GroupingEngine::group_by`] with default settings.
pub fn group_by<T, K, I, F>(source: I, key_of: F) -> GroupCollection<K, T>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    GroupingEngine::default().group_by(source, key_of)
}

/// [`GroupingEngine::group_by_with`] with default settings.
pub fn group_by_with<T, K, I, F, Q>(source: I, key_of: F, equality: Q) -> GroupCollection<K, T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
    Q: KeyEquality<K>,
{
    GroupingEngine::default().group_by_with(source, key_of, equality)
}

/// [`GroupingEngine::try_group_by`] with default settings.
pub fn try_group_by<T, K, E, I, F, Q>(
    source: I,
    key_of: F,
    equality: Q,
) -> Result<GroupCollection<K, T>>
where
    I: IntoIterator<Item = T>,
    E: Into<CallerError>,
    F: FnMut(&T) -> std::result::Result<K, E>,
    Q: KeyEquality<K>,
{
    GroupingEngine::default().try_group_by(source, key_of, equality)
}

/// [`GroupingEngine::nested_group_by`] with default settings.
pub fn nested_group_by<T, K, K2, I, F, G>(
    source: I,
    key_of: F,
    inner_key_of: G,
) -> Result<GroupCollection<K, GroupCollection<K2, T>>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
    G: FnMut(&T) -> K2,
{
    GroupingEngine::default().nested_group_by(source, key_of, inner_key_of)
}
