//! Key equality strategies used to decide bucket membership.
//!
//! A strategy pairs an equivalence relation with a hash that agrees with it:
//! whenever `equals(a, b)` holds, `hash_of(a) == hash_of(b)` must hold too.
//! Canonicalizing strategies (anagram, case-insensitive) compare and hash a
//! normalized form, so the raw key value seen first is still the one stored on
//! the group.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Pluggable equality over key values.
pub trait KeyEquality<K: ?Sized> {
    /// Reflexive, symmetric and transitive equivalence between two keys.
    fn equals(&self, a: &K, b: &K) -> bool;

    /// Bucket hash; equal keys must produce equal hashes.
    fn hash_of(&self, key: &K) -> u64;
}

impl<K: ?Sized, E: KeyEquality<K> + ?Sized> KeyEquality<K> for &E {
    fn equals(&self, a: &K, b: &K) -> bool {
        (**self).equals(a, b)
    }

    fn hash_of(&self, key: &K) -> u64 {
        (**self).hash_of(key)
    }
}

fn hash_value<H: Hash + ?Sized>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Structural equality (`Eq` + `Hash`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEquality;

impl<K: Eq + Hash + ?Sized> KeyEquality<K> for DefaultEquality {
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }

    fn hash_of(&self, key: &K) -> u64 {
        hash_value(key)
    }
}

/// Whitespace-stripped, character-sorted form of `s`.
///
/// Two strings are anagrams of each other exactly when their canonical forms
/// are equal.
pub fn anagram_canonical_form(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Treats two string keys as equal when they use the same multiset of
/// non-whitespace characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnagramEquality;

impl<K: AsRef<str> + ?Sized> KeyEquality<K> for AnagramEquality {
    fn equals(&self, a: &K, b: &K) -> bool {
        anagram_canonical_form(a.as_ref()) == anagram_canonical_form(b.as_ref())
    }

    fn hash_of(&self, key: &K) -> u64 {
        hash_value(&anagram_canonical_form(key.as_ref()))
    }
}

/// Compares string keys by their Unicode lowercase form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitiveEquality;

impl<K: AsRef<str> + ?Sized> KeyEquality<K> for CaseInsensitiveEquality {
    fn equals(&self, a: &K, b: &K) -> bool {
        a.as_ref().to_lowercase() == b.as_ref().to_lowercase()
    }

    fn hash_of(&self, key: &K) -> u64 {
        hash_value(&key.as_ref().to_lowercase())
    }
}

/// Strategy built from a canonicalization function: keys are equal when their
/// canonical forms are equal.
#[derive(Debug, Clone, Copy)]
pub struct FnEquality<F> {
    canonical: F,
}

impl<F> FnEquality<F> {
    pub fn new(canonical: F) -> Self {
        Self { canonical }
    }
}

impl<K, C, F> KeyEquality<K> for FnEquality<F>
where
    K: ?Sized,
    C: Eq + Hash,
    F: Fn(&K) -> C,
{
    fn equals(&self, a: &K, b: &K) -> bool {
        (self.canonical)(a) == (self.canonical)(b)
    }

    fn hash_of(&self, key: &K) -> u64 {
        hash_value(&(self.canonical)(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_equality_is_structural() {
        let eq = DefaultEquality;
        assert!(eq.equals(&3, &3));
        assert!(!eq.equals(&3, &4));
        assert_eq!(eq.hash_of("abc"), eq.hash_of("abc"));
    }

    #[test]
    fn anagram_canonical_form_strips_whitespace_and_sorts() {
        assert_eq!(anagram_canonical_form("  mane "), "aemn");
        assert_eq!(anagram_canonical_form("name"), "aemn");
        assert_eq!(anagram_canonical_form(""), "");
    }

    #[test]
    fn anagram_equality_matches_rearranged_words() {
        let eq = AnagramEquality;
        assert!(eq.equals("from", "form"));
        assert!(eq.equals(" salt", "last   "));
        assert!(!eq.equals("earn", "mean"));
        assert_eq!(eq.hash_of("near"), eq.hash_of("earn"));
    }

    #[test]
    fn anagram_equality_counts_repeated_letters() {
        let eq = AnagramEquality;
        assert!(!eq.equals("aab", "abb"));
    }

    #[test]
    fn case_insensitive_equality_ignores_case() {
        let eq = CaseInsensitiveEquality;
        assert!(eq.equals(&"Apple".to_string(), &"aPPLE".to_string()));
        assert_eq!(eq.hash_of("CAFÉ"), eq.hash_of("café"));
        assert!(!eq.equals("apple", "apples"));
    }

    #[test]
    fn fn_equality_uses_canonical_form() {
        let eq = FnEquality::new(|n: &i32| n.rem_euclid(3));
        assert!(eq.equals(&1, &4));
        assert!(eq.equals(&-2, &1));
        assert!(!eq.equals(&1, &2));
        assert_eq!(eq.hash_of(&7), eq.hash_of(&1));
    }

    #[test]
    fn strategy_can_be_borrowed() {
        let eq = AnagramEquality;
        let by_ref = &eq;
        assert!(KeyEquality::<str>::equals(&by_ref, "mean", "name"));
    }
}
