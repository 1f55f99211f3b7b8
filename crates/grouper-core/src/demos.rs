//! Example queries over the sample datasets.

use crate::engine::GroupingEngine;
use crate::equality::{AnagramEquality, DefaultEquality};
use crate::error::Result;
use crate::fixtures::SampleSource;
use crate::group::GroupCollection;

/// Largest category kept by [`small_categories`].
pub const SMALL_CATEGORY_LIMIT: usize = 7;

/// Words grouped by first letter, ordered by that letter.
///
/// Fails on an empty word, which has no first letter.
pub fn group_by_first_letter<S: SampleSource + ?Sized>(
    engine: &GroupingEngine,
    data: &S,
) -> Result<GroupCollection<char, String>> {
    let groups = engine.try_group_by(
        data.words().iter().cloned(),
        |w| w.chars().next().ok_or("word has no first letter"),
        DefaultEquality,
    )?;
    Ok(groups.order_by(|g| *g.key()))
}

/// Numbers grouped by their remainder modulo 5, as `(remainder, numbers)`.
pub fn group_by_remainder<S: SampleSource + ?Sized>(
    engine: &GroupingEngine,
    data: &S,
) -> Vec<(i32, Vec<i32>)> {
    engine
        .group_by(data.numbers().iter().copied(), |n| n % 5)
        .select(|g| (*g.key(), g.members().to_vec()))
}

/// Product names per category, for categories with at most `max_members`
/// products.
pub fn small_categories<S: SampleSource + ?Sized>(
    engine: &GroupingEngine,
    data: &S,
    max_members: usize,
) -> Vec<(String, Vec<String>)> {
    engine
        .group_by(data.products().iter(), |p| p.category.clone())
        .into_filter(|g| g.len() <= max_members)
        .select(|g| {
            (
                g.key().clone(),
                g.iter().map(|p| p.product_name.clone()).collect(),
            )
        })
}

/// Whitespace-padded words grouped by anagram equality.
///
/// Each group is keyed by its first member with the padding trimmed; members
/// keep their original spelling.
pub fn group_anagrams<S: SampleSource + ?Sized>(
    engine: &GroupingEngine,
    data: &S,
) -> GroupCollection<String, String> {
    engine
        .group_by_with(
            data.anagrams().iter().cloned(),
            |w| strip_whitespace(w),
            AnagramEquality,
        )
        .map_keys(|g| g.first().map(|w| w.trim().to_string()).unwrap_or_default())
}

/// Anagram groups further split by upper-cased spelling. Not implemented.
pub fn nested_anagrams<S: SampleSource + ?Sized>(
    engine: &GroupingEngine,
    data: &S,
) -> Result<GroupCollection<String, GroupCollection<String, String>>> {
    engine.nested_group_by(
        data.anagrams().iter().cloned(),
        |w| strip_whitespace(w),
        |w| w.trim().to_uppercase(),
    )
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GroupingError;
    use crate::fixtures::SampleData;

    #[test]
    fn strip_whitespace_removes_inner_and_outer_spaces() {
        assert_eq!(strip_whitespace("  a b\tc "), "abc");
    }

    #[test]
    fn first_letter_rejects_empty_word() {
        let data = SampleData::new().with_words(vec!["ok".to_string(), String::new()]);
        let err = group_by_first_letter(&GroupingEngine::default(), &data).unwrap_err();
        assert!(matches!(err, GroupingError::KeySelector { index: 1, .. }));
    }

    #[test]
    fn nested_anagrams_is_not_implemented() {
        let err = nested_anagrams(&GroupingEngine::default(), &SampleData::new()).unwrap_err();
        assert!(matches!(err, GroupingError::NotImplemented { .. }));
    }
}
