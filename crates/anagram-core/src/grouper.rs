//! Anagram grouping.
//!
//! Each input string is reduced to a [`CanonicalKey`] and appended, in input
//! order, to the group for that key. Group-internal order therefore always
//! follows the input; the order of the groups themselves depends on
//! [`GroupOrder`].

use crate::key::{CanonicalKey, KeyMode};
use serde::Serialize;
use std::collections::HashMap;

/// Ordering applied to the groups after collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupOrder {
    /// Map iteration order. Stable only within one call.
    #[default]
    Unspecified,
    /// By the input index of each group's first member.
    FirstSeen,
    /// Larger groups first, ties by first-seen.
    BySizeDesc,
}

/// Strings sharing one canonical key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnagramGroup {
    key: CanonicalKey,
    members: Vec<String>,
    #[serde(skip)]
    first_index: usize,
}

impl AnagramGroup {
    pub fn key(&self) -> &CanonicalKey {
        &self.key
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for groups produced by [`AnagramGrouper`].
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn into_members(self) -> Vec<String> {
        self.members
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnagramGrouper {
    key_mode: KeyMode,
    order: GroupOrder,
}

impl AnagramGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_mode(mut self, mode: KeyMode) -> Self {
        self.key_mode = mode;
        self
    }

    pub fn order(mut self, order: GroupOrder) -> Self {
        self.order = order;
        self
    }

    /// Partition `strs` into anagram groups.
    ///
    /// Every input appears in exactly one group, no group is empty, and
    /// members keep their relative input order.
    pub fn group<S: AsRef<str>>(&self, strs: &[S]) -> Vec<AnagramGroup> {
        let mut by_key: HashMap<CanonicalKey, AnagramGroup> = HashMap::new();

        for (idx, s) in strs.iter().enumerate() {
            let s = s.as_ref();
            let key = CanonicalKey::of(s, self.key_mode);
            by_key
                .entry(key)
                .or_insert_with_key(|k| AnagramGroup {
                    key: k.clone(),
                    members: Vec::new(),
                    first_index: idx,
                })
                .members
                .push(s.to_string());
        }

        let mut groups: Vec<AnagramGroup> = by_key.into_values().collect();
        match self.order {
            GroupOrder::Unspecified => {}
            GroupOrder::FirstSeen => groups.sort_by_key(|g| g.first_index),
            GroupOrder::BySizeDesc => groups.sort_by(|a, b| {
                b.len()
                    .cmp(&a.len())
                    .then(a.first_index.cmp(&b.first_index))
            }),
        }

        tracing::debug!(
            inputs = strs.len(),
            groups = groups.len(),
            mode = ?self.key_mode,
            "grouped anagrams"
        );
        groups
    }
}

/// Group `strs` into anagram sets using character keys.
///
/// The order of the returned groups is unspecified.
///
/// ```
/// let groups = anagram_core::group_anagrams(&["eat", "tea", "bat"]);
/// assert_eq!(groups.len(), 2);
/// ```
pub fn group_anagrams<S: AsRef<str>>(strs: &[S]) -> Vec<Vec<String>> {
    AnagramGrouper::new()
        .group(strs)
        .into_iter()
        .map(AnagramGroup::into_members)
        .collect()
}
