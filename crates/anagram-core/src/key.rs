use serde::Serialize;
use std::fmt;

/// How a string is broken into units before sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyMode {
    /// Unicode scalar values, ordered by code point.
    #[default]
    Chars,
    /// Raw UTF-8 bytes, ordered by value.
    Bytes,
}

/// Sorted-unit form of a string. Two strings are anagrams iff their keys are equal.
///
/// Stored as bytes because a byte-sorted key is not guaranteed to be valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(Vec<u8>);

impl CanonicalKey {
    pub fn of(s: &str, mode: KeyMode) -> Self {
        match mode {
            KeyMode::Chars => {
                let mut chars: Vec<char> = s.chars().collect();
                chars.sort_unstable();
                Self(chars.into_iter().collect::<String>().into_bytes())
            }
            KeyMode::Bytes => {
                let mut bytes = s.as_bytes().to_vec();
                bytes.sort_unstable();
                Self(bytes)
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl Serialize for CanonicalKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_lossy())
    }
}

/// True when `a` is a character-permutation of `b`.
pub fn are_anagrams(a: &str, b: &str) -> bool {
    // Permutations have equal UTF-8 length.
    if a.len() != b.len() {
        return false;
    }
    CanonicalKey::of(a, KeyMode::Chars) == CanonicalKey::of(b, KeyMode::Chars)
}
