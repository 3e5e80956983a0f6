use std::collections::HashSet;

use super::matcher::normalize_name;

/// Normalized, symmetric view of a household's substitution pairs.
///
/// Pairs are stored with their members in lexical order so a lookup never
/// depends on which name is the needle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionSet {
    pairs: HashSet<(String, String)>,
}

impl SubstitutionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut set = Self::new();
        for (a, b) in pairs {
            set.insert(a.as_ref(), b.as_ref());
        }
        set
    }

    pub fn insert(&mut self, a: &str, b: &str) {
        self.pairs.insert(ordered_key(normalize_name(a), normalize_name(b)));
    }

    /// Both arguments must already be normalized.
    pub(crate) fn contains_normalized(&self, a: &str, b: &str) -> bool {
        self.pairs
            .contains(&ordered_key(a.to_string(), b.to_string()))
    }

    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.contains_normalized(&normalize_name(a), &normalize_name(b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn ordered_key(a: String, b: String) -> (String, String) {
    if a <= b { (a, b) } else { (b, a) }
}
