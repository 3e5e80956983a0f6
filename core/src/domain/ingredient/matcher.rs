use super::value_objects::SubstitutionSet;

/// Minimum token-sort similarity (0-100) for two names to be treated as the same ingredient.
pub const FUZZY_MATCH_THRESHOLD: f64 = 82.0;

/// Anything that carries an ingredient name the matcher can compare.
pub trait IngredientName {
    fn ingredient_name(&self) -> &str;
}

impl IngredientName for str {
    fn ingredient_name(&self) -> &str {
        self
    }
}

impl IngredientName for String {
    fn ingredient_name(&self) -> &str {
        self.as_str()
    }
}

impl<T: IngredientName + ?Sized> IngredientName for &T {
    fn ingredient_name(&self) -> &str {
        (**self).ingredient_name()
    }
}

/// Which resolution step decided that two names match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchKind {
    Exact,
    Substitution,
    Fuzzy(f64),
}

pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Resolves two names in order: exact, registered substitution, fuzzy. First success wins.
pub fn match_kind(a: &str, b: &str, substitutions: &SubstitutionSet) -> Option<MatchKind> {
    match_kind_normalized(&normalize_name(a), &normalize_name(b), substitutions)
}

pub fn names_match(a: &str, b: &str, substitutions: &SubstitutionSet) -> bool {
    match_kind(a, b, substitutions).is_some()
}

/// Returns the first haystack entry matching `needle`; haystack order breaks ties.
pub fn find_match<'a, T: IngredientName>(
    needle: &str,
    haystack: &'a [T],
    substitutions: &SubstitutionSet,
) -> Option<&'a T> {
    let needle = normalize_name(needle);
    haystack.iter().find(|entry| {
        let candidate = normalize_name(entry.ingredient_name());
        match_kind_normalized(&needle, &candidate, substitutions).is_some()
    })
}

pub(crate) fn match_kind_normalized(
    a: &str,
    b: &str,
    substitutions: &SubstitutionSet,
) -> Option<MatchKind> {
    if a == b {
        return Some(MatchKind::Exact);
    }

    if substitutions.contains_normalized(a, b) {
        return Some(MatchKind::Substitution);
    }

    let score = token_sort_ratio(a, b);
    if score >= FUZZY_MATCH_THRESHOLD {
        return Some(MatchKind::Fuzzy(score));
    }

    None
}

/// Word-order-insensitive similarity on a 0-100 scale.
///
/// Each string's whitespace-delimited tokens are sorted and rejoined, then
/// compared with the normalized indel similarity `200 * lcs / (len_a + len_b)`.
/// Comparison is case-sensitive; callers normalize first.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    let a = sort_tokens(a);
    let b = sort_tokens(b);
    indel_similarity(&a, &b)
}

fn sort_tokens(s: &str) -> Vec<char> {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ").chars().collect()
}

fn indel_similarity(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }

    let lcs = longest_common_subsequence(a, b);
    100.0 * (2 * lcs) as f64 / total as f64
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb {
                previous[j] + 1
            } else {
                current[j].max(previous[j + 1])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_subs() -> SubstitutionSet {
        SubstitutionSet::new()
    }

    #[test]
    fn test_exact_match_ignores_case_and_surrounding_whitespace() {
        assert_eq!(
            match_kind("  Goat Milk ", "goat milk", &no_subs()),
            Some(MatchKind::Exact)
        );
    }

    #[test]
    fn test_raw_ratio_is_case_sensitive() {
        let score = token_sort_ratio("Goat Milk", "goat milk");
        assert!((score - 77.777).abs() < 0.01, "score was {score}");
    }

    #[test]
    fn test_token_order_does_not_matter() {
        assert_eq!(token_sort_ratio("pasta penne", "penne pasta"), 100.0);
        assert!(names_match("Penne Pasta", "pasta  penne", &no_subs()));
    }

    #[test]
    fn test_fuzzy_match_accepts_near_duplicates() {
        assert!(matches!(
            match_kind("tomatoes", "tomato", &no_subs()),
            Some(MatchKind::Fuzzy(_))
        ));
    }

    #[test]
    fn test_unrelated_ingredients_do_not_match() {
        assert!(!names_match("Olive Oil", "Milk", &no_subs()));
        assert!(!names_match("Rice", "Corn", &no_subs()));
    }

    #[test]
    fn test_substitution_overrides_fuzzy_threshold() {
        assert!(token_sort_ratio("evoo", "olive oil") < FUZZY_MATCH_THRESHOLD);
        assert!(!names_match("EVOO", "Olive Oil", &no_subs()));

        let subs = SubstitutionSet::from_pairs([("EVOO", "Olive Oil")]);
        assert_eq!(
            match_kind("EVOO", "Olive Oil", &subs),
            Some(MatchKind::Substitution)
        );
        assert_eq!(
            match_kind("olive oil", "evoo", &subs),
            Some(MatchKind::Substitution)
        );
    }

    #[test]
    fn test_exact_match_wins_over_substitution() {
        let subs = SubstitutionSet::from_pairs([("Milk", "Goat Milk")]);
        assert_eq!(match_kind("MILK", "milk", &subs), Some(MatchKind::Exact));
    }

    #[test]
    fn test_threshold_boundary_82_matches() {
        // 41 shared characters out of 100 total: 200 * 41 / 100 = 82
        let a = format!("{}{}", "a".repeat(41), "b".repeat(9));
        let b = format!("{}{}", "a".repeat(41), "c".repeat(9));
        assert_eq!(token_sort_ratio(&a, &b), 82.0);
        assert!(names_match(&a, &b, &no_subs()));
    }

    #[test]
    fn test_threshold_boundary_81_does_not_match() {
        // 81 shared characters out of 200 total: 200 * 81 / 200 = 81
        let a = format!("{}{}", "a".repeat(81), "b".repeat(19));
        let b = format!("{}{}", "a".repeat(81), "c".repeat(19));
        assert_eq!(token_sort_ratio(&a, &b), 81.0);
        assert!(!names_match(&a, &b, &no_subs()));
    }

    #[test]
    fn test_empty_names_only_match_each_other() {
        assert!(names_match("", "   ", &no_subs()));
        assert!(!names_match("", "milk", &no_subs()));
        assert!(!names_match("milk", "", &no_subs()));
    }

    #[test]
    fn test_matching_is_symmetric() {
        let subs = SubstitutionSet::from_pairs([("Goat Milk", "Milk")]);
        let names = [
            "Goat Milk",
            "milk",
            "EVOO",
            "Olive Oil",
            "tomato",
            "Tomatoes",
            "penne pasta",
            "Pasta",
            "",
        ];

        for a in names {
            for b in names {
                assert_eq!(
                    names_match(a, b, &subs),
                    names_match(b, a, &subs),
                    "asymmetric for {a:?} / {b:?}"
                );
            }
        }
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let subs = SubstitutionSet::from_pairs([("A2 Milk", "Milk")]);
        let pairs = [
            (" A2 MILK", "milk "),
            ("Tomatoes", " TOMATO"),
            ("Rice", "Brown Rice"),
            ("EVOO", "olive oil"),
        ];

        for (a, b) in pairs {
            assert_eq!(
                names_match(a, b, &subs),
                names_match(&normalize_name(a), &normalize_name(b), &subs)
            );
        }
    }

    #[test]
    fn test_find_match_returns_first_matching_entry() {
        let haystack = ["Butter", "Tomato", "Tomatoes"];
        assert_eq!(
            find_match("tomatoes", &haystack, &no_subs()),
            Some(&"Tomato")
        );
    }

    #[test]
    fn test_find_match_returns_none_without_candidates() {
        let haystack: [String; 2] = ["Flour".to_string(), "Sugar".to_string()];
        assert_eq!(find_match("Eggs", &haystack, &no_subs()), None);

        let empty: [&str; 0] = [];
        assert_eq!(find_match("Eggs", &empty, &no_subs()), None);
    }
}
