//! Rules for the `TextInput` interaction.
//!
//! All comparisons run on whitespace-normalized strings (leading/trailing
//! whitespace trimmed, interior runs collapsed to single spaces), so
//! "test  a  lot " grades identically to "test a lot".

use rubric_core::classifier::single_input_classifier;
use rubric_core::engine::RuleClassifierMap;

pub fn create_rule_classifiers() -> RuleClassifierMap {
    let mut rules = RuleClassifierMap::new();
    rules.insert("Equals", single_input_classifier::<String>("x", equals));
    rules.insert(
        "CaseSensitiveEquals",
        single_input_classifier::<String>("x", case_sensitive_equals),
    );
    rules.insert(
        "StartsWith",
        single_input_classifier::<String>("x", starts_with),
    );
    rules.insert("Contains", single_input_classifier::<String>("x", contains));
    rules.insert(
        "FuzzyEquals",
        single_input_classifier::<String>("x", fuzzy_equals),
    );
    rules
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn equals(answer: &String, input: &String) -> bool {
    normalize_whitespace(answer).to_lowercase() == normalize_whitespace(input).to_lowercase()
}

fn case_sensitive_equals(answer: &String, input: &String) -> bool {
    normalize_whitespace(answer) == normalize_whitespace(input)
}

fn starts_with(answer: &String, input: &String) -> bool {
    normalize_whitespace(answer)
        .to_lowercase()
        .starts_with(&normalize_whitespace(input).to_lowercase())
}

fn contains(answer: &String, input: &String) -> bool {
    normalize_whitespace(answer)
        .to_lowercase()
        .contains(&normalize_whitespace(input).to_lowercase())
}

/// Case-insensitive match allowing a single typo (one edit).
fn fuzzy_equals(answer: &String, input: &String) -> bool {
    let answer = normalize_whitespace(answer).to_lowercase();
    let input = normalize_whitespace(input).to_lowercase();
    levenshtein(&answer, &input) <= 1
}

/// Levenshtein edit distance over Unicode scalar values.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
