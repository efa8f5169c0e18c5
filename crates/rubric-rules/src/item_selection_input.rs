//! Rules for the `ItemSelectionInput` interaction.
//!
//! Answers and inputs are sets of opaque HTML choice tokens; every rule is
//! a pure set relation. Token order and duplication never matter.

use rubric_core::classifier::single_input_classifier;
use rubric_core::engine::RuleClassifierMap;
use rubric_core::model::StringSet;

pub fn create_rule_classifiers() -> RuleClassifierMap {
    let mut rules = RuleClassifierMap::new();
    rules.insert("Equals", single_input_classifier::<StringSet>("x", equals));
    rules.insert(
        "ContainsAtLeastOneOf",
        single_input_classifier::<StringSet>("x", contains_at_least_one_of),
    );
    rules.insert(
        "DoesNotContainAtLeastOneOf",
        single_input_classifier::<StringSet>("x", does_not_contain_at_least_one_of),
    );
    rules.insert(
        "IsProperSubsetOf",
        single_input_classifier::<StringSet>("x", is_proper_subset_of),
    );
    rules
}

fn equals(answer: &StringSet, input: &StringSet) -> bool {
    answer.is_set_equal_to(input)
}

fn contains_at_least_one_of(answer: &StringSet, input: &StringSet) -> bool {
    answer.intersects(input)
}

fn does_not_contain_at_least_one_of(answer: &StringSet, input: &StringSet) -> bool {
    !answer.intersects(input)
}

/// Proper subset: strictly fewer distinct tokens, all of them selected
/// from the input set. The empty answer is a proper subset of any
/// non-empty input.
fn is_proper_subset_of(answer: &StringSet, input: &StringSet) -> bool {
    answer.distinct_len() < input.distinct_len() && answer.is_subset_of(input)
}
