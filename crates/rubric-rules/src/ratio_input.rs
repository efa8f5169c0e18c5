//! Rules for the `RatioInput` interaction.
//!
//! Answers are ordered sequences of positive ratio components. `Equals`
//! compares the spelling as entered; `IsEquivalent` reduces both operands
//! to lowest form (GCD across all components) before comparing, so it is
//! insensitive to whether either side was authored pre-reduced.

use rubric_core::classifier::{
    double_input_classifier, multi_type_single_input_classifier, single_input_classifier,
};
use rubric_core::engine::RuleClassifierMap;
use rubric_core::model::RatioExpression;

pub fn create_rule_classifiers() -> RuleClassifierMap {
    let mut rules = RuleClassifierMap::new();
    rules.insert(
        "Equals",
        single_input_classifier::<RatioExpression>("x", equals),
    );
    rules.insert(
        "IsEquivalent",
        single_input_classifier::<RatioExpression>("x", is_equivalent),
    );
    rules.insert(
        "HasNumberOfTermsEqualTo",
        multi_type_single_input_classifier::<RatioExpression, u32>(
            "y",
            has_number_of_terms_equal_to,
        ),
    );
    rules.insert(
        "HasSpecificTermEqualTo",
        double_input_classifier::<RatioExpression, u32, u32>("x", "y", has_specific_term_equal_to),
    );
    rules
}

fn equals(answer: &RatioExpression, input: &RatioExpression) -> bool {
    answer.components == input.components
}

fn is_equivalent(answer: &RatioExpression, input: &RatioExpression) -> bool {
    answer.to_lowest_form() == input.to_lowest_form()
}

fn has_number_of_terms_equal_to(answer: &RatioExpression, term_count: &u32) -> bool {
    answer.term_count() == *term_count as usize
}

/// `term_number` is 1-based; a term number of 0 or past the end never
/// matches.
fn has_specific_term_equal_to(
    answer: &RatioExpression,
    term_number: &u32,
    expected_value: &u32,
) -> bool {
    *term_number >= 1
        && answer.components.get(*term_number as usize - 1) == Some(expected_value)
}
