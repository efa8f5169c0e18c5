//! Rules for the `NumericInput` interaction.
//!
//! Answers are real numbers; integer submissions widen to `f64` before
//! matching. `Equals` is exact; tolerance-based grading is its own rule
//! with an authored `tol` parameter.

use rubric_core::classifier::{double_input_classifier, single_input_classifier};
use rubric_core::engine::RuleClassifierMap;

pub fn create_rule_classifiers() -> RuleClassifierMap {
    let mut rules = RuleClassifierMap::new();
    rules.insert("Equals", single_input_classifier::<f64>("x", equals));
    rules.insert("IsLessThan", single_input_classifier::<f64>("x", is_less_than));
    rules.insert(
        "IsGreaterThan",
        single_input_classifier::<f64>("x", is_greater_than),
    );
    rules.insert(
        "IsLessThanOrEqualTo",
        single_input_classifier::<f64>("x", is_less_than_or_equal_to),
    );
    rules.insert(
        "IsGreaterThanOrEqualTo",
        single_input_classifier::<f64>("x", is_greater_than_or_equal_to),
    );
    rules.insert(
        "IsInclusivelyBetween",
        double_input_classifier::<f64, f64, f64>("a", "b", is_inclusively_between),
    );
    rules.insert(
        "IsWithinTolerance",
        double_input_classifier::<f64, f64, f64>("x", "tol", is_within_tolerance),
    );
    rules
}

#[allow(clippy::float_cmp)]
fn equals(answer: &f64, input: &f64) -> bool {
    answer == input
}

fn is_less_than(answer: &f64, input: &f64) -> bool {
    answer < input
}

fn is_greater_than(answer: &f64, input: &f64) -> bool {
    answer > input
}

fn is_less_than_or_equal_to(answer: &f64, input: &f64) -> bool {
    answer <= input
}

fn is_greater_than_or_equal_to(answer: &f64, input: &f64) -> bool {
    answer >= input
}

fn is_inclusively_between(answer: &f64, low: &f64, high: &f64) -> bool {
    low <= answer && answer <= high
}

/// A negative tolerance can never be satisfied.
fn is_within_tolerance(answer: &f64, target: &f64, tolerance: &f64) -> bool {
    (answer - target).abs() <= *tolerance
}
