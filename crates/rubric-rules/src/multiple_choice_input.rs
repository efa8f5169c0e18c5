//! Rules for the `MultipleChoiceInput` interaction.
//!
//! Answers are 0-based option indices.

use rubric_core::classifier::single_input_classifier;
use rubric_core::engine::RuleClassifierMap;

pub fn create_rule_classifiers() -> RuleClassifierMap {
    let mut rules = RuleClassifierMap::new();
    rules.insert("Equals", single_input_classifier::<u32>("x", equals));
    rules
}

fn equals(answer: &u32, input: &u32) -> bool {
    answer == input
}
