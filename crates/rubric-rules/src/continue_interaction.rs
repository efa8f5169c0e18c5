//! Rules for the `Continue` interaction.
//!
//! Continue buttons have nothing to grade: no rules are registered and
//! every submission resolves to the interaction's default outcome.

use rubric_core::engine::RuleClassifierMap;

pub fn create_rule_classifiers() -> RuleClassifierMap {
    RuleClassifierMap::new()
}
