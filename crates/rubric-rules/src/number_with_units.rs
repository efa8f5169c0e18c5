//! Rules for the `NumberWithUnits` interaction.
//!
//! Units are compared as unordered collections; no unit conversion is
//! attempted ("100 cm" never matches "1 m").

use rubric_core::classifier::single_input_classifier;
use rubric_core::engine::RuleClassifierMap;
use rubric_core::model::NumberWithUnits;

pub fn create_rule_classifiers() -> RuleClassifierMap {
    let mut rules = RuleClassifierMap::new();
    rules.insert(
        "IsEqualTo",
        single_input_classifier::<NumberWithUnits>("f", is_equal_to),
    );
    rules.insert(
        "IsEquivalentTo",
        single_input_classifier::<NumberWithUnits>("f", is_equivalent_to),
    );
    rules
}

/// Same magnitude representation (a fraction never equals a real here)
/// and the same units.
fn is_equal_to(answer: &NumberWithUnits, input: &NumberWithUnits) -> bool {
    answer.value == input.value && answer.has_same_units_as(input)
}

/// Numerically equal magnitude (fraction and real compare by value) and
/// the same units.
#[allow(clippy::float_cmp)]
fn is_equivalent_to(answer: &NumberWithUnits, input: &NumberWithUnits) -> bool {
    answer.value.to_f64() == input.value.to_f64() && answer.has_same_units_as(input)
}
