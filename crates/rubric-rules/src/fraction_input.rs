//! Rules for the `FractionInput` interaction.
//!
//! Fractions keep the learner's spelling (sign, whole number, numerator,
//! denominator); equivalence rules reduce explicitly, exact rules compare
//! the spelling itself.

use rubric_core::classifier::{
    multi_type_single_input_classifier, no_input_classifier, single_input_classifier,
};
use rubric_core::engine::RuleClassifierMap;
use rubric_core::model::Fraction;

pub fn create_rule_classifiers() -> RuleClassifierMap {
    let mut rules = RuleClassifierMap::new();
    rules.insert(
        "IsExactlyEqualTo",
        single_input_classifier::<Fraction>("f", is_exactly_equal_to),
    );
    rules.insert(
        "IsEquivalentTo",
        single_input_classifier::<Fraction>("f", is_equivalent_to),
    );
    rules.insert(
        "IsEquivalentToAndInSimplestForm",
        single_input_classifier::<Fraction>("f", is_equivalent_to_and_in_simplest_form),
    );
    rules.insert(
        "IsLessThan",
        single_input_classifier::<Fraction>("f", is_less_than),
    );
    rules.insert(
        "IsGreaterThan",
        single_input_classifier::<Fraction>("f", is_greater_than),
    );
    rules.insert(
        "HasNumeratorEqualTo",
        multi_type_single_input_classifier::<Fraction, i32>("x", has_numerator_equal_to),
    );
    rules.insert(
        "HasDenominatorEqualTo",
        multi_type_single_input_classifier::<Fraction, u32>("x", has_denominator_equal_to),
    );
    rules.insert(
        "HasIntegerPartEqualTo",
        multi_type_single_input_classifier::<Fraction, i32>("x", has_integer_part_equal_to),
    );
    rules.insert(
        "HasNoFractionalPart",
        no_input_classifier::<Fraction>(has_no_fractional_part),
    );
    rules.insert(
        "HasFractionalPartExactlyEqualTo",
        single_input_classifier::<Fraction>("f", has_fractional_part_exactly_equal_to),
    );
    rules
}

fn is_exactly_equal_to(answer: &Fraction, input: &Fraction) -> bool {
    answer == input
}

fn is_equivalent_to(answer: &Fraction, input: &Fraction) -> bool {
    answer.to_simplest_form() == input.to_simplest_form()
}

fn is_equivalent_to_and_in_simplest_form(answer: &Fraction, input: &Fraction) -> bool {
    is_equivalent_to(answer, input) && answer.is_in_simplest_form()
}

fn is_less_than(answer: &Fraction, input: &Fraction) -> bool {
    answer.to_f64() < input.to_f64()
}

fn is_greater_than(answer: &Fraction, input: &Fraction) -> bool {
    answer.to_f64() > input.to_f64()
}

fn has_numerator_equal_to(answer: &Fraction, input: &i32) -> bool {
    answer.signed_numerator() == *input
}

fn has_denominator_equal_to(answer: &Fraction, input: &u32) -> bool {
    answer.denominator == *input
}

fn has_integer_part_equal_to(answer: &Fraction, input: &i32) -> bool {
    answer.signed_whole_number() == *input
}

fn has_no_fractional_part(answer: &Fraction) -> bool {
    !answer.has_fractional_part()
}

/// Compares only the fractional spelling, ignoring sign and whole number.
fn has_fractional_part_exactly_equal_to(answer: &Fraction, input: &Fraction) -> bool {
    answer.numerator == input.numerator && answer.denominator == input.denominator
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use rubric_core::model::{AnswerValue, RuleInputs};

    fn fraction(is_negative: bool, whole_number: u32, numerator: u32, denominator: u32) -> Fraction {
        Fraction {
            is_negative,
            whole_number,
            numerator,
            denominator,
        }
    }

    fn fraction_answer(f: Fraction) -> AnswerValue {
        AnswerValue::Fraction(f)
    }

    fn fraction_inputs(f: Fraction) -> RuleInputs {
        HashMap::from([("f".to_string(), AnswerValue::Fraction(f))])
    }

    #[test]
    fn exactly_equal_requires_same_spelling() {
        let rules = create_rule_classifiers();
        assert!(rules["IsExactlyEqualTo"]
            .matches(
                &fraction_answer(fraction(false, 0, 2, 4)),
                &fraction_inputs(fraction(false, 0, 2, 4))
            )
            .unwrap());
        // 2/4 == 1/2 numerically, but not exactly.
        assert!(!rules["IsExactlyEqualTo"]
            .matches(
                &fraction_answer(fraction(false, 0, 2, 4)),
                &fraction_inputs(fraction(false, 0, 1, 2))
            )
            .unwrap());
    }

    #[test]
    fn equivalent_reduces_both_sides() {
        let rules = create_rule_classifiers();
        assert!(rules["IsEquivalentTo"]
            .matches(
                &fraction_answer(fraction(false, 0, 2, 4)),
                &fraction_inputs(fraction(false, 0, 1, 2))
            )
            .unwrap());
        // 7/2 == 3 1/2 after folding out the whole part.
        assert!(rules["IsEquivalentTo"]
            .matches(
                &fraction_answer(fraction(false, 0, 7, 2)),
                &fraction_inputs(fraction(false, 3, 1, 2))
            )
            .unwrap());
        assert!(!rules["IsEquivalentTo"]
            .matches(
                &fraction_answer(fraction(true, 0, 1, 2)),
                &fraction_inputs(fraction(false, 0, 1, 2))
            )
            .unwrap());
    }

    #[test]
    fn simplest_form_variant_rejects_unreduced_answer() {
        let rules = create_rule_classifiers();
        assert!(rules["IsEquivalentToAndInSimplestForm"]
            .matches(
                &fraction_answer(fraction(false, 0, 1, 2)),
                &fraction_inputs(fraction(false, 0, 2, 4))
            )
            .unwrap());
        assert!(!rules["IsEquivalentToAndInSimplestForm"]
            .matches(
                &fraction_answer(fraction(false, 0, 2, 4)),
                &fraction_inputs(fraction(false, 0, 1, 2))
            )
            .unwrap());
    }

    #[test]
    fn comparisons_respect_sign_and_whole_number() {
        let rules = create_rule_classifiers();
        assert!(rules["IsLessThan"]
            .matches(
                &fraction_answer(fraction(false, 0, 1, 3)),
                &fraction_inputs(fraction(false, 0, 1, 2))
            )
            .unwrap());
        assert!(!rules["IsLessThan"]
            .matches(
                &fraction_answer(fraction(false, 0, 1, 3)),
                &fraction_inputs(fraction(true, 0, 1, 3))
            )
            .unwrap());
        assert!(rules["IsGreaterThan"]
            .matches(
                &fraction_answer(fraction(false, 123, 1, 2)),
                &fraction_inputs(fraction(false, 0, 1, 2))
            )
            .unwrap());
        assert!(rules["IsLessThan"]
            .matches(
                &fraction_answer(fraction(true, 123, 1, 2)),
                &fraction_inputs(fraction(false, 123, 1, 2))
            )
            .unwrap());
    }

    #[test]
    fn numerator_rule_applies_sign() {
        let rules = create_rule_classifiers();
        let inputs = HashMap::from([("x".to_string(), AnswerValue::SignedInt(-1))]);
        assert!(rules["HasNumeratorEqualTo"]
            .matches(&fraction_answer(fraction(true, 0, 1, 2)), &inputs)
            .unwrap());
        assert!(!rules["HasNumeratorEqualTo"]
            .matches(&fraction_answer(fraction(false, 0, 1, 2)), &inputs)
            .unwrap());
    }

    #[test]
    fn denominator_rule() {
        let rules = create_rule_classifiers();
        let inputs = HashMap::from([("x".to_string(), AnswerValue::NonNegativeInt(2))]);
        assert!(rules["HasDenominatorEqualTo"]
            .matches(&fraction_answer(fraction(false, 0, 1, 2)), &inputs)
            .unwrap());
        assert!(!rules["HasDenominatorEqualTo"]
            .matches(&fraction_answer(fraction(false, 0, 1, 3)), &inputs)
            .unwrap());
    }

    #[test]
    fn integer_part_rule_applies_sign() {
        let rules = create_rule_classifiers();
        let inputs = HashMap::from([("x".to_string(), AnswerValue::SignedInt(-5))]);
        assert!(rules["HasIntegerPartEqualTo"]
            .matches(&fraction_answer(fraction(true, 5, 1, 2)), &inputs)
            .unwrap());
    }

    #[test]
    fn no_fractional_part_accepts_integral_magnitudes() {
        let rules = create_rule_classifiers();
        let no_inputs = HashMap::new();
        assert!(rules["HasNoFractionalPart"]
            .matches(&fraction_answer(fraction(false, 2, 0, 1)), &no_inputs)
            .unwrap());
        assert!(rules["HasNoFractionalPart"]
            .matches(&fraction_answer(fraction(false, 0, 4, 2)), &no_inputs)
            .unwrap());
        assert!(!rules["HasNoFractionalPart"]
            .matches(&fraction_answer(fraction(false, 0, 1, 2)), &no_inputs)
            .unwrap());
    }

    #[test]
    fn fractional_part_rule_ignores_sign_and_whole_number() {
        let rules = create_rule_classifiers();
        assert!(rules["HasFractionalPartExactlyEqualTo"]
            .matches(
                &fraction_answer(fraction(true, 7, 1, 2)),
                &fraction_inputs(fraction(false, 0, 1, 2))
            )
            .unwrap());
        assert!(!rules["HasFractionalPartExactlyEqualTo"]
            .matches(
                &fraction_answer(fraction(false, 0, 2, 4)),
                &fraction_inputs(fraction(false, 0, 1, 2))
            )
            .unwrap());
    }

    #[test]
    fn wrong_answer_case_is_reported() {
        let rules = create_rule_classifiers();
        let error = rules["IsEquivalentTo"]
            .matches(
                &AnswerValue::Real(0.5),
                &fraction_inputs(fraction(false, 0, 1, 2)),
            )
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Expected answer to be of type FRACTION not REAL"
        );
    }
}
