//! Rules for the `DragAndDropSortInput` interaction.
//!
//! Answers are ordered lists of item groups (items dropped at the same
//! position share a group). Positions are compared by group index.

use rubric_core::classifier::{double_input_classifier, single_input_classifier};
use rubric_core::engine::RuleClassifierMap;
use rubric_core::model::ListOfSets;

pub fn create_rule_classifiers() -> RuleClassifierMap {
    let mut rules = RuleClassifierMap::new();
    rules.insert(
        "IsEqualToOrdering",
        single_input_classifier::<ListOfSets>("x", is_equal_to_ordering),
    );
    rules.insert(
        "IsEqualToOrderingWithOneItemAtIncorrectPosition",
        single_input_classifier::<ListOfSets>(
            "x",
            is_equal_to_ordering_with_one_item_at_incorrect_position,
        ),
    );
    rules.insert(
        "HasElementXAtPositionY",
        double_input_classifier::<ListOfSets, String, u32>(
            "x",
            "y",
            has_element_x_at_position_y,
        ),
    );
    rules.insert(
        "HasElementXBeforeElementY",
        double_input_classifier::<ListOfSets, String, String>(
            "x",
            "y",
            has_element_x_before_element_y,
        ),
    );
    rules
}

fn is_equal_to_ordering(answer: &ListOfSets, input: &ListOfSets) -> bool {
    answer.sets.len() == input.sets.len()
        && answer
            .sets
            .iter()
            .zip(&input.sets)
            .all(|(a, b)| a.is_set_equal_to(b))
}

/// Same items as the expected ordering, with exactly one item sitting at a
/// different group index.
fn is_equal_to_ordering_with_one_item_at_incorrect_position(
    answer: &ListOfSets,
    input: &ListOfSets,
) -> bool {
    let answer_positions = answer.item_positions();
    let input_positions = input.item_positions();
    if answer_positions.len() != input_positions.len() {
        return false;
    }

    let mut misplaced = 0usize;
    for (item, answer_index) in &answer_positions {
        match input.position_of(item) {
            Some(input_index) if input_index == *answer_index => {}
            Some(_) => misplaced += 1,
            // An item the expected ordering doesn't have at all.
            None => return false,
        }
    }
    misplaced == 1
}

/// `position` is 1-based.
fn has_element_x_at_position_y(answer: &ListOfSets, element: &String, position: &u32) -> bool {
    *position >= 1 && answer.position_of(element) == Some(*position as usize - 1)
}

fn has_element_x_before_element_y(answer: &ListOfSets, first: &String, second: &String) -> bool {
    match (answer.position_of(first), answer.position_of(second)) {
        (Some(first_index), Some(second_index)) => first_index < second_index,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use rubric_core::model::{AnswerValue, RuleInputs, StringSet};

    fn ordering(groups: &[&[&str]]) -> ListOfSets {
        ListOfSets {
            sets: groups
                .iter()
                .map(|group| StringSet::new(group.iter().map(|s| s.to_string()).collect()))
                .collect(),
        }
    }

    fn ordering_answer(groups: &[&[&str]]) -> AnswerValue {
        AnswerValue::ListOfSets(ordering(groups))
    }

    fn ordering_inputs(groups: &[&[&str]]) -> RuleInputs {
        HashMap::from([("x".to_string(), AnswerValue::ListOfSets(ordering(groups)))])
    }

    #[test]
    fn equal_ordering_ignores_order_within_groups() {
        let rules = create_rule_classifiers();
        assert!(rules["IsEqualToOrdering"]
            .matches(
                &ordering_answer(&[&["a"], &["b", "c"]]),
                &ordering_inputs(&[&["a"], &["c", "b"]])
            )
            .unwrap());
        assert!(!rules["IsEqualToOrdering"]
            .matches(
                &ordering_answer(&[&["b", "c"], &["a"]]),
                &ordering_inputs(&[&["a"], &["b", "c"]])
            )
            .unwrap());
    }

    #[test]
    fn one_item_misplaced_matches() {
        let rules = create_rule_classifiers();
        // "d" moved from group 2 to group 0; everything else in place.
        assert!(rules["IsEqualToOrderingWithOneItemAtIncorrectPosition"]
            .matches(
                &ordering_answer(&[&["a", "d"], &["b", "c"], &[]]),
                &ordering_inputs(&[&["a"], &["b", "c"], &["d"]])
            )
            .unwrap());
    }

    #[test]
    fn zero_or_two_misplaced_items_do_not_match() {
        let rules = create_rule_classifiers();
        assert!(!rules["IsEqualToOrderingWithOneItemAtIncorrectPosition"]
            .matches(
                &ordering_answer(&[&["a"], &["b"]]),
                &ordering_inputs(&[&["a"], &["b"]])
            )
            .unwrap());
        assert!(!rules["IsEqualToOrderingWithOneItemAtIncorrectPosition"]
            .matches(
                &ordering_answer(&[&["b"], &["a"]]),
                &ordering_inputs(&[&["a"], &["b"]])
            )
            .unwrap());
    }

    #[test]
    fn element_at_position_is_one_based() {
        let rules = create_rule_classifiers();
        let inputs = HashMap::from([
            ("x".to_string(), AnswerValue::NormalizedString("b".into())),
            ("y".to_string(), AnswerValue::NonNegativeInt(2)),
        ]);
        assert!(rules["HasElementXAtPositionY"]
            .matches(&ordering_answer(&[&["a"], &["b"]]), &inputs)
            .unwrap());
        assert!(!rules["HasElementXAtPositionY"]
            .matches(&ordering_answer(&[&["b"], &["a"]]), &inputs)
            .unwrap());
    }

    #[test]
    fn element_before_element() {
        let rules = create_rule_classifiers();
        let inputs = HashMap::from([
            ("x".to_string(), AnswerValue::NormalizedString("a".into())),
            ("y".to_string(), AnswerValue::NormalizedString("c".into())),
        ]);
        assert!(rules["HasElementXBeforeElementY"]
            .matches(&ordering_answer(&[&["a"], &["b"], &["c"]]), &inputs)
            .unwrap());
        assert!(!rules["HasElementXBeforeElementY"]
            .matches(&ordering_answer(&[&["c"], &["b"], &["a"]]), &inputs)
            .unwrap());
        // Items sharing a group are not before one another.
        assert!(!rules["HasElementXBeforeElementY"]
            .matches(&ordering_answer(&[&["a", "c"], &["b"]]), &inputs)
            .unwrap());
    }
}
