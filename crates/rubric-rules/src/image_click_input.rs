//! Rules for the `ImageClickInput` interaction.
//!
//! Click geometry is resolved upstream; by classification time the answer
//! carries the labels of every authored region containing the click, and
//! `IsInRegion` is a plain membership test.

use rubric_core::classifier::multi_type_single_input_classifier;
use rubric_core::engine::RuleClassifierMap;
use rubric_core::model::ClickOnImage;

pub fn create_rule_classifiers() -> RuleClassifierMap {
    let mut rules = RuleClassifierMap::new();
    rules.insert(
        "IsInRegion",
        multi_type_single_input_classifier::<ClickOnImage, String>("x", is_in_region),
    );
    rules
}

fn is_in_region(answer: &ClickOnImage, region: &String) -> bool {
    answer.clicked_regions.contains(region)
}
