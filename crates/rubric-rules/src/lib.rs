//! rubric-rules — Per-interaction rule classifier catalogs.
//!
//! One module per interaction type, each contributing its rule-name →
//! classifier map; [`create_default_registry`] composes them into the
//! immutable two-level registry the engine dispatches against. Assembly is
//! a one-time, side-effect-free wiring step: build the registry (or an
//! engine via [`create_engine`]) at startup and share it for the life of
//! the process.

pub mod continue_interaction;
pub mod drag_and_drop_sort_input;
pub mod fraction_input;
pub mod image_click_input;
pub mod item_selection_input;
pub mod multiple_choice_input;
pub mod number_with_units;
pub mod numeric_input;
pub mod ratio_input;
pub mod text_input;

use rubric_core::engine::{ClassificationEngine, ClassifierRegistry};

/// Assembles the full interaction → rule → classifier registry.
pub fn create_default_registry() -> ClassifierRegistry {
    let mut registry = ClassifierRegistry::new();
    registry.insert("Continue", continue_interaction::create_rule_classifiers());
    registry.insert(
        "DragAndDropSortInput",
        drag_and_drop_sort_input::create_rule_classifiers(),
    );
    registry.insert("FractionInput", fraction_input::create_rule_classifiers());
    registry.insert("ImageClickInput", image_click_input::create_rule_classifiers());
    registry.insert(
        "ItemSelectionInput",
        item_selection_input::create_rule_classifiers(),
    );
    registry.insert(
        "MultipleChoiceInput",
        multiple_choice_input::create_rule_classifiers(),
    );
    registry.insert("NumberWithUnits", number_with_units::create_rule_classifiers());
    registry.insert("NumericInput", numeric_input::create_rule_classifiers());
    registry.insert("RatioInput", ratio_input::create_rule_classifiers());
    registry.insert("TextInput", text_input::create_rule_classifiers());
    registry
}

/// Builds a [`ClassificationEngine`] over the default registry.
pub fn create_engine() -> ClassificationEngine {
    ClassificationEngine::new(create_default_registry())
}
