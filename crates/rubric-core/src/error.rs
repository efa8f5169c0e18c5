//! Classification error types.
//!
//! Every variant signals an authored-content or wiring defect, never a
//! graded "wrong answer". Callers abort grading for the response and
//! surface a generic unable-to-grade state; the diagnostic text is for
//! authors and logs, not learners.

use thiserror::Error;

use crate::model::ValueKind;

/// Errors raised while classifying an answer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassificationError {
    /// A rule spec omitted a parameter the classifier reads.
    #[error(
        "Expected classifier inputs to contain parameter with name '{name}' but had: [{provided}]"
    )]
    MissingParameter { name: String, provided: String },

    /// The submitted answer's case doesn't match the classifier's contract.
    #[error("Expected answer to be of type {expected} not {actual}")]
    UnexpectedAnswerType {
        expected: ValueKind,
        actual: ValueKind,
    },

    /// A named input's case doesn't match the classifier's contract.
    #[error("Expected input value to be of type {expected} not {actual}")]
    UnexpectedInputType {
        expected: ValueKind,
        actual: ValueKind,
    },

    /// The interaction has no classifier registered under this rule name.
    #[error("Expected interaction {interaction_id} to have classifier for rule type: {rule_type}")]
    UnknownRule {
        interaction_id: String,
        rule_type: String,
    },

    /// No rule catalog is registered for this interaction id.
    #[error("Encountered unknown interaction type: {interaction_id}")]
    UnknownInteraction { interaction_id: String },
}

impl ClassificationError {
    /// Builds [`ClassificationError::MissingParameter`], listing the
    /// parameter names that were supplied.
    pub fn missing_parameter<'a>(
        name: &str,
        provided: impl Iterator<Item = &'a String>,
    ) -> ClassificationError {
        let mut names: Vec<&str> = provided.map(String::as_str).collect();
        names.sort_unstable();
        ClassificationError::MissingParameter {
            name: name.to_string(),
            provided: names.join(", "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::model::AnswerValue;

    #[test]
    fn missing_parameter_lists_supplied_names() {
        let mut inputs = HashMap::new();
        inputs.insert("tol".to_string(), AnswerValue::Real(0.5));
        let error = ClassificationError::missing_parameter("x", inputs.keys());
        assert_eq!(
            error.to_string(),
            "Expected classifier inputs to contain parameter with name 'x' but had: [tol]"
        );
    }

    #[test]
    fn unexpected_types_name_both_cases() {
        let error = ClassificationError::UnexpectedInputType {
            expected: ValueKind::Real,
            actual: ValueKind::NormalizedString,
        };
        assert_eq!(
            error.to_string(),
            "Expected input value to be of type REAL not NORMALIZED_STRING"
        );
    }

    #[test]
    fn unknown_rule_names_interaction_and_rule() {
        let error = ClassificationError::UnknownRule {
            interaction_id: "TextInput".into(),
            rule_type: "Reverses".into(),
        };
        assert_eq!(
            error.to_string(),
            "Expected interaction TextInput to have classifier for rule type: Reverses"
        );
    }
}
