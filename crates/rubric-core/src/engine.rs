//! Central classification engine.
//!
//! Holds the immutable two-level rule registry (interaction id → rule name
//! → classifier) assembled once at startup, and resolves submitted answers
//! either against a single named rule or against a full authored
//! interaction's answer groups.

use std::collections::HashMap;

use crate::classifier::RuleClassifier;
use crate::error::ClassificationError;
use crate::model::{AnswerValue, ClassificationResult, Interaction, RuleInputs};

/// Rule-name → classifier catalog for one interaction type.
pub type RuleClassifierMap = HashMap<&'static str, RuleClassifier>;

/// The full registry: one catalog per interaction id. Interactions without
/// rules (e.g. "Continue") register an empty catalog.
pub type ClassifierRegistry = HashMap<&'static str, RuleClassifierMap>;

/// The central answer classification engine.
///
/// Construction is the one-time wiring step; afterwards the engine is
/// read-only and safe to share across threads. Each classification call is
/// independent and idempotent for identical inputs.
pub struct ClassificationEngine {
    registry: ClassifierRegistry,
}

impl ClassificationEngine {
    pub fn new(registry: ClassifierRegistry) -> Self {
        Self { registry }
    }

    /// Interaction ids with a registered rule catalog, sorted.
    pub fn interaction_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.registry.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Rule names registered for `interaction_id`, sorted.
    pub fn rule_names(&self, interaction_id: &str) -> Option<Vec<&'static str>> {
        self.registry.get(interaction_id).map(|rules| {
            let mut names: Vec<&'static str> = rules.keys().copied().collect();
            names.sort_unstable();
            names
        })
    }

    /// Resolves a single (interaction, rule) pair and invokes it with the
    /// submitted answer and the authored parameter map.
    pub fn classify_answer(
        &self,
        interaction_id: &str,
        rule_type: &str,
        answer: &AnswerValue,
        inputs: &RuleInputs,
    ) -> Result<bool, ClassificationError> {
        let rules = self.registry.get(interaction_id).ok_or_else(|| {
            ClassificationError::UnknownInteraction {
                interaction_id: interaction_id.to_string(),
            }
        })?;
        let classifier =
            rules
                .get(rule_type)
                .ok_or_else(|| ClassificationError::UnknownRule {
                    interaction_id: interaction_id.to_string(),
                    rule_type: rule_type.to_string(),
                })?;
        classifier.matches(answer, inputs)
    }

    /// Classifies an answer against a full authored interaction.
    ///
    /// Answer groups are tried in authored order; a group matches as soon
    /// as any one of its rule specs matches, and the first matching group's
    /// outcome is returned. When no group matches, the interaction's
    /// default outcome applies.
    pub fn classify(
        &self,
        interaction: &Interaction,
        answer: &AnswerValue,
    ) -> Result<ClassificationResult, ClassificationError> {
        for group in &interaction.answer_groups {
            for rule_spec in &group.rule_specs {
                let matched = self
                    .classify_answer(&interaction.id, &rule_spec.rule_type, answer, &rule_spec.inputs)
                    .inspect_err(|error| {
                        tracing::error!(
                            interaction_id = %interaction.id,
                            rule_type = %rule_spec.rule_type,
                            "aborting grading: {error}"
                        );
                    })?;
                if matched {
                    let outcome = group.outcome.clone();
                    return Ok(match &group.tagged_skill_misconception_id {
                        Some(id) => ClassificationResult::OutcomeWithMisconception {
                            outcome,
                            tagged_skill_misconception_id: id.clone(),
                        },
                        None => ClassificationResult::OutcomeOnly(outcome),
                    });
                }
            }
        }

        // Unknown interactions must fail even when no groups are authored.
        if !self.registry.contains_key(interaction.id.as_str()) {
            return Err(ClassificationError::UnknownInteraction {
                interaction_id: interaction.id.clone(),
            });
        }

        Ok(ClassificationResult::OutcomeOnly(
            interaction.default_outcome.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::classifier::single_input_classifier;
    use crate::model::{AnswerGroup, Feedback, Outcome, RuleSpec};

    fn test_registry() -> ClassifierRegistry {
        let mut rules: RuleClassifierMap = HashMap::new();
        rules.insert(
            "Equals",
            single_input_classifier::<u32>("x", |answer, input| answer == input),
        );
        let mut registry = ClassifierRegistry::new();
        registry.insert("MultipleChoiceInput", rules);
        registry.insert("Continue", RuleClassifierMap::new());
        registry
    }

    fn outcome(dest: &str) -> Outcome {
        Outcome {
            dest_state_name: dest.into(),
            feedback: Feedback {
                content_id: format!("content_{dest}"),
                html: format!("Feedback for {dest}"),
            },
            labelled_as_correct: false,
        }
    }

    fn equals_spec(index: u32) -> RuleSpec {
        RuleSpec {
            rule_type: "Equals".into(),
            inputs: HashMap::from([("x".to_string(), AnswerValue::NonNegativeInt(index))]),
        }
    }

    #[test]
    fn classify_answer_dispatches_to_registered_rule() {
        let engine = ClassificationEngine::new(test_registry());
        let inputs = HashMap::from([("x".to_string(), AnswerValue::NonNegativeInt(2))]);

        assert!(engine
            .classify_answer(
                "MultipleChoiceInput",
                "Equals",
                &AnswerValue::NonNegativeInt(2),
                &inputs
            )
            .unwrap());
        assert!(!engine
            .classify_answer(
                "MultipleChoiceInput",
                "Equals",
                &AnswerValue::NonNegativeInt(1),
                &inputs
            )
            .unwrap());
    }

    #[test]
    fn unknown_interaction_is_an_error() {
        let engine = ClassificationEngine::new(test_registry());

        let error = engine
            .classify_answer(
                "NoSuchInteraction",
                "Equals",
                &AnswerValue::NonNegativeInt(0),
                &HashMap::new(),
            )
            .unwrap_err();
        assert!(error
            .to_string()
            .contains("Encountered unknown interaction type"));
    }

    #[test]
    fn unknown_rule_is_an_error() {
        let engine = ClassificationEngine::new(test_registry());

        let error = engine
            .classify_answer(
                "MultipleChoiceInput",
                "NoSuchRule",
                &AnswerValue::NonNegativeInt(0),
                &HashMap::new(),
            )
            .unwrap_err();
        assert!(error
            .to_string()
            .contains("Expected interaction MultipleChoiceInput to have classifier for rule type"));
    }

    #[test]
    fn classify_returns_first_matching_group() {
        let engine = ClassificationEngine::new(test_registry());
        let interaction = Interaction {
            id: "MultipleChoiceInput".into(),
            answer_groups: vec![
                AnswerGroup {
                    rule_specs: vec![equals_spec(0)],
                    outcome: outcome("first"),
                    tagged_skill_misconception_id: None,
                },
                AnswerGroup {
                    rule_specs: vec![equals_spec(1)],
                    outcome: outcome("second"),
                    tagged_skill_misconception_id: None,
                },
            ],
            default_outcome: outcome("default"),
        };

        let result = engine
            .classify(&interaction, &AnswerValue::NonNegativeInt(1))
            .unwrap();
        assert_eq!(result.outcome().dest_state_name, "second");
        assert_eq!(result.tagged_skill_misconception_id(), None);
    }

    #[test]
    fn classify_falls_back_to_default_outcome() {
        let engine = ClassificationEngine::new(test_registry());
        let interaction = Interaction {
            id: "MultipleChoiceInput".into(),
            answer_groups: vec![AnswerGroup {
                rule_specs: vec![equals_spec(0)],
                outcome: outcome("first"),
                tagged_skill_misconception_id: None,
            }],
            default_outcome: outcome("default"),
        };

        let result = engine
            .classify(&interaction, &AnswerValue::NonNegativeInt(7))
            .unwrap();
        assert_eq!(result.outcome().dest_state_name, "default");
    }

    #[test]
    fn classify_surfaces_tagged_misconception() {
        let engine = ClassificationEngine::new(test_registry());
        let interaction = Interaction {
            id: "MultipleChoiceInput".into(),
            answer_groups: vec![AnswerGroup {
                rule_specs: vec![equals_spec(3)],
                outcome: outcome("first"),
                tagged_skill_misconception_id: Some("test-misconception-id-0".into()),
            }],
            default_outcome: outcome("default"),
        };

        let result = engine
            .classify(&interaction, &AnswerValue::NonNegativeInt(3))
            .unwrap();
        assert_eq!(
            result.tagged_skill_misconception_id(),
            Some("test-misconception-id-0")
        );
    }

    #[test]
    fn interaction_without_rules_always_takes_default_outcome() {
        let engine = ClassificationEngine::new(test_registry());
        let interaction = Interaction {
            id: "Continue".into(),
            answer_groups: vec![],
            default_outcome: outcome("default"),
        };

        let result = engine
            .classify(
                &interaction,
                &AnswerValue::NormalizedString("Please continue.".into()),
            )
            .unwrap();
        assert_eq!(result.outcome().dest_state_name, "default");
    }

    #[test]
    fn classify_rejects_unknown_interaction_even_without_groups() {
        let engine = ClassificationEngine::new(test_registry());
        let interaction = Interaction {
            id: "NoSuchInteraction".into(),
            answer_groups: vec![],
            default_outcome: outcome("default"),
        };

        let error = engine
            .classify(&interaction, &AnswerValue::NonNegativeInt(0))
            .unwrap_err();
        assert_eq!(
            error,
            ClassificationError::UnknownInteraction {
                interaction_id: "NoSuchInteraction".into()
            }
        );
    }
}
