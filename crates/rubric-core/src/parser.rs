//! TOML authored-interaction parser.
//!
//! Loads interactions from TOML files and directories, and validates them
//! against a rule registry before grading ever runs.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::engine::ClassifierRegistry;
use crate::model::{AnswerGroup, AnswerValue, Feedback, Interaction, Outcome, RuleSpec};

/// Intermediate TOML structure for parsing interaction files.
#[derive(Debug, Deserialize)]
struct TomlInteractionFile {
    interaction: TomlInteractionHeader,
    #[serde(default)]
    answer_groups: Vec<TomlAnswerGroup>,
}

#[derive(Debug, Deserialize)]
struct TomlInteractionHeader {
    id: String,
    default_outcome: TomlOutcome,
}

#[derive(Debug, Deserialize)]
struct TomlAnswerGroup {
    #[serde(default)]
    rule_specs: Vec<TomlRuleSpec>,
    outcome: TomlOutcome,
    #[serde(default)]
    tagged_skill_misconception_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlRuleSpec {
    rule_type: String,
    #[serde(default)]
    inputs: HashMap<String, AnswerValue>,
}

#[derive(Debug, Deserialize)]
struct TomlOutcome {
    dest_state_name: String,
    feedback_content_id: String,
    #[serde(default)]
    feedback_html: String,
    #[serde(default)]
    labelled_as_correct: bool,
}

impl TomlOutcome {
    fn into_outcome(self) -> Outcome {
        Outcome {
            dest_state_name: self.dest_state_name,
            feedback: Feedback {
                content_id: self.feedback_content_id,
                html: self.feedback_html,
            },
            labelled_as_correct: self.labelled_as_correct,
        }
    }
}

/// Parse a single TOML file into an [`Interaction`].
pub fn parse_interaction(path: &Path) -> Result<Interaction> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read interaction file: {}", path.display()))?;

    parse_interaction_str(&content, path)
}

/// Parse a TOML string into an [`Interaction`] (useful for testing).
pub fn parse_interaction_str(content: &str, source_path: &Path) -> Result<Interaction> {
    let parsed: TomlInteractionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let answer_groups = parsed
        .answer_groups
        .into_iter()
        .map(|group| AnswerGroup {
            rule_specs: group
                .rule_specs
                .into_iter()
                .map(|spec| RuleSpec {
                    rule_type: spec.rule_type,
                    inputs: spec.inputs,
                })
                .collect(),
            outcome: group.outcome.into_outcome(),
            tagged_skill_misconception_id: group.tagged_skill_misconception_id,
        })
        .collect();

    Ok(Interaction {
        id: parsed.interaction.id,
        answer_groups,
        default_outcome: parsed.interaction.default_outcome.into_outcome(),
    })
}

/// Recursively load all `.toml` interaction files from a directory.
pub fn load_interaction_directory(dir: &Path) -> Result<Vec<Interaction>> {
    let mut interactions = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            interactions.extend(load_interaction_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_interaction(&path) {
                Ok(interaction) => interactions.push(interaction),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(interactions)
}

/// A warning from interaction validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The 0-based answer group index (if applicable).
    pub group_index: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate an authored interaction against a rule registry.
///
/// Every warning here would become a hard [`ClassificationError`] (or a
/// group that can never match) once a learner submits an answer, so
/// authors get them ahead of time.
///
/// [`ClassificationError`]: crate::error::ClassificationError
pub fn validate_interaction(
    interaction: &Interaction,
    registry: &ClassifierRegistry,
) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let rules = registry.get(interaction.id.as_str());
    if rules.is_none() {
        warnings.push(ValidationWarning {
            group_index: None,
            message: format!("unknown interaction id: {}", interaction.id),
        });
    }

    for (index, group) in interaction.answer_groups.iter().enumerate() {
        if group.rule_specs.is_empty() {
            warnings.push(ValidationWarning {
                group_index: Some(index),
                message: "answer group has no rule specs and can never match".into(),
            });
        }

        if let Some(rules) = rules {
            for spec in &group.rule_specs {
                if !rules.contains_key(spec.rule_type.as_str()) {
                    warnings.push(ValidationWarning {
                        group_index: Some(index),
                        message: format!(
                            "unknown rule type for {}: {}",
                            interaction.id, spec.rule_type
                        ),
                    });
                }
            }
        }

        if group.outcome.dest_state_name.trim().is_empty() {
            warnings.push(ValidationWarning {
                group_index: Some(index),
                message: "outcome has an empty destination state".into(),
            });
        }
    }

    warnings
}
