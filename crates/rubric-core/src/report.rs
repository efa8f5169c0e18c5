//! Grading report types with JSON persistence.
//!
//! A report records one classification run so the external feedback layer
//! (and authors debugging content) can see what was graded and where the
//! learner was routed.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{AnswerValue, ClassificationResult, Interaction};

/// A record of one answer classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the answer was graded.
    pub graded_at: DateTime<Utc>,
    /// Interaction the answer was submitted to.
    pub interaction_id: String,
    /// The submitted answer.
    pub answer: AnswerValue,
    /// Resolved outcome and misconception tagging.
    pub result: ClassificationResult,
    /// 0-based index of the matched answer group, or `None` when the
    /// default outcome applied.
    pub matched_group_index: Option<usize>,
}

impl ClassificationReport {
    /// Builds a report for a completed classification, recovering the
    /// matched group index by outcome identity.
    pub fn for_classification(
        interaction: &Interaction,
        answer: AnswerValue,
        result: ClassificationResult,
    ) -> Self {
        let matched_group_index = interaction
            .answer_groups
            .iter()
            .position(|group| &group.outcome == result.outcome());
        Self {
            id: Uuid::new_v4(),
            graded_at: Utc::now(),
            interaction_id: interaction.id.clone(),
            answer,
            result,
            matched_group_index,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ClassificationReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
