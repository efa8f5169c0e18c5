//! The `rubric grade` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use rubric_core::model::AnswerValue;
use rubric_core::parser::{parse_interaction, validate_interaction};
use rubric_core::report::ClassificationReport;
use rubric_rules::create_default_registry;

pub fn execute(
    interaction_path: PathBuf,
    answer_json: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let interaction = parse_interaction(&interaction_path)?;
    let answer: AnswerValue =
        serde_json::from_str(&answer_json).context("failed to parse answer JSON")?;

    let registry = create_default_registry();
    for warning in validate_interaction(&interaction, &registry) {
        tracing::warn!(
            "{}: {}",
            interaction_path.display(),
            warning.message
        );
    }

    let engine = rubric_core::engine::ClassificationEngine::new(registry);
    let result = engine
        .classify(&interaction, &answer)
        .context("classification failed")?;

    let report = ClassificationReport::for_classification(&interaction, answer, result);

    println!("Interaction: {}", report.interaction_id);
    match report.matched_group_index {
        Some(index) => println!("Matched answer group: {index}"),
        None => println!("No answer group matched; default outcome applies."),
    }
    let outcome = report.result.outcome();
    println!("Destination: {}", outcome.dest_state_name);
    if !outcome.feedback.html.is_empty() {
        println!("Feedback: {}", outcome.feedback.html);
    }
    if outcome.labelled_as_correct {
        println!("Labelled as correct.");
    }
    if let Some(id) = report.result.tagged_skill_misconception_id() {
        println!("Tagged skill misconception: {id}");
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
