//! The `rubric validate` command.

use std::path::PathBuf;

use anyhow::Result;

use rubric_core::parser::{load_interaction_directory, parse_interaction, validate_interaction};
use rubric_rules::create_default_registry;

pub fn execute(interaction_path: PathBuf) -> Result<()> {
    let interactions = if interaction_path.is_dir() {
        load_interaction_directory(&interaction_path)?
    } else {
        vec![parse_interaction(&interaction_path)?]
    };

    let registry = create_default_registry();
    let mut total_warnings = 0;

    for interaction in &interactions {
        println!(
            "Interaction: {} ({} answer groups)",
            interaction.id,
            interaction.answer_groups.len()
        );

        let warnings = validate_interaction(interaction, &registry);
        for w in &warnings {
            let prefix = w
                .group_index
                .map(|index| format!("  [group {index}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All interactions valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
        std::process::exit(1);
    }

    Ok(())
}
