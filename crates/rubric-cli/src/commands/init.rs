//! The `rubric init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("interactions")?;
    let example_path = std::path::Path::new("interactions/example.toml");
    if example_path.exists() {
        println!("interactions/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_INTERACTION)?;
        println!("Created interactions/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit interactions/example.toml with your answer groups");
    println!("  2. Run: rubric validate --interaction interactions/example.toml");
    println!(
        "  3. Run: rubric grade --interaction interactions/example.toml --answer '{{\"non_negative_int\": 2}}'"
    );

    Ok(())
}

const EXAMPLE_INTERACTION: &str = r#"# An example multiple-choice interaction.

[interaction]
id = "MultipleChoiceInput"

[interaction.default_outcome]
dest_state_name = "TryAgain"
feedback_content_id = "content_default"
feedback_html = "Not quite — have another look."

[[answer_groups]]

[answer_groups.outcome]
dest_state_name = "NextState"
feedback_content_id = "content_correct"
feedback_html = "Correct!"
labelled_as_correct = true

[[answer_groups.rule_specs]]
rule_type = "Equals"

[answer_groups.rule_specs.inputs]
x = { non_negative_int = 2 }
"#;
