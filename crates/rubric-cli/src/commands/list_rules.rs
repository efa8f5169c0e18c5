//! The `rubric list-rules` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use rubric_rules::create_engine;

pub fn execute(interaction_filter: Option<String>) -> Result<()> {
    let engine = create_engine();

    let mut table = Table::new();
    table.set_header(vec![Cell::new("Interaction"), Cell::new("Rules")]);

    let mut found_any = false;
    for interaction_id in engine.interaction_ids() {
        if let Some(filter) = &interaction_filter {
            if interaction_id != filter.as_str() {
                continue;
            }
        }
        found_any = true;

        let rules = engine
            .rule_names(interaction_id)
            .unwrap_or_default()
            .join(", ");
        let rules = if rules.is_empty() {
            "(none — default outcome always applies)".to_string()
        } else {
            rules
        };
        table.add_row(vec![Cell::new(interaction_id), Cell::new(rules)]);
    }

    if !found_any {
        anyhow::bail!(
            "unknown interaction id: {}",
            interaction_filter.unwrap_or_default()
        );
    }

    println!("{table}");
    Ok(())
}
