//! Output formatting for fused rankings.

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use serde_json::json;

use rankfuse_core::{CombinedRankDoc, ScoreExplanation};

/// Output format of the `combine` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Print fused documents in the specified format
pub fn print_combined(docs: &[CombinedRankDoc], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(docs)?);
        }
        OutputFormat::Table => {
            if docs.is_empty() {
                println!("{}", "No results.".dimmed());
                return Ok(());
            }
            println!("{}", combined_table(docs));
        }
    }
    Ok(())
}

/// Print fused documents with per-source contributions
pub fn print_explained(
    explained: &[ScoreExplanation],
    names: &[String],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = explained
                .iter()
                .map(|e| {
                    json!({
                        "doc": e.doc,
                        "contributions": e.contributions,
                        "explanation": e.to_string(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            if explained.is_empty() {
                println!("{}", "No results.".dimmed());
                return Ok(());
            }
            println!("{}", explained_table(explained, names));
        }
    }
    Ok(())
}

fn base_table(extra_columns: &[String]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header: Vec<Cell> = ["rank", "doc", "shard", "score"]
        .iter()
        .map(|c| Cell::new(c).fg(Color::Cyan))
        .collect();
    header.extend(extra_columns.iter().map(|c| Cell::new(c).fg(Color::Cyan)));
    table.set_header(header);
    table
}

fn doc_cells(doc: &CombinedRankDoc) -> Vec<Cell> {
    vec![
        Cell::new(doc.rank).set_alignment(CellAlignment::Right),
        Cell::new(doc.doc_id),
        Cell::new(doc.shard_index),
        Cell::new(format!("{:.4}", doc.score)).set_alignment(CellAlignment::Right),
    ]
}

/// Render fused documents as a table
pub fn combined_table(docs: &[CombinedRankDoc]) -> Table {
    let mut table = base_table(&[]);
    for doc in docs {
        table.add_row(doc_cells(doc));
    }
    table
}

/// Render explanations as a table, one column per source
pub fn explained_table(explained: &[ScoreExplanation], names: &[String]) -> Table {
    let mut table = base_table(names);
    for e in explained {
        let mut cells = doc_cells(&e.doc);
        cells.extend(e.contributions.iter().map(|c| match c.normalized_score {
            Some(score) => Cell::new(format!(
                "{:.4} × {} = {:.4}",
                score, c.weight, c.weighted_score
            )),
            None => Cell::new("-").fg(Color::DarkGrey),
        }));
        table.add_row(cells);
    }
    table
}
