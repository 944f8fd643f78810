use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fieldmap_cli::types::{InferResult, RankResult, ScaffoldResult};
use fieldmap_model::InferenceOptions;

pub fn print_infer_summary(result: &InferResult, options: &InferenceOptions) {
    let report = &result.report;
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());

    let mut table = count_table();
    table.add_row(vec![label_cell("Rows"), Cell::new(report.total_rows)]);
    table.add_row(vec![
        label_cell("Inferred"),
        count_cell(report.inferred_count(), Color::Green),
    ]);
    table.add_row(vec![
        label_cell("Ambiguous"),
        count_cell(report.ambiguous, Color::Yellow),
    ]);
    table.add_row(vec![label_cell("Unmatched"), dim_cell(report.unmatched)]);
    table.add_row(vec![label_cell("Skipped"), dim_cell(report.skipped)]);
    println!("{table}");

    if report.inferred.is_empty() {
        return;
    }
    println!();
    println!("Inferred mappings:");
    for pair in report.inferred.iter().take(options.sample_limit) {
        println!("  {} => {}", pair.source_path, pair.target_path);
    }
    print_remainder(report.inferred.len(), options.sample_limit);
}

pub fn print_rank_summary(result: &RankResult, options: &InferenceOptions) {
    let ranking = &result.ranking;
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output.display());

    let mut table = count_table();
    table.add_row(vec![label_cell("Rows"), Cell::new(ranking.total_rows)]);
    table.add_row(vec![
        label_cell("Sources considered"),
        Cell::new(ranking.sources_considered),
    ]);
    table.add_row(vec![
        label_cell("Sources with candidates"),
        count_cell(ranking.source_count(), Color::Green),
    ]);
    table.add_row(vec![
        label_cell("Candidates"),
        count_cell(ranking.len(), Color::Green),
    ]);
    table.add_row(vec![
        label_cell("Fallback sources"),
        count_cell(ranking.fallback_sources, Color::Yellow),
    ]);
    table.add_row(vec![label_cell("Skipped"), dim_cell(ranking.skipped)]);
    println!("{table}");

    if ranking.is_empty() {
        return;
    }
    println!();
    println!("Candidates:");
    for candidate in ranking.distinct_pairs().take(options.top_candidates) {
        println!(
            "  conf={:>3} score={:>3} {} -> {}",
            candidate.confidence,
            candidate.score,
            candidate.source_path,
            candidate.target_path
        );
    }

    let best = ranking.best_per_source();
    println!();
    println!("Best per source:");
    for candidate in best.iter().take(options.top_best) {
        println!(
            "  conf={:>3} {} -> {}",
            candidate.confidence, candidate.source_path, candidate.target_path
        );
    }
    print_remainder(best.len(), options.top_best);
}

pub fn print_scaffold(result: &ScaffoldResult) {
    println!("Input: {}", result.input.display());
    if result.declared > 0 {
        println!("Already declared: {}", result.declared);
    }
    if result.declarations.is_empty() {
        println!("Nothing left to scaffold.");
        return;
    }
    println!();
    for declaration in &result.declarations {
        println!("{declaration}");
    }
}

fn print_remainder(total: usize, shown: usize) {
    if total > shown {
        println!("  ... {} more", total - shown);
    }
}

fn count_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Blue)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
