use super::types::{Algorithm, BenchmarkConfig, Distribution, ResultRecord};
use crate::error::{BenchError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Rendered in place of a skipped or missing time.
pub const PLACEHOLDER: &str = "—";

/// Records regrouped for rendering: size -> dataset -> algorithm -> time.
///
/// Sizes are kept ascending; datasets and algorithms keep the order in
/// which they first appear in the records, which is the runner's visiting
/// order.
#[derive(Clone, Debug, Default)]
pub struct ResultTable {
    sizes: Vec<usize>,
    datasets: Vec<Distribution>,
    algorithms: Vec<Algorithm>,
    cells: HashMap<(usize, Distribution), HashMap<Algorithm, Option<f64>>>,
}

impl ResultTable {
    pub fn from_records(records: &[ResultRecord]) -> Self {
        let mut table = ResultTable::default();
        for record in records {
            if !table.sizes.contains(&record.size) {
                table.sizes.push(record.size);
            }
            if !table.datasets.contains(&record.dataset) {
                table.datasets.push(record.dataset);
            }
            if !table.algorithms.contains(&record.algorithm) {
                table.algorithms.push(record.algorithm);
            }
            table
                .cells
                .entry((record.size, record.dataset))
                .or_default()
                .insert(record.algorithm, record.time);
        }
        table.sizes.sort_unstable();
        table
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn datasets(&self) -> &[Distribution] {
        &self.datasets
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    pub fn has_cell(&self, size: usize, dataset: Distribution) -> bool {
        self.cells.contains_key(&(size, dataset))
    }

    pub fn time(&self, size: usize, dataset: Distribution, algorithm: Algorithm) -> Option<f64> {
        self.cells
            .get(&(size, dataset))
            .and_then(|row| row.get(&algorithm).copied().flatten())
    }

    /// Times for one (size, dataset) cell in algorithm order.
    pub fn row(&self, size: usize, dataset: Distribution) -> Vec<(Algorithm, Option<f64>)> {
        self.algorithms
            .iter()
            .map(|&algorithm| (algorithm, self.time(size, dataset, algorithm)))
            .collect()
    }

    pub fn fastest(&self, size: usize, dataset: Distribution) -> Option<(Algorithm, f64)> {
        find_fastest(&self.row(size, dataset))
    }
}

/// Fastest non-null entry; ties go to the earliest entry.
pub fn find_fastest(row: &[(Algorithm, Option<f64>)]) -> Option<(Algorithm, f64)> {
    let mut best: Option<(Algorithm, f64)> = None;
    for &(algorithm, time) in row {
        if let Some(t) = time {
            match best {
                Some((_, best_t)) if t >= best_t => {}
                _ => best = Some((algorithm, t)),
            }
        }
    }
    best
}

pub fn format_time(time: Option<f64>) -> String {
    match time {
        Some(t) => format!("{:.6}", t),
        None => PLACEHOLDER.to_string(),
    }
}

fn format_seconds(time: Option<f64>) -> String {
    match time {
        Some(t) => format!("{:.6}s", t),
        None => PLACEHOLDER.to_string(),
    }
}

fn format_times_inline(row: &[(Algorithm, Option<f64>)]) -> String {
    row.iter()
        .map(|(algorithm, time)| format!("{}: {}", algorithm.short_label(), format_seconds(*time)))
        .collect::<Vec<_>>()
        .join("  ")
}

/// One progress line for a finished (dataset, size) cell.
pub fn format_progress_line(
    size: usize,
    dataset: Distribution,
    row: &[(Algorithm, Option<f64>)],
) -> String {
    format!(
        "[n={:<6} | {:<13}] {}",
        size,
        dataset,
        format_times_inline(row)
    )
}

pub fn render_terminal_summary(table: &ResultTable) -> String {
    let mut lines = Vec::new();
    for &size in table.sizes() {
        lines.push(String::new());
        lines.push(format!("=== n = {} ===", size));
        for &dataset in table.datasets() {
            if !table.has_cell(size, dataset) {
                continue;
            }
            lines.push(format!(
                "{:<13} → {}",
                dataset,
                format_times_inline(&table.row(size, dataset))
            ));
        }
    }
    lines.join("\n")
}

/// Print the grouped-by-size summary to stdout
pub fn print_terminal_summary(table: &ResultTable) {
    println!("{}", render_terminal_summary(table));
}

pub fn build_markdown(table: &ResultTable, config: &BenchmarkConfig) -> String {
    let algorithm_names: Vec<&str> = table.algorithms().iter().map(|a| a.name()).collect();
    let dataset_names: Vec<String> = table
        .datasets()
        .iter()
        .map(|d| format!("`{}`", d.name()))
        .collect();

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(
        "# Sorting Algorithm Comparison: {}\n",
        algorithm_names.join(", ")
    ));
    lines.push(format!("Datasets: {}.", dataset_names.join(", ")));
    lines.push(format!(
        "Sizes: {:?}. Repeats: {}.",
        table.sizes(),
        config.repeats
    ));
    if table.algorithms().iter().any(|a| a.is_quadratic()) {
        let quadratic: Vec<&str> = table
            .algorithms()
            .iter()
            .filter(|a| a.is_quadratic())
            .map(|a| a.name())
            .collect();
        lines.push(format!(
            "**{}** is skipped for n > {} to bound the run time.",
            quadratic.join(", "),
            config.insertion_max_n
        ));
    }
    if let Some(seed) = config.seed {
        lines.push(format!("Seed: {}.", seed));
    }
    lines.push(String::new());

    lines.push("## Results by size".to_string());
    for &size in table.sizes() {
        lines.push(String::new());
        lines.push(format!("### n = {}", size));
        lines.push(String::new());
        lines.push(format!("| Dataset | {} |", algorithm_names.join(" | ")));
        lines.push(format!("|---|{}", "---|".repeat(algorithm_names.len())));
        for &dataset in table.datasets() {
            let cells: Vec<String> = table
                .row(size, dataset)
                .into_iter()
                .map(|(_, time)| format_time(time))
                .collect();
            lines.push(format!("| {} | {} |", dataset, cells.join(" | ")));
        }
    }
    lines.push(String::new());

    lines.push("## Details by dataset".to_string());
    for &dataset in table.datasets() {
        lines.push(String::new());
        lines.push(format!("### Dataset: **{}**", dataset));
        for &size in table.sizes() {
            if !table.has_cell(size, dataset) {
                continue;
            }
            let row = table.row(size, dataset);
            lines.push(String::new());
            lines.push(format!("#### n = {}", size));
            lines.push(String::new());
            lines.push("| Algorithm | Mean time (s) |".to_string());
            lines.push("|---|---|".to_string());
            for (algorithm, time) in &row {
                lines.push(format!("| {} | {} |", algorithm, format_time(*time)));
            }
            lines.push(String::new());
            match table.fastest(size, dataset) {
                Some((algorithm, t)) => {
                    lines.push(format!("**Fastest:** {} ({:.6} s)", algorithm, t))
                }
                None => lines.push("**Fastest:** unavailable (all values skipped)".to_string()),
            }
        }
    }
    lines.push(String::new());

    lines.join("\n")
}

/// Flat CSV of all records; skipped cells have an empty time column.
pub fn results_to_csv(records: &[ResultRecord]) -> String {
    let mut csv = String::from("dataset,size,algorithm,time_seconds\n");
    for record in records {
        let time = record.time.map(|t| format!("{:.9}", t)).unwrap_or_default();
        csv.push_str(&format!(
            "{},{},{},{}\n",
            record.dataset, record.size, record.algorithm, time
        ));
    }
    csv
}

/// Create (or truncate) `path` and write `contents` to it in UTF-8.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    let io_err = |source| BenchError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    Ok(())
}
