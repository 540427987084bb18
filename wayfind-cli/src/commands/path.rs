//! Path command - cheapest route between two vertices
//!
//! With a target, prints the single cheapest path. Without one, prints the
//! cheapest path to every vertex reachable from the start.

use crate::output::{
    Alignment, Column, CsvOutput, Output, OutputConfig, OutputFormat, TableDisplay, TableOutput,
};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use wayfind_core::{Graph, Path};

use super::resolve;

/// Cheapest path between two vertices
#[derive(Debug, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    /// Total cost, absent when no path exists
    pub cost: Option<i64>,
    /// Vertex labels from start to target; empty when no path exists
    pub path: Vec<String>,
}

impl PathResult {
    pub fn new(from: &str, to: &str, path: Option<Path>) -> Self {
        let (cost, labels) = match path {
            Some(path) => (
                Some(path.cost()),
                path.vertices().iter().map(|v| v.label().to_string()).collect(),
            ),
            None => (None, Vec::new()),
        };
        Self {
            from: from.to_string(),
            to: to.to_string(),
            cost,
            path: labels,
        }
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl TableDisplay for PathResult {
    fn to_table(&self, _config: &OutputConfig) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {} {} {}\n",
            "Path from".bold(),
            self.from.cyan(),
            "to".bold(),
            self.to.cyan()
        ));
        output.push_str(&format!("{}\n", "-".repeat(60)));

        match self.cost {
            Some(cost) => {
                let last = self.path.len() - 1;
                for (i, label) in self.path.iter().enumerate() {
                    let prefix = if i == 0 {
                        "START".green().to_string()
                    } else if i == last {
                        "END  ".red().to_string()
                    } else {
                        format!("{:5}", i)
                    };
                    output.push_str(&format!("  {} {}\n", prefix, label));

                    if i < last {
                        output.push_str(&format!("       {}\n", "|".dimmed()));
                        output.push_str(&format!("       {}\n", "v".dimmed()));
                    }
                }
                output.push_str(&format!(
                    "\n{}: {} ({} hops)",
                    "Total cost".bold(),
                    cost,
                    self.hops()
                ));
            }
            None => {
                output.push_str(&format!(
                    "\n  {} No path found between these vertices.",
                    "INFO".yellow()
                ));
            }
        }

        output
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        let steps: Vec<Step> = self
            .path
            .iter()
            .enumerate()
            .map(|(step, vertex)| Step {
                step,
                vertex: vertex.as_str(),
            })
            .collect();
        let columns = [Column::new("step", "step"), Column::new("vertex", "vertex")];
        CsvOutput::format_with_columns(&steps, &columns)
    }
}

/// One vertex along a path, for CSV rows
#[derive(Serialize)]
struct Step<'a> {
    step: usize,
    vertex: &'a str,
}

/// Cheapest path to one reachable vertex
#[derive(Debug, Serialize)]
pub struct ReachRow {
    pub vertex: String,
    pub cost: i64,
    pub hops: usize,
    pub path: Vec<String>,
}

/// Every vertex reachable from a start, cheapest first
#[derive(Debug, Serialize)]
pub struct ReachResult {
    pub from: String,
    pub reachable: Vec<ReachRow>,
}

impl ReachResult {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Vertex", "vertex"),
            Column::new("Cost", "cost").with_alignment(Alignment::Right),
            Column::new("Hops", "hops").with_alignment(Alignment::Right),
            Column::new("Path", "path").with_max_width(60),
        ]
    }
}

impl TableDisplay for ReachResult {
    fn to_table(&self, config: &OutputConfig) -> String {
        format!(
            "{} {} ({} reachable)\n{}",
            "Shortest paths from".bold(),
            self.from.cyan(),
            self.reachable.len(),
            TableOutput::format_with_columns(&self.reachable, &Self::columns(), config)
        )
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::format_with_columns(&self.reachable, &Self::columns())
    }
}

/// Run the path command.
///
/// An unknown vertex is an error; an unreachable target is not.
pub fn run(graph: &Graph, from: &str, to: Option<&str>, format: OutputFormat) -> Result<()> {
    let start = resolve(graph, from)?;

    match to {
        Some(to) => {
            let target = resolve(graph, to)?;
            let path = graph.shortest_path(start, target)?;
            tracing::debug!(from, to, found = path.is_some(), "Path query finished");
            Output::new(PathResult::new(from, to, path), format).render()
        }
        None => {
            let tree = graph.shortest_paths_from(start)?;
            let reachable = tree
                .paths()
                .into_iter()
                .filter_map(|path| {
                    let vertex = path.target()?.label().to_string();
                    Some(ReachRow {
                        vertex,
                        cost: path.cost(),
                        hops: path.hops(),
                        path: path
                            .vertices()
                            .iter()
                            .map(|v| v.label().to_string())
                            .collect(),
                    })
                })
                .collect();

            let result = ReachResult {
                from: from.to_string(),
                reachable,
            };
            Output::new(result, format).render()
        }
    }
}
