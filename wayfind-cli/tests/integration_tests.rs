//! Integration tests for wayfind CLI
//!
//! Tests end-to-end command behavior using the CLI binary.
//! Uses tempfile for isolated test directories.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Get the path to the wayfind binary (built by cargo)
fn wayfind_binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wayfind"));
    cmd.env_remove("WAYFIND_VERTICES")
        .env_remove("WAYFIND_EDGES")
        .env_remove("RUST_LOG");
    cmd
}

/// Run wayfind command with the given args in the specified directory
fn run_wayfind(dir: &Path, args: &[&str]) -> Output {
    wayfind_binary()
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute wayfind command")
}

/// Get stdout as string
fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as string
fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Write `vertex.txt` and `edge.txt`: A -> B (2), B -> C (3), E -> F (9).
///
/// D is isolated and F is only reachable from E.
fn setup_sample_graph(dir: &Path) {
    fs::write(dir.join("vertex.txt"), "A\nB\nC\nD\nE\nF\n").expect("Failed to write vertices");
    fs::write(
        dir.join("edge.txt"),
        "# source destination weight\nA B 2\nB C 3\n\nE F 9\n",
    )
    .expect("Failed to write edges");
}

fn sample_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    setup_sample_graph(dir.path());
    dir
}

fn json(output: &Output) -> serde_json::Value {
    serde_json::from_str(&stdout(output)).expect("stdout is valid JSON")
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_help() {
    let output = wayfind_binary()
        .arg("--help")
        .output()
        .expect("Failed to run help");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("wayfind"));
    assert!(out.contains("path"));
    assert!(out.contains("export"));
}

#[test]
fn test_version() {
    let output = wayfind_binary()
        .arg("--version")
        .output()
        .expect("Failed to run version");

    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_command_prints_help() {
    let dir = TempDir::new().unwrap();
    let output = run_wayfind(dir.path(), &[]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage"));
}

// ============================================================================
// Path Command
// ============================================================================

#[test]
fn test_path_found() {
    let dir = sample_dir();
    let output = run_wayfind(dir.path(), &["path", "A", "C"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("START A"));
    assert!(out.contains("END   C"));
    assert!(out.contains("Total cost: 5"));
}

#[test]
fn test_path_json() {
    let dir = sample_dir();
    let output = run_wayfind(dir.path(), &["--format", "json", "path", "A", "C"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value = json(&output);
    assert_eq!(value["cost"], 5);
    assert_eq!(value["path"], serde_json::json!(["A", "B", "C"]));
}

#[test]
fn test_path_not_found_is_not_an_error() {
    let dir = sample_dir();
    let output = run_wayfind(dir.path(), &["--format", "json", "path", "A", "F"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value = json(&output);
    assert!(value["cost"].is_null());
    assert_eq!(value["path"], serde_json::json!([]));
}

#[test]
fn test_path_to_self() {
    let dir = sample_dir();
    let output = run_wayfind(dir.path(), &["--format", "json", "path", "D", "D"]);

    assert!(output.status.success());
    let value = json(&output);
    assert_eq!(value["cost"], 0);
    assert_eq!(value["path"], serde_json::json!(["D"]));
}

#[test]
fn test_path_unknown_vertex_fails() {
    let dir = sample_dir();
    let output = run_wayfind(dir.path(), &["path", "A", "Z"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Vertex not found: Z"));
}

#[test]
fn test_path_without_target_lists_reachable() {
    let dir = sample_dir();
    let output = run_wayfind(dir.path(), &["--format", "csv", "path", "A"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output).trim_end(),
        "Vertex,Cost,Hops,Path\nA,0,0,A\nB,2,1,A B\nC,5,2,A B C"
    );
}

// ============================================================================
// Inspection Commands
// ============================================================================

#[test]
fn test_cost_direct_and_missing() {
    let dir = sample_dir();

    let output = run_wayfind(dir.path(), &["--format", "csv", "cost", "A", "B"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "from,to,cost\nA,B,2");

    // Edges are directed
    let output = run_wayfind(dir.path(), &["--format", "csv", "cost", "B", "A"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "from,to,cost\nB,A,-1");
}

#[test]
fn test_vertices_in_file_order() {
    let dir = sample_dir();
    let output = run_wayfind(dir.path(), &["--format", "json", "vertices"]);

    assert!(output.status.success());
    let labels: Vec<String> = json(&output)
        .as_array()
        .expect("vertices is an array")
        .iter()
        .map(|row| row["vertex"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(labels, vec!["A", "B", "C", "D", "E", "F"]);
}

#[test]
fn test_edges_table() {
    let dir = sample_dir();
    let output = run_wayfind(dir.path(), &["edges"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Edges (3)"));
    assert!(out.contains("Destination"));
}

#[test]
fn test_adjacent() {
    let dir = sample_dir();
    let output = run_wayfind(dir.path(), &["--format", "json", "adjacent", "A"]);

    assert!(output.status.success());
    let value = json(&output);
    assert_eq!(value["vertex"], "A");
    assert_eq!(
        value["adjacent"],
        serde_json::json!([{"vertex": "B", "weight": 2}])
    );
}

// ============================================================================
// Input Handling
// ============================================================================

#[test]
fn test_missing_input_files() {
    let dir = TempDir::new().unwrap();
    let output = run_wayfind(dir.path(), &["vertices"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load graph"));
}

#[test]
fn test_malformed_edge_line() {
    let dir = sample_dir();
    fs::write(dir.path().join("edge.txt"), "A B 2\nB C\n").unwrap();
    let output = run_wayfind(dir.path(), &["edges"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("edge.txt:2"));
}

#[test]
fn test_negative_weight_rejected() {
    let dir = sample_dir();
    fs::write(dir.path().join("edge.txt"), "A B -4\n").unwrap();
    let output = run_wayfind(dir.path(), &["edges"]);

    assert!(!output.status.success());
}

#[test]
fn test_explicit_input_paths() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cities.txt"), "X\nY\n").unwrap();
    fs::write(dir.path().join("roads.txt"), "X Y 7\n").unwrap();

    let output = run_wayfind(
        dir.path(),
        &[
            "--vertices",
            "cities.txt",
            "--edges",
            "roads.txt",
            "--format",
            "json",
            "path",
            "X",
            "Y",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(json(&output)["cost"], 7);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data/v.txt"), "P\nQ\n").unwrap();
    fs::write(dir.path().join("data/e.txt"), "P Q 4\n").unwrap();
    fs::write(
        dir.path().join(".wayfindrc.toml"),
        "[input]\nvertices = \"data/v.txt\"\nedges = \"data/e.txt\"\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = run_wayfind(dir.path(), &["path", "P", "Q"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(json(&output)["cost"], 4);
}

#[test]
fn test_cli_format_overrides_config() {
    let dir = sample_dir();
    fs::write(
        dir.path().join(".wayfindrc.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = run_wayfind(dir.path(), &["--format", "csv", "cost", "A", "B"]);

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("from,to,cost"));
}

#[test]
fn test_unknown_config_format_warns_and_uses_table() {
    let dir = sample_dir();
    fs::write(
        dir.path().join(".wayfindrc.toml"),
        "[output]\nformat = \"yaml\"\n",
    )
    .unwrap();

    let output = run_wayfind(dir.path(), &["edges"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Ignoring [output] format"));
    assert!(stdout(&output).contains("Edges (3)"));
}

// ============================================================================
// Export Command
// ============================================================================

#[test]
fn test_export_dot_to_stdout() {
    let dir = sample_dir();
    let output = run_wayfind(dir.path(), &["export"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("digraph {"));
    assert_eq!(out.matches("->").count(), 3);
}

#[test]
fn test_export_mermaid_to_file() {
    let dir = sample_dir();
    let output = run_wayfind(dir.path(), &["export", "-t", "mermaid", "-o", "graph.mmd"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Exported 6 vertices, 3 edges"));

    let written = fs::read_to_string(dir.path().join("graph.mmd")).unwrap();
    assert!(written.starts_with("flowchart LR"));
}
