use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn get_test_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/tmp/tests").join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_fixture(dir: &PathBuf) -> (PathBuf, PathBuf, Vec<PathBuf>) {
    let social = dir.join("social_nodes.csv");
    fs::write(&social, "Name\nalice\nbob\n").unwrap();

    let technical = dir.join("technical_nodes.csv");
    fs::write(&technical, "Name\nparser\nruntime\n").unwrap();

    let follows = dir.join("connections.csv");
    fs::write(&follows, "Source_Node,Destination_Node\nalice,bob\n").unwrap();

    let dependencies = dir.join("technical_connections.csv");
    fs::write(
        &dependencies,
        "Source_Node,Destination_Node\nruntime,parser\n",
    )
    .unwrap();

    let contributions = dir.join("social_technical_connections.csv");
    fs::write(
        &contributions,
        "Source_Node,Destination_Node\nalice,parser\nbob,parser\nalice,runtime\n",
    )
    .unwrap();

    (social, technical, vec![follows, dependencies, contributions])
}

fn build_graph(dir: &PathBuf, anonymize: bool) -> PathBuf {
    let (social, technical, edges) = write_fixture(dir);
    let graph = dir.join("st_graph.json");

    let mut cmd = Command::cargo_bin("sociograph").unwrap();
    cmd.arg("build")
        .arg("--social-nodes")
        .arg(&social)
        .arg("--technical-nodes")
        .arg(&technical)
        .arg("-o")
        .arg(&graph);
    for path in &edges {
        cmd.arg("--edges").arg(path);
    }
    if anonymize {
        cmd.arg("--anonymize");
    }
    cmd.assert().success();

    graph
}

#[test]
fn test_cli_build_and_stats() {
    let dir = get_test_dir("build_stats");
    let graph = build_graph(&dir, false);

    let mut cmd = Command::cargo_bin("sociograph").unwrap();
    cmd.arg("stats").arg(&graph);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("node_count: 4"))
        .stdout(predicate::str::contains("edge_count: 5"))
        .stdout(predicate::str::contains("density"))
        .stdout(predicate::str::contains("unavailable"));
}

#[test]
fn test_cli_build_anonymizes_social_nodes() {
    let dir = get_test_dir("anonymize");
    let graph = build_graph(&dir, true);

    let content = fs::read_to_string(&graph).unwrap();
    assert!(content.contains("\"S1\""));
    assert!(content.contains("\"S2\""));
    assert!(!content.contains("alice"));
    assert!(!content.contains("bob"));
    // Technical identifiers are left alone.
    assert!(content.contains("parser"));
}

#[test]
fn test_cli_centrality() {
    let dir = get_test_dir("centrality");
    let graph = build_graph(&dir, false);

    let mut cmd = Command::cargo_bin("sociograph").unwrap();
    cmd.arg("centrality").arg(&graph).arg("--top").arg("3");
    cmd.assert()
        .success()
        // parser: two contributors plus one dependent.
        .stdout(predicate::str::contains("in_degree: parser"))
        .stdout(predicate::str::contains("betweenness:"))
        .stdout(predicate::str::contains("Top 3 per measure:"));
}

#[test]
fn test_cli_supply_chain() {
    let dir = get_test_dir("supply_chain");
    let graph = build_graph(&dir, false);

    let mut cmd = Command::cargo_bin("sociograph").unwrap();
    cmd.arg("supply-chain").arg(&graph);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("technical influence"))
        .stdout(predicate::str::contains("targeted social influence"))
        .stdout(predicate::str::contains("dispersed social influence"))
        // alice contributes to two repositories.
        .stdout(predicate::str::contains("alice out=2"));
}

#[test]
fn test_cli_export_gml() {
    let dir = get_test_dir("export");
    let graph = build_graph(&dir, false);
    let gml = dir.join("st_graph.gml");

    let mut cmd = Command::cargo_bin("sociograph").unwrap();
    cmd.arg("export")
        .arg(&graph)
        .arg("-o")
        .arg(&gml)
        .arg("--format")
        .arg("gml");
    cmd.assert().success();

    let content = fs::read_to_string(&gml).unwrap();
    assert!(content.contains("directed 1"));
    assert!(content.contains("label \"parser\""));
    assert!(content.contains("soctech 1"));
}

#[test]
fn test_cli_report_json() {
    let dir = get_test_dir("report");
    let graph = build_graph(&dir, false);
    let report = dir.join("report.json");

    let mut cmd = Command::cargo_bin("sociograph").unwrap();
    cmd.arg("report").arg(&graph).arg("-o").arg(&report);
    cmd.assert().success();

    let content = fs::read_to_string(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["stats"]["metrics"]["node_count"], 4.0);
    assert!(parsed["centrality"]["measures"]["degree"].is_object());
    assert!(parsed["supply_chain"]["technical_influence"].is_object());
}

#[test]
fn test_cli_rejects_conflicting_node_kinds() {
    let dir = get_test_dir("conflict");
    let social = dir.join("social_nodes.csv");
    fs::write(&social, "Name\nalice\n").unwrap();
    // The same identifier staged as technical: ingestion must abort.
    let technical = dir.join("technical_nodes.csv");
    fs::write(&technical, "Name\nalice\n").unwrap();
    let edges = dir.join("connections.csv");
    fs::write(&edges, "Source_Node,Destination_Node\n").unwrap();

    let mut cmd = Command::cargo_bin("sociograph").unwrap();
    cmd.arg("build")
        .arg("--social-nodes")
        .arg(&social)
        .arg("--technical-nodes")
        .arg(&technical)
        .arg("--edges")
        .arg(&edges)
        .arg("-o")
        .arg(dir.join("out.json"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Ingestion failed"));
}
