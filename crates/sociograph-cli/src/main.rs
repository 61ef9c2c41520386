//! Sociograph CLI - socio-technical graph analysis from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Assemble a graph from staged CSV record files
//! sociograph build \
//!     --social-nodes social_nodes.csv \
//!     --technical-nodes technical_nodes.csv \
//!     --edges connections.csv \
//!     --edges technical_connections.csv \
//!     --edges social_technical_connections.csv \
//!     --anonymize -o st_graph.json
//!
//! # Descriptive statistics
//! sociograph stats st_graph.json
//!
//! # Centrality argmax report, plus top entities per measure
//! sociograph centrality st_graph.json --top 10
//!
//! # Supply-chain risk views
//! sociograph supply-chain st_graph.json
//!
//! # Full analysis report as JSON
//! sociograph report st_graph.json -o report.json
//!
//! # Convert to GML for external graph tooling
//! sociograph export st_graph.json -o st_graph.gml --format gml
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::ProgressBar;
use sociograph_core::algo::centrality::{
    betweenness_centrality, closeness_centrality, eigenvector_centrality, in_degree_centrality,
    katz_centrality, out_degree_centrality, total_degree_centrality, BetweennessConfig,
    EigenvectorConfig, KatzConfig,
};
use sociograph_core::export::GraphDocument;
use sociograph_core::formats::Csv;
use sociograph_core::report::{
    analyze, centrality_report, stats_report, supply_chain_report, MeasureOutcome, ViewOutcome,
};
use sociograph_core::{ingest, NodeKind, SocioTechGraph};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "sociograph")]
#[command(about = "Socio-technical graph analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a graph from staged CSV record files
    Build {
        /// CSV of social node identifiers (one column, with header)
        #[arg(long)]
        social_nodes: PathBuf,

        /// CSV of technical node identifiers (one column, with header)
        #[arg(long)]
        technical_nodes: PathBuf,

        /// CSV of directed edge records (source,destination with header);
        /// repeat for each staged connections file
        #[arg(long = "edges", required = true)]
        edges: Vec<PathBuf>,

        /// Replace social identifiers with opaque S1, S2, ... tokens
        #[arg(long)]
        anonymize: bool,

        /// Output graph document (node-link JSON)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show descriptive statistics for a graph
    Stats {
        /// Input graph document (node-link JSON)
        input: PathBuf,
    },

    /// Compute the seven centrality measures and their maximal nodes
    Centrality {
        /// Input graph document (node-link JSON)
        input: PathBuf,

        /// Also list the top N nodes per measure
        #[arg(short, long, default_value = "0")]
        top: usize,
    },

    /// Run the three supply-chain risk views
    SupplyChain {
        /// Input graph document (node-link JSON)
        input: PathBuf,
    },

    /// Write the full analysis report as JSON
    Report {
        /// Input graph document (node-link JSON)
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a graph document to another interchange format
    Export {
        /// Input graph document (node-link JSON)
        input: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "gml")]
        format: ExportFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// GML with node `repo` and edge class attributes
    Gml,
    /// Node-link JSON
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            social_nodes,
            technical_nodes,
            edges,
            anonymize,
            output,
        } => cmd_build(&social_nodes, &technical_nodes, &edges, anonymize, &output),
        Commands::Stats { input } => cmd_stats(&input),
        Commands::Centrality { input, top } => cmd_centrality(&input, top),
        Commands::SupplyChain { input } => cmd_supply_chain(&input),
        Commands::Report { input, output } => cmd_report(&input, output.as_deref()),
        Commands::Export {
            input,
            output,
            format,
        } => cmd_export(&input, &output, format),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SOCIOGRAPH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "sociograph_core=debug,info"
        } else {
            "sociograph_core=info,warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn load_graph(path: &std::path::Path) -> Result<SocioTechGraph> {
    let start = Instant::now();
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Loading {}...", path.display()));

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let document = GraphDocument::from_json(&content)
        .with_context(|| format!("Failed to parse graph document {}", path.display()))?;
    let graph = document
        .to_graph()
        .with_context(|| format!("Graph document {} failed validation", path.display()))?;

    pb.finish_with_message(format!("Loaded in {:.2?}", start.elapsed()));
    Ok(graph)
}

fn cmd_build(
    social_nodes: &std::path::Path,
    technical_nodes: &std::path::Path,
    edge_files: &[PathBuf],
    anonymize: bool,
    output: &std::path::Path,
) -> Result<()> {
    let start = Instant::now();

    let mut node_records = Csv::node_records_from_path(social_nodes, NodeKind::Social)
        .with_context(|| format!("Failed to read {}", social_nodes.display()))?;
    node_records.extend(
        Csv::node_records_from_path(technical_nodes, NodeKind::Technical)
            .with_context(|| format!("Failed to read {}", technical_nodes.display()))?,
    );

    let mut edge_records = Vec::new();
    for path in edge_files {
        edge_records.extend(
            Csv::edge_records_from_path(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
        );
    }

    let staged = ingest(&node_records, &edge_records, anonymize)
        .context("Ingestion failed; the staged records are inconsistent")?;
    let graph = SocioTechGraph::assemble(&staged.registry, &staged.edges)
        .context("Graph assembly failed")?;

    let document = GraphDocument::from_graph(&graph);
    fs::write(output, document.to_json()?)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Assembled {} nodes and {} edges in {:.2?}",
        graph.node_count(),
        graph.edge_count(),
        start.elapsed()
    );
    println!("Wrote {}", output.display());
    Ok(())
}

fn cmd_stats(input: &std::path::Path) -> Result<()> {
    let graph = load_graph(input)?;
    let report = stats_report(&graph);

    println!("Graph Statistics");
    println!("================");
    for (name, value) in &report.metrics {
        println!("{name:>32}: {value}");
    }
    for (name, reason) in &report.failed {
        println!("{name:>32}: unavailable ({reason})");
    }

    println!();
    println!("Degree distributions (degree: p(degree))");
    for (label, distribution) in [
        ("social", &report.social_degree_distribution),
        ("technical", &report.technical_degree_distribution),
        ("combined", &report.combined_degree_distribution),
    ] {
        let entries: Vec<String> = distribution
            .frequencies
            .iter()
            .map(|(degree, p)| format!("{degree}: {p:.3}"))
            .collect();
        println!("{label:>12}: {}", entries.join(", "));
    }

    Ok(())
}

fn print_measure(name: &str, outcome: &MeasureOutcome) {
    match outcome {
        MeasureOutcome::Computed { entry } => {
            println!("{:>12}: {} ({:.6})", name, entry.node, entry.score);
        }
        MeasureOutcome::Failed { reason } => {
            println!("{name:>12}: skipped ({reason})");
        }
    }
}

fn print_top(scores: &HashMap<String, f64>, top: usize) {
    let mut sorted: Vec<_> = scores.iter().collect();
    sorted.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
    for (i, (node, score)) in sorted.iter().take(top).enumerate() {
        println!("    {}. {} ({:.6})", i + 1, node, score);
    }
}

fn cmd_centrality(input: &std::path::Path, top: usize) -> Result<()> {
    let graph = load_graph(input)?;

    println!("Centrality (maximal node per measure)");
    println!("=====================================");

    let start = Instant::now();
    let report = centrality_report(&graph);
    for name in [
        "degree",
        "in_degree",
        "out_degree",
        "eigenvector",
        "katz",
        "closeness",
        "betweenness",
    ] {
        print_measure(name, &report.measures[name]);
    }
    println!("Computed in {:.2?}", start.elapsed());

    if top > 0 {
        println!();
        println!("Top {top} per measure:");
        println!("  degree:");
        print_top(&total_degree_centrality(&graph), top);
        println!("  in_degree:");
        print_top(&in_degree_centrality(&graph), top);
        println!("  out_degree:");
        print_top(&out_degree_centrality(&graph), top);
        if let Ok(scores) = eigenvector_centrality(&graph, EigenvectorConfig::default()) {
            println!("  eigenvector:");
            print_top(&scores, top);
        }
        if let Ok(scores) = katz_centrality(&graph, KatzConfig::default()) {
            println!("  katz:");
            print_top(&scores, top);
        }
        println!("  closeness:");
        print_top(&closeness_centrality(&graph), top);
        println!("  betweenness:");
        print_top(
            &betweenness_centrality(&graph, BetweennessConfig::default()),
            top,
        );
    }

    Ok(())
}

fn cmd_supply_chain(input: &std::path::Path) -> Result<()> {
    let graph = load_graph(input)?;
    let report = supply_chain_report(&graph);

    println!("Supply-Chain Views");
    println!("==================");

    match &report.technical_influence {
        ViewOutcome::Computed { view } => {
            println!("technical influence (repository reach):");
            let mut sorted: Vec<_> = view.out_degree.iter().collect();
            sorted.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
            for (node, score) in sorted {
                println!(
                    "    {} out={:.4} in={:.4} degree={:.4}",
                    node, score, view.in_degree[node], view.degree[node]
                );
            }
        }
        ViewOutcome::Skipped { reason } => {
            println!("technical influence: skipped ({reason})");
        }
    }

    match &report.targeted_social_influence {
        ViewOutcome::Computed { view } => {
            println!("targeted social influence (contributor concentration):");
            let mut sorted: Vec<_> = view.in_degree.iter().collect();
            sorted.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
            for (node, score) in sorted {
                println!("    {node} in={score:.4}");
            }
        }
        ViewOutcome::Skipped { reason } => {
            println!("targeted social influence: skipped ({reason})");
        }
    }

    match &report.dispersed_social_influence {
        ViewOutcome::Computed { view } => {
            println!("dispersed social influence (contribution spread):");
            let mut sorted: Vec<_> = view.out_degree.iter().collect();
            sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            for (node, raw) in sorted {
                println!(
                    "    {} out={} centrality={:.4}",
                    node, raw, view.out_degree_centrality[node]
                );
            }
        }
        ViewOutcome::Skipped { reason } => {
            println!("dispersed social influence: skipped ({reason})");
        }
    }

    Ok(())
}

fn cmd_report(input: &std::path::Path, output: Option<&std::path::Path>) -> Result<()> {
    let graph = load_graph(input)?;

    let start = Instant::now();
    let report = analyze(&graph);
    let json = serde_json::to_string_pretty(&report)?;

    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote report to {} in {:.2?}", path.display(), start.elapsed());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn cmd_export(
    input: &std::path::Path,
    output: &std::path::Path,
    format: ExportFormat,
) -> Result<()> {
    let graph = load_graph(input)?;
    let document = GraphDocument::from_graph(&graph);

    let content = match format {
        ExportFormat::Gml => document.to_gml(),
        ExportFormat::Json => document.to_json()?,
    };
    fs::write(output, content).with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Exported {} -> {}", input.display(), output.display());
    Ok(())
}
