//! Social circles report
//!
//! Reads a graph snapshot exported by the backend and prints summary
//! statistics, the most connected hubs and any requested path, similarity or
//! search results. Optionally writes the styled element list for the
//! rendering widget.

use anyhow::{Context, Result};
use clap::Parser;
use social_circles_graph::{
    build_render_export, filter_nodes_by_query, EngineConfig, GraphSnapshot, NodeId, SocialGraph,
};
use tracing_subscriber::EnvFilter;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "social-circles-report", about = "Analyze a social circles graph snapshot")]
struct Args {
    /// Snapshot JSON file
    snapshot: PathBuf,

    /// Engine configuration (TOML)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Number of hubs to list, overrides the configuration
    #[arg(long)]
    hubs: Option<usize>,

    /// List nodes similar to this node id
    #[arg(long, value_name = "NODE_ID")]
    similar_to: Option<String>,

    /// Shortest path between two node ids
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
    path: Option<Vec<String>>,

    /// Search node names
    #[arg(long, short = 's')]
    search: Option<String>,

    /// Write the visible render elements, layout profile and card margin as
    /// JSON to this file
    #[arg(long, short = 'e')]
    elements: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let file = File::open(&args.snapshot)
        .with_context(|| format!("Failed to open snapshot {}", args.snapshot.display()))?;
    let snapshot = GraphSnapshot::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to decode snapshot {}", args.snapshot.display()))?;
    let graph = SocialGraph::new(snapshot);

    print_stats(&graph);
    print_hubs(&graph, args.hubs.unwrap_or(config.hub_limit));

    if let Some(target) = &args.similar_to {
        print_similar(&graph, &NodeId::from(target.as_str()), config.similar_limit);
    }

    if let Some([from, to]) = args.path.as_deref() {
        print_path(&graph, &NodeId::from(from.as_str()), &NodeId::from(to.as_str()));
    }

    if let Some(query) = &args.search {
        let matches = filter_nodes_by_query(&graph.snapshot().nodes, Some(query.as_str()), config.search_limit);
        println!("\nSearch '{query}': {} match(es)", matches.len());
        for node in matches {
            println!("  {} ({})", node.name, node.id);
        }
    }

    if let Some(path) = &args.elements {
        let export = build_render_export(graph.snapshot(), &config);
        let json = serde_json::to_string_pretty(&export).context("Failed to encode render elements")?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        println!(
            "\nWrote {} visible render elements ({} layout) to {}",
            export.elements.len(),
            export.layout.name,
            path.display()
        );
    }

    Ok(())
}

/// `RUST_LOG` directives when present and valid, otherwise warnings only
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn print_stats(graph: &SocialGraph) {
    let stats = graph.stats();
    let meta = &graph.snapshot().meta;

    println!("Social circles summary");
    println!("  Nodes:       {}", stats.total_nodes);
    println!("  Edges:       {}", stats.total_edges);
    println!("  Avg degree:  {}", stats.avg_degree);
    println!("  Max degree:  {}", stats.max_degree);
    println!("  Density:     {}", stats.density);
    println!("  Components:  {}", stats.connected_components);
    if let Some([from, to]) = meta.date_range {
        println!("  Years:       {from}-{to}");
    }
    if meta.truncated {
        println!("  (snapshot truncated by the backend)");
    }
}

fn print_hubs(graph: &SocialGraph, limit: usize) {
    println!("\nTop {limit} hubs");
    for (rank, hub) in graph.hubs(limit).iter().enumerate() {
        println!("  {:>2}. {} [{}] degree {}", rank + 1, hub.node.name, hub.node.node_type, hub.degree);
    }
}

fn print_similar(graph: &SocialGraph, target: &NodeId, limit: usize) {
    let similar = graph.similar_to(target, limit);
    println!("\nSimilar to {target}");
    if similar.is_empty() {
        println!("  none");
    }
    for entry in similar {
        println!("  {} ({} shared)", entry.node.name, entry.shared_connections);
    }
}

fn print_path(graph: &SocialGraph, from: &NodeId, to: &NodeId) {
    println!("\nPath {from} -> {to}");
    match graph.shortest_path(from, to) {
        Some(path) => {
            let names: Vec<String> = path
                .iter()
                .map(|id| graph.node(id).map_or_else(|| id.to_string(), |n| n.name.clone()))
                .collect();
            println!("  {} ({} hops)", names.join(" -> "), path.len() - 1);
        }
        None => println!("  not connected"),
    }
}
