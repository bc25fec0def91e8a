use lazy_dijkstra::graph::format::GraphFile;
use lazy_dijkstra::graph::Graph;
use lazy_dijkstra::{Dijkstra, OperationCounter};
use serde_json::json;
use std::env;
use std::path::PathBuf;

/// Command line configuration
#[derive(Debug, Clone)]
struct CliConfig {
    graph_path: PathBuf,
    source: usize,
    target: Option<usize>,
    pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            graph_path: PathBuf::from("graph.json"),
            source: 0,
            target: None,
            pretty: true,
        }
    }
}

impl CliConfig {
    fn from_args(args: &[String]) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = CliConfig::default();
        let mut positional = Vec::new();

        for arg in args.iter().skip(1) {
            match arg.as_str() {
                "--compact" => config.pretty = false,
                _ => positional.push(arg),
            }
        }

        if let Some(path) = positional.first() {
            config.graph_path = PathBuf::from(path);
        }
        if let Some(source) = positional.get(1) {
            config.source = source.parse()?;
        }
        if let Some(target) = positional.get(2) {
            config.target = Some(target.parse()?);
        }

        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: {} <graph.json> [source] [target] [--compact]", args[0]);
        std::process::exit(2);
    }
    let config = CliConfig::from_args(&args)?;
    log::info!("Loading graph from {}", config.graph_path.display());

    let graph = GraphFile::load(&config.graph_path)?.into_graph()?;
    log::info!(
        "Graph has {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let engine = Dijkstra::new();
    let mut counter = OperationCounter::new();

    let output = match config.target {
        Some(target) => {
            match engine.compute_single_target_observed(&graph, config.source, target, &mut counter)? {
                Some(found) => json!({
                    "source": config.source,
                    "target": target,
                    "distance": found.distance,
                    "path": found.path,
                    "operations": counter,
                }),
                None => json!({
                    "source": config.source,
                    "target": target,
                    "distance": null,
                    "path": null,
                    "operations": counter,
                }),
            }
        }
        None => {
            let table = engine.compute_all_observed(&graph, config.source, &mut counter)?;
            json!({
                "table": table,
                "reached": table.reached_count(),
                "operations": counter,
            })
        }
    };

    let rendered = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);

    Ok(())
}
