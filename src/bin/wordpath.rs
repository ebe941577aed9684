//! wordpath CLI: find word ladders, or build the graph files they run on.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use wordpath::{DuplicatePolicy, GraphConfig, PathOutcome, TracingObserver, WordGraph};

/// Shortest word ladders over an edit-distance graph
#[derive(Parser, Debug)]
#[command(name = "wordpath")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins when set.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the shortest path between two words
    Find(FindArgs),

    /// Build words.txt and graph.bin from a raw word list
    Build(BuildArgs),
}

#[derive(clap::Args, Debug)]
struct FindArgs {
    start: String,
    end: String,

    /// JSON config file with words_path / adjacency_path / duplicate_policy
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Word list (overrides config)
    #[arg(long, env = "WORDPATH_WORDS")]
    words: Option<PathBuf>,

    /// Adjacency file (overrides config)
    #[arg(long, env = "WORDPATH_GRAPH")]
    graph: Option<PathBuf>,

    /// keep-last, keep-first or reject
    #[arg(long)]
    duplicates: Option<DuplicatePolicy>,

    /// Print the path as a JSON array
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct BuildArgs {
    /// Raw word list, whitespace separated
    input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "data")]
    out: PathBuf,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn run_find(args: FindArgs) -> wordpath::Result<()> {
    let mut config = match &args.config {
        Some(path) => GraphConfig::from_json_file(path)?,
        None => GraphConfig::default(),
    };
    if let Some(words) = args.words {
        config = config.with_words_path(words);
    }
    if let Some(graph) = args.graph {
        config = config.with_adjacency_path(graph);
    }
    if let Some(policy) = args.duplicates {
        config = config.with_duplicate_policy(policy);
    }

    let graph = WordGraph::load(&config)?;
    let outcome = graph.shortest_path_observed(&args.start, &args.end, &mut TracingObserver)?;

    if args.json {
        let path = outcome.into_path();
        println!("{}", serde_json::to_string(&path)?);
        return Ok(());
    }

    match outcome {
        PathOutcome::Found(path) => {
            println!("Path from {} to {}:", args.start, args.end);
            println!("{path}");
        }
        PathOutcome::UnknownWord(_) | PathOutcome::Unreachable => {
            println!("No path found between {} and {}.", args.start, args.end);
        }
    }
    Ok(())
}

fn run_build(args: BuildArgs) -> wordpath::Result<()> {
    let config = wordpath::builder::build_resources(&args.input, &args.out)?;
    println!(
        "Graph saved to {} and {}",
        config.words_path.display(),
        config.adjacency_path.display()
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Command::Find(find) => run_find(find),
        Command::Build(build) => run_build(build),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
