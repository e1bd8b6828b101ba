//! Command-line entry point: one subcommand per pipeline component.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use tgprep::{
    error::Result,
    gens::SynthTemporal,
    io::WelWrite,
    nodeclass::{DatasetBuilder, DEFAULT_LIMIT, DEFAULT_THREADS},
    normalize::Normalizer,
};

#[derive(Parser)]
#[command(
    name = "tgprep",
    version,
    about = "Prepares temporal-graph datasets in the weighted-edge-list format"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize the timestamps of a raw edge file to [0,1]
    Normalize(NormalizeArgs),
    /// Generate a seeded synthetic temporal graph
    Synth(SynthArgs),
    /// Build a node-classification dataset from a snapshot archive
    Nodeclass(NodeClassArgs),
}

#[derive(Args)]
struct NormalizeArgs {
    /// Raw edge file with 3 or 4 integer columns per line
    #[arg(short = 'i', value_name = "FILE")]
    input: PathBuf,
}

#[derive(Args)]
struct SynthArgs {
    /// Number of nodes
    #[arg(short = 'n', long = "nodec")]
    nodes: u32,

    /// Number of edges (at most n*(n-1)/2)
    #[arg(short = 'e', long = "edgec")]
    edges: u32,

    /// Random seed
    #[arg(short = 's', long = "seed")]
    seed: u64,
}

#[derive(Args)]
struct NodeClassArgs {
    /// Snapshot archive (.npz) with `adjs` and `labels` members
    #[arg(short = 'i', value_name = "FILE")]
    archive: PathBuf,

    /// Number of flattening workers
    #[arg(long = "thread", default_value_t = DEFAULT_THREADS)]
    thread: usize,

    /// Per-label sampling cap
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: u32,

    /// Seed for the partition permutation (defaults to OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for all artifacts
    #[arg(long = "out-dir", default_value = ".")]
    out_dir: PathBuf,
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Normalize(args) => {
            let output = Normalizer::new().run(&args.input)?;
            info!(output = %output.display(), "done");
        }
        Command::Synth(args) => {
            let gen = SynthTemporal::new()
                .nodes(args.nodes)
                .edges(args.edges)
                .seed(args.seed);

            let edges = gen.generate()?;
            let output = gen.output_filename();
            edges.try_write_wel_file(&output)?;
            info!(edges = edges.len(), output = %output, "done");
        }
        Command::Nodeclass(args) => {
            let files = DatasetBuilder::new(&args.archive)
                .out_dir(&args.out_dir)
                .threads(args.thread)
                .limit(args.limit)
                .seed(args.seed)
                .run()?;
            info!(
                wel = %files.wel.display(),
                labels = %files.labels.display(),
                train = %files.train.display(),
                valid = %files.valid.display(),
                test = %files.test.display(),
                "done"
            );
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
