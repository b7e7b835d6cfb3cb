use combinatorrs::pairs::Pairs;
use combinatorrs::static_config::*;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

/// Enumerate allocations, permutations, combinations or subsets of a JSON object.
///
/// The object is read from `--input` or stdin; every result is written to stdout as
/// one JSON object per line.
#[derive(Parser, Debug)]
#[command(name = "enumerate")]
struct Args {
    #[command(subcommand)]
    generator: Option<Command>,

    /// JSON config file; command line options take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    input: Option<PathBuf>,

    /// Stop after this many results.
    #[arg(long)]
    limit: Option<usize>,

    #[arg(long)]
    pretty: bool,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Distribute TOTAL over the keys.
    Allocations {
        #[arg(allow_negative_numbers = true)]
        total: i64,
    },
    Permutations,
    /// Every N-sized sub-object.
    Combinations {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    Powerset,
}

impl From<Command> for GeneratorConfig {
    fn from(cmd: Command) -> GeneratorConfig {
        match cmd {
            Command::Allocations { total } => GeneratorConfig::Allocations { total },
            Command::Permutations => GeneratorConfig::Permutations,
            Command::Combinations { n } => GeneratorConfig::Combinations { n },
            Command::Powerset => GeneratorConfig::Powerset,
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<Pairs<String, Value>> {
    let input = match path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("could not open {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))?
        },
        None => serde_json::from_reader(io::stdin().lock())?
    };
    Ok(input)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => read_static_config(path)?,
        None => StaticConfig::default()
    };
    let generator = args.generator.map(GeneratorConfig::from)
        .or(config.generator)
        .ok_or_else(|| anyhow!("no generator given on the command line or in the config"))?
        .build()?;
    let limit = args.limit.or(config.limit).unwrap_or(usize::MAX);
    let pretty = args.pretty || config.pretty;

    let input = read_input(args.input.as_ref())?;
    tracing::info!(generator = generator.name(), len = input.len(), "enumerating");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut emitted = 0usize;
    for result in generator.apply(input).take(limit) {
        if pretty {
            serde_json::to_writer_pretty(&mut out, &result)?;
        } else {
            serde_json::to_writer(&mut out, &result)?;
        }
        writeln!(out)?;
        emitted += 1;
    }
    out.flush()?;
    tracing::debug!(emitted, "done");

    Ok(())
}
