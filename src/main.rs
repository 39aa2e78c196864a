use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

use jdepgraph::core::{IgnoredPrefixes, ProjectAnalyzer};
use jdepgraph::formatters::JsonGraphFormatter;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "jdepgraph",
    version = "0.1.0",
    author = "jdepgraph developers",
    about = "Static Java import dependency graph extractor"
)]
struct Cli {
    /// Root directory of the Java source tree to analyze
    #[arg(value_name = "PROJECT_DIR")]
    input: PathBuf,

    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "graph.json")]
    output: PathBuf,

    /// Namespace prefix to ignore; repeatable, replaces the built-in
    /// standard-library/framework list when given
    #[arg(long = "ignore-prefix", value_name = "PREFIX")]
    ignore_prefixes: Vec<String>,
}

fn main() {
    env_logger::init();

    // Bad arguments exit with status 1 and usage on stdout; --help and
    // --version keep clap's normal exit behavior.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = cli
        .input
        .canonicalize()
        .with_context(|| format!("cannot resolve project directory {}", cli.input.display()))?;

    println!("Analyzing Java files in: {}", root.display());

    let ignored = if cli.ignore_prefixes.is_empty() {
        IgnoredPrefixes::standard()
    } else {
        IgnoredPrefixes::new(cli.ignore_prefixes)
    };

    let analyzer = ProjectAnalyzer::with_ignored(ignored)?;
    let graph = analyzer.analyze(&root)?;

    JsonGraphFormatter::new().format_to_file(&graph, &cli.output)?;

    println!("Java dependency graph saved as {}", cli.output.display());

    Ok(())
}
