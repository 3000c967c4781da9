use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser as _, ValueEnum};
use tonho::{parser::parser::Parser, read_source, render_diagnostic};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser, Debug)]
#[command(name = "tonho", version, about = "Scan a source file and print its tokens")]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// How each token is printed
    #[arg(long, value_enum, default_value_t = Format::Describe)]
    format: Format,

    /// Raise the log level (-v info, -vv debug, -vvv trace); RUST_LOG wins
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `Identifier (kind: 2, text: 'foo')`
    Describe,
    /// `Identifier ("foo")`
    Display,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.display().to_string());

    let source = match read_source(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let parser = Parser::new(&file_name, &source);
    info!(elapsed = ?start.elapsed(), tokens = parser.tokens().len(), "tokenized");

    for token in parser.tokens() {
        match cli.format {
            Format::Describe => println!("{}", token.describe()),
            Format::Display => println!("{}", token),
        }
    }

    for diagnostic in parser.errors() {
        eprintln!("{}\n", render_diagnostic(diagnostic));
    }

    if parser.errors().is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
