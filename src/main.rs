//! hocus CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use hocus::Config;
use hocus::observe::LogObserver;
use hocus::parsers::collection;
use hocus::pipeline::process_all;

/// Render and solve isometric cube diagrams.
#[derive(Parser, Debug)]
#[command(name = "hocus", version = env!("HOCUS_VERSION"), about = "Render and solve isometric cube diagrams")]
struct Cli {
    /// Collection file (reads from stdin if not provided)
    input: Option<String>,

    /// Extra canvas cells per cube unit
    #[arg(short = 's', long = "slack")]
    slack: Option<usize>,

    /// Process at most this many diagrams
    #[arg(short = 'n', long = "limit")]
    limit: Option<usize>,

    /// Do not render the named diagram (repeatable)
    #[arg(long = "skip-render", value_name = "NAME")]
    skip_render: Vec<String>,

    /// TOML configuration file
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(cli:?; "Parsed arguments");

    let mut config = match &cli.config {
        Some(path) => Config::load(path).unwrap_or_else(|e| {
            error!("cannot load config '{path}': {e}");
            process::exit(1);
        }),
        None => Config::new(),
    };
    if let Some(slack) = cli.slack {
        config.slack = slack;
    }
    if cli.limit.is_some() {
        config.limit = cli.limit;
    }
    config.skip_render.extend(cli.skip_render.iter().cloned());

    let text = if let Some(ref path) = cli.input {
        fs::read_to_string(path).unwrap_or_else(|e| {
            error!("cannot read '{path}': {e}");
            process::exit(1);
        })
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            error!("cannot read stdin: {e}");
            process::exit(1);
        }
        buf
    };

    let collection = collection::load(&text).unwrap_or_else(|e| {
        error!("cannot load collection: {e}");
        process::exit(1);
    });
    info!(diagrams = collection.len(), slack = config.slack; "Starting");

    let mut stdout = io::stdout().lock();
    let mut failed = 0usize;
    for (name, result) in process_all(&collection, &config, &mut LogObserver) {
        match result {
            Ok(outcome) => {
                if let Err(e) = writeln!(stdout, "{}", outcome.report()) {
                    error!("cannot write output: {e}");
                    process::exit(1);
                }
            }
            Err(e) => {
                failed += 1;
                error!("{name}: {e}");
            }
        }
    }

    info!(failed = failed; "Completed");
}
