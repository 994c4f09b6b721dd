use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use frontend_router::config::loader::load_config;
use frontend_router::event::RequestDescriptor;
use frontend_router::observability::logging::init_logging;
use frontend_router::{EdgeHandler, RouterConfig};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "router-cli")]
#[command(about = "Local driver for the frontend version router", long_about = None)]
struct Cli {
    /// Router configuration (TOML). Defaults to the built-in version list.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Fixed seed for reproducible selection.
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Route a single uri and print the result
    Rewrite { uri: String },
    /// Process a CloudFront event JSON file ("-" for stdin)
    Event { file: PathBuf },
    /// Route the same uri many times and print how often each version was chosen
    Sample {
        uri: String,
        #[arg(short, long, default_value_t = 12_000)]
        trials: usize,
    },
    /// List configured versions
    Versions,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    if cli.seed.is_some() {
        config.selection.seed = cli.seed;
    }
    // Logs share stdout with results; quiet unless RUST_LOG says otherwise.
    config.observability.log_level = "warn".to_string();
    // Nothing to report if a subscriber is already set.
    init_logging(&config.observability).ok();

    let handler = EdgeHandler::new(&config)?;

    match cli.command {
        Commands::Rewrite { uri } => {
            let request = handler.route_request(RequestDescriptor::new(uri))?;
            println!("{}", request.uri);
        }
        Commands::Event { file } => {
            let event = read_event(&file)?;
            let request = handler.handle(event)?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Commands::Sample { uri, trials } => {
            let versions = handler.router().versions();
            let mut counts = vec![0usize; versions.len()];
            for _ in 0..trials {
                let decision = handler.decide(&uri)?;
                if !decision.is_rewrite() {
                    println!("{} already targets {}; nothing to sample", uri, decision.version());
                    return Ok(());
                }
                if let Some(i) = versions.iter().position(|v| v == decision.version()) {
                    counts[i] += 1;
                }
            }
            for (version, count) in versions.iter().zip(&counts) {
                let share = *count as f64 / trials.max(1) as f64 * 100.0;
                println!("{:<12} {:>8} {:>6.2}%", version.as_str(), count, share);
            }
        }
        Commands::Versions => {
            for version in handler.router().versions().iter() {
                println!("{}", version);
            }
        }
    }

    Ok(())
}

fn read_event(file: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let content = if file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(file)?
    };
    Ok(serde_json::from_str(&content)?)
}
