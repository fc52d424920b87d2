use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use endpoints_router::config::{compile_routes, load_config};
use endpoints_router::observability::logging::init_logging;
use endpoints_router::HttpMethod;

#[derive(Parser)]
#[command(name = "route-cli")]
#[command(about = "Validate route tables and resolve paths against them", long_about = None)]
struct Cli {
    /// Route table file (TOML)
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and compile the route table
    Check,
    /// Resolve a method and path, printing the target and parameters as JSON
    Resolve {
        method: String,
        path: String,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Logging not initialised: {}", e);
    }

    let trie = compile_routes(&config)?;
    tracing::info!(
        config = %cli.config.display(),
        routes = trie.route_count(),
        "Route table compiled"
    );

    match cli.command {
        Commands::Check => {
            println!("{}: {} routes OK", cli.config.display(), trie.route_count());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Resolve { method, path } => {
            let method: HttpMethod = method.parse()?;
            match trie.resolve(method, &path) {
                Some(resolved) => {
                    let parameters: BTreeMap<_, _> = resolved.parameters().iter().collect();
                    let out = json!({
                        "method": method,
                        "path": path,
                        "target": resolved.value(),
                        "parameters": parameters,
                    });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("No route for {} {}", method, path);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
