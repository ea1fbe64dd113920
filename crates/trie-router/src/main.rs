//! trie-router CLI
//!
//! Loads a JSON route table and inspects the resulting trie.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use trie_router::RouteTable;

/// Inspect and query a route table.
#[derive(Parser)]
#[command(name = "trie-router")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON route table.
    #[arg(short, long, env = "TRIE_ROUTER_ROUTES")]
    routes: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the routing trie.
    Dump,

    /// Resolve a request against the table.
    Match {
        /// Request method, e.g. GET.
        method: String,

        /// Request path.
        path: String,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let router = RouteTable::load(&cli.routes)?.build()?;
    debug!(routes = router.route_count(), "Router ready");

    match cli.command {
        Commands::Dump => {
            print!("{}", router.dump_tree());
            Ok(ExitCode::SUCCESS)
        }

        Commands::Match { method, path } => {
            if let Some(found) = router.find_route_str(&path, &method) {
                println!("handler: {}", found.handler);
                for (name, value) in found.params.iter() {
                    println!("  {name} = {value}");
                }
                return Ok(ExitCode::SUCCESS);
            }

            let allowed = router.allowed_methods(&path);
            if allowed.is_empty() {
                println!("not found: {method} {path}");
            } else {
                let allowed: Vec<_> = allowed.iter().map(|m| m.as_str()).collect();
                println!(
                    "method not allowed: {method} {path} (allowed: {})",
                    allowed.join(", ")
                );
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
