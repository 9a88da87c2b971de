//! Main entry point for the respath CLI.
//!
//! This is the command-line interface for the respath resource resolver.
//! It provides commands for working with display resources:
//! - `resolve`: Resolve a resource name to a reachable file or URL
//! - `cat`: Print the content of a resource
//! - `copy`: Copy a resource into a local file
//! - `normalize`, `directory`, `relative`, `combine`: Path algebra
//! - `show-config`: Show the effective configuration

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = respath::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
        cache_ttl: cli.cache_ttl,
        read_timeout_ms: cli.read_timeout_ms,
        trust_self_signed: cli.trust_self_signed,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Cat(cmd) => cmd.execute(&global),
        cli::Command::Copy(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Directory(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Combine(cmd) => cmd.execute(&global),
        cli::Command::ShowConfig(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
