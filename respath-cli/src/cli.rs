//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CatCommand, CombineCommand, CompletionsCommand, CopyCommand, DirectoryCommand,
    NormalizeCommand, RelativeCommand, ResolveCommand, ShowConfigCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving display resources.
#[derive(Parser)]
#[command(name = "respath")]
#[command(version, about = "Resolve display resources on disk and over HTTP", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "RESPATH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Override how long fetched URLs stay cached (in seconds)
    #[arg(long, value_name = "SECONDS", global = true)]
    pub cache_ttl: Option<u64>,

    /// Override the network read timeout (in milliseconds)
    #[arg(long, value_name = "MILLIS", global = true)]
    pub read_timeout_ms: Option<u64>,

    /// Accept self-signed certificates for https resources
    #[arg(long, global = true)]
    pub trust_self_signed: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a resource name to a reachable file or URL
    Resolve(ResolveCommand),

    /// Print the content of a resource
    Cat(CatCommand),

    /// Copy a resource into a local file
    Copy(CopyCommand),

    /// Normalize a path or URL
    Normalize(NormalizeCommand),

    /// Print the directory part of a path or URL
    Directory(DirectoryCommand),

    /// Express a path relative to a parent display
    Relative(RelativeCommand),

    /// Combine a path with the directory of a parent display
    Combine(CombineCommand),

    /// Show the effective configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
