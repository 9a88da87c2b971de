//! Build script for respath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn parent_arg(help: &'static str) -> Arg {
    Arg::new("parent")
        .long("parent")
        .help(help)
        .value_name("PATH")
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("respath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve display resources on disk and over HTTP")
        .long_about(
            "Command-line tool for resolving display resource references to files or URLs, \
             reading them through a short-lived cache",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("RESPATH_CONFIG_DIR"),
        )
        .arg(
            Arg::new("cache-ttl")
                .long("cache-ttl")
                .help("Override how long fetched URLs stay cached (in seconds)")
                .value_name("SECONDS")
                .global(true),
        )
        .arg(
            Arg::new("read-timeout-ms")
                .long("read-timeout-ms")
                .help("Override the network read timeout (in milliseconds)")
                .value_name("MILLIS")
                .global(true),
        )
        .arg(
            Arg::new("trust-self-signed")
                .long("trust-self-signed")
                .help("Accept self-signed certificates for https resources")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve a resource name to a reachable file or URL")
                .long_about(
                    "Print the file or URL a resource name refers to, trying the newer \
                     extension for legacy names first",
                )
                .arg(Arg::new("name").required(true))
                .arg(parent_arg("Display the name is relative to"))
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Fail when no candidate can be opened")
                        .action(clap::ArgAction::SetTrue),
                ),
            Command::new("cat")
                .about("Print the content of a resource")
                .long_about("Resolve a resource and copy its content to standard output")
                .arg(Arg::new("name").required(true))
                .arg(parent_arg("Display the name is relative to")),
            Command::new("copy")
                .about("Copy a resource into a local file")
                .long_about("Resolve a resource and copy its content into a local file")
                .arg(Arg::new("source").required(true))
                .arg(Arg::new("dest").required(true))
                .arg(parent_arg("Display the source is relative to")),
            Command::new("normalize")
                .about("Normalize a path or URL")
                .arg(Arg::new("path").required(true)),
            Command::new("directory")
                .about("Print the directory part of a path or URL")
                .arg(Arg::new("path").required(true)),
            Command::new("relative")
                .about("Express a path relative to a parent display")
                .arg(Arg::new("parent").required(true))
                .arg(Arg::new("path").required(true)),
            Command::new("combine")
                .about("Combine a path with the directory of a parent display")
                .arg(Arg::new("path").required(true))
                .arg(parent_arg("Parent display")),
            Command::new("show-config")
                .about("Show the effective configuration")
                .long_about("Print the configuration after merging files, environment and flags"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("respath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
