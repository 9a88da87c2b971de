//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve a resource name to a reachable file or URL
//! - `cat`: Print the content of a resource
//! - `copy`: Copy a resource into a local file
//! - `normalize`, `directory`, `relative`, `combine`: Path algebra
//! - `show_config`: Show the effective configuration
//! - `completions`: Generate shell completion scripts

pub mod cat;
pub mod completions;
pub mod copy;
pub mod path_ops;
pub mod resolve;
pub mod show_config;

pub use cat::CatCommand;
pub use completions::CompletionsCommand;
pub use copy::CopyCommand;
pub use path_ops::{CombineCommand, DirectoryCommand, NormalizeCommand, RelativeCommand};
pub use resolve::ResolveCommand;
pub use show_config::ShowConfigCommand;
