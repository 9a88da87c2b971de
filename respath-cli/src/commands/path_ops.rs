//! Path algebra commands.
//!
//! These commands never touch the filesystem or the network; they print the
//! result of the corresponding `respath::path` function.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use respath::path::{combine_display_paths, get_directory, get_relative_path, normalize};

/// Normalize a path or URL.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path or URL to normalize
    pub path: String,
}

impl NormalizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", normalize(&self.path));
        Ok(())
    }
}

/// Print the directory part of a path or URL.
#[derive(Args)]
pub struct DirectoryCommand {
    /// Path or URL of a resource
    pub path: String,
}

impl DirectoryCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", get_directory(&self.path));
        Ok(())
    }
}

/// Express a path relative to a parent display.
#[derive(Args)]
pub struct RelativeCommand {
    /// Parent display
    pub parent: String,

    /// Path to express relative to the parent's directory
    pub path: String,
}

impl RelativeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", get_relative_path(&self.parent, &self.path));
        Ok(())
    }
}

/// Combine a path with the directory of a parent display.
#[derive(Args)]
pub struct CombineCommand {
    /// Path to combine
    pub path: String,

    /// Parent display
    #[arg(long, value_name = "PATH")]
    pub parent: Option<String>,
}

impl CombineCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!(
            "{}",
            combine_display_paths(self.parent.as_deref(), &self.path)
        );
        Ok(())
    }
}
