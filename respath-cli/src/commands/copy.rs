//! Copy command implementation.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::Args;
use respath::copy_resource;

/// Copy a resource into a local file.
#[derive(Args)]
pub struct CopyCommand {
    /// Resource to copy, absolute or relative to the parent
    pub source: String,

    /// Local file to create or overwrite
    pub dest: String,

    /// Display the source is relative to
    #[arg(long, value_name = "PATH")]
    pub parent: Option<String>,
}

impl CopyCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global)?;
        let resolved = resolver.resolve(self.parent.as_deref(), &self.source);

        // Open the source first so a missing source leaves the destination alone
        let input = resolver.open_resource_stream(&resolved)?;
        let output = resolver.write_resource(&self.dest)?;
        let copied = copy_resource(input, output)?;

        if !global.quiet {
            eprintln!("Copied {copied} bytes from {resolved} to {}", self.dest);
        }
        Ok(())
    }
}
