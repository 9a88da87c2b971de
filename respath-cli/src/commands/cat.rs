//! Cat command implementation.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::Args;
use respath::copy_resource;
use std::io;

/// Print the content of a resource.
#[derive(Args)]
pub struct CatCommand {
    /// Resource name, absolute or relative to the parent
    pub name: String,

    /// Display the name is relative to
    #[arg(long, value_name = "PATH")]
    pub parent: Option<String>,
}

impl CatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global)?;
        let resolved = resolver.resolve(self.parent.as_deref(), &self.name);

        let input = resolver.open_resource_stream(&resolved)?;
        let copied = copy_resource(input, io::stdout().lock())?;

        if global.verbose {
            eprintln!("Read {copied} bytes from {resolved}");
        }
        Ok(())
    }
}
