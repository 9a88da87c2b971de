//! Resolve command implementation.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::Args;

/// Resolve a resource name to a reachable file or URL.
#[derive(Args)]
pub struct ResolveCommand {
    /// Resource name, absolute or relative to the parent
    pub name: String,

    /// Display the name is relative to
    #[arg(long, value_name = "PATH")]
    pub parent: Option<String>,

    /// Fail when no candidate can be opened instead of printing the name
    #[arg(long)]
    pub strict: bool,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.name.is_empty() {
            return Err(CliError::InvalidArguments(
                "resource name cannot be empty".to_string(),
            ));
        }

        let resolver = build_resolver(global)?;
        let parent = self.parent.as_deref();
        let resolved = resolver.resolve(parent, &self.name);

        if self.strict && resolver.do_resolve(parent, &resolved).is_none() {
            return Err(CliError::SemanticFailure(format!(
                "Cannot resolve {}",
                self.name
            )));
        }

        println!("{resolved}");
        Ok(())
    }
}
