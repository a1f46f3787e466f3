//! CLI command-name contract for logging spans and routing.

use crate::cli::parse::Commands;

/// Command name string for log spans (e.g. "remove", "contexts").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Endpoint { .. } => "endpoint",
        Commands::Node { .. } => "node",
        Commands::Context { .. } => "context",
        Commands::Add { .. } => "add",
        Commands::Remove { .. } => "remove",
        Commands::Contexts { .. } => "contexts",
        Commands::Merge { .. } => "merge",
        Commands::New { .. } => "new",
        Commands::Info => "info",
    }
}

/// Whether the command rewrites the store file.
pub fn is_mutating(command: &Commands) -> bool {
    !matches!(command, Commands::Contexts { .. } | Commands::Info)
}
