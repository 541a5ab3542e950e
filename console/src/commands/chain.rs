//! `chain`: run a sequence of commands described by a chain file.
//!
//! Each entry is re-dispatched through the application, so chained
//! commands get the same default injection and parsing as direct
//! invocations. The chain stops at the first failure.

use anyhow::{bail, Context};
use loam_console_core::chain::ChainFile;
use loam_console_core::console::{Application, CommandDefinition, CommandInput, ConsoleCommand};
use std::path::Path;
use tracing::info;

pub struct ChainCommand;

impl ConsoleCommand for ChainCommand {
    fn definition(&self) -> CommandDefinition {
        CommandDefinition::new("chain", "Run a sequence of commands from a chain file")
            .option_with_default("file", "Path to the chain file", "chain.yml")
    }

    fn execute(&self, app: &Application, input: &CommandInput) -> anyhow::Result<()> {
        let file = input.option("file").unwrap_or("chain.yml");
        let chain = ChainFile::load(Path::new(file))?;
        for entry in &chain.commands {
            // A chain entry dispatching `chain` again would recurse
            // without bound (directly, or through a cycle of files).
            if entry.command == "chain" {
                bail!("chain files must not contain 'chain' entries ({file})");
            }
            info!(command = %entry.command, "chaining");
            let tokens = entry.to_tokens()?;
            app.run(&tokens)
                .with_context(|| format!("chained command '{}' failed", entry.command))?;
        }
        Ok(())
    }
}
