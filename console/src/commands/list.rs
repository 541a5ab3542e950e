//! `list`: enumerate the registered commands.
//!
//! Skip-listed from default injection so its output is identical
//! regardless of any per-command configuration.

use loam_console_core::console::{Application, CommandDefinition, CommandInput, ConsoleCommand};

pub struct ListCommand;

impl ConsoleCommand for ListCommand {
    fn definition(&self) -> CommandDefinition {
        CommandDefinition::new("list", "List all available commands")
    }

    fn execute(&self, app: &Application, _input: &CommandInput) -> anyhow::Result<()> {
        println!("loam console {}", app.version());
        println!();
        println!("Available commands:");
        for (identity, description) in app.command_summaries() {
            println!("  {identity:<28} {description}");
        }
        Ok(())
    }
}
