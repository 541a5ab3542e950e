//! `site:status`: view the current state of an installation.

use anyhow::bail;
use loam_console_core::console::{Application, CommandDefinition, CommandInput, ConsoleCommand};
use loam_console_core::site::SiteStatus;

pub struct SiteStatusCommand;

impl ConsoleCommand for SiteStatusCommand {
    fn definition(&self) -> CommandDefinition {
        CommandDefinition::new("site:status", "View the current state of the installation")
            .option_with_default("format", "Output format (table or json)", "table")
    }

    fn execute(&self, app: &Application, input: &CommandInput) -> anyhow::Result<()> {
        let status = SiteStatus::collect(app.root(), app.version())?;
        match input.option("format").unwrap_or("table") {
            "table" => print_table(&status),
            "json" => println!("{}", serde_json::to_string_pretty(&status.to_json())?),
            other => bail!("unsupported format '{other}', expected 'table' or 'json'"),
        }
        Ok(())
    }
}

fn print_table(status: &SiteStatus) {
    for group in &status.groups {
        let width = group
            .entries
            .iter()
            .map(|entry| entry.label.len())
            .max()
            .unwrap_or(0);
        println!("{}", group.name);
        for entry in &group.entries {
            println!("  {:<width$}  {}", entry.label, entry.value);
        }
        println!();
    }
}
