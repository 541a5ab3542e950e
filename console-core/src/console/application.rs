//! Command registry and dispatcher.
//!
//! The application owns the registered commands, the hook chain and the
//! loaded configuration. Dispatch is sequential and synchronous: one
//! invocation clones the command's definition, runs the hooks over the
//! clone, builds a parser from the resulting definition and finally
//! hands the materialized input to the command.

use crate::config::Config;
use crate::console::definition::CommandDefinition;
use crate::console::hooks::CommandHook;
use crate::console::input::CommandInput;
use clap::{Arg, ArgAction};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Dispatch failures surfaced to the binary.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("unknown command '{identity}', run 'list' to see available commands")]
    UnknownCommand { identity: String },

    #[error("invalid input for '{identity}': {source}")]
    InvalidInput {
        identity: String,
        #[source]
        source: clap::Error,
    },
}

/// A runnable console command.
pub trait ConsoleCommand {
    /// A fresh definition for one invocation. Hooks mutate the returned
    /// value only; the registered command itself is never touched, so
    /// injected defaults cannot leak between invocations in a
    /// long-lived process.
    fn definition(&self) -> CommandDefinition;

    /// Run with the parsed input. The application handle gives access
    /// to the configuration, the site root and re-dispatch (used by
    /// `chain`).
    fn execute(&self, app: &Application, input: &CommandInput) -> anyhow::Result<()>;
}

/// The hosting application: registry, hook chain and shared context.
pub struct Application {
    commands: BTreeMap<String, Box<dyn ConsoleCommand>>,
    hooks: Vec<Box<dyn CommandHook>>,
    config: Config,
    root: PathBuf,
    version: String,
}

impl Application {
    pub fn new(config: Config, root: impl Into<PathBuf>) -> Self {
        Self {
            commands: BTreeMap::new(),
            hooks: Vec::new(),
            config,
            root: root.into(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }

    /// Register a command under its definition's identity.
    pub fn register(&mut self, command: Box<dyn ConsoleCommand>) {
        let identity = command.definition().identity().to_owned();
        self.commands.insert(identity, command);
    }

    /// Append a hook; hooks run in registration order.
    pub fn add_hook(&mut self, hook: Box<dyn CommandHook>) {
        self.hooks.push(hook);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Identity and description of every registered command, sorted by
    /// identity.
    pub fn command_summaries(&self) -> Vec<(String, String)> {
        self.commands
            .values()
            .map(|command| {
                let definition = command.definition();
                (definition.identity().to_owned(), definition.description().to_owned())
            })
            .collect()
    }

    /// Dispatch one invocation. `tokens[0]` is the command identity,
    /// the rest are its options and arguments.
    pub fn run(&self, tokens: &[String]) -> anyhow::Result<()> {
        let identity = tokens
            .first()
            .cloned()
            .unwrap_or_else(|| "list".to_owned());
        let command = self
            .commands
            .get(&identity)
            .ok_or_else(|| ConsoleError::UnknownCommand {
                identity: identity.clone(),
            })?;

        let mut definition = command.definition();
        for hook in &self.hooks {
            hook.before_execute(&mut definition, &self.config)?;
        }

        let parser = build_parser(&definition);
        let matches = match parser.try_get_matches_from(tokens) {
            Ok(matches) => matches,
            Err(err)
                if matches!(
                    err.kind(),
                    clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
                ) =>
            {
                let _ = err.print();
                return Ok(());
            }
            Err(source) => {
                return Err(ConsoleError::InvalidInput { identity, source }.into());
            }
        };

        let input = CommandInput::from_matches(&definition, &matches);
        debug!(command = %identity, "executing");
        command.execute(self, &input)
    }
}

/// Build the argument parser for one (possibly hook-mutated)
/// definition. Defaults present on the definition at this point become
/// the parser's defaults, which is how injected values reach commands.
fn build_parser(definition: &CommandDefinition) -> clap::Command {
    let mut parser = clap::Command::new(definition.identity().to_owned())
        .about(definition.description().to_owned());

    for parameter in definition.options() {
        let mut arg = Arg::new(parameter.name.clone())
            .long(parameter.name.clone())
            .help(parameter.description.clone());
        if parameter.flag {
            arg = arg.action(ArgAction::SetTrue);
        } else if parameter.multiple {
            arg = arg.action(ArgAction::Append);
            if let Some(default) = &parameter.default {
                arg = arg.default_values(default.values());
            }
        } else {
            arg = arg.action(ArgAction::Set);
            if let Some(default) = &parameter.default {
                arg = arg.default_value(default.first().to_owned());
            }
        }
        parser = parser.arg(arg);
    }

    for parameter in definition.arguments() {
        let mut arg = Arg::new(parameter.name.clone()).help(parameter.description.clone());
        if parameter.multiple {
            arg = arg.num_args(0..);
        }
        if let Some(default) = &parameter.default {
            arg = arg.default_value(default.first().to_owned());
        } else if parameter.required {
            arg = arg.required(true);
        }
        parser = parser.arg(arg);
    }

    parser
}
