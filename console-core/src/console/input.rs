//! Parsed input for one command invocation.

use crate::console::definition::CommandDefinition;
use clap::ArgMatches;
use std::collections::BTreeMap;

/// The values a command reads during execution.
///
/// Options and arguments live in separate namespaces, matching the
/// definition model: a name is unique within its kind only. Explicit
/// CLI values always win; injected defaults are only ever observed for
/// parameters the caller left out.
#[derive(Debug, Clone, Default)]
pub struct CommandInput {
    options: BTreeMap<String, Vec<String>>,
    flags: BTreeMap<String, bool>,
    arguments: BTreeMap<String, Vec<String>>,
}

impl CommandInput {
    pub(crate) fn from_matches(definition: &CommandDefinition, matches: &ArgMatches) -> Self {
        let mut input = Self::default();
        for parameter in definition.options() {
            if parameter.flag {
                let mut enabled = matches.get_flag(&parameter.name);
                if !enabled {
                    if let Some(default) = &parameter.default {
                        enabled = default.enables_flag();
                    }
                }
                input.flags.insert(parameter.name.clone(), enabled);
            } else if let Some(values) = matches.get_many::<String>(&parameter.name) {
                input
                    .options
                    .insert(parameter.name.clone(), values.cloned().collect());
            }
        }
        for parameter in definition.arguments() {
            if let Some(values) = matches.get_many::<String>(&parameter.name) {
                input
                    .arguments
                    .insert(parameter.name.clone(), values.cloned().collect());
            }
        }
        input
    }

    /// First value of an option, if present.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values of a repeatable option.
    pub fn option_values(&self, name: &str) -> &[String] {
        self.options.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a flag is switched on.
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// First value of a positional argument, if present.
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values of a repeatable positional argument.
    pub fn argument_values(&self, name: &str) -> &[String] {
        self.arguments.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}
