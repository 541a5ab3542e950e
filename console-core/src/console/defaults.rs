//! Default-value injection from the configuration store.
//!
//! Before a command parses its input, each of its declared options and
//! arguments is checked against the configuration tree under
//! `application.default.commands.<command>.<options|arguments>.<name>`,
//! where the command identity's `:` separators become `.`. A truthy
//! stored value replaces the parameter's built-in default; the command
//! then executes with whatever defaults are in effect for parameters
//! the caller did not supply explicitly.
//!
//! The injector only ever mutates the per-invocation definition clone
//! handed to it by the dispatcher, so injected defaults cannot leak
//! into later invocations within the same process.

use crate::config::ConfigStore;
use crate::console::definition::{CommandDefinition, DefaultValue, ParameterKind};
use crate::console::hooks::CommandHook;
use serde_yaml::Value;
use tracing::{debug, trace};

/// Meta-commands exempt from default injection. `list` in particular
/// must enumerate commands identically regardless of any per-command
/// configuration, and `chain` dispatches other commands which are
/// injected individually.
pub const SKIP_COMMANDS: &[&str] = &["self-update", "list", "chain"];

/// The pre-execution hook that overlays stored defaults onto a
/// command's parameter definitions. Options are processed before
/// arguments; each parameter is looked up exactly once per invocation.
#[derive(Debug, Default)]
pub struct DefaultValueInjector;

impl DefaultValueInjector {
    pub fn new() -> Self {
        Self
    }
}

impl CommandHook for DefaultValueInjector {
    fn before_execute(
        &self,
        definition: &mut CommandDefinition,
        config: &dyn ConfigStore,
    ) -> anyhow::Result<()> {
        if SKIP_COMMANDS.contains(&definition.identity()) {
            trace!(command = definition.identity(), "skipping default injection");
            return Ok(());
        }
        inject(definition, config, ParameterKind::Option);
        inject(definition, config, ParameterKind::Argument);
        Ok(())
    }
}

fn inject(definition: &mut CommandDefinition, config: &dyn ConfigStore, kind: ParameterKind) {
    let identity = definition.identity().to_owned();
    for parameter in definition.parameters_of_mut(kind) {
        let key = derived_key(&identity, kind, &parameter.name);
        let Some(value) = config.get(&key) else {
            continue;
        };
        if !is_truthy(value) {
            trace!(%key, "ignoring falsy configured default");
            continue;
        }
        match to_default(value) {
            Some(DefaultValue::Many(values)) if !parameter.multiple => {
                debug!(%key, "list default on a single-value parameter, applying first element");
                let first = values.into_iter().next().unwrap_or_default();
                parameter.default = Some(DefaultValue::Single(first));
            }
            Some(default) => {
                debug!(%key, "overriding default from configuration");
                parameter.default = Some(default);
            }
            // Nested mappings have no CLI representation.
            None => debug!(%key, "configured default has no scalar representation"),
        }
    }
}

/// The configuration key consulted for one parameter of one command.
pub fn derived_key(identity: &str, kind: ParameterKind, name: &str) -> String {
    format!(
        "application.default.commands.{}.{}.{}",
        identity.replace(':', "."),
        kind.path_segment(),
        name
    )
}

/// Legacy truthiness: null, `false`, the empty string, numeric zero
/// and empty collections all read as "not configured". A consequence
/// operators rely on is also a known quirk: a default cannot be
/// explicitly configured to a falsy value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Sequence(items) => !items.is_empty(),
        Value::Mapping(entries) => !entries.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

fn to_default(value: &Value) -> Option<DefaultValue> {
    match value {
        Value::String(text) => Some(DefaultValue::Single(text.clone())),
        Value::Bool(flag) => Some(DefaultValue::Single(flag.to_string())),
        Value::Number(number) => Some(DefaultValue::Single(number.to_string())),
        Value::Sequence(items) => {
            let values: Option<Vec<String>> = items.iter().map(scalar_string).collect();
            values.map(DefaultValue::Many)
        }
        _ => None,
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
