//! Command and parameter definitions.
//!
//! A [`CommandDefinition`] is the declarative surface of one console
//! command: its namespaced identity (lowercase tokens joined by `:`,
//! e.g. `site:status`) plus the ordered options and positional
//! arguments it accepts. Definitions are produced fresh for every
//! invocation so pre-execution hooks can mutate defaults without
//! touching registered state.

/// Whether a parameter is a named option or a positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Option,
    Argument,
}

impl ParameterKind {
    /// Path segment used when deriving configuration keys.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Option => "options",
            Self::Argument => "arguments",
        }
    }
}

/// A parameter default, either a single value or one value per
/// occurrence for repeatable parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    Single(String),
    Many(Vec<String>),
}

impl DefaultValue {
    /// The first (or only) value.
    pub fn first(&self) -> &str {
        match self {
            Self::Single(value) => value,
            Self::Many(values) => values.first().map(String::as_str).unwrap_or(""),
        }
    }

    /// All values, cloning single defaults into a one-element list.
    pub fn values(&self) -> Vec<String> {
        match self {
            Self::Single(value) => vec![value.clone()],
            Self::Many(values) => values.clone(),
        }
    }

    /// Whether this default switches a flag on.
    pub fn enables_flag(&self) -> bool {
        matches!(self, Self::Single(value) if value == "true" || value == "1")
    }
}

impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

/// One option or positional argument of a command.
///
/// `default` is the mutable slot the default-value injector overwrites;
/// everything else is fixed at declaration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDefinition {
    pub name: String,
    pub kind: ParameterKind,
    pub description: String,
    pub default: Option<DefaultValue>,
    pub required: bool,
    pub multiple: bool,
    pub flag: bool,
}

impl ParameterDefinition {
    fn new(name: &str, kind: ParameterKind, description: &str) -> Self {
        Self {
            name: name.to_owned(),
            kind,
            description: description.to_owned(),
            default: None,
            required: false,
            multiple: false,
            flag: false,
        }
    }
}

/// The declarative shape of one console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    identity: String,
    description: String,
    parameters: Vec<ParameterDefinition>,
}

impl CommandDefinition {
    pub fn new(identity: &str, description: &str) -> Self {
        Self {
            identity: identity.to_owned(),
            description: description.to_owned(),
            parameters: Vec::new(),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// An option taking a single value.
    pub fn option(self, name: &str, description: &str) -> Self {
        self.push(ParameterDefinition::new(name, ParameterKind::Option, description))
    }

    /// An option taking a single value, with a built-in default.
    pub fn option_with_default(self, name: &str, description: &str, default: &str) -> Self {
        let mut parameter = ParameterDefinition::new(name, ParameterKind::Option, description);
        parameter.default = Some(default.into());
        self.push(parameter)
    }

    /// An option that may be given more than once.
    pub fn multi_option(self, name: &str, description: &str) -> Self {
        let mut parameter = ParameterDefinition::new(name, ParameterKind::Option, description);
        parameter.multiple = true;
        self.push(parameter)
    }

    /// A boolean switch.
    pub fn flag(self, name: &str, description: &str) -> Self {
        let mut parameter = ParameterDefinition::new(name, ParameterKind::Option, description);
        parameter.flag = true;
        self.push(parameter)
    }

    /// An optional positional argument.
    pub fn argument(self, name: &str, description: &str) -> Self {
        self.push(ParameterDefinition::new(name, ParameterKind::Argument, description))
    }

    /// A positional argument the caller must supply.
    pub fn required_argument(self, name: &str, description: &str) -> Self {
        let mut parameter = ParameterDefinition::new(name, ParameterKind::Argument, description);
        parameter.required = true;
        self.push(parameter)
    }

    fn push(mut self, parameter: ParameterDefinition) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Options in declaration order.
    pub fn options(&self) -> impl Iterator<Item = &ParameterDefinition> {
        self.parameters.iter().filter(|p| p.kind == ParameterKind::Option)
    }

    /// Positional arguments in declaration order.
    pub fn arguments(&self) -> impl Iterator<Item = &ParameterDefinition> {
        self.parameters.iter().filter(|p| p.kind == ParameterKind::Argument)
    }

    /// Mutable view of one kind, used by hooks.
    pub fn parameters_of_mut(
        &mut self,
        kind: ParameterKind,
    ) -> impl Iterator<Item = &mut ParameterDefinition> {
        self.parameters.iter_mut().filter(move |p| p.kind == kind)
    }

    /// Look up one parameter by kind and name.
    pub fn parameter(&self, kind: ParameterKind, name: &str) -> Option<&ParameterDefinition> {
        self.parameters.iter().find(|p| p.kind == kind && p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CommandDefinition {
        CommandDefinition::new("generate:form", "Generate a form")
            .option("module", "Module name")
            .option_with_default("format", "Output format", "table")
            .multi_option("services", "Services to inject")
            .flag("routing", "Register a route")
            .argument("name", "Machine name")
            .required_argument("target", "Target directory")
    }

    #[test]
    fn test_builder_assigns_kinds() {
        let definition = sample();
        assert_eq!(definition.options().count(), 4);
        assert_eq!(definition.arguments().count(), 2);
        let routing = definition.parameter(ParameterKind::Option, "routing").unwrap();
        assert!(routing.flag);
        let services = definition.parameter(ParameterKind::Option, "services").unwrap();
        assert!(services.multiple);
        let target = definition.parameter(ParameterKind::Argument, "target").unwrap();
        assert!(target.required);
    }

    #[test]
    fn test_builtin_default_is_recorded() {
        let definition = sample();
        let format = definition.parameter(ParameterKind::Option, "format").unwrap();
        assert_eq!(format.default, Some(DefaultValue::Single("table".into())));
    }

    #[test]
    fn test_names_are_scoped_by_kind() {
        // An option and an argument may share a name.
        let definition = CommandDefinition::new("demo:cmd", "demo")
            .option("name", "as option")
            .argument("name", "as argument");
        assert!(definition.parameter(ParameterKind::Option, "name").is_some());
        assert!(definition.parameter(ParameterKind::Argument, "name").is_some());
    }

    #[test]
    fn test_default_value_views() {
        let single = DefaultValue::Single("json".into());
        assert_eq!(single.first(), "json");
        assert_eq!(single.values(), vec!["json".to_string()]);
        assert!(!single.enables_flag());
        assert!(DefaultValue::Single("true".into()).enables_flag());

        let many = DefaultValue::Many(vec!["a".into(), "b".into()]);
        assert_eq!(many.first(), "a");
        assert_eq!(many.values().len(), 2);
    }
}
