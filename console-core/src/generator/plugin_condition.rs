//! Condition plugin scaffolding.

use super::{to_snake_case, write_new_file, GeneratorError};
use askama::Template;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything the condition-plugin generator needs, collected by the
/// `generate:plugin:condition` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionSpec {
    pub module: String,
    pub class_name: String,
    pub label: String,
    pub plugin_id: String,
    pub context_definition_id: String,
    pub context_definition_label: String,
    pub context_definition_required: bool,
}

/// Seam between the `generate:plugin:condition` command and the
/// scaffolding implementation.
pub trait PluginConditionGenerator {
    fn generate(&self, root: &Path, spec: &ConditionSpec) -> Result<Vec<PathBuf>, GeneratorError>;
}

#[derive(Template)]
#[template(path = "plugin_condition.rs.txt", escape = "none")]
struct ConditionTemplate<'a> {
    class_name: &'a str,
    label: &'a str,
    plugin_id: &'a str,
    context_id: &'a str,
    context_label: &'a str,
    context_required: bool,
}

/// Template-backed generator used by the real CLI.
#[derive(Debug, Default)]
pub struct ScaffoldPluginConditionGenerator;

impl PluginConditionGenerator for ScaffoldPluginConditionGenerator {
    fn generate(&self, root: &Path, spec: &ConditionSpec) -> Result<Vec<PathBuf>, GeneratorError> {
        let file_name = to_snake_case(&spec.class_name);
        let source = root
            .join("modules")
            .join(&spec.module)
            .join("src/plugin/condition")
            .join(format!("{file_name}.rs"));

        let rendered = ConditionTemplate {
            class_name: &spec.class_name,
            label: &spec.label,
            plugin_id: &spec.plugin_id,
            context_id: &spec.context_definition_id,
            context_label: &spec.context_definition_label,
            context_required: spec.context_definition_required,
        }
        .render()?;
        write_new_file(&source, &rendered)?;

        info!(module = %spec.module, class = %spec.class_name, "generated condition plugin scaffold");
        Ok(vec![source])
    }
}
