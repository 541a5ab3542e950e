//! `generate:plugin:condition`: scaffold a condition plugin inside a
//! module.

use anyhow::Context;
use loam_console_core::console::{Application, CommandDefinition, CommandInput, ConsoleCommand};
use loam_console_core::generator::{to_pascal_case, ConditionSpec, PluginConditionGenerator};

pub struct GeneratePluginConditionCommand {
    generator: Box<dyn PluginConditionGenerator>,
}

impl GeneratePluginConditionCommand {
    pub fn new(generator: Box<dyn PluginConditionGenerator>) -> Self {
        Self { generator }
    }
}

impl ConsoleCommand for GeneratePluginConditionCommand {
    fn definition(&self) -> CommandDefinition {
        CommandDefinition::new(
            "generate:plugin:condition",
            "Generate a condition plugin in a module",
        )
        .option("module", "Machine name of the module")
        .option("class-name", "Class name for the generated plugin")
        .option("label", "Human-readable plugin label")
        .option("plugin-id", "Identifier the plugin registers under")
        .option("context-definition-id", "Context the condition consumes")
        .option("context-definition-label", "Label of the consumed context")
        .flag(
            "context-definition-required",
            "Mark the consumed context as required",
        )
    }

    fn execute(&self, app: &Application, input: &CommandInput) -> anyhow::Result<()> {
        let module = input
            .option("module")
            .context("the --module option is required")?;
        let class_name = input
            .option("class-name")
            .context("the --class-name option is required")?;
        let plugin_id = input
            .option("plugin-id")
            .context("the --plugin-id option is required")?;

        let spec = ConditionSpec {
            module: module.to_owned(),
            class_name: to_pascal_case(class_name),
            label: input.option("label").unwrap_or(plugin_id).to_owned(),
            plugin_id: plugin_id.to_owned(),
            context_definition_id: input
                .option("context-definition-id")
                .unwrap_or_default()
                .to_owned(),
            context_definition_label: input
                .option("context-definition-label")
                .unwrap_or_default()
                .to_owned(),
            context_definition_required: input.flag("context-definition-required"),
        };
        let written = self.generator.generate(app.root(), &spec)?;

        println!("Generated condition plugin '{}':", spec.plugin_id);
        for path in &written {
            println!("  {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loam_console_core::config::Config;
    use loam_console_core::generator::GeneratorError;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    struct RecordingGenerator {
        seen: Rc<RefCell<Vec<ConditionSpec>>>,
    }

    impl PluginConditionGenerator for RecordingGenerator {
        fn generate(
            &self,
            _root: &Path,
            spec: &ConditionSpec,
        ) -> Result<Vec<PathBuf>, GeneratorError> {
            self.seen.borrow_mut().push(spec.clone());
            Ok(vec![PathBuf::from(
                "modules/blog/src/plugin/condition/generated.rs",
            )])
        }
    }

    fn app_with_recorder() -> (Application, Rc<RefCell<Vec<ConditionSpec>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut app = Application::new(Config::empty(), ".");
        app.register(Box::new(GeneratePluginConditionCommand::new(Box::new(
            RecordingGenerator {
                seen: Rc::clone(&seen),
            },
        ))));
        (app, seen)
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_generates_with_full_options() {
        let (app, seen) = app_with_recorder();
        app.run(&tokens(&[
            "generate:plugin:condition",
            "--module",
            "blog",
            "--class-name",
            "PublishedCondition",
            "--label",
            "Published",
            "--plugin-id",
            "blog_published",
            "--context-definition-id",
            "entity:node",
            "--context-definition-label",
            "Node",
            "--context-definition-required",
        ]))
        .unwrap();

        let specs = seen.borrow();
        let spec = &specs[0];
        assert_eq!(spec.class_name, "PublishedCondition");
        assert_eq!(spec.plugin_id, "blog_published");
        assert_eq!(spec.context_definition_id, "entity:node");
        assert!(spec.context_definition_required);
    }

    #[test]
    fn test_label_falls_back_to_plugin_id() {
        let (app, seen) = app_with_recorder();
        app.run(&tokens(&[
            "generate:plugin:condition",
            "--module",
            "blog",
            "--class-name",
            "PublishedCondition",
            "--plugin-id",
            "blog_published",
        ]))
        .unwrap();
        assert_eq!(seen.borrow()[0].label, "blog_published");
    }

    #[test]
    fn test_missing_plugin_id_is_an_error() {
        let (app, seen) = app_with_recorder();
        let err = app
            .run(&tokens(&[
                "generate:plugin:condition",
                "--module",
                "blog",
                "--class-name",
                "PublishedCondition",
            ]))
            .unwrap_err();
        assert!(err.to_string().contains("--plugin-id"));
        assert!(seen.borrow().is_empty());
    }
}
