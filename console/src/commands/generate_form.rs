//! `generate:form`: scaffold a configuration form inside a module.

use anyhow::Context;
use loam_console_core::console::{Application, CommandDefinition, CommandInput, ConsoleCommand};
use loam_console_core::generator::{to_pascal_case, to_snake_case, FormGenerator, FormSpec};

pub struct GenerateFormCommand {
    generator: Box<dyn FormGenerator>,
}

impl GenerateFormCommand {
    pub fn new(generator: Box<dyn FormGenerator>) -> Self {
        Self { generator }
    }
}

impl ConsoleCommand for GenerateFormCommand {
    fn definition(&self) -> CommandDefinition {
        CommandDefinition::new("generate:form", "Generate a configuration form in a module")
            .option("module", "Machine name of the module")
            .option("class-name", "Class name for the generated form")
            .option("form-id", "Identifier the form registers under")
            .multi_option("services", "Services to inject into the form")
            .multi_option("inputs", "Input fields the form declares")
            .flag("routing", "Register a route for the form")
    }

    fn execute(&self, app: &Application, input: &CommandInput) -> anyhow::Result<()> {
        let module = input
            .option("module")
            .context("the --module option is required")?;
        let class_name = input
            .option("class-name")
            .context("the --class-name option is required")?;
        let class_name = to_pascal_case(class_name);
        let form_id = input
            .option("form-id")
            .map(str::to_owned)
            .unwrap_or_else(|| to_snake_case(&class_name));

        let spec = FormSpec {
            module: module.to_owned(),
            class_name,
            form_id,
            services: input.option_values("services").to_vec(),
            inputs: input.option_values("inputs").to_vec(),
            routing: input.flag("routing"),
        };
        let written = self.generator.generate(app.root(), &spec)?;

        println!("Generated form '{}':", spec.form_id);
        for path in &written {
            println!("  {}", path.display());
        }
        Ok(())
    }
}
