//! The command set shipped with the `loam` binary.

pub mod chain;
pub mod generate_form;
pub mod generate_plugin_condition;
pub mod list;
pub mod site_status;

use loam_console_core::config::Config;
use loam_console_core::console::{Application, DefaultValueInjector};
use loam_console_core::generator::{ScaffoldFormGenerator, ScaffoldPluginConditionGenerator};
use std::path::Path;

/// Wire up the full command set with the default-value injector as the
/// first (and only built-in) pre-execution hook.
pub fn build_application(config: Config, root: &Path) -> Application {
    let mut app = Application::new(config, root);
    app.add_hook(Box::new(DefaultValueInjector::new()));
    app.register(Box::new(list::ListCommand));
    app.register(Box::new(chain::ChainCommand));
    app.register(Box::new(site_status::SiteStatusCommand));
    app.register(Box::new(generate_form::GenerateFormCommand::new(Box::new(
        ScaffoldFormGenerator,
    ))));
    app.register(Box::new(
        generate_plugin_condition::GeneratePluginConditionCommand::new(Box::new(
            ScaffoldPluginConditionGenerator,
        )),
    ));
    app
}
