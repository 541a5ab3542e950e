//! Console runtime: command definitions, pre-execution hooks and
//! dispatch.

pub mod application;
pub mod defaults;
pub mod definition;
pub mod hooks;
pub mod input;

pub use application::{Application, ConsoleCommand, ConsoleError};
pub use defaults::{DefaultValueInjector, SKIP_COMMANDS};
pub use definition::{CommandDefinition, DefaultValue, ParameterDefinition, ParameterKind};
pub use hooks::CommandHook;
pub use input::CommandInput;
