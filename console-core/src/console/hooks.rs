//! Pre-execution hooks.
//!
//! The dispatcher keeps an explicit hook list and runs it in
//! registration order, synchronously, after cloning the command's
//! definition for the invocation and before the command parses its
//! input. Hooks act by mutating the definition; no return value is
//! consumed on success.

use crate::config::ConfigStore;
use crate::console::definition::CommandDefinition;

/// A hook invoked once per command invocation, before input parsing.
pub trait CommandHook {
    /// Inspect or mutate the per-invocation definition. An error
    /// aborts the pending invocation before the command runs.
    fn before_execute(
        &self,
        definition: &mut CommandDefinition,
        config: &dyn ConfigStore,
    ) -> anyhow::Result<()>;
}
