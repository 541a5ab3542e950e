//! Hierarchical configuration store for the console.
//!
//! Operator configuration lives in YAML files and is addressed with
//! dotted paths such as
//! `application.default.commands.site.status.options.format`. A
//! project-local `console/config.yml` is overlaid on the per-user
//! `~/.console/config.yml`; the project value wins where both define a
//! key.

use serde_yaml::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Location of the project-level configuration, relative to the
/// working directory.
pub const PROJECT_CONFIG: &str = "console/config.yml";

/// Location of the per-user configuration, relative to the home
/// directory.
pub const USER_CONFIG: &str = ".console/config.yml";

/// Errors raised while loading configuration files.
///
/// A load failure aborts the invocation before any command runs;
/// lookups on an already-loaded tree cannot fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Read access to the hierarchical configuration tree.
///
/// The default-value injector consumes the store through this trait so
/// tests can observe exactly which keys are looked up.
pub trait ConfigStore {
    /// Resolve a dotted key against the tree. `None` means the path
    /// does not exist; callers that only care about truthy values do
    /// not distinguish this from an explicitly-null entry.
    fn get(&self, key: &str) -> Option<&Value>;
}

/// An in-memory configuration tree.
#[derive(Debug, Clone, Default)]
pub struct Config {
    root: Value,
}

impl Config {
    /// A store with no entries.
    pub fn empty() -> Self {
        Self { root: Value::Null }
    }

    /// Wrap an already-parsed YAML tree. Mostly useful in tests.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Load a single configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let root = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(Self { root })
    }

    /// Assemble the effective configuration for an invocation.
    ///
    /// An explicit path is used verbatim. Otherwise the per-user file
    /// is loaded first (when present) and the project file is overlaid
    /// on top of it. Missing files are not an error; an unreadable or
    /// malformed file is.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let mut config = Self::empty();
        if let Some(home) = dirs::home_dir() {
            let user = home.join(USER_CONFIG);
            if user.is_file() {
                config = config.overlay(Self::load(&user)?);
            }
        }
        let project = Path::new(PROJECT_CONFIG);
        if project.is_file() {
            config = config.overlay(Self::load(project)?);
        }
        Ok(config)
    }

    /// Merge another tree on top of this one. Mappings merge key by
    /// key, recursively; any other overlay value replaces the base.
    pub fn overlay(self, other: Config) -> Config {
        Config {
            root: merge(self.root, other.root),
        }
    }

    /// String view of a dotted key.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Boolean view of a dotted key.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }
}

impl ConfigStore for Config {
    fn get(&self, key: &str) -> Option<&Value> {
        let mut node = &self.root;
        for segment in key.split('.') {
            node = node.get(segment)?;
        }
        Some(node)
    }
}

fn merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(mut base), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                let merged = match base.remove(&key) {
                    Some(existing) => merge(existing, value),
                    None => value,
                };
                base.insert(key, merged);
            }
            Value::Mapping(base)
        }
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}
