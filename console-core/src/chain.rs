//! Chain files: a YAML-described sequence of command invocations.
//!
//! The `chain` command reads one of these and dispatches each entry
//! through the application in order. Option and argument values are
//! turned back into CLI tokens, so every chained command goes through
//! the same hook and parsing path as a direct invocation.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("failed to read chain file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse chain file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported value for '{name}' in command '{command}': expected a scalar or a list of scalars")]
    UnsupportedValue { command: String, name: String },
}

/// A parsed chain file.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainFile {
    pub commands: Vec<ChainEntry>,
}

/// One command invocation inside a chain file.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainEntry {
    pub command: String,
    #[serde(default)]
    pub options: BTreeMap<String, serde_yaml::Value>,
    #[serde(default)]
    pub arguments: Vec<serde_yaml::Value>,
}

impl ChainFile {
    pub fn load(path: &Path) -> Result<Self, ChainError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ChainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ChainError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ChainEntry {
    /// CLI tokens equivalent to this entry, identity first.
    ///
    /// A boolean `true` option becomes a bare flag and `false` is
    /// omitted; list values repeat the option once per element.
    pub fn to_tokens(&self) -> Result<Vec<String>, ChainError> {
        let mut tokens = vec![self.command.clone()];
        for (name, value) in &self.options {
            match value {
                serde_yaml::Value::Bool(true) => tokens.push(format!("--{name}")),
                serde_yaml::Value::Bool(false) => {}
                serde_yaml::Value::Sequence(items) => {
                    for item in items {
                        let value = self.scalar(name, item)?;
                        tokens.push(format!("--{name}"));
                        tokens.push(value);
                    }
                }
                other => {
                    let value = self.scalar(name, other)?;
                    tokens.push(format!("--{name}"));
                    tokens.push(value);
                }
            }
        }
        for (index, argument) in self.arguments.iter().enumerate() {
            tokens.push(self.scalar(&format!("argument #{index}"), argument)?);
        }
        Ok(tokens)
    }

    fn scalar(&self, name: &str, value: &serde_yaml::Value) -> Result<String, ChainError> {
        match value {
            serde_yaml::Value::String(text) => Ok(text.clone()),
            serde_yaml::Value::Number(number) => Ok(number.to_string()),
            serde_yaml::Value::Bool(flag) => Ok(flag.to_string()),
            _ => Err(ChainError::UnsupportedValue {
                command: self.command.clone(),
                name: name.to_owned(),
            }),
        }
    }
}
