//! Source scaffolding for CMS modules.
//!
//! Each generator renders a compile-time template into a new file
//! inside a module's source tree. Generators sit behind traits so the
//! commands that drive them can be tested without touching the
//! filesystem.

pub mod form;
pub mod plugin_condition;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use form::{FormGenerator, FormSpec, ScaffoldFormGenerator};
pub use plugin_condition::{
    ConditionSpec, PluginConditionGenerator, ScaffoldPluginConditionGenerator,
};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("refusing to overwrite existing file {path}")]
    Exists { path: PathBuf },

    #[error("failed to render template")]
    Template {
        #[from]
        source: askama::Error,
    },

    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write a rendered scaffold, creating parent directories but never
/// clobbering an existing file.
pub(crate) fn write_new_file(path: &Path, contents: &str) -> Result<(), GeneratorError> {
    if path.exists() {
        return Err(GeneratorError::Exists {
            path: path.to_path_buf(),
        });
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| GeneratorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// `BlogSettingsForm` -> `blog_settings_form`. Hyphens and spaces are
/// treated as word breaks.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch == '-' || ch == ' ' {
            if !out.ends_with('_') {
                out.push('_');
            }
            prev_lower = false;
        } else if ch.is_uppercase() {
            if prev_lower && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}

/// `blog-settings-form` / `blog_settings_form` -> `BlogSettingsForm`.
/// Already-capitalized input passes through unchanged.
pub fn to_pascal_case(name: &str) -> String {
    name.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("BlogSettingsForm"), "blog_settings_form");
        assert_eq!(to_snake_case("blog-settings"), "blog_settings");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("HTTPForm"), "httpform");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("blog_settings_form"), "BlogSettingsForm");
        assert_eq!(to_pascal_case("blog-settings"), "BlogSettings");
        assert_eq!(to_pascal_case("BlogSettingsForm"), "BlogSettingsForm");
    }

    #[test]
    fn test_write_new_file_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/file.rs");
        write_new_file(&path, "fn main() {}\n").unwrap();
        assert!(path.is_file());
        let err = write_new_file(&path, "other").unwrap_err();
        assert!(matches!(err, GeneratorError::Exists { .. }));
    }
}
