//! Site inspection services.
//!
//! Everything here reads an installation's settings and exported
//! configuration objects from disk; no live services are contacted.
//! The settings file at `sites/default/settings.yml` is what makes a
//! directory an installation; configuration objects under `config/`
//! degrade to empty values when missing.

pub mod status;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use status::{SiteStatus, StatusEntry, StatusGroup};

/// Settings file location relative to the site root.
pub const SETTINGS_PATH: &str = "sites/default/settings.yml";

/// Exported theme configuration relative to the site root.
pub const THEME_CONFIG_PATH: &str = "config/system.theme.yml";

/// Exported file-system configuration relative to the site root.
pub const FILE_CONFIG_PATH: &str = "config/system.file.yml";

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no installation found at {path}: missing {SETTINGS_PATH}")]
    MissingSettings { path: PathBuf },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// The per-site settings file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub hash_salt: String,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub config_directories: ConfigDirectories,
}

impl Settings {
    /// Load the settings of the installation rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, SiteError> {
        let path = root.join(SETTINGS_PATH);
        if !path.is_file() {
            return Err(SiteError::MissingSettings {
                path: root.to_path_buf(),
            });
        }
        read_yaml(&path)
    }
}

/// Connection settings for the site database.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub driver: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl DatabaseSettings {
    /// `driver//user:password@host[:port]/database`, the summary line
    /// shown by `site:status`.
    pub fn connection_string(&self) -> String {
        let port = match self.port {
            Some(port) => format!(":{port}"),
            None => String::new(),
        };
        format!(
            "{}//{}:{}@{}{}/{}",
            self.driver, self.username, self.password, self.host, port, self.database
        )
    }
}

/// Locations of the exported configuration directories.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigDirectories {
    #[serde(default)]
    pub active: String,
    #[serde(default)]
    pub staging: String,
}

/// The `system.theme` configuration object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeSettings {
    #[serde(default)]
    pub default: String,
    #[serde(default)]
    pub admin: String,
}

impl ThemeSettings {
    /// Load from the exported config, empty when the object does not
    /// exist.
    pub fn load(root: &Path) -> Result<Self, SiteError> {
        read_optional_yaml(&root.join(THEME_CONFIG_PATH))
    }
}

/// The `system.file` configuration object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileSettings {
    #[serde(default)]
    pub path: FilePaths,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilePaths {
    #[serde(default)]
    pub temporary: String,
}

impl FileSettings {
    pub fn load(root: &Path) -> Result<Self, SiteError> {
        read_optional_yaml(&root.join(FILE_CONFIG_PATH))
    }
}

fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, SiteError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| SiteError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional_yaml<T: serde::de::DeserializeOwned + Default>(
    path: &Path,
) -> Result<T, SiteError> {
    if !path.is_file() {
        return Ok(T::default());
    }
    read_yaml(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_site(root: &Path) {
        fs::create_dir_all(root.join("sites/default")).unwrap();
        fs::write(
            root.join(SETTINGS_PATH),
            r#"
name: Example Site
version: 10.1.0
profile: standard
hash_salt: abc123
database:
  driver: mysql
  host: localhost
  port: 3306
  database: example
  username: admin
  password: secret
config_directories:
  active: sites/default/files/config/active
  staging: sites/default/files/config/staging
"#,
        )
        .unwrap();
    }

    #[test]
    fn test_settings_load() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path());
        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.name, "Example Site");
        assert_eq!(settings.database.driver, "mysql");
        assert_eq!(settings.database.port, Some(3306));
        assert_eq!(settings.config_directories.staging, "sites/default/files/config/staging");
    }

    #[test]
    fn test_missing_settings_is_not_a_site() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(dir.path()).unwrap_err();
        assert!(matches!(err, SiteError::MissingSettings { .. }));
    }

    #[test]
    fn test_connection_string() {
        let database = DatabaseSettings {
            driver: "mysql".into(),
            host: "localhost".into(),
            port: Some(3306),
            database: "example".into(),
            username: "admin".into(),
            password: "secret".into(),
        };
        assert_eq!(
            database.connection_string(),
            "mysql//admin:secret@localhost:3306/example"
        );
    }

    #[test]
    fn test_connection_string_without_port() {
        let database = DatabaseSettings {
            driver: "sqlite".into(),
            database: "example".into(),
            ..Default::default()
        };
        assert_eq!(database.connection_string(), "sqlite//:@/example");
    }

    #[test]
    fn test_missing_theme_config_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let themes = ThemeSettings::load(dir.path()).unwrap();
        assert!(themes.default.is_empty());
        assert!(themes.admin.is_empty());
    }

    #[test]
    fn test_theme_config_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("config")).unwrap();
        fs::write(
            dir.path().join(THEME_CONFIG_PATH),
            "default: bloom\nadmin: cockpit\n",
        )
        .unwrap();
        let themes = ThemeSettings::load(dir.path()).unwrap();
        assert_eq!(themes.default, "bloom");
        assert_eq!(themes.admin, "cockpit");
    }
}
