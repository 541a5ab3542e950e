//! Aggregated view of an installation, as shown by `site:status`.

use super::{FileSettings, Settings, SiteError, ThemeSettings};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Fixed group order for rendering.
pub const GROUPS: &[&str] = &["system", "database", "theme", "directory", "configuration"];

/// One label/value row within a group.
#[derive(Debug, Clone, Serialize)]
pub struct StatusEntry {
    pub label: String,
    pub value: String,
}

/// A named group of status rows.
#[derive(Debug, Clone, Serialize)]
pub struct StatusGroup {
    pub name: String,
    pub entries: Vec<StatusEntry>,
}

impl StatusGroup {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            entries: Vec::new(),
        }
    }

    fn push(&mut self, label: &str, value: impl Into<String>) {
        self.entries.push(StatusEntry {
            label: label.to_owned(),
            value: value.into(),
        });
    }
}

/// The full status report, groups in fixed order.
#[derive(Debug, Clone, Serialize)]
pub struct SiteStatus {
    pub groups: Vec<StatusGroup>,
}

impl SiteStatus {
    /// Collect the report for the installation rooted at `root`.
    ///
    /// Missing configuration objects degrade to empty values; only a
    /// missing or unreadable settings file is an error.
    pub fn collect(root: &Path, console_version: &str) -> Result<Self, SiteError> {
        let settings = Settings::load(root)?;
        let themes = ThemeSettings::load(root)?;
        let files = FileSettings::load(root)?;
        debug!(root = %root.display(), "collected site status");

        let mut system = StatusGroup::new("system");
        system.push("Site name", settings.name.clone());
        system.push("Version", settings.version.clone());
        system.push("Install profile", settings.profile.clone());
        system.push("Hash salt", settings.hash_salt.clone());
        system.push("Console", console_version);

        let database = &settings.database;
        let mut connection = StatusGroup::new("database");
        connection.push("Driver", database.driver.clone());
        connection.push("Host", database.host.clone());
        connection.push("Database", database.database.clone());
        connection.push(
            "Port",
            database.port.map(|p| p.to_string()).unwrap_or_default(),
        );
        connection.push("Username", database.username.clone());
        connection.push("Password", database.password.clone());
        connection.push("Connection", database.connection_string());

        let mut theme = StatusGroup::new("theme");
        theme.push("Default theme", themes.default.clone());
        theme.push("Admin theme", themes.admin.clone());

        let mut directory = StatusGroup::new("directory");
        directory.push("Site root", root.display().to_string());
        directory.push("Temporary files", files.path.temporary);
        directory.push("Default theme path", theme_path(&themes.default));
        directory.push("Admin theme path", theme_path(&themes.admin));

        let mut configuration = StatusGroup::new("configuration");
        configuration.push("Active", settings.config_directories.active);
        configuration.push("Staging", settings.config_directories.staging);

        Ok(Self {
            groups: vec![system, connection, theme, directory, configuration],
        })
    }

    /// Map-of-maps shape used for `--format json`.
    pub fn to_json(&self) -> serde_json::Value {
        let mut root = serde_json::Map::new();
        for group in &self.groups {
            let mut entries = serde_json::Map::new();
            for entry in &group.entries {
                entries.insert(
                    entry.label.clone(),
                    serde_json::Value::String(entry.value.clone()),
                );
            }
            root.insert(group.name.clone(), serde_json::Value::Object(entries));
        }
        serde_json::Value::Object(root)
    }
}

fn theme_path(theme: &str) -> String {
    if theme.is_empty() {
        String::new()
    } else {
        format!("/themes/{theme}")
    }
}
