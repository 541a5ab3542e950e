//! Form scaffolding.

use super::{to_snake_case, write_new_file, GeneratorError};
use askama::Template;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything the form generator needs, collected by the
/// `generate:form` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    pub module: String,
    pub class_name: String,
    pub form_id: String,
    pub services: Vec<String>,
    pub inputs: Vec<String>,
    pub routing: bool,
}

/// Seam between the `generate:form` command and the scaffolding
/// implementation.
pub trait FormGenerator {
    /// Generate the form source (and optional route entry) under the
    /// site root, returning the files written.
    fn generate(&self, root: &Path, spec: &FormSpec) -> Result<Vec<PathBuf>, GeneratorError>;
}

#[derive(Template)]
#[template(path = "form.rs.txt", escape = "none")]
struct FormTemplate<'a> {
    class_name: &'a str,
    form_id: &'a str,
    services: &'a [String],
    inputs: &'a [String],
}

/// Template-backed generator used by the real CLI.
#[derive(Debug, Default)]
pub struct ScaffoldFormGenerator;

impl FormGenerator for ScaffoldFormGenerator {
    fn generate(&self, root: &Path, spec: &FormSpec) -> Result<Vec<PathBuf>, GeneratorError> {
        let file_name = to_snake_case(&spec.class_name);
        let module_root = root.join("modules").join(&spec.module);
        let source = module_root
            .join("src/form")
            .join(format!("{file_name}.rs"));

        let rendered = FormTemplate {
            class_name: &spec.class_name,
            form_id: &spec.form_id,
            services: &spec.services,
            inputs: &spec.inputs,
        }
        .render()?;
        write_new_file(&source, &rendered)?;
        let mut written = vec![source];

        if spec.routing {
            let routing = module_root.join("routing.yml");
            append_route(&routing, spec, &file_name)?;
            written.push(routing);
        }

        info!(module = %spec.module, class = %spec.class_name, "generated form scaffold");
        Ok(written)
    }
}

fn append_route(path: &Path, spec: &FormSpec, file_name: &str) -> Result<(), GeneratorError> {
    let mut contents = if path.is_file() {
        std::fs::read_to_string(path).map_err(|source| GeneratorError::Io {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        String::new()
    };
    if !contents.is_empty() && !contents.ends_with('\n') {
        contents.push('\n');
    }
    contents.push_str(&format!(
        "{form_id}:\n  path: /admin/config/{module}/{file_name}\n  handler: {module}::form::{file_name}::{class_name}\n",
        form_id = spec.form_id,
        module = spec.module,
        class_name = spec.class_name,
    ));
    std::fs::write(path, contents).map_err(|source| GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> FormSpec {
        FormSpec {
            module: "blog".into(),
            class_name: "BlogSettingsForm".into(),
            form_id: "blog_settings".into(),
            services: vec!["database".into(), "mailer".into()],
            inputs: vec!["title".into(), "teaser".into()],
            routing: false,
        }
    }

    #[test]
    fn test_generates_form_source() {
        let dir = tempfile::tempdir().unwrap();
        let written = ScaffoldFormGenerator.generate(dir.path(), &spec()).unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].ends_with("modules/blog/src/form/blog_settings_form.rs"));

        let source = std::fs::read_to_string(&written[0]).unwrap();
        assert!(source.contains("pub struct BlogSettingsForm"));
        assert!(source.contains("\"blog_settings\""));
        assert!(source.contains("database: ServiceHandle"));
        assert!(source.contains("add_field(\"teaser\""));
    }

    #[test]
    fn test_routing_entry_is_appended() {
        let dir = tempfile::tempdir().unwrap();
        let mut spec = spec();
        spec.routing = true;
        let written = ScaffoldFormGenerator.generate(dir.path(), &spec).unwrap();
        assert_eq!(written.len(), 2);

        let routing = std::fs::read_to_string(&written[1]).unwrap();
        assert!(routing.contains("blog_settings:"));
        assert!(routing.contains("path: /admin/config/blog/blog_settings_form"));

        // A second form in the same module extends the file.
        spec.class_name = "BlogArchiveForm".into();
        spec.form_id = "blog_archive".into();
        ScaffoldFormGenerator.generate(dir.path(), &spec).unwrap();
        let routing = std::fs::read_to_string(dir.path().join("modules/blog/routing.yml")).unwrap();
        assert!(routing.contains("blog_settings:"));
        assert!(routing.contains("blog_archive:"));
    }

    #[test]
    fn test_existing_form_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        ScaffoldFormGenerator.generate(dir.path(), &spec()).unwrap();
        let err = ScaffoldFormGenerator.generate(dir.path(), &spec()).unwrap_err();
        assert!(matches!(err, GeneratorError::Exists { .. }));
    }

    #[test]
    fn test_form_without_services_has_unit_struct() {
        let dir = tempfile::tempdir().unwrap();
        let spec = FormSpec {
            services: Vec::new(),
            inputs: Vec::new(),
            ..spec()
        };
        let written = ScaffoldFormGenerator.generate(dir.path(), &spec).unwrap();
        let source = std::fs::read_to_string(&written[0]).unwrap();
        assert!(source.contains("pub struct BlogSettingsForm;"));
    }
}
