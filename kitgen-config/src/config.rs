use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Result, SourceContext};

/// Conventional configuration file name.
pub const CONFIG_FILE: &str = "kitgen.toml";

/// Placeholder substituted with the snake_cased service name.
pub const PLACEHOLDER: &str = "%s";

/// Default service directory format.
pub const DEFAULT_SERVICE_PATH_FORMAT: &str = "%s/pkg/service";

/// Default generated service file name.
pub const DEFAULT_SERVICE_FILE_NAME: &str = "service.go";

/// Default Go toolchain binary.
pub const DEFAULT_GO_BINARY: &str = "go";

/// Process-wide generator settings.
///
/// Read-only for the duration of a run; construct once and pass by
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output directory format with exactly one `%s` for the snake_cased name.
    pub service_path_format: String,
    /// File name placed under the service directory.
    pub service_file_name: String,
    /// Module identifier override for `go mod init`.
    pub module_name: Option<String>,
    /// Go toolchain binary used for module initialization.
    pub go_binary: String,
    /// Entity type name -> Go import path.
    pub entities: IndexMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_path_format: DEFAULT_SERVICE_PATH_FORMAT.to_string(),
            service_file_name: DEFAULT_SERVICE_FILE_NAME.to_string(),
            module_name: None,
            go_binary: DEFAULT_GO_BINARY.to_string(),
            entities: IndexMap::new(),
        }
    }
}

impl Config {
    /// Override the module name.
    pub fn with_module_name(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = Some(module_name.into());
        self
    }

    /// Override the service path format.
    pub fn with_service_path_format(mut self, format: impl Into<String>) -> Self {
        self.service_path_format = format.into();
        self
    }

    /// Override the service file name.
    pub fn with_service_file_name(mut self, name: impl Into<String>) -> Self {
        self.service_file_name = name.into();
        self
    }

    /// Override the Go binary.
    pub fn with_go_binary(mut self, binary: impl Into<String>) -> Self {
        self.go_binary = binary.into();
        self
    }

    /// Register an entity import path.
    pub fn with_entity(
        mut self,
        entity: impl Into<String>,
        import_path: impl Into<String>,
    ) -> Self {
        self.entities.insert(entity.into(), import_path.into());
        self
    }

    /// Substitute the snake_cased name into `service_path_format`.
    pub fn format_service_path(&self, snake_name: &str) -> String {
        self.service_path_format.replacen(PLACEHOLDER, snake_name, 1)
    }

    /// Check the values for consistency.
    ///
    /// `ctx` supplies the source text for error labels; use an empty
    /// context for programmatically built configurations.
    pub fn validate(&self, ctx: &SourceContext) -> Result<()> {
        let placeholders = self.service_path_format.matches(PLACEHOLDER).count();
        if placeholders != 1 {
            return Err(ctx.invalid_value(
                "service_path_format",
                format!("expected exactly one `%s` placeholder, found {}", placeholders),
            ));
        }

        let file = self.service_file_name.trim();
        if file.is_empty() {
            return Err(ctx.invalid_value("service_file_name", "must not be empty"));
        }
        if file.contains(['/', '\\']) {
            return Err(ctx.invalid_value(
                "service_file_name",
                "must be a file name, not a path",
            ));
        }

        if let Some(module) = &self.module_name {
            if module.trim().is_empty() || module.split('/').any(str::is_empty) {
                return Err(ctx.invalid_value(
                    "module_name",
                    "must be a non-empty, slash-separated module path",
                ));
            }
        }

        if self.go_binary.trim().is_empty() {
            return Err(ctx.invalid_value("go_binary", "must not be empty"));
        }

        for (entity, path) in &self.entities {
            if path.trim().is_empty() {
                return Err(ctx.invalid_value(
                    entity.clone(),
                    format!("import path for entity '{}' must not be empty", entity),
                ));
            }
        }

        Ok(())
    }
}
