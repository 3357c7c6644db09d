//! Go naming conventions and service name derivation.

use kitgen_codegen::language::NamingConvention;
use kitgen_config::Config;
use kitgen_core::{
    join_path, last_segment, normalize_path, to_camel_case, to_pascal_case, to_snake_case,
};

use crate::{Error, Result};

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    // Exported types use PascalCase
    type_case: to_pascal_case,
    // Locals and parameters use camelCase
    var_case: to_camel_case,
    // Directories use snake_case
    dir_case: to_snake_case,
    reserved_words: &[
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
    ],
};

/// Every name and path derived from one service name.
///
/// All values are pure functions of the input name and the [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceNames {
    name: String,
    interface_name: String,
    entity_type: String,
    entity_var: String,
    snake_name: String,
    dest_path: String,
    file_path: String,
    package_name: String,
}

impl ServiceNames {
    /// Derive the names for `name` under `config`.
    pub fn resolve(name: &str, config: &Config) -> Result<Self> {
        let name = name.trim();
        let invalid = |reason: &str| Error::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("name must not be empty"));
        }

        let entity_type = GO_NAMING.type_name(name);
        if !GO_NAMING.is_valid_identifier(&entity_type) {
            return Err(invalid("it does not form a valid Go identifier"));
        }

        let entity_var = GO_NAMING.var_name(name);
        if GO_NAMING.is_reserved(&entity_var) {
            return Err(invalid(&format!(
                "'{}' is a Go keyword and cannot name a parameter",
                entity_var
            )));
        }

        let snake_name = GO_NAMING.dir_name(name);
        let dest_path = normalize_path(&config.format_service_path(&snake_name));
        let file_path = join_path(&dest_path, &config.service_file_name);
        let package_name = go_package_name(last_segment(&dest_path));

        Ok(Self {
            name: name.to_string(),
            interface_name: format!("{}Service", entity_type),
            entity_type,
            entity_var,
            snake_name,
            dest_path,
            file_path,
            package_name,
        })
    }

    /// The trimmed input name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Interface name, e.g. `OrderService`.
    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    /// Entity type name, e.g. `Order`.
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Entity variable name, e.g. `order`.
    pub fn entity_var(&self) -> &str {
        &self.entity_var
    }

    /// snake_case name, e.g. `order_item`.
    pub fn snake_name(&self) -> &str {
        &self.snake_name
    }

    /// Service directory, `/`-separated.
    pub fn dest_path(&self) -> &str {
        &self.dest_path
    }

    /// Service file path, `/`-separated.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Go package clause for the service file.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }
}

/// Turn a directory name into a usable Go package name.
///
/// Characters that cannot appear in an identifier become `_`, and a
/// leading digit or a keyword gets a `_` prefix.
pub fn go_package_name(segment: &str) -> String {
    let mut name: String = segment
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if name.is_empty() {
        return "main".to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) || GO_NAMING.is_reserved(&name) {
        name.insert(0, '_');
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_order() {
        let names = ServiceNames::resolve("Order", &Config::default()).unwrap();

        assert_eq!(names.interface_name(), "OrderService");
        assert_eq!(names.entity_type(), "Order");
        assert_eq!(names.entity_var(), "order");
        assert_eq!(names.snake_name(), "order");
        assert_eq!(names.dest_path(), "order/pkg/service");
        assert_eq!(names.file_path(), "order/pkg/service/service.go");
        assert_eq!(names.package_name(), "service");
    }

    #[test]
    fn test_resolve_multi_word_names() {
        for input in ["order_item", "OrderItem", "order-item", "orderItem"] {
            let names = ServiceNames::resolve(input, &Config::default()).unwrap();
            assert_eq!(names.interface_name(), "OrderItemService", "input {input}");
            assert_eq!(names.entity_type(), "OrderItem");
            assert_eq!(names.entity_var(), "orderItem");
            assert_eq!(names.dest_path(), "order_item/pkg/service");
        }
    }

    #[test]
    fn test_resolve_normalizes_backslashes() {
        let config = Config::default()
            .with_service_path_format("services\\\\%s\\pkg\\")
            .with_service_file_name("svc.go");
        let names = ServiceNames::resolve("Order", &config).unwrap();

        assert_eq!(names.dest_path(), "services/order/pkg");
        assert_eq!(names.file_path(), "services/order/pkg/svc.go");
        assert_eq!(names.package_name(), "pkg");
    }

    #[test]
    fn test_resolve_rejects_empty_and_keywords() {
        let config = Config::default();
        assert!(matches!(
            ServiceNames::resolve("   ", &config),
            Err(Error::InvalidName { .. })
        ));
        assert!(matches!(
            ServiceNames::resolve("type", &config),
            Err(Error::InvalidName { .. })
        ));
        assert!(matches!(
            ServiceNames::resolve("42", &config),
            Err(Error::InvalidName { .. })
        ));
    }

    #[test]
    fn test_go_package_name() {
        assert_eq!(go_package_name("service"), "service");
        assert_eq!(go_package_name("order-svc"), "order_svc");
        assert_eq!(go_package_name("v2"), "v2");
        assert_eq!(go_package_name("2fa"), "_2fa");
        assert_eq!(go_package_name("func"), "_func");
    }

    #[test]
    fn test_go_keywords() {
        assert!(GO_NAMING.is_reserved("func"));
        assert!(GO_NAMING.is_reserved("range"));
        assert!(!GO_NAMING.is_reserved("string"));
    }
}
