//! Entity import path resolution.

use std::{
    fs,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use tracing::debug;

use crate::{Error, Result};

/// The package an entity type is imported from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityImport {
    pub path: String,
    /// Name from the declaring file's `package` clause, when known.
    pub package: Option<String>,
}

impl EntityImport {
    /// An import whose package name is inferred from the path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            package: None,
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }
}

impl From<&str> for EntityImport {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for EntityImport {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

/// Look up the Go package that declares an entity type.
pub trait EntityResolver {
    fn resolve_entity(&self, entity_type: &str) -> Result<EntityImport>;
}

impl<F> EntityResolver for F
where
    F: Fn(&str) -> Result<EntityImport>,
{
    fn resolve_entity(&self, entity_type: &str) -> Result<EntityImport> {
        self(entity_type)
    }
}

/// Directories never searched for entity declarations.
const SKIPPED_DIRS: &[&str] = &["vendor", "testdata", "node_modules"];

/// Finds `type <Entity> struct` declarations in a Go source tree.
///
/// Explicit overrides (the `[entities]` table of kitgen.toml) are consulted
/// first. Otherwise every non-test `.go` file under the root is scanned and
/// the declaring directory is turned into an import path using the module
/// path of the nearest enclosing `go.mod`. The package name comes from the
/// declaring file's `package` clause.
#[derive(Debug, Clone)]
pub struct SourceTreeResolver {
    root: PathBuf,
    overrides: IndexMap<String, String>,
}

impl SourceTreeResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            overrides: IndexMap::new(),
        }
    }

    /// Entity type -> import path mappings that bypass the scan.
    pub fn with_overrides(mut self, overrides: IndexMap<String, String>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    fn scan(&self, entity_type: &str) -> Result<EntityImport> {
        let mut files = Vec::new();
        collect_go_files(&self.root, &mut files)?;
        files.sort();

        let mut found: Vec<EntityImport> = Vec::new();
        let mut generic: Option<PathBuf> = None;
        for file in &files {
            let src = fs::read_to_string(file).map_err(|e| Error::Io {
                action: "read",
                path: file.clone(),
                source: e,
            })?;
            match find_struct(&src, entity_type) {
                None => continue,
                Some(Declaration::Generic) => {
                    generic.get_or_insert_with(|| file.clone());
                    continue;
                }
                Some(Declaration::Plain) => {}
            }

            let Some(dir) = file.parent() else { continue };
            let path = self.import_path_of(dir)?;
            let package = package_clause(&src).ok_or_else(|| Error::Resolution {
                entity: entity_type.to_string(),
                reason: format!("'{}' has no package clause", file.display()),
            })?;
            if package == "main" {
                return Err(Error::Resolution {
                    entity: entity_type.to_string(),
                    reason: format!(
                        "declared in package main ('{}'), which cannot be imported",
                        file.display()
                    ),
                });
            }

            debug!(
                entity = entity_type,
                file = %file.display(),
                import_path = %path,
                package,
                "found entity"
            );
            if !found.iter().any(|f| f.path == path) {
                found.push(EntityImport::new(path).with_package(package));
            }
        }

        match (found.len(), generic) {
            (1, _) => Ok(found.remove(0)),
            (0, Some(file)) => Err(Error::Resolution {
                entity: entity_type.to_string(),
                reason: format!(
                    "'{}' declares it with type parameters; map a concrete type in [entities]",
                    file.display()
                ),
            }),
            (0, None) => Err(Error::Resolution {
                entity: entity_type.to_string(),
                reason: format!(
                    "no `type {} struct` declaration found under '{}'",
                    entity_type,
                    self.root.display()
                ),
            }),
            _ => {
                let paths: Vec<_> = found.iter().map(|f| f.path.as_str()).collect();
                Err(Error::Resolution {
                    entity: entity_type.to_string(),
                    reason: format!("declared in several packages: {}", paths.join(", ")),
                })
            }
        }
    }

    /// Import path of the package in `dir`, from the nearest `go.mod`.
    fn import_path_of(&self, dir: &Path) -> Result<String> {
        for ancestor in dir.ancestors() {
            let go_mod = ancestor.join("go.mod");
            if go_mod.is_file() {
                let src = fs::read_to_string(&go_mod).map_err(|e| Error::Io {
                    action: "read",
                    path: go_mod.clone(),
                    source: e,
                })?;
                let module = module_path(&src).ok_or_else(|| Error::Resolution {
                    entity: String::new(),
                    reason: format!("'{}' has no module directive", go_mod.display()),
                })?;

                let rel = dir.strip_prefix(ancestor).unwrap_or(Path::new(""));
                let rel: Vec<_> = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                return Ok(if rel.is_empty() {
                    module.to_string()
                } else {
                    format!("{}/{}", module, rel.join("/"))
                });
            }
            if ancestor == self.root {
                break;
            }
        }

        Err(Error::Resolution {
            entity: String::new(),
            reason: format!("'{}' is not inside a Go module", dir.display()),
        })
    }
}

impl EntityResolver for SourceTreeResolver {
    fn resolve_entity(&self, entity_type: &str) -> Result<EntityImport> {
        if let Some(path) = self.overrides.get(entity_type) {
            debug!(entity = entity_type, import_path = %path, "entity mapped in config");
            return Ok(EntityImport::new(path.clone()));
        }
        self.scan(entity_type).map_err(|err| match err {
            Error::Resolution { entity, reason } if entity.is_empty() => Error::Resolution {
                entity: entity_type.to_string(),
                reason,
            },
            other => other,
        })
    }
}

fn collect_go_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(Error::Io {
                action: "read directory",
                path: dir.to_path_buf(),
                source: e,
            });
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let Ok(file_type) = entry.file_type() else { continue };

        if file_type.is_dir() {
            if name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref()) {
                continue;
            }
            collect_go_files(&path, out)?;
        } else if name.ends_with(".go") && !name.ends_with("_test.go") {
            out.push(path);
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Declaration {
    Plain,
    /// Declared with type parameters, e.g. `type Order[T any] struct`.
    Generic,
}

/// Find a top-level `type <name> struct` declaration, either standalone or
/// inside a `type ( ... )` group.
fn find_struct(src: &str, name: &str) -> Option<Declaration> {
    let mut in_group = false;
    // Brace depth inside a group, so struct fields are not taken for specs.
    let mut depth = 0usize;

    for line in src.lines() {
        let line = line.trim();
        if in_group {
            if depth == 0 {
                if line.starts_with(')') {
                    in_group = false;
                    continue;
                }
                if let Some(decl) = struct_spec(line, name) {
                    return Some(decl);
                }
            }
            depth = (depth + line.matches('{').count()).saturating_sub(line.matches('}').count());
            continue;
        }

        let Some(rest) = line.strip_prefix("type") else { continue };
        let rest = if let Some(group) = rest.trim_start().strip_prefix('(') {
            if group.trim().is_empty() {
                in_group = true;
                depth = 0;
                continue;
            }
            // `type ( Order struct{} )` on one line.
            group.trim_end().trim_end_matches(')')
        } else if rest.starts_with(char::is_whitespace) {
            rest
        } else {
            continue;
        };
        if let Some(decl) = struct_spec(rest.trim_start(), name) {
            return Some(decl);
        }
    }
    None
}

/// Match one type spec (`Order struct {`, `Order[T any] struct{}`).
fn struct_spec(spec: &str, name: &str) -> Option<Declaration> {
    let rest = spec.strip_prefix(name)?;
    let (decl, rest) = if rest.starts_with('[') {
        (Declaration::Generic, skip_brackets(rest)?)
    } else if rest.starts_with(char::is_whitespace) {
        (Declaration::Plain, rest)
    } else {
        return None;
    };

    let after = rest.trim_start().strip_prefix("struct")?;
    (after.is_empty() || after.starts_with(|c: char| c == '{' || c.is_whitespace())).then_some(decl)
}

/// The text after the bracketed type parameter list at the start of `s`.
fn skip_brackets(s: &str) -> Option<&str> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&s[i + 1..]);
                }
            }
            _ => {}
        }
    }
    None
}

/// The package name a Go file declares.
fn package_clause(src: &str) -> Option<&str> {
    let mut in_comment = false;
    for line in src.lines() {
        let mut line = line.trim();
        if in_comment {
            let Some(end) = line.find("*/") else { continue };
            line = line[end + 2..].trim_start();
            in_comment = false;
        }
        while let Some(rest) = line.strip_prefix("/*") {
            match rest.find("*/") {
                Some(end) => line = rest[end + 2..].trim_start(),
                None => {
                    in_comment = true;
                    line = "";
                }
            }
        }
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let name = line.strip_prefix("package")?;
        if !name.starts_with(char::is_whitespace) {
            return None;
        }
        return name
            .split(|c: char| c.is_whitespace() || c == ';' || c == '/')
            .find(|s| !s.is_empty());
    }
    None
}

/// The module path declared by a go.mod file.
fn module_path(go_mod: &str) -> Option<&str> {
    go_mod.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let module = rest.trim().trim_matches('"');
        (!module.is_empty()).then_some(module)
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_find_struct() {
        let plain = Some(Declaration::Plain);
        assert_eq!(find_struct("package e\n\ntype Order struct {\n}\n", "Order"), plain);
        assert_eq!(find_struct("type Order struct{}\n", "Order"), plain);
        assert_eq!(find_struct("type OrderItem struct {}\n", "Order"), None);
        assert_eq!(find_struct("type Order interface {}\n", "Order"), None);
        assert_eq!(find_struct("// type Order struct {}\n", "Order"), None);
        assert_eq!(find_struct("type Order = other.Order\n", "Order"), None);
    }

    #[test]
    fn test_find_struct_in_type_group() {
        let src = "package entity\n\ntype (\n\
                   \tItem struct {\n\t\tOrder struct {\n\t\t\tID string\n\t\t}\n\t}\n\n\
                   \tOrder struct {\n\t\tID string\n\t}\n\
                   )\n";
        assert_eq!(find_struct(src, "Order"), Some(Declaration::Plain));

        // Only the nested field of Item mentions Order.
        let nested = "type (\n\tItem struct {\n\t\tOrder struct {\n\t\t}\n\t}\n)\n";
        assert_eq!(find_struct(nested, "Order"), None);

        assert_eq!(find_struct("type ( Order struct{} )\n", "Order"), Some(Declaration::Plain));
    }

    #[test]
    fn test_find_generic_struct() {
        assert_eq!(
            find_struct("type Order[T any] struct {\n\tItems []T\n}\n", "Order"),
            Some(Declaration::Generic)
        );
        assert_eq!(
            find_struct("type (\n\tOrder[K comparable, V []K] struct{}\n)\n", "Order"),
            Some(Declaration::Generic)
        );
    }

    #[test]
    fn test_package_clause() {
        assert_eq!(package_clause("package entity\n"), Some("entity"));
        assert_eq!(
            package_clause(
                "// Package model holds entities.\n/* build\n notes */\n\
                 package model // import \"x\"\n"
            ),
            Some("model")
        );
        assert_eq!(package_clause("/* a */ package shop;\n"), Some("shop"));
        assert_eq!(package_clause("type Order struct{}\n"), None);
    }

    #[test]
    fn test_module_path() {
        assert_eq!(
            module_path("// comment\nmodule github.com/acme/shop\n\ngo 1.22\n"),
            Some("github.com/acme/shop")
        );
        assert_eq!(module_path("module \"example.com/q\"\n"), Some("example.com/q"));
        assert_eq!(module_path("modulex foo\n"), None);
    }

    #[test]
    fn test_scan_finds_nested_package() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "shop/go.mod", "module github.com/acme/shop\n");
        write(
            temp.path(),
            "shop/pkg/entity/order.go",
            "package entity\n\ntype Order struct {\n\tID string\n}\n",
        );
        write(
            temp.path(),
            "shop/pkg/entity/order_test.go",
            "package entity\n\ntype Order struct{}\n",
        );

        let resolver = SourceTreeResolver::new(temp.path());
        assert_eq!(
            resolver.resolve_entity("Order").unwrap(),
            EntityImport::new("github.com/acme/shop/pkg/entity").with_package("entity")
        );
    }

    #[test]
    fn test_scan_reports_declared_package_name() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "go.mod", "module github.com/acme/shop/v2\n");
        write(temp.path(), "order.go", "package shop\n\ntype Order struct{}\n");
        write(temp.path(), "models/item.go", "package model\n\ntype Item struct{}\n");

        let resolver = SourceTreeResolver::new(temp.path());
        assert_eq!(
            resolver.resolve_entity("Order").unwrap(),
            EntityImport::new("github.com/acme/shop/v2").with_package("shop")
        );
        assert_eq!(
            resolver.resolve_entity("Item").unwrap(),
            EntityImport::new("github.com/acme/shop/v2/models").with_package("model")
        );
    }

    #[test]
    fn test_scan_finds_grouped_declaration() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "go.mod", "module example.com/app\n");
        write(
            temp.path(),
            "entity/types.go",
            "package entity\n\ntype (\n\tOrder struct {\n\t\tID string\n\t}\n\tItem struct{}\n)\n",
        );

        let found = SourceTreeResolver::new(temp.path())
            .resolve_entity("Order")
            .unwrap();
        assert_eq!(found.path, "example.com/app/entity");
    }

    #[test]
    fn test_generic_entity_is_resolution_error() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "go.mod", "module example.com/app\n");
        write(temp.path(), "entity/order.go", "package entity\n\ntype Order[T any] struct{}\n");

        let err = SourceTreeResolver::new(temp.path())
            .resolve_entity("Order")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Resolution { ref reason, .. } if reason.contains("type parameters")
        ));
    }

    #[test]
    fn test_main_package_is_resolution_error() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "go.mod", "module example.com/app\n");
        write(temp.path(), "main.go", "package main\n\ntype Order struct{}\n");

        let err = SourceTreeResolver::new(temp.path())
            .resolve_entity("Order")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Resolution { ref reason, .. } if reason.contains("package main")
        ));
    }

    #[test]
    fn test_override_wins() {
        let temp = TempDir::new().unwrap();
        let mut overrides = IndexMap::new();
        overrides.insert("Order".to_string(), "example.com/model".to_string());

        let resolver = SourceTreeResolver::new(temp.path()).with_overrides(overrides);
        assert_eq!(
            resolver.resolve_entity("Order").unwrap(),
            EntityImport::new("example.com/model")
        );
    }

    #[test]
    fn test_missing_entity_is_resolution_error() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "go.mod", "module example.com/app\n");

        let err = SourceTreeResolver::new(temp.path())
            .resolve_entity("Order")
            .unwrap_err();
        assert!(matches!(err, Error::Resolution { ref entity, .. } if entity == "Order"));
    }

    #[test]
    fn test_ambiguous_entity_is_resolution_error() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "go.mod", "module example.com/app\n");
        write(temp.path(), "a/order.go", "package a\ntype Order struct{}\n");
        write(temp.path(), "b/order.go", "package b\ntype Order struct{}\n");

        let err = SourceTreeResolver::new(temp.path())
            .resolve_entity("Order")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Resolution { ref reason, .. }
                if reason.contains("example.com/app/a") && reason.contains("example.com/app/b")
        ));
    }

    #[test]
    fn test_outside_module_is_resolution_error() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "entity/order.go", "package entity\ntype Order struct{}\n");

        let err = SourceTreeResolver::new(temp.path())
            .resolve_entity("Order")
            .unwrap_err();
        assert!(matches!(err, Error::Resolution { ref entity, .. } if entity == "Order"));
    }
}
