//! Go import block.

use std::collections::HashSet;

use indexmap::IndexMap;
use kitgen_codegen::{CodeFragment, Renderable, generation::ImportCollector};

use crate::{GO_NAMING, GoTypeMapper, go_package_name};

/// One import spec with the qualifier code uses to refer to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoImport {
    pub path: String,
    pub alias: Option<String>,
    pub qualifier: String,
}

impl GoImport {
    fn render(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} \"{}\"", alias, self.path),
            None => format!("\"{}\"", self.path),
        }
    }
}

/// The import declaration of a Go file, grouped the way gofmt/goimports
/// lays it out: standard library first, then everything else.
#[derive(Debug, Clone, Default)]
pub struct ImportBlock {
    imports: Vec<GoImport>,
}

impl ImportBlock {
    /// Assign a unique qualifier to every collected path.
    ///
    /// `packages` maps import paths to the names their `package` clauses
    /// declare. Paths missing from it use [`default_qualifier`]. An explicit
    /// alias is emitted whenever the qualifier differs from the name implied
    /// by the path, or is already taken.
    pub fn from_collector(
        collector: &ImportCollector,
        packages: &IndexMap<String, String>,
    ) -> Self {
        let mut taken = HashSet::new();
        let mut imports = Vec::with_capacity(collector.len());

        for (path, _) in collector.iter() {
            let natural = path_package(path);
            let base = match packages.get(path) {
                Some(package) => package.clone(),
                None => default_qualifier(path),
            };
            let mut qualifier = base.clone();
            let mut n = 2;
            while taken.contains(&qualifier) {
                qualifier = format!("{}{}", base, n);
                n += 1;
            }
            taken.insert(qualifier.clone());

            let alias = (qualifier != natural).then(|| qualifier.clone());
            imports.push(GoImport {
                path: path.to_string(),
                alias,
                qualifier,
            });
        }

        Self { imports }
    }

    pub fn imports(&self) -> &[GoImport] {
        &self.imports
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// A type mapper that renders qualified types with these qualifiers.
    pub fn type_mapper(&self) -> GoTypeMapper {
        self.imports.iter().fold(GoTypeMapper::new(), |mapper, import| {
            mapper.with_qualifier(import.path.clone(), import.qualifier.clone())
        })
    }
}

impl Renderable for ImportBlock {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if let [only] = self.imports.as_slice() {
            return vec![CodeFragment::line(format!("import {}", only.render()))];
        }
        if self.imports.is_empty() {
            return Vec::new();
        }

        let (mut stdlib, mut third_party): (Vec<_>, Vec<_>) =
            self.imports.iter().partition(|i| is_stdlib(&i.path));
        stdlib.sort_by(|a, b| a.path.cmp(&b.path));
        third_party.sort_by(|a, b| a.path.cmp(&b.path));

        let mut body: Vec<CodeFragment> = stdlib
            .iter()
            .map(|i| CodeFragment::line(i.render()))
            .collect();
        if !stdlib.is_empty() && !third_party.is_empty() {
            body.push(CodeFragment::Blank);
        }
        body.extend(third_party.iter().map(|i| CodeFragment::line(i.render())));

        vec![CodeFragment::block("import (", body, Some(")".to_string()))]
    }
}

/// Qualifier Go code would use for `path` absent an alias and a known
/// package name.
pub fn default_qualifier(path: &str) -> String {
    let segment = path_package(path);
    if GO_NAMING.is_valid_identifier(segment) && !GO_NAMING.is_reserved(segment) {
        segment.to_string()
    } else {
        go_package_name(segment)
    }
}

/// The package name conventionally implied by an import path: its last
/// segment, skipping a trailing major version suffix such as `/v2`.
pub fn path_package(path: &str) -> &str {
    let mut segments = path.trim_end_matches('/').rsplit('/');
    let last = segments.next().unwrap_or(path);
    match segments.next() {
        Some(previous) if is_major_version(last) => previous,
        _ => last,
    }
}

fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .and_then(|n| n.parse::<u32>().ok())
        .is_some_and(|n| n >= 2)
}

/// Standard library paths have no dot in their first element.
pub fn is_stdlib(path: &str) -> bool {
    path.split('/').next().is_some_and(|first| !first.contains('.'))
}

#[cfg(test)]
mod tests {
    use kitgen_codegen::CodeBuilder;

    use super::*;

    fn render(block: &ImportBlock) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(block);
        builder.build()
    }

    #[test]
    fn test_single_import() {
        let mut collector = ImportCollector::new();
        collector.add("context", "Context");

        assert_eq!(
            render(&ImportBlock::from_collector(&collector, &IndexMap::new())),
            "import \"context\"\n"
        );
    }

    #[test]
    fn test_grouped_imports() {
        let mut collector = ImportCollector::new();
        collector.add("github.com/acme/shop/entity", "Order");
        collector.add("context", "Context");
        collector.add("time", "Time");

        assert_eq!(
            render(&ImportBlock::from_collector(&collector, &IndexMap::new())),
            "import (\n\t\"context\"\n\t\"time\"\n\n\t\"github.com/acme/shop/entity\"\n)\n"
        );
    }

    #[test]
    fn test_aliases_for_unusable_or_clashing_names() {
        let mut collector = ImportCollector::new();
        collector.add("context", "Context");
        collector.add("github.com/acme/shop/context", "Order");
        collector.add("github.com/acme/order-model", "Order");

        let block = ImportBlock::from_collector(&collector, &IndexMap::new());
        let aliases: Vec<_> = block.imports().iter().map(|i| i.alias.as_deref()).collect();
        assert_eq!(aliases, [None, Some("context2"), Some("order_model")]);

        let mapper = block.type_mapper();
        assert_eq!(mapper.qualifier("github.com/acme/shop/context"), "context2");
    }

    #[test]
    fn test_major_version_suffix_is_skipped() {
        assert_eq!(path_package("github.com/acme/shop/v2"), "shop");
        assert_eq!(path_package("math/rand/v2"), "rand");
        assert_eq!(path_package("github.com/acme/v1"), "v1");
        assert_eq!(path_package("v3"), "v3");

        let mut collector = ImportCollector::new();
        collector.add("github.com/acme/shop/v2", "Order");
        let block = ImportBlock::from_collector(&collector, &IndexMap::new());
        assert_eq!(block.imports()[0].qualifier, "shop");
        assert_eq!(block.imports()[0].alias, None);
    }

    #[test]
    fn test_declared_package_name_is_aliased() {
        let mut collector = ImportCollector::new();
        collector.add("github.com/acme/shop/models", "Order");
        collector.add("github.com/acme/shop/v2", "Item");
        let packages: IndexMap<_, _> = [
            ("github.com/acme/shop/models".to_string(), "model".to_string()),
            ("github.com/acme/shop/v2".to_string(), "shop".to_string()),
        ]
        .into_iter()
        .collect();

        let block = ImportBlock::from_collector(&collector, &packages);
        assert_eq!(
            render(&block),
            "import (\n\tmodel \"github.com/acme/shop/models\"\n\t\"github.com/acme/shop/v2\"\n)\n"
        );
        assert_eq!(block.type_mapper().qualifier("github.com/acme/shop/models"), "model");
    }

    #[test]
    fn test_is_stdlib() {
        assert!(is_stdlib("context"));
        assert!(is_stdlib("net/http"));
        assert!(!is_stdlib("github.com/acme/shop"));
        assert!(!is_stdlib("example.com"));
    }
}
