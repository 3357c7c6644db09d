//! `new service` reports.

use kitgen_core::WriteResult;
use kitgen_go::{GenerateReport, ModuleStatus, PreviewFile};

use super::output::{Output, Report};

/// Outcome of scaffolding one service.
#[derive(Debug)]
pub struct ServiceReport(pub GenerateReport);

impl Report for ServiceReport {
    fn render(&self, out: &mut dyn Output) {
        let report = &self.0;
        out.title(&format!("Scaffolded {}", report.names.interface_name()));
        let entity = &report.entity_import;
        let entity = match &entity.package {
            Some(package) => format!(
                "{}.{} (package {})",
                entity.path,
                report.names.entity_type(),
                package
            ),
            None => format!("{}.{}", entity.path, report.names.entity_type()),
        };
        out.key_value("entity", &entity);
        out.key_value("directory", report.names.dest_path());
        out.newline();

        let go_mod = format!("{}/go.mod", report.names.dest_path());
        match &report.module {
            ModuleStatus::Created { module } => {
                out.added_item(&format!("{} (module {})", go_mod, module))
            }
            ModuleStatus::Existing => out.kept_item(&format!("{} (already present)", go_mod)),
        }

        let file = report.file_path.display().to_string();
        match report.write {
            WriteResult::Written => out.added_item(&file),
            WriteResult::Skipped => out.kept_item(&format!("{} (exists, skipped)", file)),
        }
    }
}

/// A dry-run rendering of `service.go`.
#[derive(Debug)]
pub struct PreviewReport(pub PreviewFile);

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        out.divider(&self.0.path);
        out.preformatted(&self.0.content);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use kitgen_config::Config;
    use kitgen_go::{EntityImport, ServiceNames};

    use super::*;
    use crate::reports::output::Recorded;

    #[test]
    fn test_service_report_lines() {
        let names = ServiceNames::resolve("Order", &Config::default()).unwrap();
        let report = ServiceReport(GenerateReport {
            file_path: PathBuf::from(names.file_path()),
            names,
            entity_import: EntityImport::new("github.com/acme/shop/entity"),
            module: ModuleStatus::Created {
                module: "order".to_string(),
            },
            write: WriteResult::Written,
        });

        let mut out = Recorded::default();
        report.render(&mut out);

        assert_eq!(out.0[0], "title Scaffolded OrderService");
        assert!(out.0.contains(&"entity=github.com/acme/shop/entity.Order".to_string()));
        assert!(out.0.contains(&"+ order/pkg/service/go.mod (module order)".to_string()));
        assert!(out.0.contains(&"+ order/pkg/service/service.go".to_string()));
    }

    #[test]
    fn test_skipped_file_is_kept() {
        let names = ServiceNames::resolve("Order", &Config::default()).unwrap();
        let report = ServiceReport(GenerateReport {
            file_path: PathBuf::from(names.file_path()),
            names,
            entity_import: EntityImport::new("example.com/models").with_package("model"),
            module: ModuleStatus::Existing,
            write: WriteResult::Skipped,
        });

        let mut out = Recorded::default();
        report.render(&mut out);

        assert!(out.0.contains(&"entity=example.com/models.Order (package model)".to_string()));
        assert!(out.0.contains(&"= order/pkg/service/go.mod (already present)".to_string()));
        assert!(out.0.contains(&"= order/pkg/service/service.go (exists, skipped)".to_string()));
    }
}
