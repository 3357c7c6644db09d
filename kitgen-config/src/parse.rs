use std::{path::Path, str::FromStr};

use crate::{CONFIG_FILE, Config, Error, Result, SourceContext};

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE)
    }
}

impl Config {
    /// Parse a kitgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Load `kitgen.toml` from `dir` if present, otherwise use the defaults.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if path.is_file() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Parse a configuration from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    config.validate(&ctx)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_all_keys() {
        let config: Config = r#"
            service_path_format = "services\\%s"
            service_file_name = "svc.go"
            module_name = "github.com/acme/OrderSvc"
            go_binary = "/usr/local/go/bin/go"

            [entities]
            Order = "github.com/acme/shop/entity"
            "#
        .parse()
        .unwrap();

        assert_eq!(config.service_path_format, "services\\%s");
        assert_eq!(config.service_file_name, "svc.go");
        assert_eq!(
            config.module_name.as_deref(),
            Some("github.com/acme/OrderSvc")
        );
        assert_eq!(config.go_binary, "/usr/local/go/bin/go");
        assert_eq!(
            config.entities.get("Order").map(String::as_str),
            Some("github.com/acme/shop/entity")
        );
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = "gk_service_path_format = \"%s\"".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_validation_error_points_at_key() {
        let src = "service_file_name = \"service.go\"\nservice_path_format = \"pkg\"\n";
        let err = parse_config(src, "kitgen.toml").unwrap_err();

        match *err {
            Error::InvalidValue { span, key, .. } => {
                assert_eq!(key, "service_path_format");
                let span = span.expect("span should be located");
                assert_eq!(span.offset(), src.find("service_path_format").unwrap());
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }
}
