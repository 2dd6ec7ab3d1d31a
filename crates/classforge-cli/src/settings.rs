//! Configuration file discovery

use anyhow::{Context, Result};
use classforge_core::GeneratorConfig;
use std::path::Path;

/// Configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "classforge.toml";

/// Load the generator configuration.
///
/// An explicit path must exist. Without one, `./classforge.toml` is used when
/// present and defaults apply otherwise.
pub fn load(path: Option<&str>) -> Result<GeneratorConfig> {
    load_from(path, Path::new("."))
}

/// Same as [`load`], discovering the default file in `dir`
fn load_from(path: Option<&str>, dir: &Path) -> Result<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration: {path}")),
        None => {
            let discovered = dir.join(DEFAULT_CONFIG_FILE);
            if discovered.is_file() {
                tracing::debug!(path = %discovered.display(), "using discovered configuration");
                GeneratorConfig::from_file(&discovered).with_context(|| {
                    format!("Failed to load configuration: {}", discovered.display())
                })
            } else {
                Ok(GeneratorConfig::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use classforge_core::ClassGenError;
    use tempfile::TempDir;

    #[test]
    fn load___explicit_missing_path___error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        let path = path.to_str().unwrap();

        let err = load_from(Some(path), dir.path()).unwrap_err();

        assert_eq!(err.to_string(), format!("Failed to load configuration: {path}"));
        assert!(matches!(
            err.downcast_ref::<ClassGenError>(),
            Some(ClassGenError::Io(_))
        ));
    }

    #[test]
    fn load___explicit_valid_path___parses_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "indent = \"\\t\"\nlog_level = \"debug\"\n").unwrap();

        let config = load_from(path.to_str(), dir.path()).unwrap();

        assert_eq!(config.indent, "\t");
        assert_eq!(config.log_level, "debug");
        assert!(config.template_dir.is_none());
    }

    #[test]
    fn load___explicit_invalid_toml___config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "indent = [").unwrap();

        let err = load_from(path.to_str(), dir.path()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ClassGenError>(),
            Some(ClassGenError::Config(_))
        ));
    }

    #[test]
    fn load___discovered_file___used_without_explicit_path() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "template_dir = \"tmpl\"\n").unwrap();

        let config = load_from(None, dir.path()).unwrap();

        assert_eq!(config.template_dir.as_deref(), Some(Path::new("tmpl")));
        assert_eq!(config.indent, "    ");
    }

    #[test]
    fn load___nothing_to_discover___defaults() {
        let dir = TempDir::new().unwrap();

        let config = load_from(None, dir.path()).unwrap();

        assert_eq!(config, GeneratorConfig::default());
    }
}
