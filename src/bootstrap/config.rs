//! # Configuration Loader
//!
//! Reads the TOML file into a [`CatalogConfig`] DTO, then layers the
//! environment and command-line overrides on top:
//!
//! 1. `--endpoint` flag
//! 2. `INTERFLY_ENDPOINT` environment variable (also read from `.env`)
//! 3. `[server] endpoint` in the config file
//! 4. [`DEFAULT_ENDPOINT`]

use std::path::PathBuf;

use anyhow::Context;
use ifly_infra::config::{CatalogConfig, DEFAULT_ENDPOINT};

/// Environment variable overriding the listings endpoint.
pub const ENDPOINT_ENV: &str = "INTERFLY_ENDPOINT";

/// Load configuration from a TOML file
///
/// Pure data loading: missing sections give empty values, nothing is validated.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<CatalogConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    CatalogConfig::from_toml(&toml_value)
}

/// `<config_dir>/interfly/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("interfly").join("config.toml"))
}

/// Resolve the effective configuration.
///
/// An explicitly passed file must exist; the default file is optional.
pub fn resolve_config(
    explicit_path: Option<PathBuf>,
    cli_endpoint: Option<String>,
) -> anyhow::Result<CatalogConfig> {
    let config = match explicit_path {
        Some(path) => load_config(path)?,
        None => match default_config_path() {
            Some(path) if path.is_file() => load_config(path)?,
            _ => CatalogConfig::with_defaults(),
        },
    };

    let env_endpoint = std::env::var(ENDPOINT_ENV).ok();
    Ok(apply_overrides(config, env_endpoint, cli_endpoint))
}

fn apply_overrides(
    mut config: CatalogConfig,
    env_endpoint: Option<String>,
    cli_endpoint: Option<String>,
) -> CatalogConfig {
    let override_endpoint = cli_endpoint
        .into_iter()
        .chain(env_endpoint)
        .find(|endpoint| !endpoint.trim().is_empty());

    if let Some(endpoint) = override_endpoint {
        config.endpoint = endpoint;
    } else if config.endpoint.trim().is_empty() {
        config.endpoint = DEFAULT_ENDPOINT.to_string();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let file = write_config(
            r#"
            [server]
            endpoint = "http://catalog.internal:9000"
            request_timeout_secs = 5
        "#,
        );

        let config = load_config(file.path().to_path_buf()).unwrap();

        assert_eq!(config.endpoint, "http://catalog.internal:9000");
        assert_eq!(config.request_timeout_secs, Some(5));
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let file = write_config("[server\nendpoint = ");

        let err = load_config(file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let err = load_config(PathBuf::from("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_cli_endpoint_wins_over_env_and_file() {
        let config = apply_overrides(
            CatalogConfig::with_defaults(),
            Some("http://env:1".to_string()),
            Some("http://cli:2".to_string()),
        );
        assert_eq!(config.endpoint, "http://cli:2");
    }

    #[test]
    fn test_env_endpoint_wins_over_file() {
        let config = apply_overrides(
            CatalogConfig::with_defaults(),
            Some("http://env:1".to_string()),
            None,
        );
        assert_eq!(config.endpoint, "http://env:1");
    }

    #[test]
    fn test_empty_file_endpoint_falls_back_to_default() {
        let config = apply_overrides(CatalogConfig::empty(), Some("  ".to_string()), None);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    #[serial]
    fn test_resolve_config_with_explicit_file_and_env() {
        let file = write_config("[server]\nendpoint = \"http://file:3\"\n");
        std::env::set_var(ENDPOINT_ENV, "http://env:4");

        let config = resolve_config(Some(file.path().to_path_buf()), None);
        std::env::remove_var(ENDPOINT_ENV);

        assert_eq!(config.unwrap().endpoint, "http://env:4");
    }

    #[test]
    #[serial]
    fn test_resolve_config_requires_explicit_file_to_exist() {
        std::env::remove_var(ENDPOINT_ENV);
        let result = resolve_config(Some(PathBuf::from("/definitely/not/here.toml")), None);
        assert!(result.is_err());
    }
}
