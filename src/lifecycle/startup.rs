//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve the effective configuration from every source
//! - Validate it once all overrides are applied
//!
//! # Design Decisions
//! - Precedence, lowest first: defaults, config file, environment, CLI flags
//! - Fail fast: any startup error is fatal

use std::path::PathBuf;

use crate::config::{apply_env_overrides, load_config, validate_config, ConfigError, ServiceConfig};

/// Startup options collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Optional TOML configuration file.
    pub config_path: Option<PathBuf>,

    /// Overrides `listener.host`.
    pub host: Option<String>,

    /// Overrides `listener.port`.
    pub port: Option<u16>,
}

/// Build the effective configuration.
///
/// `env` resolves environment variables; the binary passes
/// `|key| std::env::var(key).ok()`.
pub fn resolve_config<F>(options: &StartupOptions, env: F) -> Result<ServiceConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &options.config_path {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    apply_env_overrides(&mut config, env)?;

    if let Some(host) = &options.host {
        config.listener.host = host.clone();
    }
    if let Some(port) = options.port {
        config.listener.port = port;
    }

    validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = resolve_config(&StartupOptions::default(), no_env).unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[listener]\nhost = \"127.0.0.1\"\nport = 7000").unwrap();

        let env = |key: &str| (key == "PORT").then(|| "7100".to_string());

        let options = StartupOptions {
            config_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let config = resolve_config(&options, env).unwrap();
        assert_eq!(config.listener.host, "127.0.0.1");
        assert_eq!(config.listener.port, 7100);

        let options = StartupOptions {
            config_path: Some(file.path().to_path_buf()),
            port: Some(7200),
            ..Default::default()
        };
        let config = resolve_config(&options, env).unwrap();
        assert_eq!(config.listener.port, 7200);
    }

    #[test]
    fn test_cli_host_is_validated() {
        let options = StartupOptions {
            host: Some("not-an-ip".into()),
            ..Default::default()
        };
        let err = resolve_config(&options, no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
