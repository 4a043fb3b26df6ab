use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use desk_engine::EngineSettings;
use desk_logging::{desk_info, desk_warn};
use serde::{Deserialize, Serialize};

use super::cli::Cli;

/// Optional settings file, e.g.
///
/// ```ron
/// (
///     base_url: Some("http://127.0.0.1:8000"),
///     output_dir: Some("reports"),
///     request_timeout_secs: Some(300),
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub base_url: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub max_document_bytes: Option<u64>,
}

/// Reads `path`. A missing or unreadable file yields the defaults.
pub(crate) fn load_config(path: &Path) -> DeskConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return DeskConfig::default();
        }
        Err(err) => {
            desk_warn!("Failed to read config from {:?}: {}", path, err);
            return DeskConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            desk_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            desk_warn!("Failed to parse config from {:?}: {}", path, err);
            DeskConfig::default()
        }
    }
}

/// Defaults, then the config file, then command line flags.
pub(crate) fn resolve_settings(config: &DeskConfig, cli: &Cli) -> EngineSettings {
    let mut settings = EngineSettings::default();
    if let Some(base_url) = &config.base_url {
        settings.base_url = base_url.clone();
    }
    if let Some(dir) = &config.output_dir {
        settings.output_dir = dir.clone();
    }
    if let Some(secs) = config.connect_timeout_secs {
        settings.connect_timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = config.request_timeout_secs {
        settings.request_timeout = Duration::from_secs(secs);
    }
    if let Some(max) = config.max_document_bytes {
        settings.max_document_bytes = max;
    }
    if let Some(base_url) = &cli.base_url {
        settings.base_url = base_url.clone();
    }
    if let Some(dir) = &cli.output_dir {
        settings.output_dir = dir.clone();
    }
    settings
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_config(&temp.path().join("absent.ron")), DeskConfig::default());
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.ron");
        fs::write(&path, "(base_url: 42").unwrap();
        assert_eq!(load_config(&path), DeskConfig::default());
    }

    #[test]
    fn file_values_apply_and_flags_win() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("desk.ron");
        fs::write(
            &path,
            r#"(base_url: Some("http://file:1"), output_dir: Some("out"), request_timeout_secs: Some(5))"#,
        )
        .unwrap();
        let config = load_config(&path);
        assert_eq!(config.request_timeout_secs, Some(5));

        let cli = Cli::parse_from(["report_desk", "--base-url", "http://flag:2"]);
        let settings = resolve_settings(&config, &cli);
        assert_eq!(settings.base_url, "http://flag:2");
        assert_eq!(settings.output_dir, PathBuf::from("out"));
        assert_eq!(settings.request_timeout, Duration::from_secs(5));
        assert_eq!(settings.connect_timeout, EngineSettings::default().connect_timeout);
    }
}
