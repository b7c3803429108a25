use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub remote: RemoteConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub school: SchoolConfig,
    #[serde(default)]
    pub status_catalog: StatusCatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address '{}': {}", addr, e))
    }
}

/// Внешний сервис на базе таблиц (единая точка удалённого вызова)
#[derive(Debug, Deserialize, Clone)]
pub struct RemoteConfig {
    /// Пустая строка — сервис не настроен, все вызовы отклоняются
    pub script_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl RemoteConfig {
    pub fn is_configured(&self) -> bool {
        let url = self.script_url.trim();
        !url.is_empty() && url != PLACEHOLDER_SCRIPT_URL
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// Год отчёта по умолчанию (พ.ศ.)
    #[serde(default = "default_report_year")]
    pub report_year: i32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            report_year: default_report_year(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SchoolConfig {
    #[serde(default)]
    pub name: String,
    /// Подзаголовок печатной формы
    #[serde(default)]
    pub office: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StatusCatalogConfig {
    /// Путь к JSON-справочнику статусов; без него используется встроенный
    #[serde(default)]
    pub path: Option<String>,
}

const PLACEHOLDER_SCRIPT_URL: &str = "YOUR_GOOGLE_APPS_SCRIPT_WEB_APP_URL";

fn default_timeout_secs() -> u64 {
    60
}

fn default_items_per_page() -> usize {
    contracts::shared::document_filter::ITEMS_PER_PAGE
}

fn default_report_year() -> i32 {
    2569
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[remote]
script_url = ""
timeout_secs = 60

[ui]
items_per_page = 10
report_year = 2569

[school]
name = "โรงเรียน"
office = "กลุ่มบริหารงบประมาณ"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.ui.items_per_page == 0 {
        anyhow::bail!("ui.items_per_page must be greater than zero");
    }
    Ok(config)
}

/// Resolve a configured file path.
/// Relative paths are resolved against the executable directory.
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(path_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.ui.items_per_page, 10);
        assert_eq!(config.ui.report_year, 2569);
        assert!(!config.remote.is_configured());
        assert!(config.status_catalog.path.is_none());
    }

    #[test]
    fn test_optional_sections_default() {
        let config = parse_config(
            r#"
[server]
host = "127.0.0.1"
port = 8080

[remote]
script_url = "https://script.google.com/macros/s/abc/exec"
"#,
        )
        .unwrap();
        assert!(config.remote.is_configured());
        assert_eq!(config.remote.timeout_secs, 60);
        assert_eq!(config.ui.items_per_page, 10);
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "127.0.0.1:8080".parse().unwrap()
        );
    }

    #[test]
    fn test_placeholder_url_is_not_configured() {
        let config = parse_config(
            r#"
[server]
host = "0.0.0.0"
port = 3000

[remote]
script_url = "YOUR_GOOGLE_APPS_SCRIPT_WEB_APP_URL"
"#,
        )
        .unwrap();
        assert!(!config.remote.is_configured());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = parse_config(
            r#"
[server]
host = "0.0.0.0"
port = 3000

[remote]
script_url = ""

[ui]
items_per_page = 0
"#,
        );
        assert!(result.is_err());
    }
}
