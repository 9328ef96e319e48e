use contracts::views::CreateViewsOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub views: CreateViewsOptions,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "INVENTORY_VIEWS_CONFIG";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/app.db"

[views]
drop_existing = true
"#;

fn candidate_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join("config.toml"));
        }
    }

    paths.push(PathBuf::from("config.toml"));
    paths
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. `INVENTORY_VIEWS_CONFIG`, if set (no fallback when it cannot be read)
/// 2. Next to the executable
/// 3. Current directory
/// 4. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    load_config_with(std::env::var_os(CONFIG_ENV).map(PathBuf::from))
}

fn load_config_with(explicit: Option<PathBuf>) -> anyhow::Result<Config> {
    if let Some(config_path) = explicit {
        tracing::info!("Loading config from {}: {}", CONFIG_ENV, config_path.display());
        return load_config_from(&config_path);
    }

    for config_path in candidate_config_paths() {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            return load_config_from(&config_path);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    use anyhow::Context;

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("invalid config in {}", path.display()))
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> PathBuf {
    let db_path = Path::new(&config.database.path);

    if db_path.is_absolute() {
        return db_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(db_path);
        }
    }

    // Fallback: use relative to current directory
    db_path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/app.db");
        assert!(config.views.drop_existing);
        assert!(config.views.only.is_none());
    }

    #[test]
    fn test_views_section_is_optional() {
        let config = parse_config("[database]\npath = \"/var/lib/inflow.db\"\n").unwrap();
        assert_eq!(config.views, CreateViewsOptions::default());
        assert_eq!(get_database_path(&config), PathBuf::from("/var/lib/inflow.db"));
    }

    #[test]
    fn test_views_section_restricts_targets() {
        let config = parse_config(
            r#"
            [database]
            path = "inflow.db"

            [views]
            drop_existing = false
            only = ["reorder_alerts", "dead_stock"]
            "#,
        )
        .unwrap();

        assert!(!config.views.drop_existing);
        assert_eq!(
            config.views.only,
            Some(vec!["reorder_alerts".to_string(), "dead_stock".to_string()])
        );
        assert!(get_database_path(&config).ends_with("inflow.db"));
    }

    #[test]
    fn test_missing_database_section_is_an_error() {
        assert!(parse_config("[views]\ndrop_existing = true\n").is_err());
    }

    #[test]
    fn test_explicit_config_path_must_exist() {
        let missing = std::env::temp_dir().join("inventory-views-missing").join("typo.toml");

        let err = load_config_with(Some(missing)).unwrap_err();
        assert!(
            err.to_string().contains("typo.toml"),
            "unexpected error: {err:#}"
        );
    }

    #[test]
    fn test_explicit_config_path_is_loaded() {
        let dir = std::env::temp_dir().join(format!("inventory-views-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("explicit.toml");
        std::fs::write(&path, "[database]\npath = \"/srv/inflow/explicit.db\"\n").unwrap();

        let config = load_config_with(Some(path)).unwrap();
        assert_eq!(config.database.path, "/srv/inflow/explicit.db");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
