use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8081";

/// Persistent CLI state (`env.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub server_url: Option<String>,
    pub token: Option<String>,
    pub username: Option<String>,
    pub logged_in_at: Option<DateTime<Utc>>,
}

impl EnvironmentConfig {
    pub fn login(&mut self, username: String, token: String) {
        self.username = Some(username);
        self.token = Some(token);
        self.logged_in_at = Some(Utc::now());
    }

    pub fn logout(&mut self) {
        self.username = None;
        self.token = None;
        self.logged_in_at = None;
    }
}

pub fn get_config_dir() -> anyhow::Result<PathBuf> {
    let config_dir = if let Ok(custom_dir) = std::env::var("ADDRESSBOOK_CLI_CONFIG_DIR") {
        PathBuf::from(custom_dir)
    } else {
        let home = std::env::var("HOME").map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
        PathBuf::from(home).join(".config").join("addressbook").join("cli")
    };

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

pub fn load_environment_config() -> anyhow::Result<EnvironmentConfig> {
    let env_file = get_config_dir()?.join("env.json");

    if !env_file.exists() {
        return Ok(EnvironmentConfig::default());
    }

    let content = fs::read_to_string(env_file)?;
    let config: EnvironmentConfig = serde_json::from_str(&content)?;
    Ok(config)
}

pub fn save_environment_config(config: &EnvironmentConfig) -> anyhow::Result<()> {
    let env_file = get_config_dir()?.join("env.json");

    let content = serde_json::to_string_pretty(config)?;
    fs::write(env_file, content)?;
    Ok(())
}

/// `--server` beats the saved URL, which beats the default
pub fn resolve_server_url(server_override: Option<&str>, env: &EnvironmentConfig) -> String {
    server_override
        .map(str::to_string)
        .or_else(|| env.server_url.clone())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
}
