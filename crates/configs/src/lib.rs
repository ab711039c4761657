use std::path::Path;

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "ServiceConfig::todo_default")]
    pub todo: ServiceConfig,
    #[serde(default = "ServiceConfig::product_default")]
    pub product: ServiceConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            todo: ServiceConfig::todo_default(),
            product: ServiceConfig::product_default(),
            database: DatabaseConfig::default(),
            policy: PolicyConfig::default(),
        }
    }
}

/// Bind address and runtime sizing for one HTTP service.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

const DEFAULT_WORKER_THREADS: usize = 4;

impl ServiceConfig {
    pub fn todo_default() -> Self {
        Self { host: "localhost".into(), port: 9090, worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }

    pub fn product_default() -> Self {
        Self { host: "0.0.0.0".into(), port: 9999, worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn normalize(&mut self, fallback_host: &str) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = fallback_host.to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
        }
        Ok(())
    }
}

/// What to do with a request body that is not valid JSON for the target type.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BodyPolicy {
    /// Swallow the decode error; each handler falls back to its historical behavior.
    #[default]
    Lenient,
    /// Reject with 400 and the decode error.
    Strict,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    #[serde(default)]
    pub malformed_body: BodyPolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 5 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 5 }

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`), apply environment overrides and normalize.
    /// A missing file is not an error: built-in defaults are used instead.
    pub fn load_and_validate() -> Result<Self> {
        let path = config_path();
        let mut cfg = if Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            AppConfig::default()
        };
        cfg.apply_overrides(|key| std::env::var(key).ok());
        cfg.normalize()?;
        Ok(cfg)
    }

    /// Override bind settings and database url from a key lookup (normally the process env).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(h) = lookup("TODO_HOST") { self.todo.host = h; }
        if let Some(p) = lookup("TODO_PORT").and_then(|p| p.parse().ok()) { self.todo.port = p; }
        if let Some(h) = lookup("PRODUCT_HOST") { self.product.host = h; }
        if let Some(p) = lookup("PRODUCT_PORT").and_then(|p| p.parse().ok()) { self.product.port = p; }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|w| w.parse::<usize>().ok()) {
            self.todo.worker_threads = Some(w);
            self.product.worker_threads = Some(w);
        }
        // env only fills a url the file left empty
        if self.database.url.trim().is_empty() {
            if let Some(url) = lookup("DATABASE_URL") {
                self.database.url = url;
            }
        }
    }

    pub fn normalize(&mut self) -> Result<()> {
        self.todo.normalize("localhost")?;
        self.product.normalize("0.0.0.0")?;
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}
