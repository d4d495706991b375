//! Runtime configuration, sourced from the environment (prefix `FURNI_`)
//! with workable local-dev defaults.

use figment::{Figment, providers::Env, providers::Serialized};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;
use url::Url;

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().unwrap_or_else(|e| {
        eprintln!("invalid configuration: {e}");
        std::process::exit(1);
    })
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub upload_dir: PathBuf,
    pub public_base_url: Url,
    pub layout_service_url: Url,
    pub admin_username: String,
    pub admin_password: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:furnilayout.sqlite".to_string(),
            bind_addr: "0.0.0.0:8000".to_string(),
            upload_dir: PathBuf::from("static/uploads/news"),
            public_base_url: Url::parse("http://localhost:8000").unwrap(),
            layout_service_url: Url::parse("http://localhost:9000").unwrap(),
            admin_username: "admin".to_string(),
            admin_password: "admin".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("FURNI_"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let cfg = Config::default();
        assert_eq!(cfg.bind_addr, "0.0.0.0:8000");
        assert_eq!(cfg.public_base_url.as_str(), "http://localhost:8000/");
    }
}
