use anyhow::Context;
use std::{env::var, time::Duration};

const DEFAULT_API_ENDPOINT: &str = "https://api.leapcell.io";
const DEFAULT_RESOURCE: &str = "issac/flask-blog";
const DEFAULT_TABLE_ID: &str = "tbl1738878922167070720";
const DEFAULT_AUTHOR: &str = "Leapcell User";
const DEFAULT_AVATAR: &str = "https://leapcell.io/logo.png";

/// 啟動時從環境變數讀取一次，之後唯讀
#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub api_endpoint: String,
    pub resource: String,
    pub table_id: String,
    pub author: String,
    pub avatar: String,
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| var(key).ok())
    }

    /// 以任意 lookup 建立設定，空字串視為未設定
    pub fn from_vars<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port = get("APP_PORT", "8080")
            .parse::<u16>()
            .context("APP_PORT must be a valid port number")?;
        let timeout_secs = get("REQUEST_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            api_key: get("LEAPCELL_API_KEY", ""),
            api_endpoint: get("LEAPCELL_API_ENDPOINT", DEFAULT_API_ENDPOINT)
                .trim_end_matches('/')
                .to_string(),
            resource: get("RESOURCE", DEFAULT_RESOURCE),
            table_id: get("TABLE_ID", DEFAULT_TABLE_ID),
            author: get("AUTHOR", DEFAULT_AUTHOR),
            avatar: get("AVATAR", DEFAULT_AVATAR),
            host: get("APP_HOST", "0.0.0.0"),
            port,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
