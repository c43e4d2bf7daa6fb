//! # Employee Service 設定
//!
//! 環境変数から Employee Service サーバーの設定を読み込む。

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// ポート番号として解釈できない値
    #[error("EMPLOYEE_PORT は有効なポート番号である必要があります: {0}")]
    InvalidPort(String),

    /// 空の DATABASE_URL
    #[error("DATABASE_URL が空です（未使用の場合は変数自体を削除してください）")]
    EmptyDatabaseUrl,
}

/// Employee Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeServiceConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// データベース接続 URL（未設定ならインメモリストアを使用）
    pub database_url: Option<String>,
}

impl EmployeeServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の変数ソースから設定を読み込む
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("EMPLOYEE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("EMPLOYEE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let database_url = match lookup("DATABASE_URL") {
            Some(url) if url.trim().is_empty() => return Err(ConfigError::EmptyDatabaseUrl),
            other => other,
        };

        Ok(Self {
            host,
            port,
            database_url,
        })
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
