//! 环境变量配置
//!
//! 配置完全由环境变量驱动（`.env` 由 main 先行加载）。
//! 必填项缺失直接导致启动失败，不提供数据源相关的默认值。

use std::env;

use url::Url;

use crate::errors::{IpFinderError, Result};

/// 开发模式下自动放行的本地前端地址
const DEV_LOCALHOST_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// 应用配置
#[derive(Clone, Debug)]
pub struct Settings {
    /// 数据源名称，当前仅支持 "csv"
    pub datastore_provider: String,
    /// `ip,city,country` 数据文件路径
    pub data_file_path: String,
    pub server_host: String,
    pub server_port: u16,
    pub log_level: Option<String>,
    pub frontend_base_url: Option<String>,
    pub allowed_origins: Vec<String>,
    pub dev_include_localhost: bool,
}

impl Settings {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        let datastore_provider = require_var("DATASTORE_PROVIDER")?;
        let data_file_path = require_var("DATA_FILE_PATH")?;

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|e| IpFinderError::config(format!("invalid SERVER_PORT: {}", e)))?;

        let log_level = env::var("LOG_LEVEL").ok().filter(|v| !v.is_empty());
        let frontend_base_url = env::var("FRONTEND_BASE_URL").ok().filter(|v| !v.is_empty());

        // 逗号分隔列表，空段丢弃
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let dev_include_localhost = env::var("DEV_INCLUDE_LOCALHOST")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            datastore_provider,
            data_file_path,
            server_host,
            server_port,
            log_level,
            frontend_base_url,
            allowed_origins,
            dev_include_localhost,
        })
    }

    /// 计算 CORS 允许的来源列表
    ///
    /// 显式列表、前端地址推导出的 origin、开发模式 localhost 三部分
    /// 取并集，保持顺序并去重。
    pub fn computed_allowed_origins(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();

        for origin in &self.allowed_origins {
            if !out.contains(origin) {
                out.push(origin.clone());
            }
        }

        if let Some(fe_origin) = self.frontend_base_url.as_deref().and_then(origin_of) {
            if !out.contains(&fe_origin) {
                out.push(fe_origin);
            }
        }

        if self.dev_include_localhost {
            for local in DEV_LOCALHOST_ORIGINS {
                if !out.iter().any(|o| o == local) {
                    out.push(local.to_string());
                }
            }
        }

        out
    }
}

fn require_var(name: &str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| {
            IpFinderError::config(format!(
                "missing required environment variable {}. Check your .env file.",
                name
            ))
        })
}

/// 从完整 URL 提取 `scheme://host[:port]` 形式的 origin
pub fn origin_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    match parsed.port() {
        Some(port) => Some(format!("{}://{}:{}", parsed.scheme(), host, port)),
        None => Some(format!("{}://{}", parsed.scheme(), host)),
    }
}
