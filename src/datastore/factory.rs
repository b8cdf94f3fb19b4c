//! Locator 工厂
//!
//! 根据配置的 provider 名称选择具体实现。名称不认识时直接在
//! 启动阶段报错，不做静默回退。

use std::sync::Arc;

use tracing::info;

use super::csv_provider::CsvIpLocator;
use super::locator::IpLocator;
use crate::errors::{IpFinderError, Result};

/// 根据 provider 名称构建 Locator
///
/// 目前唯一支持的名称是 `csv`（大小写不敏感）。
pub fn build_locator(provider: &str, data_path: &str) -> Result<Arc<dyn IpLocator>> {
    match provider.trim().to_lowercase().as_str() {
        "csv" => {
            let locator = CsvIpLocator::from_path(data_path)?;
            info!("Using datastore provider: {}", locator.name());
            Ok(Arc::new(locator))
        }
        other => Err(IpFinderError::unsupported_provider(format!(
            "unsupported DATASTORE_PROVIDER '{}', expected 'csv'",
            other
        ))),
    }
}
