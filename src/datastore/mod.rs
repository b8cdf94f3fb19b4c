//! 数据源模块
//!
//! - `locator`: 服务层依赖的查询抽象
//! - `csv_provider`: CSV 文件后端（当前唯一实现）
//! - `factory`: 按配置名称选择后端

mod csv_provider;
mod factory;
mod locator;

pub use csv_provider::CsvIpLocator;
pub use factory::build_locator;
pub use locator::{IpLocator, Location};
