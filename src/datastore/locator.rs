//! Locator 抽象层
//!
//! 统一的 IP 定位查询接口。服务层只依赖本 trait，
//! 具体数据源由 factory 根据配置选择。

/// 地理位置信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// ISO 3166-1 alpha-2 国家代码 (e.g., "CN", "US")
    pub country: String,
    /// 城市名称
    pub city: String,
}

/// IP 定位查询 trait
///
/// 实现必须是纯读操作：构建完成后不再变更内部状态，
/// 可以被任意数量的并发请求共享（`Arc<dyn IpLocator>`）。
pub trait IpLocator: Send + Sync + std::fmt::Debug {
    /// 精确查询一个 IPv4 字符串，未命中返回 `None`
    ///
    /// 调用方负责先做 IPv4 语法校验，这里不重复校验。
    fn lookup(&self, ip: &str) -> Option<Location>;

    /// 返回至多 `limit` 个以 `prefix` 开头的 IPv4 字符串，字典序升序
    ///
    /// `limit` 会被钳制到 `[1, 50]`；空前缀返回空列表。
    fn suggest(&self, prefix: &str, limit: i64) -> Vec<String>;

    /// 获取 provider 名称（用于日志）
    fn name(&self) -> &'static str;
}
