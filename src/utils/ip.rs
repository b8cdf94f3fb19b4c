//! IP 地址处理工具
//!
//! 提供请求校验用的 IPv4 / 前缀语法检查。

use std::net::Ipv4Addr;

/// 检查字符串是否为合法的 IPv4 点分十进制形式
///
/// `Ipv4Addr` 的解析规则与数据源加载时一致：四段、每段 0-255、
/// 不允许前导零，保证 HTTP 层与 Loader 的判定不会分叉。
pub fn is_valid_ipv4(s: &str) -> bool {
    s.parse::<Ipv4Addr>().is_ok()
}

/// 检查 suggest 前缀是否满足 `^[0-9.]{1,15}$`
pub fn is_valid_prefix(s: &str) -> bool {
    !s.is_empty() && s.len() <= 15 && s.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}
