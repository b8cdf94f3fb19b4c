//! CSV 数据源
//!
//! 数据格式：`ip,city,country`，逗号分隔，无表头，UTF-8。
//! 启动时一次性全量加载进内存，此后只读。

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use super::locator::{IpLocator, Location};
use crate::errors::{IpFinderError, Result};
use crate::utils::is_valid_ipv4;

/// suggest 单次返回条数的钳制区间
const SUGGEST_LIMIT_MIN: i64 = 1;
const SUGGEST_LIMIT_MAX: i64 = 50;

/// CSV 后端 Locator
///
/// 两个字段由同一次加载构建，`sorted_ips` 始终等于 `map` 键集合的
/// 字典序升序排列。排序按字符串比较而非按八位组数值比较，
/// 所以 `"10."` 排在 `"2."` 之前，这是对外可见的既定行为。
#[derive(Debug)]
pub struct CsvIpLocator {
    map: HashMap<String, Location>,
    sorted_ips: Vec<String>,
}

impl CsvIpLocator {
    /// 从文件加载并构建索引
    ///
    /// 文件不存在或不可读返回 `FileOperation` 错误；
    /// 个别行格式不对只会被跳过，不会让加载失败。
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            IpFinderError::file_operation(format!(
                "cannot open data file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut map: HashMap<String, Location> = HashMap::new();
        let mut skipped: usize = 0;

        for record in reader.records() {
            let Ok(record) = record else {
                skipped += 1;
                continue;
            };
            if record.len() < 3 {
                skipped += 1;
                continue;
            }
            let ip = record[0].trim();
            let city = record[1].trim();
            let country = record[2].trim();
            if !is_valid_ipv4(ip) {
                skipped += 1;
                continue;
            }
            // 行内顺序是 (ip, city, country)，存储顺序是 (country, city)，
            // 与 API 响应字段顺序一致；同一 IP 重复出现时后者覆盖前者。
            map.insert(
                ip.to_string(),
                Location {
                    country: country.to_string(),
                    city: city.to_string(),
                },
            );
        }

        let mut sorted_ips: Vec<String> = map.keys().cloned().collect();
        sorted_ips.sort_unstable();

        if skipped > 0 {
            debug!("Skipped {} malformed row(s) in {}", skipped, path.display());
        }
        info!(
            "Loaded {} IPv4 entries from {}",
            sorted_ips.len(),
            path.display()
        );

        Ok(Self { map, sorted_ips })
    }

    /// 索引中的条目数
    pub fn len(&self) -> usize {
        self.sorted_ips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted_ips.is_empty()
    }
}

impl IpLocator for CsvIpLocator {
    fn lookup(&self, ip: &str) -> Option<Location> {
        self.map.get(ip).cloned()
    }

    fn suggest(&self, prefix: &str, limit: i64) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let limit = limit.clamp(SUGGEST_LIMIT_MIN, SUGGEST_LIMIT_MAX) as usize;

        // 前缀范围查询：下界是 prefix 本身，上界用 char::MAX 作为后缀哨兵，
        // 它排在任何合法键字符之后，使 [lo, hi) 恰好覆盖所有以 prefix
        // 开头的键。
        let lo = self.sorted_ips.partition_point(|ip| ip.as_str() < prefix);
        let upper = format!("{}{}", prefix, char::MAX);
        let hi = self
            .sorted_ips
            .partition_point(|ip| ip.as_str() <= upper.as_str());

        self.sorted_ips[lo..hi].iter().take(limit).cloned().collect()
    }

    fn name(&self) -> &'static str {
        "csv"
    }
}
