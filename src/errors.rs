use std::fmt;

#[derive(Debug, Clone)]
pub enum IpFinderError {
    Config(String),
    UnsupportedProvider(String),
    FileOperation(String),
    Validation(String),
}

impl IpFinderError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            IpFinderError::Config(_) => "E001",
            IpFinderError::UnsupportedProvider(_) => "E002",
            IpFinderError::FileOperation(_) => "E003",
            IpFinderError::Validation(_) => "E004",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            IpFinderError::Config(_) => "Configuration Error",
            IpFinderError::UnsupportedProvider(_) => "Unsupported Datastore Provider",
            IpFinderError::FileOperation(_) => "File Operation Error",
            IpFinderError::Validation(_) => "Validation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            IpFinderError::Config(msg) => msg,
            IpFinderError::UnsupportedProvider(msg) => msg,
            IpFinderError::FileOperation(msg) => msg,
            IpFinderError::Validation(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 Server 启动失败时的终端诊断）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for IpFinderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for IpFinderError {}

// 便捷的构造函数
impl IpFinderError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        IpFinderError::Config(msg.into())
    }

    pub fn unsupported_provider<T: Into<String>>(msg: T) -> Self {
        IpFinderError::UnsupportedProvider(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        IpFinderError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        IpFinderError::Validation(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for IpFinderError {
    fn from(err: std::io::Error) -> Self {
        IpFinderError::FileOperation(err.to_string())
    }
}

impl From<csv::Error> for IpFinderError {
    fn from(err: csv::Error) -> Self {
        IpFinderError::FileOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IpFinderError>;
