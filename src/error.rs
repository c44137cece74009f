//! 统一错误处理
//!
//! 网络层错误集中在 [`FetchError`]，其余流水线错误汇总到 [`WebfreqError`]。
//! 解码错误在本地以替换字符恢复，空内容只作为提示，二者都不会出现在这里。

use thiserror::Error;

/// 抓取阶段的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// URL 无法解析
    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    /// 只支持 http 与 https
    #[error("unsupported URL scheme \"{0}\" (expected http or https)")]
    UnsupportedScheme(String),

    /// DNS、连接、TLS 等传输层失败
    #[error("transport error: {0}")]
    Transport(String),

    /// 等待超时
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// 非 2xx 响应
    #[error("server responded with status {0}")]
    Status(u16),
}

impl FetchError {
    /// 超时与传输错误值得让用户重试
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Timeout(_))
            || matches!(self, FetchError::Status(code) if *code >= 500)
    }
}

/// 流水线错误类型
#[derive(Error, Debug)]
pub enum WebfreqError {
    #[error("failed to fetch document: {0}")]
    Fetch(#[from] FetchError),

    /// 需要至少一个条目，但词频表为空
    #[error("not enough data: {0}")]
    InsufficientData(String),

    /// 配置项不合法
    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Io,
}

impl WebfreqError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WebfreqError::Fetch(_) => ErrorCategory::Network,
            WebfreqError::InsufficientData(_) => ErrorCategory::Data,
            WebfreqError::InvalidOption(_) => ErrorCategory::Configuration,
            WebfreqError::Io(_) => ErrorCategory::Io,
        }
    }

    /// 所有错误都只影响当前请求；这里区分的是“换个输入再试”是否有意义
    pub fn is_recoverable(&self) -> bool {
        match self {
            WebfreqError::Fetch(_) | WebfreqError::InsufficientData(_) => true,
            WebfreqError::InvalidOption(_) | WebfreqError::Io(_) => false,
        }
    }

    pub fn insufficient_data<T: std::fmt::Display>(msg: T) -> Self {
        WebfreqError::InsufficientData(msg.to_string())
    }

    pub fn invalid_option<T: std::fmt::Display>(msg: T) -> Self {
        WebfreqError::InvalidOption(msg.to_string())
    }
}

/// 错误结果类型别名
pub type WebfreqResult<T> = Result<T, WebfreqError>;
