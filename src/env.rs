//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量读取。命令行参数优先于环境变量，
//! 环境变量优先于内置默认值。

use std::env;
use std::fmt;

use crate::core::{
    AnalysisOptions, SegmenterKind, DEFAULT_MIN_FREQUENCY, DEFAULT_TIMEOUT, DEFAULT_TOP_N,
    MAX_FREQUENCY_LIMIT, MIN_FREQUENCY_LIMIT,
};

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "WEBFREQ_LOG_LEVEL";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("warn".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn parse(value: &str) -> EnvResult<String> {
            match value.trim().to_lowercase().as_str() {
                level @ ("trace" | "debug" | "info" | "warn" | "error") => Ok(level.to_string()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }

    /// 禁用颜色输出
    pub struct NoColor;
    impl EnvVar<bool> for NoColor {
        const NAME: &'static str = "NO_COLOR";
        const DEFAULT: Option<bool> = Some(false);
        const DESCRIPTION: &'static str = "Disable colored output when set to any value";

        fn parse(value: &str) -> EnvResult<bool> {
            // NO_COLOR 遵循标准：任何值都表示禁用颜色
            Ok(!value.is_empty())
        }
    }
}

/// 抓取相关环境变量
pub mod fetch {
    use super::*;

    /// 请求超时
    pub struct Timeout;
    impl EnvVar<u64> for Timeout {
        const NAME: &'static str = "WEBFREQ_TIMEOUT";
        const DEFAULT: Option<u64> = Some(DEFAULT_TIMEOUT);
        const DESCRIPTION: &'static str = "HTTP request timeout in seconds";

        fn parse(value: &str) -> EnvResult<u64> {
            parse_ranged_u64(value, Self::NAME, 1, 300)
        }
    }

    /// User-Agent 请求头
    pub struct UserAgent;
    impl EnvVar<String> for UserAgent {
        const NAME: &'static str = "WEBFREQ_USER_AGENT";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "User-Agent header sent with the request";

        fn parse(value: &str) -> EnvResult<String> {
            let agent = value.trim();
            if agent.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "User agent cannot be empty".to_string(),
                });
            }
            Ok(agent.to_string())
        }
    }
}

/// 统计相关环境变量
pub mod analysis {
    use super::*;

    /// 排名视图长度
    pub struct TopN;
    impl EnvVar<usize> for TopN {
        const NAME: &'static str = "WEBFREQ_TOP_N";
        const DEFAULT: Option<usize> = Some(DEFAULT_TOP_N);
        const DESCRIPTION: &'static str = "Number of words in the ranked view";

        fn parse(value: &str) -> EnvResult<usize> {
            parse_ranged_u64(value, Self::NAME, 1, 1000).map(|n| n as usize)
        }
    }

    /// 最小词频
    pub struct MinFrequency;
    impl EnvVar<u64> for MinFrequency {
        const NAME: &'static str = "WEBFREQ_MIN_FREQUENCY";
        const DEFAULT: Option<u64> = Some(DEFAULT_MIN_FREQUENCY);
        const DESCRIPTION: &'static str = "Minimum count for the filtered view (1-20)";

        fn parse(value: &str) -> EnvResult<u64> {
            parse_ranged_u64(value, Self::NAME, MIN_FREQUENCY_LIMIT, MAX_FREQUENCY_LIMIT)
        }
    }

    /// 分词器
    pub struct Segmenter;
    impl EnvVar<SegmenterKind> for Segmenter {
        const NAME: &'static str = "WEBFREQ_SEGMENTER";
        const DEFAULT: Option<SegmenterKind> = Some(SegmenterKind::Jieba);
        const DESCRIPTION: &'static str = "Word segmenter: jieba, unicode";

        fn parse(value: &str) -> EnvResult<SegmenterKind> {
            value.parse().map_err(|e: crate::error::WebfreqError| EnvError {
                variable: Self::NAME.to_string(),
                message: e.to_string(),
            })
        }
    }

    /// 是否启用 HMM 新词发现
    pub struct Hmm;
    impl EnvVar<bool> for Hmm {
        const NAME: &'static str = "WEBFREQ_HMM";
        const DEFAULT: Option<bool> = Some(true);
        const DESCRIPTION: &'static str = "Let the jieba segmenter guess words missing from its dictionary";

        fn parse(value: &str) -> EnvResult<bool> {
            parse_bool(value, Self::NAME)
        }
    }
}

/// 辅助函数
fn parse_bool(value: &str, var_name: &str) -> EnvResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "enabled" => Ok(true),
        "false" | "0" | "no" | "off" | "disabled" => Ok(false),
        _ => Err(EnvError {
            variable: var_name.to_string(),
            message: format!(
                "Invalid boolean value '{}'. Use: true/false, 1/0, yes/no, on/off, enabled/disabled",
                value
            ),
        }),
    }
}

fn parse_ranged_u64(value: &str, var_name: &str, min: u64, max: u64) -> EnvResult<u64> {
    let num: u64 = value.trim().parse().map_err(|_| EnvError {
        variable: var_name.to_string(),
        message: "Must be a valid positive number".to_string(),
    })?;

    if num < min {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} is below minimum {}", num, min),
        });
    }

    if num > max {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} exceeds maximum {}", num, max),
        });
    }

    Ok(num)
}

/// 环境变量配置汇总
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub log_level: String,
    pub timeout: u64,
    pub user_agent: Option<String>,
    pub top_n: usize,
    pub min_frequency: u64,
    pub segmenter: SegmenterKind,
    pub hmm: bool,
}

impl EnvConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> EnvResult<Self> {
        Ok(Self {
            log_level: core::LogLevel::get()?,
            timeout: fetch::Timeout::get()?,
            user_agent: match env::var(fetch::UserAgent::NAME) {
                Ok(value) => Some(fetch::UserAgent::parse(&value)?),
                Err(_) => None,
            },
            top_n: analysis::TopN::get()?,
            min_frequency: analysis::MinFrequency::get()?,
            segmenter: analysis::Segmenter::get()?,
            hmm: analysis::Hmm::get()?,
        })
    }

    /// 转换为分析选项（命令行参数随后覆盖）
    pub fn to_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            top_n: self.top_n,
            min_frequency: self.min_frequency,
            timeout: self.timeout,
            user_agent: self.user_agent.clone(),
            segmenter: self.segmenter,
            hmm: self.hmm,
            ..Default::default()
        }
    }
}

/// 环境变量文档生成器
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables Documentation\n\n");

    docs.push_str("## Core Configuration\n\n");
    docs.push_str(&format!(
        "- `{}`: {} (default: \"warn\")\n",
        core::LogLevel::NAME,
        core::LogLevel::DESCRIPTION
    ));
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        core::NoColor::NAME,
        core::NoColor::DESCRIPTION,
        core::NoColor::DEFAULT
    ));

    docs.push_str("\n## Fetch Configuration\n\n");
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        fetch::Timeout::NAME,
        fetch::Timeout::DESCRIPTION,
        fetch::Timeout::DEFAULT
    ));
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        fetch::UserAgent::NAME,
        fetch::UserAgent::DESCRIPTION,
        crate::network::DEFAULT_USER_AGENT
    ));

    docs.push_str("\n## Analysis Configuration\n\n");
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        analysis::TopN::NAME,
        analysis::TopN::DESCRIPTION,
        analysis::TopN::DEFAULT
    ));
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        analysis::MinFrequency::NAME,
        analysis::MinFrequency::DESCRIPTION,
        analysis::MinFrequency::DEFAULT
    ));
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        analysis::Segmenter::NAME,
        analysis::Segmenter::DESCRIPTION,
        analysis::Segmenter::DEFAULT.map(|s| s.as_str())
    ));
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        analysis::Hmm::NAME,
        analysis::Hmm::DESCRIPTION,
        analysis::Hmm::DEFAULT
    ));

    docs
}
