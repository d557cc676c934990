//! # 格式化设置数据模型
//!
//! 用户可见的设置项：缩进风格、语言基线、字符编码。
//! 缺省值在构造时一次性解析：SPACES / J8 / UTF-8。
//!
//! ## 依赖关系
//! - 被 `cli/task.rs` 用作参数枚举
//! - 被 `config.rs` 用于校验配置文件中的字符串
//! - 被 `formatter/config.rs` 转换为后端配置

use crate::error::{JavafmtError, Result};

use clap::ValueEnum;
use std::str::FromStr;

/// 默认字符编码
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// 缩进风格
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum Indentation {
    /// Indent with tab characters
    Tabs,
    /// Indent with spaces
    #[default]
    Spaces,
}

impl std::fmt::Display for Indentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Indentation::Tabs => write!(f, "tabs"),
            Indentation::Spaces => write!(f, "spaces"),
        }
    }
}

impl FromStr for Indentation {
    type Err = JavafmtError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tabs" | "tab" => Ok(Indentation::Tabs),
            "spaces" | "space" => Ok(Indentation::Spaces),
            other => Err(JavafmtError::InvalidConfig(format!(
                "unknown indentation '{}', expected 'tabs' or 'spaces'",
                other
            ))),
        }
    }
}

/// Java 语言基线
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Baseline {
    /// Java 8 conventions
    #[default]
    J8,
    /// Java 17 conventions (text blocks)
    J17,
}

impl std::fmt::Display for Baseline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Baseline::J8 => write!(f, "j8"),
            Baseline::J17 => write!(f, "j17"),
        }
    }
}

impl FromStr for Baseline {
    type Err = JavafmtError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "j8" | "8" => Ok(Baseline::J8),
            "j17" | "17" => Ok(Baseline::J17),
            other => Err(JavafmtError::InvalidConfig(format!(
                "unknown baseline '{}', expected 'j8' or 'j17'",
                other
            ))),
        }
    }
}

/// 一次调用的格式化设置（不可变）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSettings {
    pub indentation: Indentation,
    pub baseline: Baseline,
    pub encoding: String,
}

impl Default for FormatSettings {
    fn default() -> Self {
        FormatSettings {
            indentation: Indentation::default(),
            baseline: Baseline::default(),
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl FormatSettings {
    /// 由可选值构造，缺失项取默认值
    pub fn new(
        indentation: Option<Indentation>,
        baseline: Option<Baseline>,
        encoding: Option<String>,
    ) -> Self {
        FormatSettings {
            indentation: indentation.unwrap_or_default(),
            baseline: baseline.unwrap_or_default(),
            encoding: encoding.unwrap_or_else(|| DEFAULT_ENCODING.to_string()),
        }
    }
}
