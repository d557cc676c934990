//! # 配置文件加载
//!
//! 读取可选的 `javafmt.toml`。文件中的值是未经校验的外部输入，
//! 在合并为 `FormatSettings` 时校验为封闭枚举。
//!
//! 优先级：命令行参数 > 配置文件 > 默认值。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/settings.rs`
//! - 使用 `serde` + `toml` 解析

use crate::error::{JavafmtError, Result};
use crate::models::{Baseline, FormatSettings, Indentation};

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 自动发现的配置文件名
pub const CONFIG_FILE_NAME: &str = "javafmt.toml";

/// 配置文件内容
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub indentation: Option<String>,
    pub baseline: Option<String>,
    pub encoding: Option<String>,
    pub exclude: Vec<String>,
}

impl ConfigFile {
    /// 从指定路径加载
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| JavafmtError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content, path)
    }

    /// 解析 TOML 文本
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| JavafmtError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// 显式路径优先；否则在 `dir` 中查找 `javafmt.toml`，不存在时返回空配置
    pub fn discover(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// 与命令行参数合并，校验字符串取值
    pub fn merge(
        &self,
        indentation: Option<Indentation>,
        baseline: Option<Baseline>,
        encoding: Option<String>,
    ) -> Result<FormatSettings> {
        let indentation = match indentation {
            Some(value) => Some(value),
            None => self.indentation.as_deref().map(str::parse::<Indentation>).transpose()?,
        };
        let baseline = match baseline {
            Some(value) => Some(value),
            None => self.baseline.as_deref().map(str::parse::<Baseline>).transpose()?,
        };
        let encoding = encoding.or_else(|| self.encoding.clone());

        if let Some(label) = &encoding {
            if label.trim().is_empty() {
                return Err(JavafmtError::InvalidConfig(
                    "encoding must not be empty".to_string(),
                ));
            }
        }

        Ok(FormatSettings::new(indentation, baseline, encoding))
    }
}
