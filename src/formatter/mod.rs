//! # 格式化后端模块
//!
//! 定义可插拔的格式化后端接口，以及内置的 Java 空白格式化器。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: config, java

pub mod config;
pub mod java;

pub use config::JavaFormatConfig;
pub use java::JavaWhitespaceFormatter;

use crate::error::Result;
use std::path::Path;

/// 格式化后端
///
/// 输入为已解码的源文件内容，返回规范化后的完整内容。
/// 实现必须是幂等的：对输出再次格式化不应产生任何变化。
pub trait Formatter {
    fn format(&self, path: &Path, source: &str) -> Result<String>;
}
