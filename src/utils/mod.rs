//! # 工具函数模块
//!
//! 提供美化输出、进度条、字符集处理等工具。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/`, `models/` 使用
//! - 子模块: charset, output, progress

pub mod charset;
pub mod output;
pub mod progress;
