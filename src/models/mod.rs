//! # 数据模型模块
//!
//! 定义格式化设置与单文件编辑结果。
//!
//! ## 依赖关系
//! - 被 `cli/`, `config.rs`, `formatter/`, `batch/`, `commands/` 使用
//! - 子模块: settings, edit

pub mod edit;
pub mod settings;

pub use edit::FileEdit;
pub use settings::{Baseline, FormatSettings, Indentation};
