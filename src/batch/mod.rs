//! # 批量处理模块
//!
//! 收集源文件并交给格式化后端。
//!
//! ## 功能
//! - 收集匹配文件列表（可替换的文件树抽象）
//! - 顺序格式化，过滤出有改动的文件
//! - 进度反馈
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::run_formatter;
