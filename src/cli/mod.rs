//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `check`: 检查格式，存在违规时写报告并失败
//! - `format`: 就地重写不符合格式的文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: task

pub mod task;

use clap::{Parser, Subcommand};

/// javafmt - Java 源码格式检查与格式化
#[derive(Parser)]
#[command(name = "javafmt")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Check and format the Java sources of a module", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Report Java files that are not formatted and fail if any are found
    Check(task::TaskArgs),

    /// Rewrite Java files in place so that they are formatted
    Format(task::TaskArgs),
}
