//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `config.rs`, `formatter/`, `batch/`, `models/`, `utils/`
//! - 子模块: check, format, pipeline, report

pub mod check;
pub mod format;
pub mod pipeline;
pub mod report;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Check(args) => check::execute(args),
        Commands::Format(args) => format::execute(args),
    }
}
