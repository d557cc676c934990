//! # javafmt - Java 源码格式检查与格式化
//!
//! 遍历模块的 Java 源目录，交给可插拔的格式化后端处理，
//! 然后报告违规（`check`）或就地改写（`format`）。
//!
//! ## 子命令
//! - `check`  - 检查格式，违规时写报告并以非零退出码结束
//! - `format` - 就地改写不符合格式的文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── config.rs  (配置文件)
//!   │     ├── formatter/ (格式化后端与配置转换)
//!   │     ├── batch/     (文件收集与批量执行)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod error;
mod formatter;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;
use std::error::Error;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        let mut msg = format!("{}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            msg.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        utils::output::print_error(&msg);
        std::process::exit(1);
    }
}
