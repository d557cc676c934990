//! # 美化输出工具
//!
//! 提供统一的终端输出样式：`[OK]` / `[ERR]` / `[WARN]` / `[*]` 前缀通知与标题栏。
//! 错误写到标准错误，其余写到标准输出。
//!
//! ## 依赖关系
//! - 被 `main.rs` 与 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Warning,
    Info,
}

impl Level {
    fn tag(self) -> ColoredString {
        match self {
            Level::Success => "[OK]".green().bold(),
            Level::Error => "[ERR]".red().bold(),
            Level::Warning => "[WARN]".yellow().bold(),
            Level::Info => "[*]".blue().bold(),
        }
    }
}

/// 生成一条通知；多行消息的后续行与正文对齐
pub fn notice(level: Level, msg: &str) -> String {
    let tag = level.tag();
    let indent = " ".repeat(tag.chars().count() + 1);
    let mut lines = msg.lines();
    let mut out = format!("{} {}", tag, lines.next().unwrap_or_default());
    for line in lines {
        out.push('\n');
        out.push_str(&indent);
        out.push_str(line.trim_start());
    }
    out
}

fn emit(level: Level, msg: &str) {
    match level {
        Level::Error => eprintln!("{}", notice(level, msg)),
        _ => println!("{}", notice(level, msg)),
    }
}

/// 打印成功消息
pub fn print_success(msg: &str) {
    emit(Level::Success, msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    emit(Level::Error, msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    emit(Level::Warning, msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    emit(Level::Info, msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}
