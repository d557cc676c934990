//! # format 命令实现
//!
//! 将所有改动写回源文件。报告文件作为副作用保证存在（可能为空）。
//! 逐文件写回，没有事务：中途失败时部分文件可能已被改写。
//!
//! ## 依赖关系
//! - 使用 `cli/task.rs` 定义的参数
//! - 使用 `commands/pipeline.rs`, `commands/report.rs`
//! - 使用 `utils/output.rs`

use super::{pipeline, report};
use crate::cli::task::TaskArgs;
use crate::error::Result;
use crate::models::FileEdit;
use crate::utils::output;

/// 执行 format 命令
pub fn execute(args: TaskArgs) -> Result<()> {
    output::print_header("Formatting Java Sources");

    let edits = pipeline::compute_edits(&args)?;
    report::ensure_report_file_exists(&args.report)?;

    let written = apply_edits(&edits)?;
    if written > 0 {
        output::print_info(&format!("Rewrote {} file(s)", written));
    }
    output::print_success("Java code formatted successfully.");

    Ok(())
}

/// 依次写回编辑，遇到第一个写入错误即中止，已写入的文件不回滚
fn apply_edits(edits: &[FileEdit]) -> Result<usize> {
    for edit in edits {
        edit.save()?;
    }
    Ok(edits.len())
}
