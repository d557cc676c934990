//! # 报告文件
//!
//! 报告文件按需创建（连同父目录）；内容为每个待修改文件一块
//! `<绝对路径>:\n<格式化内容>`，块之间以换行分隔。
//!
//! ## 依赖关系
//! - 被 `commands/check.rs`, `commands/format.rs` 使用
//! - 使用 `models/edit.rs`

use crate::error::{JavafmtError, Result};
use crate::models::FileEdit;

use std::fs::{self, File};
use std::path::Path;

/// 确保报告文件存在，不存在时创建空文件
pub fn ensure_report_file_exists(report: &Path) -> Result<()> {
    if report.exists() {
        return Ok(());
    }

    if let Some(parent) = report.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| JavafmtError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    File::create(report).map_err(|e| JavafmtError::FileWriteError {
        path: report.display().to_string(),
        source: e,
    })?;
    Ok(())
}

/// 生成报告文本
pub fn render_report(edits: &[FileEdit]) -> String {
    edits
        .iter()
        .map(|edit| format!("{}:\n{}", edit.absolute_path().display(), edit.formatted()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 写入报告（覆盖旧内容）
pub fn write_report(report: &Path, edits: &[FileEdit]) -> Result<()> {
    ensure_report_file_exists(report)?;
    fs::write(report, render_report(edits)).map_err(|e| JavafmtError::FileWriteError {
        path: report.display().to_string(),
        source: e,
    })
}

/// 报告位置（绝对路径），用于提示信息
pub fn report_location(report: &Path) -> String {
    std::path::absolute(report)
        .unwrap_or_else(|_| report.to_path_buf())
        .display()
        .to_string()
}
