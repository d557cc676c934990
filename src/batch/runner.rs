//! # 批量执行器
//!
//! 依次读取、解码并格式化收集到的文件，只保留有改动的结果。
//!
//! ## 功能
//! - 单一显式字符集严格解码
//! - 顺序执行，任一文件出错即中止
//! - 进度条显示
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `formatter/` 后端，`utils/charset.rs`, `utils/progress.rs`

use crate::error::{JavafmtError, Result};
use crate::formatter::Formatter;
use crate::models::FileEdit;
use crate::utils::{charset, progress};

use encoding_rs::Encoding;
use std::fs;
use std::path::{Path, PathBuf};

/// 批量执行器
pub struct BatchRunner<'a, F: Formatter + ?Sized> {
    /// 格式化后端
    formatter: &'a F,
    /// 源文件编码
    encoding: &'static Encoding,
}

impl<'a, F: Formatter + ?Sized> BatchRunner<'a, F> {
    /// 创建新的批量执行器
    pub fn new(formatter: &'a F, encoding: &'static Encoding) -> Self {
        Self { formatter, encoding }
    }

    /// 格式化文件列表，返回有改动的编辑（保持输入顺序）
    pub fn run(&self, files: &[PathBuf]) -> Result<Vec<FileEdit>> {
        let pb = progress::create_progress_bar(files.len() as u64, "Formatting");

        let mut edits = Vec::new();
        for file in files {
            let edit = self.process(file);
            pb.inc(1);
            let edit = match edit {
                Ok(edit) => edit,
                Err(e) => {
                    pb.abandon();
                    return Err(e);
                }
            };
            if edit.has_edits() {
                edits.push(edit);
            }
        }

        pb.finish_and_clear();
        Ok(edits)
    }

    /// 处理单个文件
    fn process(&self, path: &Path) -> Result<FileEdit> {
        let bytes = fs::read(path).map_err(|e| JavafmtError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        let original = charset::decode(&bytes, self.encoding, path)?;
        let formatted = self.formatter.format(path, &original)?;
        Ok(FileEdit::new(
            path.to_path_buf(),
            original,
            formatted,
            self.encoding,
        ))
    }
}

/// 便捷入口：用给定后端与编码格式化文件列表
pub fn run_formatter<F: Formatter + ?Sized>(
    files: &[PathBuf],
    formatter: &F,
    encoding: &'static Encoding,
) -> Result<Vec<FileEdit>> {
    BatchRunner::new(formatter, encoding).run(files)
}
