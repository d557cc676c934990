//! # 单文件编辑结果
//!
//! 后端处理一个文件后得到的原始内容与格式化内容。
//!
//! ## 依赖关系
//! - 由 `batch/runner.rs` 产生
//! - 被 `commands/check.rs` 写入报告，被 `commands/format.rs` 写回磁盘
//! - 使用 `utils/charset.rs` 重新编码

use crate::error::{JavafmtError, Result};
use crate::utils::charset;

use encoding_rs::Encoding;
use std::fs;
use std::path::{Path, PathBuf};

/// 单文件编辑
#[derive(Debug, Clone)]
pub struct FileEdit {
    /// 源文件路径
    path: PathBuf,
    /// 磁盘上的当前内容
    original: String,
    /// 后端给出的规范内容
    formatted: String,
    /// 解码时使用的编码，写回时沿用
    encoding: &'static Encoding,
}

impl FileEdit {
    pub fn new(
        path: PathBuf,
        original: String,
        formatted: String,
        encoding: &'static Encoding,
    ) -> Self {
        FileEdit {
            path,
            original,
            formatted,
            encoding,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// 格式化内容是否与当前内容不同
    pub fn has_edits(&self) -> bool {
        self.original != self.formatted
    }

    /// 绝对路径，用于报告
    pub fn absolute_path(&self) -> PathBuf {
        std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    /// 用格式化内容覆盖源文件
    pub fn save(&self) -> Result<()> {
        let bytes = charset::encode(&self.formatted, self.encoding, &self.path)?;
        fs::write(&self.path, bytes).map_err(|e| JavafmtError::FileWriteError {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}
