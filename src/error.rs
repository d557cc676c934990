//! # 统一错误处理模块
//!
//! 定义 javafmt 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// javafmt 统一错误类型
#[derive(Error, Debug)]
pub enum JavafmtError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to walk source directory: {path}")]
    WalkError {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 字符集错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to decode {path} as {encoding}")]
    DecodeError { path: String, encoding: String },

    #[error("Cannot encode formatted content of {path} as {encoding}")]
    EncodeError { path: String, encoding: String },

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse config file: {path}\nReason: {reason}")]
    ConfigParse { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 格式检查
    // ─────────────────────────────────────────────────────────────
    #[error("Java code is not formatted correctly. See report at {report}")]
    FormatViolation { report: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, JavafmtError>;
