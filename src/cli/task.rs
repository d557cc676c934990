//! # check / format 共用的 CLI 参数
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/check.rs`, `commands/format.rs`

use crate::models::{Baseline, Indentation};

use clap::Args;
use std::path::PathBuf;

/// 默认报告路径
pub const DEFAULT_REPORT: &str = "build/reports/javafmt/report.txt";

/// check / format 子命令参数
#[derive(Args, Debug, Clone)]
pub struct TaskArgs {
    /// Source root directories (default: src/main/java and src/test/java when present)
    pub sources: Vec<PathBuf>,

    /// Java language baseline [default: j8]
    #[arg(long, value_enum)]
    pub baseline: Option<Baseline>,

    /// Indentation style [default: spaces]
    #[arg(long, value_enum)]
    pub indentation: Option<Indentation>,

    /// Character encoding of the source files [default: UTF-8]
    #[arg(long)]
    pub encoding: Option<String>,

    /// Report file listing files with pending edits
    #[arg(long, default_value = DEFAULT_REPORT)]
    pub report: PathBuf,

    /// Glob pattern (relative to a source root) of files to skip; repeatable
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Config file (default: javafmt.toml in the project directory when present)
    #[arg(long, env = "JAVAFMT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project directory used for config discovery and default source roots
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,
}

#[cfg(test)]
impl TaskArgs {
    /// 测试用：指定项目目录、源目录与报告路径
    pub fn new(project_dir: &std::path::Path, sources: Vec<PathBuf>, report: PathBuf) -> Self {
        Self {
            sources,
            baseline: None,
            indentation: None,
            encoding: None,
            report,
            exclude: Vec::new(),
            config: None,
            project_dir: project_dir.to_path_buf(),
        }
    }
}
