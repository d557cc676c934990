//! # 源文件收集器
//!
//! 遍历配置的源目录，收集指定扩展名的文件列表。
//!
//! ## 功能
//! - 多个源根目录，递归遍历
//! - 按扩展名过滤，支持 glob 排除模式（相对源根目录匹配）
//! - 遍历顺序确定（按文件名排序），保证报告稳定
//! - 遍历逻辑经 `SourceTree` 抽象，测试中可替换为内存实现
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配排除模式

use crate::error::{JavafmtError, Result};

use glob::Pattern;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Java 源文件扩展名
pub const JAVA_EXTENSION: &str = "java";

/// 可遍历的源文件树
pub trait SourceTree {
    /// 递归列出根目录下的所有文件（含指向文件的符号链接），顺序在一次运行内确定
    fn walk(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// 磁盘文件树
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskTree;

impl SourceTree for DiskTree {
    fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(JavafmtError::DirectoryNotFound {
                path: root.display().to_string(),
            });
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| JavafmtError::WalkError {
                path: root.display().to_string(),
                source: e,
            })?;
            // 不跟随链接遍历，但指向普通文件的符号链接按文件收集
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if is_file {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

/// 遍历所有根目录，保留满足谓词的文件
///
/// 谓词参数为 `(根目录, 文件路径)`。同一文件经多个根目录重复出现时只保留首次。
pub fn list_files<T, P>(tree: &T, roots: &[PathBuf], predicate: P) -> Result<Vec<PathBuf>>
where
    T: SourceTree + ?Sized,
    P: Fn(&Path, &Path) -> bool,
{
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for root in roots {
        for path in tree.walk(root)? {
            if predicate(root, &path) && seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

/// 文件收集器
pub struct FileCollector {
    /// 源根目录
    roots: Vec<PathBuf>,
    /// 目标扩展名
    extension: String,
    /// 排除模式
    excludes: Vec<Pattern>,
}

impl FileCollector {
    /// 创建新的文件收集器，默认收集 `.java` 文件
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            extension: JAVA_EXTENSION.to_string(),
            excludes: Vec::new(),
        }
    }

    /// 设置排除模式
    pub fn with_excludes(mut self, patterns: &[String]) -> Result<Self> {
        self.excludes = patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| {
                    JavafmtError::InvalidArgument(format!("Invalid exclude pattern '{}': {}", p, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// 在磁盘上收集
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        self.collect_in(&DiskTree)
    }

    /// 在给定文件树中收集
    pub fn collect_in<T: SourceTree + ?Sized>(&self, tree: &T) -> Result<Vec<PathBuf>> {
        list_files(tree, &self.roots, |root, path| self.matches(root, path))
    }

    /// 检查文件是否应被收集
    fn matches(&self, root: &Path, path: &Path) -> bool {
        let has_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.extension);
        if !has_extension {
            return false;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        !self.excludes.iter().any(|p| p.matches_path(relative))
    }
}
