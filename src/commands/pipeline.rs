//! # check / format 共用流程
//!
//! 设置合并 → 配置转换 → 收集文件 → 调用后端 → 过滤出有改动的文件。
//!
//! ## 依赖关系
//! - 被 `commands/check.rs`, `commands/format.rs` 调用
//! - 使用 `config.rs`, `formatter/`, `batch/`, `utils/`

use crate::batch::{run_formatter, FileCollector};
use crate::cli::task::TaskArgs;
use crate::config::ConfigFile;
use crate::error::{JavafmtError, Result};
use crate::formatter::{JavaFormatConfig, JavaWhitespaceFormatter};
use crate::models::FileEdit;
use crate::utils::{charset, output};

use std::path::{Path, PathBuf};

/// 未指定源目录时尝试的默认目录
pub const DEFAULT_SOURCE_DIRS: &[&str] = &["src/main/java", "src/test/java"];

/// 计算所有待应用的编辑
pub fn compute_edits(args: &TaskArgs) -> Result<Vec<FileEdit>> {
    let workdir = args.project_dir.as_path();
    let config_file = ConfigFile::discover(workdir, args.config.as_deref())?;
    let settings = config_file.merge(args.indentation, args.baseline, args.encoding.clone())?;

    let encoding = charset::resolve_charset(&settings.encoding)?;
    let formatter = JavaWhitespaceFormatter::new(JavaFormatConfig::from_settings(&settings));

    let mut excludes = config_file.exclude.clone();
    excludes.extend(args.exclude.iter().cloned());

    let roots = resolve_sources(&args.sources, workdir)?;
    let files = FileCollector::new(roots.clone())
        .with_excludes(&excludes)?
        .collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No Java files found under {}",
            display_roots(&roots)
        ));
        return Ok(Vec::new());
    }

    output::print_info(&format!(
        "Found {} Java file(s) (indentation: {}, baseline: {}, encoding: {})",
        files.len(),
        settings.indentation,
        settings.baseline,
        encoding.name()
    ));

    run_formatter(&files, &formatter, encoding)
}

/// 显式源目录原样使用；否则取项目目录下存在的默认目录
fn resolve_sources(sources: &[PathBuf], workdir: &Path) -> Result<Vec<PathBuf>> {
    if !sources.is_empty() {
        return Ok(sources.to_vec());
    }

    let defaults: Vec<PathBuf> = DEFAULT_SOURCE_DIRS
        .iter()
        .map(|dir| workdir.join(dir))
        .filter(|dir| dir.is_dir())
        .collect();

    if defaults.is_empty() {
        return Err(JavafmtError::InvalidArgument(format!(
            "No source directories given and none of {} exist",
            DEFAULT_SOURCE_DIRS.join(", ")
        )));
    }

    Ok(defaults)
}

fn display_roots(roots: &[PathBuf]) -> String {
    roots
        .iter()
        .map(|r| format!("'{}'", r.display()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_sources_prefers_explicit() {
        let explicit = vec![PathBuf::from("anything")];
        assert_eq!(resolve_sources(&explicit, Path::new("/nowhere")).unwrap(), explicit);
    }

    #[test]
    fn test_resolve_sources_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            resolve_sources(&[], dir.path()),
            Err(JavafmtError::InvalidArgument(_))
        ));

        fs::create_dir_all(dir.path().join("src/test/java")).unwrap();
        assert_eq!(
            resolve_sources(&[], dir.path()).unwrap(),
            vec![dir.path().join("src/test/java")]
        );
    }

    #[test]
    fn test_unknown_encoding_fails_before_walking() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = TaskArgs::new(
            dir.path(),
            vec![dir.path().join("missing")],
            dir.path().join("r.txt"),
        );
        args.encoding = Some("klingon".to_string());
        assert!(matches!(
            compute_edits(&args),
            Err(JavafmtError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn test_missing_source_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let args = TaskArgs::new(
            dir.path(),
            vec![dir.path().join("missing")],
            dir.path().join("r.txt"),
        );
        assert!(matches!(
            compute_edits(&args),
            Err(JavafmtError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_config_file_excludes_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("java");
        fs::create_dir_all(src.join("gen")).unwrap();
        fs::write(src.join("gen/G.java"), "class G {\n\tint x;\n}\n").unwrap();
        fs::write(src.join("A.java"), "class A {\n\tint x;\n}\n").unwrap();

        let config = dir.path().join("javafmt.toml");
        fs::write(&config, "exclude = [\"gen/**\"]\n").unwrap();

        let mut args = TaskArgs::new(dir.path(), vec![src.clone()], dir.path().join("r.txt"));
        args.config = Some(config);

        let edits = compute_edits(&args).unwrap();
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].path(), src.join("A.java").as_path());
    }

    #[test]
    fn test_project_dir_drives_discovery_and_default_roots() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src/main/java");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("A.java"), "class A {\n    int x;\n}\n").unwrap();
        fs::write(dir.path().join("javafmt.toml"), "indentation = \"tabs\"\n").unwrap();

        let args = TaskArgs::new(dir.path(), vec![], dir.path().join("r.txt"));
        let edits = compute_edits(&args).unwrap();

        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].path(), src.join("A.java").as_path());
        assert_eq!(edits[0].formatted(), "class A {\n\tint x;\n}\n");
    }
}
