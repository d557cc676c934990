//! # check 命令实现
//!
//! 检查源文件格式：没有改动时成功；存在改动时写报告并以错误结束，
//! 由 `main.rs` 转换为非零退出码。
//!
//! ## 依赖关系
//! - 使用 `cli/task.rs` 定义的参数
//! - 使用 `commands/pipeline.rs`, `commands/report.rs`
//! - 使用 `utils/output.rs`，`tabled` 输出汇总表

use super::{pipeline, report};
use crate::cli::task::TaskArgs;
use crate::error::{JavafmtError, Result};
use crate::models::FileEdit;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 汇总表行
#[derive(Debug, Clone, Tabled)]
struct ViolationRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Lines")]
    lines: usize,
    #[tabled(rename = "Lines (formatted)")]
    formatted_lines: usize,
}

impl From<&FileEdit> for ViolationRow {
    fn from(edit: &FileEdit) -> Self {
        ViolationRow {
            file: edit.path().display().to_string(),
            lines: edit.original().lines().count(),
            formatted_lines: edit.formatted().lines().count(),
        }
    }
}

/// 执行 check 命令
pub fn execute(args: TaskArgs) -> Result<()> {
    output::print_header("Checking Java Formatting");

    let edits = pipeline::compute_edits(&args)?;
    if edits.is_empty() {
        output::print_success("Java code is formatted correctly.");
        return Ok(());
    }

    report::write_report(&args.report, &edits)?;

    output::print_warning(&format!("{} file(s) need formatting:", edits.len()));
    let rows: Vec<ViolationRow> = edits.iter().map(ViolationRow::from).collect();
    println!("{}", Table::new(&rows));

    Err(JavafmtError::FormatViolation {
        report: report::report_location(&args.report),
    })
}
