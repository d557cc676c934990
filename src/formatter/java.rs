//! # 内置 Java 空白格式化器
//!
//! 逐行规范化 Java 源文件中的空白：
//! - 行首缩进按制表位宽度重新生成（全部空格，或制表符 + 余数空格）
//! - 删除行尾空格与制表符
//! - 连续空行合并为一行，删除文件开头的空行
//! - 非空文件以且仅以一个换行结尾，换行风格沿用文件中第一个换行
//! - J17 基线下识别文本块，起始于文本块内部的行原样保留
//!
//! ## 依赖关系
//! - 被 `commands/` 构造并交给 `batch/runner.rs`
//! - 使用 `formatter/config.rs`

use super::config::{IndentationStyle, JavaFormatConfig};
use super::Formatter;
use crate::error::Result;

use std::path::Path;

/// 跨行的词法状态
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct LexState {
    in_text_block: bool,
    in_block_comment: bool,
}

/// 内置 Java 空白格式化器
#[derive(Debug, Clone)]
pub struct JavaWhitespaceFormatter {
    config: JavaFormatConfig,
}

impl JavaWhitespaceFormatter {
    pub fn new(config: JavaFormatConfig) -> Self {
        Self { config }
    }

    /// 格式化整个源文件
    pub fn format_source(&self, source: &str) -> String {
        let newline = detect_newline(source);
        let track_text_blocks = self.config.baseline.supports_text_blocks();

        let mut lines: Vec<String> = Vec::new();
        let mut state = LexState::default();
        let mut pending_blank = false;

        for line in source.lines() {
            if state.in_text_block {
                lines.push(line.to_string());
            } else {
                let formatted = self.reindent(line);
                if formatted.is_empty() {
                    pending_blank = !lines.is_empty();
                } else {
                    if pending_blank {
                        lines.push(String::new());
                        pending_blank = false;
                    }
                    lines.push(formatted);
                }
            }

            if track_text_blocks {
                state = scan_line(line, state);
            }
        }

        if lines.is_empty() {
            return String::new();
        }

        let mut out = lines.join(newline);
        out.push_str(newline);
        out
    }

    /// 重新生成行首缩进并删除行尾空白
    fn reindent(&self, line: &str) -> String {
        let is_blank = |c: char| c == ' ' || c == '\t';
        let trimmed = line.trim_end_matches(is_blank);
        let body = trimmed.trim_start_matches(is_blank);
        if body.is_empty() {
            return String::new();
        }

        let tab = self.config.tab_width.max(1);
        let indent = &trimmed[..trimmed.len() - body.len()];
        let width = indent.chars().fold(0, |w, c| {
            if c == '\t' {
                w + tab - w % tab
            } else {
                w + 1
            }
        });

        let mut out = String::with_capacity(width + body.len());
        match self.config.indentation {
            IndentationStyle::Spaces => out.extend(std::iter::repeat(' ').take(width)),
            IndentationStyle::Tabs => {
                out.extend(std::iter::repeat('\t').take(width / tab));
                out.extend(std::iter::repeat(' ').take(width % tab));
            }
        }
        out.push_str(body);
        out
    }
}

impl Formatter for JavaWhitespaceFormatter {
    fn format(&self, _path: &Path, source: &str) -> Result<String> {
        Ok(self.format_source(source))
    }
}

/// 取文件中第一个换行的风格，没有换行时用 `\n`
fn detect_newline(source: &str) -> &'static str {
    match source.find('\n') {
        Some(idx) if idx > 0 && source.as_bytes()[idx - 1] == b'\r' => "\r\n",
        _ => "\n",
    }
}

/// 扫描一行，返回行尾的词法状态
///
/// 只需区分注释、普通字面量与文本块，足以判断 `"""` 是否真正开启文本块。
fn scan_line(line: &str, mut state: LexState) -> LexState {
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if state.in_block_comment {
            if bytes[i..].starts_with(b"*/") {
                state.in_block_comment = false;
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }

        if state.in_text_block {
            if bytes[i] == b'\\' {
                i += 2;
            } else if bytes[i..].starts_with(b"\"\"\"") {
                state.in_text_block = false;
                i += 3;
            } else {
                i += 1;
            }
            continue;
        }

        if bytes[i..].starts_with(b"//") {
            break;
        } else if bytes[i..].starts_with(b"/*") {
            state.in_block_comment = true;
            i += 2;
        } else if bytes[i..].starts_with(b"\"\"\"") {
            state.in_text_block = true;
            i += 3;
        } else if bytes[i] == b'"' || bytes[i] == b'\'' {
            i = skip_literal(bytes, i);
        } else {
            i += 1;
        }
    }

    state
}

/// 跳过单行字符串或字符字面量，返回结束引号之后的位置
fn skip_literal(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::config::JavaBaseline;

    fn formatter(baseline: JavaBaseline, indentation: IndentationStyle) -> JavaWhitespaceFormatter {
        JavaWhitespaceFormatter::new(JavaFormatConfig::of(baseline, indentation))
    }

    fn spaces() -> JavaWhitespaceFormatter {
        formatter(JavaBaseline::V8, IndentationStyle::Spaces)
    }

    const TAB_INDENTED: &str = "class A {\n\tvoid run() {\n\t\tint x = 1;\n\t}\n}\n";
    const SPACE_INDENTED: &str = "class A {\n    void run() {\n        int x = 1;\n    }\n}\n";

    #[test]
    fn test_tabs_to_spaces() {
        assert_eq!(spaces().format_source(TAB_INDENTED), SPACE_INDENTED);
    }

    #[test]
    fn test_spaces_to_tabs() {
        let tabs = formatter(JavaBaseline::V8, IndentationStyle::Tabs);
        assert_eq!(tabs.format_source(SPACE_INDENTED), TAB_INDENTED);
    }

    #[test]
    fn test_tabs_keep_remainder_as_spaces() {
        let tabs = formatter(JavaBaseline::V8, IndentationStyle::Tabs);
        let source = "/**\n * Doc.\n */\nclass A {\n      int x;\n}\n";
        let expected = "/**\n * Doc.\n */\nclass A {\n\t  int x;\n}\n";
        assert_eq!(tabs.format_source(source), expected);
    }

    #[test]
    fn test_mixed_indent_uses_tab_stops() {
        // 两个空格后接制表符，对齐到第 4 列
        assert_eq!(spaces().format_source("  \tint x;\n"), "    int x;\n");
    }

    #[test]
    fn test_trailing_whitespace_and_blank_lines() {
        let source = "\n\nclass A { \t\n\n\n\n  int x;   \n}\n\n\n";
        assert_eq!(spaces().format_source(source), "class A {\n\n  int x;\n}\n");
    }

    #[test]
    fn test_final_newline_added() {
        assert_eq!(spaces().format_source("class A {}"), "class A {}\n");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(spaces().format_source(""), "");
        assert_eq!(spaces().format_source(" \n\t\n"), "");
    }

    #[test]
    fn test_crlf_preserved() {
        let source = "class A {\r\n\tint x;  \r\n}\r\n";
        assert_eq!(spaces().format_source(source), "class A {\r\n    int x;\r\n}\r\n");
    }

    #[test]
    fn test_text_block_untouched_under_j17() {
        let source = "class A {\n\tString s = \"\"\"\n\t\tkeep  \n\n\n\t\t\"\"\";\n\tint y;\n}\n";
        let j17 = formatter(JavaBaseline::V17, IndentationStyle::Spaces);
        let expected =
            "class A {\n    String s = \"\"\"\n\t\tkeep  \n\n\n\t\t\"\"\";\n    int y;\n}\n";
        assert_eq!(j17.format_source(source), expected);

        let j8 = spaces().format_source(source);
        assert_eq!(
            j8,
            "class A {\n    String s = \"\"\"\n        keep\n\n        \"\"\";\n    int y;\n}\n"
        );
    }

    #[test]
    fn test_quotes_in_comments_and_strings_do_not_open_text_block() {
        let j17 = formatter(JavaBaseline::V17, IndentationStyle::Spaces);
        let source = "class A {\n\t// \"\"\" not a block\n\t/* \"\"\" */ String q = \"\\\"\\\"\\\"\";\n\tint x;  \n}\n";
        let expected = "class A {\n    // \"\"\" not a block\n    /* \"\"\" */ String q = \"\\\"\\\"\\\"\";\n    int x;\n}\n";
        assert_eq!(j17.format_source(source), expected);
    }

    #[test]
    fn test_scan_line_states() {
        let open = scan_line("String s = \"\"\"", LexState::default());
        assert!(open.in_text_block);
        let closed = scan_line("  end\\\"\"\" \"\"\";", open);
        assert!(!closed.in_text_block);

        let comment = scan_line("int a; /* start", LexState::default());
        assert!(comment.in_block_comment);
        assert_eq!(scan_line("end */", comment), LexState::default());
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            TAB_INDENTED,
            SPACE_INDENTED,
            "\n  class B {  \r\n\r\n\r\n\t\tint x;\r\n}",
            "class C {\n\tString s = \"\"\"\n\t  a \n\t\"\"\";\n}\n",
        ];
        for baseline in [JavaBaseline::V8, JavaBaseline::V17] {
            for style in [IndentationStyle::Spaces, IndentationStyle::Tabs] {
                let f = formatter(baseline, style);
                for sample in samples {
                    let once = f.format_source(sample);
                    assert_eq!(f.format_source(&once), once);
                }
            }
        }
    }
}
