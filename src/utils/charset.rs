//! # 字符集工具
//!
//! 解析编码名称，严格解码源文件，写回时按同一编码重新编码。
//!
//! ## 依赖关系
//! - 被 `formatter/config.rs`, `batch/runner.rs`, `models/edit.rs` 使用
//! - 使用 `encoding_rs` crate

use crate::error::{JavafmtError, Result};

use encoding_rs::Encoding;
use std::path::Path;

/// 按 WHATWG 标签规则查找编码
///
/// 只接受可以无损写回的编码：UTF-16 系列与 `replacement` 的输出编码
/// 不是自身，写回后会改变文件的字节表示，因此拒绝。
pub fn resolve_charset(label: &str) -> Result<&'static Encoding> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| JavafmtError::UnsupportedEncoding(label.to_string()))?;

    if encoding.output_encoding() != encoding {
        return Err(JavafmtError::UnsupportedEncoding(format!(
            "{} (cannot be written back)",
            label
        )));
    }

    Ok(encoding)
}

/// 严格解码，遇到非法字节序列即失败
pub fn decode(bytes: &[u8], encoding: &'static Encoding, path: &Path) -> Result<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| JavafmtError::DecodeError {
            path: path.display().to_string(),
            encoding: encoding.name().to_string(),
        })
}

/// 编码为字节，存在不可映射字符时失败
pub fn encode(text: &str, encoding: &'static Encoding, path: &Path) -> Result<Vec<u8>> {
    let (bytes, _, had_errors) = encoding.encode(text);
    if had_errors {
        return Err(JavafmtError::EncodeError {
            path: path.display().to_string(),
            encoding: encoding.name().to_string(),
        });
    }
    Ok(bytes.into_owned())
}
