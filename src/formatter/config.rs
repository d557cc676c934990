//! # 配置转换
//!
//! 将用户设置映射为后端配置。映射在封闭枚举上是全函数，不会失败。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/settings.rs`

use crate::models::{Baseline, FormatSettings, Indentation};

/// 制表位宽度
pub const TAB_WIDTH: usize = 4;

/// 后端语言基线
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JavaBaseline {
    V8,
    V17,
}

impl JavaBaseline {
    /// 是否识别文本块 (`"""`)
    pub fn supports_text_blocks(self) -> bool {
        matches!(self, JavaBaseline::V17)
    }
}

impl From<Baseline> for JavaBaseline {
    fn from(baseline: Baseline) -> Self {
        match baseline {
            Baseline::J8 => JavaBaseline::V8,
            Baseline::J17 => JavaBaseline::V17,
        }
    }
}

/// 后端缩进风格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentationStyle {
    Tabs,
    Spaces,
}

impl From<Indentation> for IndentationStyle {
    fn from(indentation: Indentation) -> Self {
        match indentation {
            Indentation::Tabs => IndentationStyle::Tabs,
            Indentation::Spaces => IndentationStyle::Spaces,
        }
    }
}

/// 后端配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JavaFormatConfig {
    pub baseline: JavaBaseline,
    pub indentation: IndentationStyle,
    pub tab_width: usize,
}

impl JavaFormatConfig {
    pub fn of(baseline: JavaBaseline, indentation: IndentationStyle) -> Self {
        JavaFormatConfig {
            baseline,
            indentation,
            tab_width: TAB_WIDTH,
        }
    }

    pub fn from_settings(settings: &FormatSettings) -> Self {
        Self::of(settings.baseline.into(), settings.indentation.into())
    }
}

impl Default for JavaFormatConfig {
    fn default() -> Self {
        Self::from_settings(&FormatSettings::default())
    }
}
