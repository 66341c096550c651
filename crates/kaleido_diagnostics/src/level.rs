//! DiagnosticLevel - 诊断级别

use ariadne::{Color, ReportKind};
use colored::*;
use std::fmt;

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    /// 错误 - 当前顶层单元被丢弃
    Error,
    /// 警告 - 例如被截断的数字字面量
    Warning,
    /// 信息 - 例如 "Parsed an extern."
    Info,
}

impl DiagnosticLevel {
    /// 获取级别名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// 获取带颜色的级别名称
    pub fn colored_name(&self) -> ColoredString {
        match self {
            Self::Error => self.name().red().bold(),
            Self::Warning => self.name().yellow().bold(),
            Self::Info => self.name().green().bold(),
        }
    }

    /// 对应 ariadne 报告的类型
    pub fn report_kind(&self) -> ReportKind<'static> {
        match self {
            Self::Error => ReportKind::Error,
            Self::Warning => ReportKind::Warning,
            Self::Info => ReportKind::Custom("info", Color::Green),
        }
    }

    /// 源码标注使用的颜色
    pub fn label_color(&self) -> Color {
        match self {
            Self::Error => Color::Red,
            Self::Warning => Color::Yellow,
            Self::Info => Color::Green,
        }
    }

    /// 是否为错误
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
