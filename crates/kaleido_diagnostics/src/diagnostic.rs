//! Diagnostic - 诊断信息

use crate::level::DiagnosticLevel;
use crate::span::Span;
use std::fmt;

/// 修复建议，渲染为 `help:` 行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub message: String,
    /// 建议插入的文本（如果有）
    pub replacement: Option<String>,
}

impl Suggestion {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: None,
        }
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.replacement {
            Some(text) => write!(f, "{} `{}`", self.message, text),
            None => f.write_str(&self.message),
        }
    }
}

/// 诊断信息
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// 诊断级别
    pub level: DiagnosticLevel,
    /// 主要消息
    pub message: String,
    /// 源码位置（可选）
    pub span: Option<Span>,
    /// 源文件名（可选，REPL 输入没有文件名）
    pub file: Option<String>,
    /// 补充注释
    pub notes: Vec<String>,
    pub suggestions: Vec<Suggestion>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: None,
            file: None,
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Info, message)
    }

    /// 设置位置信息
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// 设置文件名
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// 添加注释
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let diag = Diagnostic::error("Expected '(' in prototype")
            .span(4..5)
            .with_file("fib.kd")
            .with_note("while parsing prototype")
            .with_suggestion(Suggestion::new("open the parameter list with").with_replacement("("));

        assert_eq!(diag.level, DiagnosticLevel::Error);
        assert_eq!(diag.message, "Expected '(' in prototype");
        assert_eq!(diag.span, Some(4..5));
        assert_eq!(diag.file.as_deref(), Some("fib.kd"));
        assert_eq!(diag.notes, vec!["while parsing prototype".to_string()]);
        assert_eq!(diag.suggestions.len(), 1);
        assert_eq!(diag.suggestions[0].replacement.as_deref(), Some("("));
    }

    #[test]
    fn test_plain_info_has_no_location() {
        let diag = Diagnostic::info("Parsed an extern.");
        assert_eq!(diag.level, DiagnosticLevel::Info);
        assert!(diag.span.is_none());
        assert!(diag.file.is_none());
        assert!(diag.notes.is_empty());
        assert!(diag.suggestions.is_empty());
    }

    #[test]
    fn test_suggestion_display() {
        assert_eq!(
            Suggestion::new("separate arguments with")
                .with_replacement(",")
                .to_string(),
            "separate arguments with `,`"
        );
        assert_eq!(
            Suggestion::new("parameters are separated by spaces").to_string(),
            "parameters are separated by spaces"
        );
    }
}
