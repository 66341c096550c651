//! DiagnosticSink - 诊断收集器
//!
//! 驱动层按报告顺序记录一次会话中的全部诊断：每个顶层单元一条
//! 成功或失败的消息，以及词法分析器发现的警告。

use crate::diagnostic::Diagnostic;

#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        if diagnostic.level.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// 所有诊断（按报告顺序）
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// 只遍历错误
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.level.is_error())
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sink_is_empty() {
        let sink = DiagnosticSink::new();
        assert!(!sink.has_errors());
        assert!(sink.is_empty());
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn test_info_and_warning_are_not_errors() {
        let mut sink = DiagnosticSink::new();
        sink.add(Diagnostic::info("Parsed a function definition."));
        sink.add(Diagnostic::warning("malformed numeral `1.2.3`").span(0..5));

        assert!(!sink.has_errors());
        assert_eq!(sink.error_count(), 0);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_errors_keep_report_order() {
        let mut sink = DiagnosticSink::new();
        sink.add(Diagnostic::error("expected ')'"));
        sink.add(Diagnostic::info("Parsed a top-level expr."));
        sink.add(Diagnostic::error("Expected function name in prototype"));

        let messages: Vec<_> = sink.errors().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["expected ')'", "Expected function name in prototype"]
        );
        assert_eq!(sink.error_count(), 2);
        assert_eq!(sink.diagnostics()[1].message, "Parsed a top-level expr.");
    }
}
