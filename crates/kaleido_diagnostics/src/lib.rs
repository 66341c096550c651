//! Kaleido Diagnostics
//!
//! 前端统一的诊断系统：解析器只负责产出 [`Diagnostic`]，
//! 如何收集、何时输出由驱动层决定。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`Suggestion`] - 附在诊断上的修复建议
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning/Info）
//! - [`DiagnosticSink`] - 诊断收集器
//! - [`Emitter`] - 诊断输出器（单行输出，或借助 ariadne 标注源码）
//! - [`Span`] - 源码位置信息（字符偏移）
//!
//! # 示例
//!
//! ```rust
//! use kaleido_diagnostics::{Diagnostic, DiagnosticSink, Emitter, Suggestion};
//!
//! let mut sink = DiagnosticSink::new();
//! sink.add(
//!     Diagnostic::error("expected ')'")
//!         .span(4..5)
//!         .with_suggestion(Suggestion::new("close the group with").with_replacement(")")),
//! );
//! sink.add(Diagnostic::info("Parsed a top-level expr."));
//!
//! let emitter = Emitter::with_colors(false);
//! let mut out = Vec::new();
//! for diagnostic in sink.diagnostics() {
//!     emitter.emit_to(diagnostic, &mut out).unwrap();
//! }
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "error: expected ')'\n  = help: close the group with `)`\ninfo: Parsed a top-level expr.\n"
//! );
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod sink;
pub mod span;

// 重新导出核心类型
pub use diagnostic::{Diagnostic, Suggestion};
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use sink::DiagnosticSink;
pub use span::{Span, SpanExt};
