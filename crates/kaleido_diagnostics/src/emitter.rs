//! Emitter - 诊断输出器
//!
//! 两种输出方式：
//! - [`Emitter::emit`]：每条诊断一行（外加建议），REPL 中使用；
//! - [`Emitter::emit_with_source`]：借助 ariadne 在源码上标注位置，
//!   并附带诊断的注释和建议，解析文件时使用。

use crate::diagnostic::Diagnostic;
use crate::span::{Span, SpanExt};
use ariadne::{Config, Label, Report, Source};
use colored::*;
use std::io::{self, Write};

/// 没有文件名时在报告中使用的来源名称
const ANONYMOUS_SOURCE: &str = "<stdin>";

/// 诊断输出器
#[derive(Debug, Clone, Copy)]
pub struct Emitter {
    use_colors: bool,
}

impl Emitter {
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// 单行形式：`<level>: <message>`，每条建议另起一行 `  = help: ...`
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut text = if self.use_colors {
            format!(
                "{}: {}",
                diagnostic.level.colored_name(),
                diagnostic.message.bold()
            )
        } else {
            format!("{}: {}", diagnostic.level, diagnostic.message)
        };
        for suggestion in &diagnostic.suggestions {
            let help = format!("help: {}", suggestion);
            if self.use_colors {
                text.push_str(&format!("\n  {} {}", "=".green().bold(), help.green()));
            } else {
                text.push_str(&format!("\n  = {}", help));
            }
        }
        text
    }

    /// 输出单个诊断到 stderr
    pub fn emit(&self, diagnostic: &Diagnostic) {
        // stderr 写失败时没有更好的去处
        let _ = self.emit_to(diagnostic, &mut io::stderr().lock());
    }

    pub fn emit_to<W: Write>(&self, diagnostic: &Diagnostic, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.render(diagnostic))
    }

    /// 带源码标注输出到 stderr
    pub fn emit_with_source(&self, diagnostic: &Diagnostic, source: &str) {
        let _ = self.write_with_source(diagnostic, source, &mut io::stderr().lock());
    }

    /// 带源码标注输出。没有 span 的诊断退化为单行形式。
    pub fn write_with_source<W: Write>(
        &self,
        diagnostic: &Diagnostic,
        source: &str,
        out: &mut W,
    ) -> io::Result<()> {
        let Some(span) = &diagnostic.span else {
            return self.emit_to(diagnostic, out);
        };

        let name = diagnostic
            .file
            .clone()
            .unwrap_or_else(|| ANONYMOUS_SOURCE.to_string());
        let len = source.chars().count();
        if len == 0 {
            return self.emit_to(diagnostic, out);
        }
        // 指向输入末尾的位置改为标注最后一个字符
        let mut span: Span = span.clamp_to(len);
        if span.width() == 0 {
            span = Span::point(span.start.min(len - 1));
        }

        let mut builder = Report::<(String, Span)>::build(
            diagnostic.level.report_kind(),
            name.clone(),
            span.start,
        )
        .with_config(Config::default().with_color(self.use_colors))
        .with_message(&diagnostic.message)
        .with_label(
            Label::new((name.clone(), span))
                .with_message(&diagnostic.message)
                .with_color(diagnostic.level.label_color()),
        );
        for note in &diagnostic.notes {
            builder = builder.with_note(note);
        }
        // 多条建议合并成一个 help
        if !diagnostic.suggestions.is_empty() {
            let help: Vec<String> = diagnostic.suggestions.iter().map(|s| s.to_string()).collect();
            builder = builder.with_help(help.join("\n"));
        }

        builder
            .finish()
            .write((name, Source::from(source.to_string())), out)
    }
}
