//! Parse Errors
//!
//! 语法错误只有一类，区别在于消息文本和失败的产生式。

use kaleido_diagnostics::{Diagnostic, Span, Suggestion};
use std::fmt;
use thiserror::Error;

/// 失败的产生式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Primary,
    IdentifierExpr,
    ParenExpr,
    Prototype,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Primary => "primary expression",
            Rule::IdentifierExpr => "identifier expression",
            Rule::ParenExpr => "parenthesized expression",
            Rule::Prototype => "prototype",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: &'static str,
    pub rule: Rule,
    /// 出错时前瞻 token 的位置
    pub span: Span,
    pub help: Option<Suggestion>,
}

impl ParseError {
    pub fn new(message: &'static str, rule: Rule, span: Span) -> Self {
        Self {
            message,
            rule,
            span,
            help: None,
        }
    }

    pub fn with_help(mut self, help: Suggestion) -> Self {
        self.help = Some(help);
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.message)
            .span(self.span.clone())
            .with_note(format!("while parsing {}", self.rule));
        match &self.help {
            Some(help) => diagnostic.with_suggestion(help.clone()),
            None => diagnostic,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
