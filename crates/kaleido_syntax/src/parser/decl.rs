//! Declaration Parser
//!
//! ```text
//! prototype    ::= identifier '(' identifier* ')'
//! definition   ::= 'def' prototype expression
//! external     ::= 'extern' prototype
//! toplevelexpr ::= expression
//! ```

use super::{ParseResult, Parser, Rule};
use crate::ast::{Function, Prototype};
use crate::lexer::Token;
use kaleido_diagnostics::{SpanExt, Suggestion};

impl<I: Iterator<Item = char>> Parser<I> {
    pub fn parse_prototype(&mut self) -> ParseResult<Prototype> {
        let Token::Identifier(name) = self.token().clone() else {
            return self.error("Expected function name in prototype", Rule::Prototype);
        };
        let start = self.current_span();
        self.advance();

        if !self.at_char('(') {
            return self.error("Expected '(' in prototype", Rule::Prototype);
        }

        // 参数之间没有逗号
        let mut params = Vec::new();
        while let Token::Identifier(param) = &self.advance().token {
            params.push(param.clone());
        }

        if !self.at_char(')') {
            let help = if self.at_char(',') {
                Suggestion::new("prototype parameters are separated by spaces, not commas")
            } else {
                Suggestion::new("close the parameter list with").with_replacement(")")
            };
            return self.error_with_help("Expected ')' in prototype", Rule::Prototype, help);
        }
        let span = start.join(&self.current_span());
        self.advance(); // 吃掉 ')'

        Ok(Prototype::new(name, params, span))
    }

    pub fn parse_definition(&mut self) -> ParseResult<Function> {
        self.advance(); // 吃掉 def
        let proto = self.parse_prototype()?;
        let body = self.parse_expression()?;
        Ok(Function { proto, body })
    }

    pub fn parse_extern(&mut self) -> ParseResult<Prototype> {
        self.advance(); // 吃掉 extern
        self.parse_prototype()
    }

    /// 把裸表达式包装成零参数的匿名函数
    pub fn parse_top_level_expr(&mut self) -> ParseResult<Function> {
        let body = self.parse_expression()?;
        let proto = Prototype::anonymous(body.span.clone());
        Ok(Function { proto, body })
    }
}
