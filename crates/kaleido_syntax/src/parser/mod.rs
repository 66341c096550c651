//! Parser Module
//!
//! 手写的递归下降解析器。只保留一个前瞻 token（[`Parser::current`]），
//! 由 [`Parser::advance`] 从词法分析器按需拉取。
//!
//! - `expr`：表达式，二元运算使用优先级爬升
//! - `decl`：原型、`def`、`extern` 与顶层表达式
//!
//! 每个产生式返回 [`ParseResult`]；失败时不再消费更多 token，
//! 错误通过 `?` 原样传回调用者，由驱动层负责恢复。
//! 递归深度与输入中表达式的嵌套深度相同，不做额外限制。

pub mod decl;
pub mod error;
pub mod expr;

pub use error::{ParseError, ParseResult, Rule};

use crate::lexer::{Lexer, SpannedToken, Token};
use crate::precedence::PrecedenceTable;
use kaleido_diagnostics::{Diagnostic, Span, Suggestion};

pub struct Parser<I: Iterator<Item = char>> {
    lexer: Lexer<I>,
    current: SpannedToken,
    precedence: PrecedenceTable,
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// 使用标准运算符创建解析器，并立即读取第一个 token
    pub fn new(lexer: Lexer<I>) -> Self {
        Self::with_precedence(lexer, PrecedenceTable::default())
    }

    pub fn with_precedence(mut lexer: Lexer<I>, precedence: PrecedenceTable) -> Self {
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            precedence,
        }
    }

    /// 当前前瞻 token
    pub fn token(&self) -> &Token {
        &self.current.token
    }

    pub fn precedence_table(&self) -> &PrecedenceTable {
        &self.precedence
    }

    /// 丢弃当前 token，从词法分析器读取下一个
    pub fn advance(&mut self) -> &SpannedToken {
        self.current = self.lexer.next_token();
        &self.current
    }

    /// 取走词法分析器到目前为止产生的警告
    pub fn take_warnings(&mut self) -> Vec<Diagnostic> {
        self.lexer.take_warnings()
    }

    pub(crate) fn at_char(&self, c: char) -> bool {
        self.current.token.is_char(c)
    }

    pub(crate) fn current_span(&self) -> Span {
        self.current.span.clone()
    }

    /// 在当前 token 处构造错误
    pub(crate) fn error<T>(&self, message: &'static str, rule: Rule) -> ParseResult<T> {
        let err = ParseError::new(message, rule, self.current_span());
        log::debug!("{} (found {})", err, self.current.token);
        Err(err)
    }

    pub(crate) fn error_with_help<T>(
        &self,
        message: &'static str,
        rule: Rule,
        help: Suggestion,
    ) -> ParseResult<T> {
        self.error(message, rule).map_err(|err| err.with_help(help))
    }
}

impl<'a> Parser<std::str::Chars<'a>> {
    pub fn from_source(source: &'a str) -> Self {
        Self::new(Lexer::from_source(source))
    }
}
