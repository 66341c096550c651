//! Kaleido Syntax
//!
//! 表达式语言的前端：词法分析、AST 与递归下降解析器。
//!
//! 解析器按需从词法分析器拉取 token，每次只保留一个前瞻 token；
//! 二元表达式使用优先级爬升（precedence climbing）。

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod precedence;

pub use ast::{Expr, ExprKind, Function, Item, Program, Prototype};
pub use lexer::{Lexer, SpannedToken, Token};
pub use parser::{ParseError, ParseResult, Parser, Rule};
pub use precedence::PrecedenceTable;
