use super::{Expr, Span};

/// 顶层表达式包装成匿名函数时使用的名字
pub const ANON_FN_NAME: &str = "__anon_expr";

/// 函数原型：名字和参数名（隐含了参数个数）
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
    pub span: Span,
}

impl Prototype {
    pub fn new(name: impl Into<String>, params: Vec<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            params,
            span,
        }
    }

    /// 零参数的匿名原型
    pub fn anonymous(span: Span) -> Self {
        Self::new(ANON_FN_NAME, Vec::new(), span)
    }
}

/// 函数定义：`def` 声明，或包装顶层表达式的匿名函数
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub proto: Prototype,
    pub body: Expr,
}

/// 顶层单元
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// def name(params) body
    Definition(Function),
    /// extern name(params)
    Extern(Prototype),
    /// 裸表达式，包装在匿名函数中
    Expression(Function),
}

impl Item {
    /// 驱动层在成功解析后报告的消息
    pub fn describe(&self) -> &'static str {
        match self {
            Item::Definition(_) => "Parsed a function definition.",
            Item::Extern(_) => "Parsed an extern.",
            Item::Expression(_) => "Parsed a top-level expr.",
        }
    }
}
