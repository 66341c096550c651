use super::Span;
use kaleido_diagnostics::SpanExt;

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// 表达式节点。子节点由父节点独占，树中没有共享。
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    // 数字字面量: 1.0
    Number(f64),

    // 变量使用: x
    Variable(String),

    // 二元操作: a + b
    Binary {
        op: char,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    // 函数调用: foo(1, 2)
    Call {
        callee: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn number(value: f64, span: Span) -> Self {
        Self::new(ExprKind::Number(value), span)
    }

    pub fn variable(name: impl Into<String>, span: Span) -> Self {
        Self::new(ExprKind::Variable(name.into()), span)
    }

    /// 合并左右操作数，span 覆盖两者
    pub fn binary(op: char, lhs: Expr, rhs: Expr) -> Self {
        let span = lhs.span.join(&rhs.span);
        Self::new(
            ExprKind::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            span,
        )
    }

    pub fn call(callee: impl Into<String>, args: Vec<Expr>, span: Span) -> Self {
        Self::new(
            ExprKind::Call {
                callee: callee.into(),
                args,
            },
            span,
        )
    }
}
