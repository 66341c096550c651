pub mod display;
pub mod expr;
pub mod item;

// 重新导出核心类型，方便外部直接使用 kaleido_syntax::ast::Expr 等
pub use expr::{Expr, ExprKind};
pub use item::{Function, Item, Prototype, ANON_FN_NAME};

pub use kaleido_diagnostics::Span;

/// 一次会话中成功解析出的所有顶层单元
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub items: Vec<Item>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
