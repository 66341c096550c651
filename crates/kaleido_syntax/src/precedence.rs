//! 二元运算符优先级表
//!
//! 数值越大结合越紧。不在表中、或优先级不为正的字符都不是二元运算符。

use crate::lexer::Token;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecedenceTable {
    binops: BTreeMap<char, i32>,
}

impl Default for PrecedenceTable {
    /// 标准二元运算符，1 为最低优先级
    fn default() -> Self {
        let mut table = Self::empty();
        table.install('<', 10);
        table.install('+', 20);
        table.install('-', 20);
        table.install('*', 40);
        table
    }
}

impl PrecedenceTable {
    /// 不含任何运算符的表
    pub fn empty() -> Self {
        Self {
            binops: BTreeMap::new(),
        }
    }

    /// 注册（或覆盖）一个二元运算符。
    ///
    /// 非正的优先级等价于移除该运算符。
    pub fn install(&mut self, op: char, precedence: i32) {
        if precedence > 0 {
            self.binops.insert(op, precedence);
        } else {
            self.binops.remove(&op);
        }
    }

    /// 字符作为二元运算符的优先级；只有 ASCII 字符可以是运算符
    pub fn lookup(&self, op: char) -> Option<i32> {
        if !op.is_ascii() {
            return None;
        }
        self.binops.get(&op).copied().filter(|prec| *prec > 0)
    }

    /// token 作为二元运算符的优先级
    pub fn precedence(&self, token: &Token) -> Option<i32> {
        token.as_char().and_then(|op| self.lookup(op))
    }
}
