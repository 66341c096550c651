//! 会话配置
//!
//! 所有配置都来自命令行参数，没有配置文件。

use crate::error::{DriverError, DriverResult};
use kaleido_syntax::PrecedenceTable;

pub const DEFAULT_PROMPT: &str = "ready> ";

#[derive(Debug, Clone, PartialEq)]
pub struct DriverOptions {
    /// 提示符文本
    pub prompt: String,
    /// 是否在每个顶层单元前输出提示符
    pub show_prompt: bool,
    /// 是否在报告时立即把诊断写到 stderr
    pub live_diagnostics: bool,
    /// 是否保留解析出的顶层单元
    pub collect_items: bool,
    /// 是否输出每个顶层单元的 S 表达式
    pub dump_ast: bool,
    pub use_colors: bool,
    /// 诊断中使用的文件名
    pub file_name: Option<String>,
    /// 额外注册的二元运算符
    pub extra_operators: Vec<(char, i32)>,
}

impl Default for DriverOptions {
    /// 交互式 REPL 的配置
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_prompt: true,
            live_diagnostics: true,
            collect_items: true,
            dump_ast: false,
            use_colors: true,
            file_name: None,
            extra_operators: Vec::new(),
        }
    }
}

impl DriverOptions {
    pub fn repl() -> Self {
        Self::default()
    }

    /// 非交互配置：不输出提示符，诊断只收集不输出
    pub fn batch() -> Self {
        Self {
            show_prompt: false,
            live_diagnostics: false,
            use_colors: false,
            ..Self::default()
        }
    }

    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn dump_ast(mut self, dump: bool) -> Self {
        self.dump_ast = dump;
        self
    }

    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn with_operator(mut self, op: char, precedence: i32) -> Self {
        self.extra_operators.push((op, precedence));
        self
    }

    /// 标准运算符加上额外注册的运算符
    pub fn precedence_table(&self) -> PrecedenceTable {
        let mut table = PrecedenceTable::default();
        for (op, prec) in &self.extra_operators {
            table.install(*op, *prec);
        }
        table
    }
}

/// 在语法中另有用途、不能注册为二元运算符的字符：
/// 调用和分组的括号、参数分隔符、顶层分隔符、注释起始符，
/// 以及会被词法分析器读成数字的 '.'
const RESERVED_CHARS: &[char] = &['(', ')', ',', ';', '#', '.'];

/// 解析 `<char>=<precedence>` 形式的运算符定义，例如 `/=40`
pub fn parse_binop(text: &str) -> DriverResult<(char, i32)> {
    let invalid = || DriverError::InvalidOperator(text.to_string());

    let (op, prec) = text.rsplit_once('=').ok_or_else(invalid)?;
    let mut chars = op.chars();
    let op = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_punctuation() && !RESERVED_CHARS.contains(&c) => c,
        _ => return Err(invalid()),
    };
    let prec = prec.trim().parse::<i32>().map_err(|_| invalid())?;
    if prec <= 0 {
        return Err(invalid());
    }
    Ok((op, prec))
}
