//! Lexer - 词法分析器
//!
//! 逐字符读取输入，每次调用产出一个 token。调用之间唯一保留的状态是
//! 尚未处理的那一个字符，因此输入可以是阻塞的标准输入。

use kaleido_diagnostics::{Diagnostic, Span, SpanExt};
use std::fmt;
use std::str::Chars;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// 输入结束
    Eof,

    // --- 关键字 (Keywords) ---
    Def,
    Extern,

    // --- 带数据的 token ---
    /// [A-Za-z][A-Za-z0-9]*
    Identifier(String),
    /// [0-9.]+
    Number(f64),

    /// 其他任意单个字符：标点、运算符，以及无法识别的字符
    Char(char),
}

impl Token {
    /// 是否为给定的单字符 token
    pub fn is_char(&self, c: char) -> bool {
        matches!(self, Token::Char(ch) if *ch == c)
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Token::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => write!(f, "end of input"),
            Token::Def => write!(f, "def"),
            Token::Extern => write!(f, "extern"),
            Token::Identifier(name) => write!(f, "identifier `{}`", name),
            Token::Number(value) => write!(f, "number `{}`", value),
            Token::Char(c) => write!(f, "`{}`", c),
        }
    }
}

/// 带位置的 token
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

pub struct Lexer<I: Iterator<Item = char>> {
    input: I,
    /// 下一个待处理的字符，`None` 表示输入结束
    last_char: Option<char>,
    /// `last_char` 的字符偏移
    last_pos: usize,
    /// 已经从输入中读出的字符数
    consumed: usize,
    /// 尚未被取走的警告
    warnings: Vec<Diagnostic>,
}

impl<'a> Lexer<Chars<'a>> {
    pub fn from_source(source: &'a str) -> Self {
        Self::new(source.chars())
    }
}

impl<I: Iterator<Item = char>> Lexer<I> {
    pub fn new(input: I) -> Self {
        // 以一个空白字符开始：第一次调用时才真正读取输入
        Self {
            input,
            last_char: Some(' '),
            last_pos: 0,
            consumed: 0,
            warnings: Vec::new(),
        }
    }

    fn bump(&mut self) {
        self.last_char = self.input.next();
        self.last_pos = self.consumed;
        if self.last_char.is_some() {
            self.consumed += 1;
        }
    }

    pub fn take_warnings(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.warnings)
    }

    /// 返回下一个 token。到达输入末尾后会一直返回 [`Token::Eof`]。
    pub fn next_token(&mut self) -> SpannedToken {
        let token = self.lex();
        log::trace!("lexed {:?} at {:?}", token.token, token.span);
        token
    }

    fn lex(&mut self) -> SpannedToken {
        loop {
            while self.last_char.is_some_and(is_space) {
                self.bump();
            }

            let start = self.last_pos;
            let Some(c) = self.last_char else {
                // 不消费 EOF
                return SpannedToken {
                    token: Token::Eof,
                    span: Span::point(start),
                };
            };

            if c.is_ascii_alphabetic() {
                let text = self.take_while(|c| c.is_ascii_alphanumeric());
                let token = match text.as_str() {
                    "def" => Token::Def,
                    "extern" => Token::Extern,
                    _ => Token::Identifier(text),
                };
                return SpannedToken {
                    token,
                    span: start..self.last_pos,
                };
            }

            if c.is_ascii_digit() || c == '.' {
                let text = self.take_while(|c| c.is_ascii_digit() || c == '.');
                let span = start..self.last_pos;
                let (value, end) = scan_numeral(&text);
                if end < text.len() {
                    self.warn_malformed_numeral(&text, end, span.clone());
                }
                return SpannedToken {
                    token: Token::Number(value),
                    span,
                };
            }

            if c == '#' {
                // 注释直到行尾，对解析器完全透明
                while !matches!(self.last_char, None | Some('\n') | Some('\r')) {
                    self.bump();
                }
                continue;
            }

            self.bump();
            return SpannedToken {
                token: Token::Char(c),
                span: Span::point(start),
            };
        }
    }

    /// 从当前字符开始收集满足条件的最长字符串
    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.last_char.filter(|c| accept(*c)) {
            text.push(c);
            self.bump();
        }
        text
    }

    fn warn_malformed_numeral(&mut self, text: &str, end: usize, span: Span) {
        let message = if end == 0 {
            format!("malformed numeral `{}` read as 0", text)
        } else {
            format!(
                "malformed numeral `{}`: ignoring trailing `{}`",
                text,
                &text[end..]
            )
        };
        log::debug!("{}", message);
        self.warnings.push(Diagnostic::warning(message).span(span));
    }
}

/// C 的 `isspace`：只有 ASCII 空白
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// 按 strtod 的方式取 `digits[.digits]` 前缀的值，返回值和前缀长度。
/// 没有可用前缀时为 `(0.0, 0)`。
fn scan_numeral(text: &str) -> (f64, usize) {
    // text 只包含 ASCII 数字和 '.'，按字节处理是安全的
    let bytes = text.as_bytes();
    let int_digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let mut end = int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = bytes[end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    (text[..end].parse().unwrap_or(0.0), end)
}
