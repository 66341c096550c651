//! Kaleido Driver
//!
//! 顶层循环：反复向解析器索取下一个顶层单元，报告成功或失败。
//!
//! ```text
//! top ::= definition | external | expression | ';'
//! ```
//!
//! 解析失败时只跳过一个 token 然后继续，因此一个有多处错误的程序
//! 会对每个出错的单元各报告一次，而不是在第一个错误处停止。

pub mod error;
pub mod options;
pub mod source;

pub use error::{DriverError, DriverResult};
pub use options::{parse_binop, DriverOptions, DEFAULT_PROMPT};
pub use source::ReaderChars;

use kaleido_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
use kaleido_syntax::{Item, Lexer, ParseResult, Parser, Program, Token};
use std::io::{self, Write};

/// 一次 [`Driver::run`] 的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub definitions: usize,
    pub externs: usize,
    pub expressions: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl SessionSummary {
    /// 成功解析的顶层单元数
    pub fn parsed(&self) -> usize {
        self.definitions + self.externs + self.expressions
    }

    fn record(&mut self, item: &Item) {
        match item {
            Item::Definition(_) => self.definitions += 1,
            Item::Extern(_) => self.externs += 1,
            Item::Expression(_) => self.expressions += 1,
        }
    }
}

pub struct Driver {
    options: DriverOptions,
    sink: DiagnosticSink,
    emitter: Emitter,
    program: Program,
}

impl Driver {
    pub fn new(options: DriverOptions) -> Self {
        let emitter = Emitter::with_colors(options.use_colors);
        Self {
            options,
            sink: DiagnosticSink::new(),
            emitter,
            program: Program::new(),
        }
    }

    pub fn sink(&self) -> &DiagnosticSink {
        &self.sink
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn into_parts(self) -> (Program, DiagnosticSink) {
        (self.program, self.sink)
    }

    /// 解析 `input` 直到输入结束。
    ///
    /// 提示符和 `--dump-ast` 的输出写到 `out`；诊断进入 [`DiagnosticSink`]，
    /// 配置了 `live_diagnostics` 时同时写到 stderr。
    pub fn run<I, W>(&mut self, input: I, out: &mut W) -> DriverResult<SessionSummary>
    where
        I: Iterator<Item = char>,
        W: Write,
    {
        // 读取第一个 token 之前先给出提示符
        self.prompt(out)?;
        let mut parser = Parser::with_precedence(Lexer::new(input), self.options.precedence_table());
        let mut summary = SessionSummary::default();

        loop {
            self.prompt(out)?;
            let result = match parser.token() {
                Token::Eof => {
                    self.report_warnings(&mut parser, &mut summary);
                    break;
                }
                Token::Char(';') => {
                    // 顶层分号没有语义
                    parser.advance();
                    continue;
                }
                Token::Def => parser.parse_definition().map(Item::Definition),
                Token::Extern => parser.parse_extern().map(Item::Extern),
                _ => parser.parse_top_level_expr().map(Item::Expression),
            };
            // 先报告本单元读 token 时产生的警告
            self.report_warnings(&mut parser, &mut summary);
            self.finish_unit(result, &mut parser, &mut summary, out)?;
        }

        log::debug!("session finished: {:?}", summary);
        Ok(summary)
    }

    fn finish_unit<I, W>(
        &mut self,
        result: ParseResult<Item>,
        parser: &mut Parser<I>,
        summary: &mut SessionSummary,
        out: &mut W,
    ) -> DriverResult<()>
    where
        I: Iterator<Item = char>,
        W: Write,
    {
        match result {
            Ok(item) => {
                self.report(Diagnostic::info(item.describe()));
                summary.record(&item);
                if self.options.dump_ast {
                    writeln!(out, "{}", item)?;
                }
                if self.options.collect_items {
                    self.program.push(item);
                }
            }
            Err(err) => {
                self.report(err.to_diagnostic());
                summary.errors += 1;
                // 跳过一个 token 进行错误恢复
                parser.advance();
            }
        }
        Ok(())
    }

    fn report_warnings<I: Iterator<Item = char>>(
        &mut self,
        parser: &mut Parser<I>,
        summary: &mut SessionSummary,
    ) {
        for warning in parser.take_warnings() {
            summary.warnings += 1;
            self.report(warning);
        }
    }

    fn report(&mut self, mut diagnostic: Diagnostic) {
        if let Some(file) = &self.options.file_name {
            diagnostic = diagnostic.with_file(file.clone());
        }
        if self.options.live_diagnostics {
            self.emitter.emit(&diagnostic);
        }
        self.sink.add(diagnostic);
    }

    fn prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.options.show_prompt {
            write!(out, "{}", self.options.prompt)?;
            out.flush()?;
        }
        Ok(())
    }
}

/// 以非交互方式解析整段源码
pub fn parse_source(source: &str) -> (Program, DiagnosticSink) {
    let mut driver = Driver::new(DriverOptions::batch());
    // batch 配置不输出任何内容，写入 io::sink 也不会失败
    if let Err(err) = driver.run(source.chars(), &mut io::sink()) {
        log::error!("{}", err);
    }
    driver.into_parts()
}
