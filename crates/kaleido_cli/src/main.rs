use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kaleido_diagnostics::Emitter;
use kaleido_driver::{parse_binop, Driver, DriverOptions, ReaderChars};
use std::fs;
use std::io;

#[derive(Parser)]
#[command(name = "kaleidoc")]
#[command(about = "Kaleido 表达式语言前端 - 词法分析与语法分析", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// 关闭彩色输出
    #[arg(long, global = true)]
    no_color: bool,

    /// 输出每个顶层单元的 S 表达式
    #[arg(long, global = true)]
    dump_ast: bool,

    /// 注册额外的二元运算符，例如 --binop '/=40'
    #[arg(long = "binop", value_name = "OP=PREC", value_parser = parse_binop, global = true)]
    binops: Vec<(char, i32)>,
}

#[derive(Subcommand)]
enum Commands {
    /// 交互式读取标准输入（默认）
    Repl,

    /// 解析源文件并报告错误
    Parse {
        /// 输入文件
        input: String,
    },
}

impl Cli {
    fn options(&self, base: DriverOptions) -> DriverOptions {
        let options = self
            .binops
            .iter()
            .fold(base, |opts, (op, prec)| opts.with_operator(*op, *prec));
        options.dump_ast(self.dump_ast).use_colors(!self.no_color)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        None | Some(Commands::Repl) => cmd_repl(&cli)?,
        Some(Commands::Parse { input }) => cmd_parse(&cli, input)?,
    }

    Ok(())
}

/// 交互模式：提示符写到 stdout，诊断立即写到 stderr
fn cmd_repl(cli: &Cli) -> Result<()> {
    let mut driver = Driver::new(cli.options(DriverOptions::repl()));
    let input = ReaderChars::new(io::stdin().lock());
    let summary = driver.run(input, &mut io::stdout().lock())?;
    println!();
    log::info!(
        "{} item(s) parsed, {} error(s), {} warning(s)",
        summary.parsed(),
        summary.errors,
        summary.warnings
    );
    Ok(())
}

/// 文件模式：解析结束后统一输出诊断，带位置的诊断标注在源码上
fn cmd_parse(cli: &Cli, input: &str) -> Result<()> {
    let source = fs::read_to_string(input).with_context(|| format!("failed to read {}", input))?;

    let options = cli.options(DriverOptions::batch()).file_name(input);
    let emitter = Emitter::with_colors(options.use_colors);
    let mut driver = Driver::new(options);
    let summary = driver.run(source.chars(), &mut io::stdout().lock())?;

    for diag in driver.sink().diagnostics() {
        emitter.emit_with_source(diag, &source);
    }

    if driver.sink().has_errors() {
        eprintln!(
            "{} error(s), {} warning(s), {} item(s) parsed",
            driver.sink().error_count(),
            summary.warnings,
            summary.parsed()
        );
        std::process::exit(1);
    }
    Ok(())
}
