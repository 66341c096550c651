//! Driver Errors
//!
//! 语法错误在顶层循环内部报告并恢复，从不变成 [`DriverError`]；
//! 这里只有会让整个会话失败的错误。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    /// 写提示符 / AST 输出或读取源文件失败
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// `--binop` 参数格式不对
    #[error("invalid operator `{0}`: expected <char>=<precedence> with a punctuation char other than ( ) , ; # ., e.g. '/=40'")]
    InvalidOperator(String),
}

pub type DriverResult<T> = Result<T, DriverError>;
