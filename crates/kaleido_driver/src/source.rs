//! 输入适配
//!
//! 词法分析器需要一个阻塞的字符迭代器；这里把任意 `BufRead`
//! （通常是标准输入）按行读入并逐字符产出。

use std::io::BufRead;
use std::vec;

pub struct ReaderChars<R: BufRead> {
    reader: R,
    pending: vec::IntoIter<char>,
    done: bool,
}

impl<R: BufRead> ReaderChars<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new().into_iter(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for ReaderChars<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.pending.next() {
                return Some(c);
            }
            if self.done {
                return None;
            }

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => self.done = true,
                Ok(_) => self.pending = line.chars().collect::<Vec<_>>().into_iter(),
                Err(err) => {
                    // 读错误（包括非 UTF-8 输入）按输入结束处理
                    log::error!("failed to read input: {}", err);
                    self.done = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_yields_all_chars_across_lines() {
        let chars: String = ReaderChars::new(Cursor::new("def f()\n  x\n")).collect();
        assert_eq!(chars, "def f()\n  x\n");
    }

    #[test]
    fn test_last_line_without_newline() {
        let chars: String = ReaderChars::new(Cursor::new("1+2")).collect();
        assert_eq!(chars, "1+2");
    }

    #[test]
    fn test_invalid_utf8_ends_stream() {
        let bytes: &[u8] = b"ok\n\xff\xfe\nnever";
        let chars: String = ReaderChars::new(Cursor::new(bytes)).collect();
        assert_eq!(chars, "ok\n");
    }

    #[test]
    fn test_stays_exhausted() {
        let mut chars = ReaderChars::new(Cursor::new(""));
        assert_eq!(chars.next(), None);
        assert_eq!(chars.next(), None);
    }
}
