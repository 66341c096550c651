//! Span - 源码位置信息
//!
//! 偏移以字符（而不是字节）计数，与词法分析器和 ariadne 的默认索引方式一致。

/// 源码位置范围，半开区间
pub type Span = std::ops::Range<usize>;

/// Span 辅助函数
pub trait SpanExt {
    /// 单个字符处的位置
    fn point(offset: usize) -> Self;

    /// 覆盖两个位置的最小范围
    fn join(&self, other: &Self) -> Self;

    /// 把范围收缩到长度为 `len` 的源码之内
    fn clamp_to(&self, len: usize) -> Self;

    /// 获取长度
    fn width(&self) -> usize;
}

impl SpanExt for Span {
    fn point(offset: usize) -> Self {
        offset..offset + 1
    }

    fn join(&self, other: &Self) -> Self {
        self.start.min(other.start)..self.end.max(other.end)
    }

    fn clamp_to(&self, len: usize) -> Self {
        let start = self.start.min(len);
        start..self.end.clamp(start, len)
    }

    fn width(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_covers_both() {
        let lhs: Span = 2..4;
        assert_eq!(lhs.join(&(7..9)), 2..9);
        assert_eq!((7..9).join(&lhs), 2..9);
    }

    #[test]
    fn test_point_and_width() {
        let span = Span::point(5);
        assert_eq!(span, 5..6);
        assert_eq!(span.width(), 1);
    }

    #[test]
    fn test_clamp_to_source_length() {
        // EOF 位置的 span 可能越过源码末尾
        assert_eq!((10..11).clamp_to(10), 10..10);
        assert_eq!((3..20).clamp_to(10), 3..10);
    }
}
