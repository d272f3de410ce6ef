//! Byte-level positions in Draw++ source text.
//! Draw++ 源码文本中的字节级定位。
//!
//! The front end speaks in byte offsets from start to finish. Tokens get
//! their offsets from the lexer, AST nodes merge the offsets of their parts,
//! and line/column pairs are only computed when a diagnostic is rendered.
//! 前端自始至终以字节偏移为单位。token 的偏移来自词法分析器，
//! AST 节点合并其组成部分的偏移，行列号只在渲染诊断时才计算。

use std::fmt;

/// A byte offset into the source text.
/// 源码文本中的字节偏移。
///
/// Offsets fit in a `u32`; drawing scripts do not get anywhere near 4 GiB.
/// 偏移用 `u32` 表示；绘图脚本远不会接近 4 GiB。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BytePos(pub u32);

impl BytePos {
    pub const ZERO: BytePos = BytePos(0);

    /// The position `offset` bytes further into the text.
    /// 向后偏移 `offset` 个字节的位置。
    pub fn offset(self, offset: u32) -> BytePos {
        BytePos(self.0 + offset)
    }
}

impl From<usize> for BytePos {
    fn from(pos: usize) -> Self {
        BytePos(pos as u32)
    }
}

impl From<BytePos> for usize {
    fn from(pos: BytePos) -> Self {
        pos.0 as usize
    }
}

impl fmt::Debug for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BytePos({})", self.0)
    }
}

/// A half-open byte range `[start, end)` in the source text.
/// 源码文本中左闭右开的字节区间 `[start, end)`。
///
/// Every token, AST node and diagnostic carries one, so any stage can point
/// back into the original text without holding on to it.
/// 每个 token、AST 节点和诊断都带有一个区间，任何阶段都能据此
/// 回指原始文本而无需持有文本本身。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: BytePos,
    /// Exclusive. / 不包含。
    pub end: BytePos,
}

impl Span {
    /// A placeholder span pointing at the start of the text.
    /// 指向文本起始处的占位区间。
    pub const DUMMY: Span = Span {
        start: BytePos::ZERO,
        end: BytePos::ZERO,
    };

    pub fn new(start: BytePos, end: BytePos) -> Self {
        Span { start, end }
    }

    pub fn from_usize(start: usize, end: usize) -> Self {
        Span::new(BytePos::from(start), BytePos::from(end))
    }

    /// A zero-length span at `pos`. Used for the end-of-input token and for
    /// anchoring an error between two tokens.
    /// 位于 `pos` 处的零长度区间。用于输入结束 token，
    /// 以及把错误锚定在两个 token 之间。
    pub fn point(pos: usize) -> Self {
        Span::from_usize(pos, pos)
    }

    /// The smallest span covering both `self` and `other`.
    /// 同时覆盖 `self` 和 `other` 的最小区间。
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a `Range` for indexing into the text.
    /// 用于索引文本的 `Range` 形式。
    pub fn range(&self) -> std::ops::Range<usize> {
        usize::from(self.start)..usize::from(self.end)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}
