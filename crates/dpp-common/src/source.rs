//! Source text access and line/column computation.
//! 源文本访问和行列号计算。

use crate::span::{BytePos, Span};

/// A 1-based line/column pair.
/// 从 1 开始计数的行列号。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

/// Owns a source file's text and answers position queries against it.
/// 持有源文件文本，并解答针对它的位置查询。
///
/// The line-starts table is built once; `line_col` is then a binary search.
/// 行起始表只构建一次，之后 `line_col` 是一次二分查找。
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    text: String,
    /// Byte offset of the first character of each line.
    /// 每行第一个字符的字节偏移。
    line_starts: Vec<u32>,
}

impl SourceBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = vec![0u32];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        SourceBuffer { text, line_starts }
    }

    /// Returns the full source text.
    /// 返回完整源文本。
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the text covered by `span`.
    /// 返回 `span` 覆盖的文本。
    ///
    /// Spans are produced on char boundaries by the lexer; a span that is out
    /// of range or splits a char yields an empty string rather than a panic.
    /// 词法器产出的 Span 都落在字符边界上；越界或切断字符的 Span 返回空串而非 panic。
    pub fn slice(&self, span: Span) -> &str {
        self.text.get(span.range()).unwrap_or("")
    }

    /// Computes the 1-based line/column of a byte position.
    /// 计算字节位置对应的行列号（从 1 开始）。
    ///
    /// The column counts characters, not bytes, so multi-byte text reports
    /// the position a user would see in an editor.
    /// 列号按字符而非字节计数，多字节文本报告的位置与编辑器中看到的一致。
    pub fn line_col(&self, pos: BytePos) -> LineCol {
        let offset = pos.0;
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let line_start = self.line_starts[line_idx] as usize;
        let upto = self
            .text
            .get(line_start..offset as usize)
            .unwrap_or_default();
        LineCol {
            line: line_idx as u32 + 1,
            column: upto.chars().count() as u32 + 1,
        }
    }

    /// Returns the number of lines in the source.
    /// 返回源文本的行数。
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
