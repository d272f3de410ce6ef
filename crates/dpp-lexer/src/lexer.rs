//! The Draw++ lexer.
//! Draw++ 词法分析器。

use crate::token::{Token, TokenKind};
use dpp_common::Span;
use dpp_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};

/// The Draw++ lexer.
/// Draw++ 词法分析器。
///
/// Converts source code into a sequence of tokens.
/// 将源代码转换为 token 序列。
pub struct Lexer<'src> {
    /// Character iterator with position info
    /// 带位置信息的字符迭代器
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    /// Current position in source
    /// 当前在源码中的位置
    pos: usize,
    /// Collected diagnostics (errors/warnings)
    /// 收集的诊断信息（错误/警告）
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    /// 为给定的源代码创建新的词法分析器。
    pub fn new(source: &'src str) -> Self {
        Self {
            chars: source.char_indices().peekable(),
            pos: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire source and return tokens and diagnostics.
    /// 对整个源代码进行词法分析，返回 token 列表和诊断信息。
    ///
    /// The token list always ends with a zero-length `Eof` token.
    /// token 列表总是以一个零长度的 `Eof` token 结尾。
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        (tokens, self.diagnostics)
    }

    /// Get the next token, skipping comments and invalid characters.
    /// 获取下一个 token，跳过注释和无效字符。
    ///
    /// Iterative so that long runs of comments or junk stay on one stack
    /// frame.
    /// 采用迭代实现，大段注释或无效字符不会加深调用栈。
    fn next_token(&mut self) -> Token {
        loop {
            // Skip whitespace - 跳过空白字符
            self.skip_whitespace();

            let start = self.pos;

            // Check for end of file - 检查是否到达文件末尾
            let Some((_pos, ch)) = self.advance() else {
                return Token::new(TokenKind::Eof, Span::point(start));
            };

            let kind = match ch {
                // Single character tokens - 单字符 token
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                ',' => TokenKind::Comma,
                ';' => TokenKind::Semicolon,
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Star,

                // Slash or line comment - 斜杠或行注释
                '/' => {
                    if self.peek_char() == Some('/') {
                        self.skip_line_comment();
                        continue;
                    } else {
                        TokenKind::Slash
                    }
                }

                // Equals - 等号
                '=' => {
                    if self.peek_char() == Some('=') {
                        self.advance();
                        TokenKind::EqEq
                    } else {
                        TokenKind::Eq
                    }
                }

                // `!` only exists as part of `!=` - `!` 只能作为 `!=` 的一部分出现
                '!' => {
                    if self.peek_char() == Some('=') {
                        self.advance();
                        TokenKind::BangEq
                    } else {
                        self.error_unexpected_char(ch, start);
                        continue;
                    }
                }

                // Less than - 小于号
                '<' => {
                    if self.peek_char() == Some('=') {
                        self.advance();
                        TokenKind::LtEq
                    } else {
                        TokenKind::Lt
                    }
                }

                // Greater than - 大于号
                '>' => {
                    if self.peek_char() == Some('=') {
                        self.advance();
                        TokenKind::GtEq
                    } else {
                        TokenKind::Gt
                    }
                }

                // String literal - 字符串字面量
                '"' => self.string_literal(start),

                // Numbers - 数字
                '0'..='9' => self.number(ch, start),

                // Identifiers and keywords (unicode) - 标识符和关键字（unicode）
                ch if ch.is_alphabetic() || ch == '_' => self.identifier(ch),

                _ => {
                    self.error_unexpected_char(ch, start);
                    continue;
                }
            };

            return Token::new(kind, Span::from_usize(start, self.pos));
        }
    }

    /// Advance to the next character.
    /// 前进到下一个字符。
    fn advance(&mut self) -> Option<(usize, char)> {
        let result = self.chars.next();
        if let Some((pos, ch)) = result {
            self.pos = pos + ch.len_utf8();
        }
        result
    }

    /// Peek at the next character without consuming it.
    /// 查看下一个字符但不消耗它。
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    /// Skip whitespace characters.
    /// 跳过空白字符。
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Skip a line comment (// to end of line).
    /// 跳过行注释（// 到行尾）。
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Parse a string literal (double-quoted).
    /// 解析字符串字面量（双引号包围）。
    ///
    /// On an unterminated string the error is anchored at the opening quote
    /// and a string token covering the consumed text is still produced.
    /// 字符串未终止时，错误锚定在起始引号处，并且仍会产出一个覆盖已消耗文本的字符串 token。
    fn string_literal(&mut self, token_start: usize) -> TokenKind {
        let mut value = String::new();

        loop {
            match self.advance() {
                Some((_, '"')) => break,
                Some((_, '\\')) => {
                    if let Some(escaped) = self.escape_char() {
                        value.push(escaped);
                    }
                }
                Some((_, ch)) => value.push(ch),
                None => {
                    let span = Span::from_usize(token_start, self.pos);
                    self.diagnostics.push(
                        Diagnostic::error(DiagnosticKind::Lexer, span, "unterminated string")
                            .with_code(ErrorCode::UnterminatedString)
                            .with_label(Label::new(span, "string starts here and never ends"))
                            .with_help("add a closing quote `\"` to terminate the string"),
                    );
                    break;
                }
            }
        }

        TokenKind::String(value)
    }

    /// Parse an escape character sequence.
    /// 解析转义字符序列。
    ///
    /// Unknown escapes report an error and drop the escaped character.
    /// 未知的转义序列报告错误并丢弃被转义的字符。
    fn escape_char(&mut self) -> Option<char> {
        match self.advance() {
            Some((_, 'n')) => Some('\n'),  // newline - 换行
            Some((_, '\\')) => Some('\\'), // backslash - 反斜杠
            Some((_, '"')) => Some('"'),   // double quote - 双引号
            Some((pos, ch)) => {
                let span = Span::from_usize(pos - 1, self.pos);
                self.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::Lexer,
                        span,
                        format!("invalid escape sequence: \\{}", ch),
                    )
                    .with_code(ErrorCode::InvalidEscape)
                    .with_help("only `\\\"`, `\\\\` and `\\n` are valid escape sequences"),
                );
                None
            }
            None => None,
        }
    }

    /// Parse a number literal (integer or float).
    /// 解析数字字面量（整数或浮点数）。
    fn number(&mut self, first: char, start: usize) -> TokenKind {
        let mut value = String::from(first);
        let mut is_float = false;

        // Integer part - 整数部分
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() {
                value.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Decimal part, only when a digit follows the dot
        // 小数部分，仅当小数点后跟数字时
        if self.peek_char() == Some('.') {
            let mut chars = self.chars.clone();
            chars.next(); // skip .
            if let Some((_, ch)) = chars.next()
                && ch.is_ascii_digit()
            {
                self.advance(); // consume .
                value.push('.');
                is_float = true;

                while let Some(ch) = self.peek_char() {
                    if ch.is_ascii_digit() {
                        value.push(ch);
                        self.advance();
                    } else {
                        break;
                    }
                }
            }
        }

        if is_float {
            // A digits-and-dot string always parses as f64.
            // 由数字和小数点组成的字符串总能解析为 f64。
            TokenKind::Float(value.parse::<f64>().unwrap_or(f64::INFINITY))
        } else {
            match value.parse::<i64>() {
                Ok(i) => TokenKind::Int(i),
                Err(_) => {
                    let span = Span::from_usize(start, self.pos);
                    self.diagnostics.push(
                        Diagnostic::error(
                            DiagnosticKind::Lexer,
                            span,
                            format!("integer literal `{}` is too large", value),
                        )
                        .with_code(ErrorCode::InvalidNumber),
                    );
                    TokenKind::Int(0)
                }
            }
        }
    }

    /// Parse an identifier or keyword.
    /// 解析标识符或关键字。
    fn identifier(&mut self, first: char) -> TokenKind {
        let mut value = String::from(first);

        while let Some(ch) = self.peek_char() {
            if ch.is_alphabetic() || ch.is_ascii_digit() || ch == '_' {
                value.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match TokenKind::keyword_from_str(&value) {
            Some(keyword) => keyword,
            None => TokenKind::Ident(value),
        }
    }

    /// Report an unexpected character; the character is skipped and no token
    /// is emitted for it.
    /// 报告意外字符；该字符被跳过，不会为它产出 token。
    fn error_unexpected_char(&mut self, ch: char, start: usize) {
        let span = Span::from_usize(start, self.pos);
        self.diagnostics.push(
            Diagnostic::error(
                DiagnosticKind::Lexer,
                span,
                format!("unexpected character: `{}`", ch),
            )
            .with_code(ErrorCode::UnexpectedCharacter)
            .with_label(Label::new(span, "this character is not valid here")),
        );
    }
}
