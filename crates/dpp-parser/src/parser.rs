//! The Draw++ parser.

use dpp_common::{BytePos, Span};
use dpp_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use dpp_lexer::{Token, TokenKind};
use dpp_syntax::*;

use crate::recovery::{is_stmt_end, is_stmt_start};

/// The Draw++ parser.
///
/// A recursive descent parser with statement-level error recovery: each
/// failure produces one diagnostic, then the parser skips to the next
/// statement boundary and keeps going.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    /// The token list is expected to end with `Eof`, as `Lexer::tokenize`
    /// guarantees. A missing terminator is appended rather than assumed.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last().map(|t| &t.kind), Some(TokenKind::Eof)) {
            let end = tokens.last().map(|t| t.span.end).unwrap_or(BytePos::ZERO);
            tokens.push(Token::new(TokenKind::Eof, Span::new(end, end)));
        }
        Self {
            tokens,
            pos: 0,
            diagnostics: Vec::new(),
        }
    }

    pub fn diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Parse a complete program.
    pub fn parse_program(&mut self) -> Program {
        let start = self.current_span();
        let mut stmts = Vec::new();

        while !self.at_end() {
            if let Some(stmt) = self.parse_stmt() {
                stmts.push(stmt);
            } else {
                // Error recovery: synchronize to next statement boundary
                self.synchronize();
            }
        }

        let end = self.current_span();
        Program {
            stmts,
            span: start.merge(end),
        }
    }

    // ========== Statement Parsing ==========

    fn parse_stmt(&mut self) -> Option<Stmt> {
        match self.current_kind() {
            TokenKind::KwInt
            | TokenKind::KwFloat
            | TokenKind::KwBool
            | TokenKind::KwString
            | TokenKind::KwCursor => Some(self.parse_var_decl()),
            TokenKind::Fct => Some(self.parse_fn_decl()),
            TokenKind::If => Some(self.parse_if_stmt()),
            TokenKind::Else => self.parse_stray_else(),
            TokenKind::While => Some(self.parse_while_stmt()),
            TokenKind::Wield => Some(self.parse_wield_stmt()),
            TokenKind::Canvas => Some(self.parse_canvas_stmt()),
            TokenKind::LBrace => {
                let block = self.parse_block();
                let span = block.span;
                Some(Stmt::new(StmtKind::Block(block), span))
            }
            TokenKind::Ident(_) => {
                if matches!(self.peek_kind(1), TokenKind::Eq) {
                    Some(self.parse_assign_stmt())
                } else if matches!(self.peek_kind(1), TokenKind::LParen) {
                    Some(self.parse_call_stmt())
                } else {
                    self.error_at(
                        self.current_span(),
                        "expected `=` or `(` after identifier",
                        ErrorCode::ExpectedStatement,
                    );
                    None
                }
            }
            _ => {
                self.error_at(
                    self.current_span(),
                    "expected a statement",
                    ErrorCode::ExpectedStatement,
                );
                None
            }
        }
    }

    /// `type name [= expr] ;`
    fn parse_var_decl(&mut self) -> Stmt {
        let start = self.current_span();
        let ty = self.parse_type();
        let name = self.parse_ident();

        let value = if self.eat(TokenKind::Eq) {
            Some(self.parse_expr())
        } else {
            None
        };
        self.expect_semicolon();

        let end = self.previous_span();
        Stmt::new(StmtKind::VarDecl { ty, name, value }, start.merge(end))
    }

    /// `fct name [(type name, ...)] block`
    ///
    /// The parameter list is optional as a whole.
    fn parse_fn_decl(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // fct
        let name = self.parse_ident();

        let params = if self.check(TokenKind::LParen) {
            let open = self.current_span();
            self.advance(); // (
            let params = self.parse_params();
            self.expect_closing(TokenKind::RParen, open, ")");
            params
        } else {
            vec![]
        };

        let body = self.expect_block();
        let end = self.previous_span();
        Stmt::new(StmtKind::FnDecl { name, params, body }, start.merge(end))
    }

    fn parse_params(&mut self) -> Vec<Param> {
        let mut params = Vec::new();

        while !self.check(TokenKind::RParen) && !self.at_end() {
            let start = self.current_span();
            if self.current_kind().is_type_keyword() {
                let ty = self.parse_type();
                let name = self.parse_ident();
                let end = self.previous_span();
                params.push(Param {
                    ty,
                    name,
                    span: start.merge(end),
                });
            } else {
                self.error_at(start, "expected a parameter type", ErrorCode::UnexpectedToken);
                // Recovery: skip to comma or closing paren
                while !self.check(TokenKind::Comma)
                    && !self.check(TokenKind::RParen)
                    && !self.at_end()
                {
                    self.advance();
                }
            }

            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        params
    }

    /// `if cond block {else if cond block} [else block]`
    fn parse_if_stmt(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // if
        let condition = self.parse_expr();
        let then_block = self.expect_block();

        let mut else_ifs = Vec::new();
        let mut else_block = None;

        while self.check(TokenKind::Else) {
            let else_start = self.current_span();
            self.advance(); // else
            if self.eat(TokenKind::If) {
                let condition = self.parse_expr();
                let block = self.expect_block();
                let end = self.previous_span();
                else_ifs.push(ElseIf {
                    condition,
                    block,
                    span: else_start.merge(end),
                });
            } else {
                else_block = Some(self.expect_block());
                break;
            }
        }

        let end = self.previous_span();
        Stmt::new(
            StmtKind::If {
                condition,
                then_block,
                else_ifs,
                else_block,
            },
            start.merge(end),
        )
    }

    /// An `else` with no preceding `if` gets its own error, and its body is
    /// still parsed so the tree stays usable.
    fn parse_stray_else(&mut self) -> Option<Stmt> {
        let span = self.current_span();
        self.diagnostics.push(
            Diagnostic::error(DiagnosticKind::Parser, span, "`else` without a matching `if`")
                .with_code(ErrorCode::ElseWithoutIf)
                .with_label(Label::new(span, "no `if` precedes this `else`"))
                .with_help("add an `if` before this `else`, or remove the `else`"),
        );
        self.advance(); // else

        if self.check(TokenKind::If) {
            Some(self.parse_if_stmt())
        } else if self.check(TokenKind::LBrace) {
            let block = self.parse_block();
            let stmt_span = span.merge(block.span);
            Some(Stmt::new(StmtKind::Block(block), stmt_span))
        } else {
            None
        }
    }

    /// `while cond block`
    fn parse_while_stmt(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // while
        let condition = self.parse_expr();
        let body = self.expect_block();
        let end = self.previous_span();
        Stmt::new(StmtKind::While { condition, body }, start.merge(end))
    }

    /// `wield expr block`
    fn parse_wield_stmt(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // wield
        let selector = self.parse_expr();
        let body = self.expect_block();
        let end = self.previous_span();
        Stmt::new(StmtKind::Wield { selector, body }, start.merge(end))
    }

    /// `canvas <number> <number> ;`
    ///
    /// Both operands must be number literal tokens.
    fn parse_canvas_stmt(&mut self) -> Stmt {
        let start = self.current_span();
        self.advance(); // canvas
        let width = self.parse_canvas_operand();
        let height = self.parse_canvas_operand();
        self.expect_semicolon();
        let end = self.previous_span();
        Stmt::new(StmtKind::Canvas { width, height }, start.merge(end))
    }

    fn parse_canvas_operand(&mut self) -> Expr {
        let span = self.current_span();
        match self.current_kind().clone() {
            TokenKind::Int(n) => {
                self.advance();
                Expr::new(ExprKind::Int(n), span)
            }
            TokenKind::Float(f) => {
                self.advance();
                Expr::new(ExprKind::Float(f), span)
            }
            _ => {
                self.error_at(
                    span,
                    "expected a number literal for the canvas size",
                    ErrorCode::UnexpectedToken,
                );
                // Consume the offending token unless it closes the statement
                if !self.check(TokenKind::Semicolon)
                    && !self.check(TokenKind::LBrace)
                    && !self.check(TokenKind::RBrace)
                    && !is_stmt_start(self.current_kind())
                    && !self.at_end()
                {
                    self.advance();
                }
                Expr::error(span)
            }
        }
    }

    /// `name = expr ;`
    fn parse_assign_stmt(&mut self) -> Stmt {
        let start = self.current_span();
        let target = self.parse_ident();
        self.advance(); // =
        let value = self.parse_expr();
        self.expect_semicolon();
        let end = self.previous_span();
        Stmt::new(StmtKind::Assign { target, value }, start.merge(end))
    }

    /// A call expression in statement position: `Circle(5) wield c ;`
    fn parse_call_stmt(&mut self) -> Stmt {
        let start = self.current_span();
        let expr = self.parse_call_expr();
        self.expect_semicolon();
        let end = self.previous_span();
        Stmt::new(StmtKind::Call(expr), start.merge(end))
    }

    /// Parse a braced block. The current token must be `{`.
    fn parse_block(&mut self) -> Block {
        let start = self.current_span();
        self.advance(); // {

        let mut stmts = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.at_end() {
            if let Some(stmt) = self.parse_stmt() {
                stmts.push(stmt);
            } else {
                self.synchronize();
            }
        }

        if !self.eat(TokenKind::RBrace) {
            self.diagnostics.push(
                Diagnostic::error(DiagnosticKind::Parser, start, "unclosed block")
                    .with_code(ErrorCode::UnclosedDelimiter)
                    .with_label(Label::new(start, "this `{` is never closed"))
                    .with_help("add the matching closing delimiter"),
            );
        }

        Block::new(stmts, start.merge(self.previous_span()))
    }

    /// Parse a block where one is required; a missing block yields an empty
    /// placeholder with a diagnostic.
    fn expect_block(&mut self) -> Block {
        if self.check(TokenKind::LBrace) {
            self.parse_block()
        } else {
            let span = self.current_span();
            self.diagnostics.push(
                Diagnostic::error(DiagnosticKind::Parser, span, "expected a block")
                    .with_code(ErrorCode::ExpectedBlock)
                    .with_label(Label::new(span, "a `{ ... }` block should be here"))
                    .with_help("wrap the body in `{` and `}`"),
            );
            Block::empty(span)
        }
    }

    fn parse_type(&mut self) -> Type {
        let span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::KwInt => TypeKind::Int,
            TokenKind::KwFloat => TypeKind::Float,
            TokenKind::KwBool => TypeKind::Bool,
            TokenKind::KwString => TypeKind::String,
            TokenKind::KwCursor => TypeKind::Cursor,
            _ => {
                self.error_at(span, "expected a type", ErrorCode::UnexpectedToken);
                return Type::new(TypeKind::Int, span);
            }
        };
        self.advance();
        Type::new(kind, span)
    }

    fn parse_ident(&mut self) -> Ident {
        let span = self.current_span();
        match self.current_kind() {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ident::new(name, span)
            }
            _ => {
                self.error_at(span, "expected an identifier", ErrorCode::ExpectedIdentifier);
                Ident::new("", span)
            }
        }
    }

    // ========== Expression Parsing ==========

    fn parse_expr(&mut self) -> Expr {
        self.parse_or_expr()
    }

    fn parse_or_expr(&mut self) -> Expr {
        let mut left = self.parse_and_expr();

        while self.eat(TokenKind::Or) {
            let right = self.parse_and_expr();
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op: BinOp::Or,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        left
    }

    fn parse_and_expr(&mut self) -> Expr {
        let mut left = self.parse_comparison_expr();

        while self.eat(TokenKind::And) {
            let right = self.parse_comparison_expr();
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op: BinOp::And,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        left
    }

    /// Comparison does not chain: at most one operator per tier. A second
    /// comparison operator is left for the enclosing context to reject.
    fn parse_comparison_expr(&mut self) -> Expr {
        let left = self.parse_additive_expr();

        let op = match self.current_kind() {
            TokenKind::EqEq => BinOp::Eq,
            TokenKind::BangEq => BinOp::Ne,
            TokenKind::Lt => BinOp::Lt,
            TokenKind::LtEq => BinOp::Le,
            TokenKind::Gt => BinOp::Gt,
            TokenKind::GtEq => BinOp::Ge,
            _ => return left,
        };
        self.advance();
        let right = self.parse_additive_expr();
        let span = left.span.merge(right.span);
        Expr::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        )
    }

    fn parse_additive_expr(&mut self) -> Expr {
        let mut left = self.parse_multiplicative_expr();

        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative_expr();
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        left
    }

    fn parse_multiplicative_expr(&mut self) -> Expr {
        let mut left = self.parse_unary_expr();

        loop {
            let op = match self.current_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary_expr();
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        left
    }

    fn parse_unary_expr(&mut self) -> Expr {
        let start = self.current_span();

        if self.eat(TokenKind::Not) {
            let operand = self.parse_unary_expr();
            let span = start.merge(operand.span);
            return Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Not,
                    operand: Box::new(operand),
                },
                span,
            );
        }

        if self.eat(TokenKind::Minus) {
            let operand = self.parse_unary_expr();
            let span = start.merge(operand.span);
            return Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Neg,
                    operand: Box::new(operand),
                },
                span,
            );
        }

        self.parse_call_expr()
    }

    /// `ident ( args ) [wield unary]` or a primary expression.
    ///
    /// The inline `wield` selector binds at the unary tier, so in
    /// `Circle(5) wield c + 1` the selector is `c` and `+ 1` belongs to the
    /// enclosing additive expression.
    fn parse_call_expr(&mut self) -> Expr {
        let start = self.current_span();

        if matches!(self.current_kind(), TokenKind::Ident(_))
            && matches!(self.peek_kind(1), TokenKind::LParen)
        {
            let callee = self.parse_ident();
            let open = self.current_span();
            self.advance(); // (
            let args = self.parse_args();
            self.expect_closing(TokenKind::RParen, open, ")");
            let mut span = start.merge(self.previous_span());

            let wield = if self.eat(TokenKind::Wield) {
                let selector = self.parse_unary_expr();
                span = span.merge(selector.span);
                Some(Box::new(selector))
            } else {
                None
            };

            return Expr::new(
                ExprKind::Call {
                    callee,
                    args,
                    wield,
                },
                span,
            );
        }

        self.parse_primary_expr()
    }

    fn parse_args(&mut self) -> Vec<Expr> {
        let mut args = Vec::new();
        if self.check(TokenKind::RParen) {
            return args;
        }

        loop {
            args.push(self.parse_expr());
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        args
    }

    fn parse_primary_expr(&mut self) -> Expr {
        let start = self.current_span();

        match self.current_kind().clone() {
            TokenKind::Int(n) => {
                self.advance();
                Expr::new(ExprKind::Int(n), start)
            }
            TokenKind::Float(f) => {
                self.advance();
                Expr::new(ExprKind::Float(f), start)
            }
            TokenKind::String(s) => {
                self.advance();
                Expr::new(ExprKind::String(s), start)
            }
            TokenKind::True => {
                self.advance();
                Expr::new(ExprKind::Bool(true), start)
            }
            TokenKind::False => {
                self.advance();
                Expr::new(ExprKind::Bool(false), start)
            }
            TokenKind::Ident(_) => {
                let ident = self.parse_ident();
                let span = ident.span;
                Expr::new(ExprKind::Var(ident), span)
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr();
                self.expect_closing(TokenKind::RParen, start, ")");
                let span = start.merge(self.previous_span());
                Expr::new(ExprKind::Paren(Box::new(inner)), span)
            }
            _ => {
                // Report the failure but do not consume the token; the
                // enclosing construct may still make sense of it.
                self.error_at(start, "expected an expression", ErrorCode::ExpectedExpression);
                Expr::error(start)
            }
        }
    }

    // ========== Token Helpers ==========

    fn current(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .unwrap_or(&self.tokens[self.tokens.len() - 1])
    }

    fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    fn current_span(&self) -> Span {
        self.current().span
    }

    fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    fn peek_kind(&self, n: usize) -> &TokenKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| &t.kind)
            .unwrap_or(&TokenKind::Eof)
    }

    fn at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    fn check(&self, kind: TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(&kind)
    }

    fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect a statement terminator. The error is anchored at the token
    /// before the gap, then parsing skips to the next statement boundary.
    fn expect_semicolon(&mut self) {
        if !self.eat(TokenKind::Semicolon) {
            let span = self.previous_span();
            self.diagnostics.push(
                Diagnostic::error(DiagnosticKind::Parser, span, "missing `;` after statement")
                    .with_code(ErrorCode::MissingSemicolon)
                    .with_label(Label::new(span, "a `;` should follow this"))
                    .with_help("add `;` at the end of the statement"),
            );
            self.recover_to_stmt_boundary();
        }
    }

    /// Expect a closing delimiter for the one opened at `open_span`.
    fn expect_closing(&mut self, kind: TokenKind, open_span: Span, what: &str) {
        if !self.eat(kind) {
            let span = self.current_span();
            self.diagnostics.push(
                Diagnostic::error(DiagnosticKind::Parser, span, format!("expected `{what}`"))
                    .with_code(ErrorCode::UnclosedDelimiter)
                    .with_label(Label::new(open_span, "unclosed delimiter opened here"))
                    .with_help("add the matching closing delimiter"),
            );
        }
    }

    fn error_at(&mut self, span: Span, message: &str, code: ErrorCode) {
        self.diagnostics.push(
            Diagnostic::error(DiagnosticKind::Parser, span, message)
                .with_code(code)
                .with_label(Label::new(span, "here")),
        );
    }

    // ========== Error Recovery ==========

    /// Synchronize to the next statement boundary after a failed statement.
    ///
    /// Skips tokens until a `;` (consumed), a `{` or `}` (left for statement
    /// dispatch), a token that can start a statement, or the end of input.
    /// At least one token is always consumed so the parser makes progress.
    fn synchronize(&mut self) {
        let mut advanced = false;

        while !self.at_end() {
            if advanced {
                if self.check(TokenKind::LBrace) || self.check(TokenKind::RBrace) {
                    return;
                }
                if is_stmt_start(self.current_kind()) {
                    return;
                }
            }

            if self.check(TokenKind::Semicolon) {
                self.advance();
                return;
            }

            self.advance();
            advanced = true;
        }
    }

    /// Skip to the next statement boundary without the minimum-consume
    /// guarantee. Used after a missing semicolon, where the statement itself
    /// was already produced.
    fn recover_to_stmt_boundary(&mut self) {
        while !self.at_end() {
            if is_stmt_end(self.current_kind()) {
                // A `;` closes the broken statement; a `}` belongs to the
                // enclosing block and is left in place.
                if self.check(TokenKind::Semicolon) {
                    self.advance();
                }
                return;
            }
            if self.check(TokenKind::LBrace) || is_stmt_start(self.current_kind()) {
                return;
            }
            self.advance();
        }
    }
}
