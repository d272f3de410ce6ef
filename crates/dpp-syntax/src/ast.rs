//! Top-level AST definitions.
//! 顶层 AST 定义。

use crate::{Expr, Type};
use dpp_common::Span;

/// A complete Draw++ program.
/// 完整的 Draw++ 程序。
#[derive(Debug, Clone)]
pub struct Program {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

/// A statement.
/// 语句。
#[derive(Debug, Clone)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Statement kind.
/// 语句类型。
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// `int x = 5;` / 变量声明
    VarDecl {
        ty: Type,
        name: Ident,
        value: Option<Expr>,
    },

    /// `x = 5;` / 赋值
    Assign { target: Ident, value: Expr },

    /// `fct name(int a, float b) { ... }` / 函数声明
    FnDecl {
        name: Ident,
        params: Vec<Param>,
        body: Block,
    },

    /// `if cond { ... } else if cond { ... } else { ... }` / 条件语句
    If {
        condition: Expr,
        then_block: Block,
        else_ifs: Vec<ElseIf>,
        else_block: Option<Block>,
    },

    /// `while cond { ... }` / 循环语句
    While { condition: Expr, body: Block },

    /// `wield c { ... }` / wield 块语句
    Wield { selector: Expr, body: Block },

    /// `canvas 800 600;` / 画布声明
    Canvas { width: Expr, height: Expr },

    /// A call expression in statement position: `Circle(5) wield c;`
    /// 语句位置的调用表达式
    Call(Expr),

    /// A standalone block `{ ... }` / 独立块
    Block(Block),
}

/// A braced block of statements.
/// 花括号包围的语句块。
#[derive(Debug, Clone)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>, span: Span) -> Self {
        Self { stmts, span }
    }

    /// An empty block placeholder at `span`, used when a block is missing.
    /// 位于 `span` 的空块占位符，在块缺失时使用。
    pub fn empty(span: Span) -> Self {
        Self {
            stmts: vec![],
            span,
        }
    }
}

/// An `else if` arm of an if statement.
/// if 语句中的 `else if` 分支。
#[derive(Debug, Clone)]
pub struct ElseIf {
    pub condition: Expr,
    pub block: Block,
    pub span: Span,
}

/// A function parameter `type name`.
/// 函数参数 `type name`。
#[derive(Debug, Clone)]
pub struct Param {
    pub ty: Type,
    pub name: Ident,
    pub span: Span,
}

/// An identifier.
/// 标识符。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}
