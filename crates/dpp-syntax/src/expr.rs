//! Expression AST nodes.
//! 表达式 AST 节点。

use crate::Ident;
use dpp_common::Span;

/// An expression.
/// 表达式。
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// A placeholder for an expression that failed to parse.
    /// 解析失败的表达式占位符。
    pub fn error(span: Span) -> Self {
        Self {
            kind: ExprKind::Error,
            span,
        }
    }
}

/// Expression kind.
/// 表达式类型。
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// Integer literal / 整数字面量
    Int(i64),
    /// Float literal / 浮点数字面量
    Float(f64),
    /// String literal / 字符串字面量
    String(String),
    /// Boolean literal / 布尔字面量
    Bool(bool),

    /// Variable reference / 变量引用
    Var(Ident),

    /// Parenthesized expression `(a + b)` / 括号表达式
    Paren(Box<Expr>),

    /// Function call `Circle(5)`, optionally with an inline cursor selector
    /// `Circle(5) wield c` / 函数调用，可带内联光标选择器
    Call {
        callee: Ident,
        args: Vec<Expr>,
        wield: Option<Box<Expr>>,
    },

    /// Binary operation `a + b` / 二元运算
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Unary operation `-a` or `not a` / 一元运算
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// Placeholder where an expression failed to parse; downstream stages
    /// must tolerate it. / 表达式解析失败处的占位符，后续阶段必须容忍它。
    Error,
}

/// Binary operators.
/// 二元运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic 算术运算
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /

    // Comparison 比较运算
    Eq, // ==
    Ne, // !=
    Lt, // <
    Le, // <=
    Gt, // >
    Ge, // >=

    // Logical 逻辑运算
    And, // and
    Or,  // or
}

/// Unary operators.
/// 一元运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg, // - 取负
    Not, // not 取反
}
