//! Type AST nodes.
//! 类型 AST 节点。

use dpp_common::Span;

/// A built-in type annotation, as written in a declaration.
/// 声明中书写的内置类型标注。
#[derive(Debug, Clone)]
pub struct Type {
    pub kind: TypeKind,
    pub span: Span,
}

impl Type {
    pub fn new(kind: TypeKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Type kind. Draw++ has a fixed set of built-in types.
/// 类型种类。Draw++ 拥有固定的内置类型集合。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// `int` / 整数类型
    Int,
    /// `float` / 浮点类型
    Float,
    /// `bool` / 布尔类型
    Bool,
    /// `string` / 字符串类型
    String,
    /// `cursor` / 光标类型
    Cursor,
}

impl TypeKind {
    pub fn name(&self) -> &'static str {
        match self {
            TypeKind::Int => "int",
            TypeKind::Float => "float",
            TypeKind::Bool => "bool",
            TypeKind::String => "string",
            TypeKind::Cursor => "cursor",
        }
    }
}
