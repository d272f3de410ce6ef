//! Error codes for Draw++ diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexer errors (E0001 - E0099)
    UnexpectedCharacter,
    UnterminatedString,
    InvalidEscape,
    InvalidNumber,

    // Parser errors (E0100 - E0199)
    UnexpectedToken,
    ExpectedExpression,
    ExpectedStatement,
    ExpectedIdentifier,
    ExpectedBlock,
    MissingSemicolon,
    UnclosedDelimiter,
    ElseWithoutIf,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::UnexpectedCharacter => "E0001",
            ErrorCode::UnterminatedString => "E0002",
            ErrorCode::InvalidEscape => "E0003",
            ErrorCode::InvalidNumber => "E0004",

            // Parser
            ErrorCode::UnexpectedToken => "E0100",
            ErrorCode::ExpectedExpression => "E0101",
            ErrorCode::ExpectedStatement => "E0102",
            ErrorCode::ExpectedIdentifier => "E0103",
            ErrorCode::ExpectedBlock => "E0104",
            ErrorCode::MissingSemicolon => "E0105",
            ErrorCode::UnclosedDelimiter => "E0106",
            ErrorCode::ElseWithoutIf => "E0107",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::UnexpectedCharacter => "unexpected character in input",
            ErrorCode::UnterminatedString => "string literal is not terminated",
            ErrorCode::InvalidEscape => "invalid escape sequence in string",
            ErrorCode::InvalidNumber => "invalid number literal",

            // Parser
            ErrorCode::UnexpectedToken => "unexpected token",
            ErrorCode::ExpectedExpression => "expected an expression",
            ErrorCode::ExpectedStatement => "expected a statement",
            ErrorCode::ExpectedIdentifier => "expected an identifier",
            ErrorCode::ExpectedBlock => "expected a block",
            ErrorCode::MissingSemicolon => "missing semicolon",
            ErrorCode::UnclosedDelimiter => "unclosed delimiter",
            ErrorCode::ElseWithoutIf => "`else` without a matching `if`",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnterminatedString => {
                Some("add a closing quote `\"` to terminate the string")
            }
            ErrorCode::InvalidEscape => {
                Some("only `\\\"`, `\\\\` and `\\n` are valid escape sequences")
            }
            ErrorCode::MissingSemicolon => Some("add `;` at the end of the statement"),
            ErrorCode::UnclosedDelimiter => Some("add the matching closing delimiter"),
            ErrorCode::ExpectedBlock => Some("wrap the body in `{` and `}`"),
            ErrorCode::ElseWithoutIf => {
                Some("add an `if` before this `else`, or remove the `else`")
            }
            _ => None,
        }
    }
}
