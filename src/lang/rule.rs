use super::token::TokenKind;

/// Binding power of an operator, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    None,
    Assignment, // =
    Or,         // or
    And,        // and
    Equality,   // == !=
    Comparison, // < > <= >=
    Term,       // + -
    Factor,     // * /
    Unary,      // ! -
    Call,       // . ()
    Primary,
}

impl Precedence {
    /// One level tighter. Binary operators parse their right operand here
    /// so that equal operators associate to the left.
    pub fn next(self) -> Precedence {
        use Precedence::*;
        match self {
            None => Assignment,
            Assignment => Or,
            Or => And,
            And => Equality,
            Equality => Comparison,
            Comparison => Term,
            Term => Factor,
            Factor => Unary,
            Unary => Call,
            Call | Primary => Primary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Grouping,
    Unary,
    Binary,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseRule {
    pub prefix: Option<Handler>,
    pub infix: Option<Handler>,
    pub precedence: Precedence,
}

const NONE: ParseRule = ParseRule {
    prefix: None,
    infix: None,
    precedence: Precedence::None,
};

impl ParseRule {
    pub fn for_kind(kind: TokenKind) -> ParseRule {
        use TokenKind::*;
        match kind {
            LeftParen => ParseRule {
                prefix: Some(Handler::Grouping),
                ..NONE
            },
            Minus => ParseRule {
                prefix: Some(Handler::Unary),
                infix: Some(Handler::Binary),
                precedence: Precedence::Term,
            },
            Plus => ParseRule {
                infix: Some(Handler::Binary),
                precedence: Precedence::Term,
                ..NONE
            },
            Star | Slash => ParseRule {
                infix: Some(Handler::Binary),
                precedence: Precedence::Factor,
                ..NONE
            },
            Number => ParseRule {
                prefix: Some(Handler::Number),
                ..NONE
            },
            RightParen | LeftBrace | RightBrace | Comma | Dot | Semicolon | Bang | BangEqual
            | Equal | EqualEqual | PlusEqual | MinusEqual | StarEqual | SlashEqual | Greater
            | GreaterEqual | Less | LessEqual | Identifier | String | And | Class | Else
            | False | For | Fun | If | Let | Nil | Or | Print | Return | Super | This | True
            | While | Error | Eof => NONE,
        }
    }
}
