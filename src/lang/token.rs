use super::{Column, Line};
use std::collections::HashMap;

thread_local!(
    static KEYWORDS: HashMap<&'static str, TokenKind> = TokenKind::keywords()
        .iter()
        .map(|kind| (kind.keyword(), *kind))
        .collect();
);

/// A classified slice of source text.
///
/// Error tokens are the exception: their lexeme is the diagnostic message
/// rather than a slice of the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub line: Line,
    pub column: Column,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, lexeme: &'a str, line: Line, column: Column) -> Token<'a> {
        Token {
            kind,
            lexeme,
            line,
            column,
        }
    }
}

impl<'a> std::fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Semicolon,
    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Plus,
    PlusEqual,
    Minus,
    MinusEqual,
    Star,
    StarEqual,
    Slash,
    SlashEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    // Literals.
    Identifier,
    String,
    Number,
    // Keywords.
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Let,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    While,

    Error,
    Eof,
}

impl TokenKind {
    pub fn from_keyword(s: &str) -> Option<TokenKind> {
        KEYWORDS.with(|kw| kw.get(s).copied())
    }

    fn keywords() -> &'static [TokenKind] {
        use TokenKind::*;
        &[
            And, Class, Else, False, For, Fun, If, Let, Nil, Or, Print, Return, Super, This, True,
            While,
        ]
    }

    fn keyword(self) -> &'static str {
        use TokenKind::*;
        match self {
            And => "and",
            Class => "class",
            Else => "else",
            False => "false",
            For => "for",
            Fun => "fun",
            If => "if",
            Let => "let",
            Nil => "nil",
            Or => "or",
            Print => "print",
            Return => "return",
            Super => "super",
            This => "this",
            True => "true",
            While => "while",
            _ => "",
        }
    }

    /// The compound form selected by a trailing `=`.
    pub fn with_equal(self) -> TokenKind {
        use TokenKind::*;
        match self {
            Bang => BangEqual,
            Equal => EqualEqual,
            Plus => PlusEqual,
            Minus => MinusEqual,
            Star => StarEqual,
            Slash => SlashEqual,
            Greater => GreaterEqual,
            Less => LessEqual,
            _ => self,
        }
    }
}
