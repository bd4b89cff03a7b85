use super::{token::*, Column, Line};

fn is_nyx_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_nyx_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_nyx_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// ## Lazy tokenizer over borrowed source text
///
/// `scan_token` hands out one token at a time and keeps returning `Eof` once the
/// input is exhausted. As an `Iterator` the scanner stops after the first `Eof`.

#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    start: usize,
    current: usize,
    line: Line,
    column: Column,
    start_line: Line,
    start_column: Column,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
            finished: false,
        }
    }

    pub fn reset(&mut self, source: &'a str) {
        *self = Scanner::new(source);
    }

    pub fn scan_token(&mut self) -> Token<'a> {
        self.skip_whitespace();
        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;

        let ch = match self.advance() {
            Some(ch) => ch,
            None => return self.make_token(TokenKind::Eof),
        };
        if is_nyx_alphabetic(ch) {
            return self.identifier();
        }
        if is_nyx_digit(ch) {
            return self.number();
        }
        use TokenKind::*;
        match ch {
            '(' => self.make_token(LeftParen),
            ')' => self.make_token(RightParen),
            '{' => self.make_token(LeftBrace),
            '}' => self.make_token(RightBrace),
            ',' => self.make_token(Comma),
            '.' => self.make_token(Dot),
            ';' => self.make_token(Semicolon),
            '+' => self.compound(Plus),
            '-' => self.compound(Minus),
            '*' => self.compound(Star),
            '/' => self.compound(Slash),
            '!' => self.compound(Bang),
            '=' => self.compound(Equal),
            '<' => self.compound(Less),
            '>' => self.compound(Greater),
            '"' => self.string(),
            _ => self.error_token("Unexpected character."),
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(
            kind,
            &self.source[self.start..self.current],
            self.start_line,
            self.start_column,
        )
    }

    fn error_token(&self, message: &'static str) -> Token<'a> {
        Token::new(
            TokenKind::Error,
            message,
            self.start_line,
            self.start_column,
        )
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if is_nyx_whitespace(ch) {
                self.advance();
            } else if ch == '/' && self.peek_next() == Some('/') {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else {
                return;
            }
        }
    }

    fn compound(&mut self, kind: TokenKind) -> Token<'a> {
        if self.matches('=') {
            self.make_token(kind.with_equal())
        } else {
            self.make_token(kind)
        }
    }

    fn identifier(&mut self) -> Token<'a> {
        while let Some(ch) = self.peek() {
            if !is_nyx_alphabetic(ch) && !is_nyx_digit(ch) {
                break;
            }
            self.advance();
        }
        let text = &self.source[self.start..self.current];
        self.make_token(TokenKind::from_keyword(text).unwrap_or(TokenKind::Identifier))
    }

    fn number(&mut self) -> Token<'a> {
        while self.peek().map_or(false, is_nyx_digit) {
            self.advance();
        }
        if self.peek() == Some('.') && self.peek_next().map_or(false, is_nyx_digit) {
            self.advance();
            while self.peek().map_or(false, is_nyx_digit) {
                self.advance();
            }
        }
        self.make_token(TokenKind::Number)
    }

    fn string(&mut self) -> Token<'a> {
        loop {
            match self.advance() {
                Some('"') => return self.make_token(TokenKind::String),
                Some(_) => continue,
                None => return self.error_token("Unterminated string."),
            }
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.scan_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}
