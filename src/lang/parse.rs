use super::lex::Scanner;
use super::rule::{Handler, ParseRule, Precedence};
use super::token::{Token, TokenKind};
use super::Error;
use crate::mach::{Chunk, Opcode, Val, STACK_MAX};
use std::convert::TryFrom;
use tracing::{debug, trace};

/// Deepest recursion of `parse_precedence` accepted in one expression.
pub const MAX_DEPTH: usize = 1024;

/// Compiles one expression into `chunk`, finishing with `RETURN`.
///
/// On failure the chunk may hold partial bytecode and must not be run.
pub fn compile_into(source: &str, chunk: &mut Chunk) -> Result<(), Vec<Error>> {
    Compiler::new(source, chunk).compile()
}

/// ## Single-pass compiler
///
/// Precedence climbing drives the scanner one token at a time and emits
/// bytecode straight into the target chunk. There is no syntax tree.

pub struct Compiler<'a, 'c> {
    scanner: Scanner<'a>,
    chunk: &'c mut Chunk,
    current: Token<'a>,
    previous: Token<'a>,
    depth: usize,
    pending: usize,
    errors: Vec<Error>,
}

impl<'a, 'c> Compiler<'a, 'c> {
    pub fn new(source: &'a str, chunk: &'c mut Chunk) -> Compiler<'a, 'c> {
        let eof = Token::new(TokenKind::Eof, "", 1, 1);
        Compiler {
            scanner: Scanner::new(source),
            chunk,
            current: eof,
            previous: eof,
            depth: 0,
            pending: 0,
            errors: vec![],
        }
    }

    pub fn compile(mut self) -> Result<(), Vec<Error>> {
        self.advance();
        self.expression();
        self.consume(TokenKind::Eof, "Expect end of expression.");
        self.emit_opcode(Opcode::Return);
        debug!(
            bytes = self.chunk.len(),
            constants = self.chunk.constants().len(),
            errors = self.errors.len(),
            "compiled chunk"
        );
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    fn advance(&mut self) {
        self.previous = self.current;
        loop {
            self.current = self.scanner.scan_token();
            trace!(
                line = self.current.line,
                column = self.current.column,
                kind = ?self.current.kind,
                lexeme = self.current.lexeme,
                "token"
            );
            if self.current.kind != TokenKind::Error {
                break;
            }
            let token = self.current;
            self.errors.push(
                error!(LexError, token.line, ..token.column; token.lexeme.to_string()),
            );
        }
    }

    fn consume(&mut self, kind: TokenKind, message: &'static str) {
        if self.current.kind == kind {
            self.advance();
            return;
        }
        let token = self.current;
        self.error_at(token, message);
    }

    fn error_at(&mut self, token: Token<'a>, message: &'static str) {
        self.errors
            .push(error!(ParseError, token.line, ..token.column; message));
    }

    fn emit_opcode(&mut self, opcode: Opcode) {
        self.chunk.write_opcode(opcode);
    }

    fn emit_constant(&mut self, val: Val) {
        let index = self.chunk.add_constant(val);
        let operand = match u8::try_from(index) {
            Ok(operand) => operand,
            Err(_) => {
                let token = self.previous;
                self.error_at(token, "Too many constants in one chunk.");
                0
            }
        };
        self.emit_opcode(Opcode::Constant);
        self.chunk.write(operand);
        self.pending += 1;
        if self.pending == STACK_MAX + 1 {
            let token = self.previous;
            self.error_at(token, "Expression too deep for the value stack.");
        }
    }

    fn expression(&mut self) {
        self.parse_precedence(Precedence::Assignment);
    }

    fn parse_precedence(&mut self, precedence: Precedence) {
        if self.depth >= MAX_DEPTH {
            let token = self.current;
            self.error_at(token, "Expression nested too deeply.");
            return;
        }
        self.depth += 1;
        self.advance();
        match ParseRule::for_kind(self.previous.kind).prefix {
            Some(handler) => {
                self.dispatch(handler);
                loop {
                    let rule = ParseRule::for_kind(self.current.kind);
                    if rule.precedence < precedence {
                        break;
                    }
                    self.advance();
                    match rule.infix {
                        Some(handler) => self.dispatch(handler),
                        None => break,
                    }
                }
            }
            None => {
                let token = self.previous;
                self.error_at(token, "Expect expression.");
            }
        }
        self.depth -= 1;
    }

    fn dispatch(&mut self, handler: Handler) {
        match handler {
            Handler::Grouping => self.grouping(),
            Handler::Unary => self.unary(),
            Handler::Binary => self.binary(),
            Handler::Number => self.number(),
        }
    }

    fn grouping(&mut self) {
        self.expression();
        self.consume(TokenKind::RightParen, "Expect ')' after expression.");
    }

    fn unary(&mut self) {
        let kind = self.previous.kind;
        self.parse_precedence(Precedence::Unary);
        match kind {
            TokenKind::Minus => self.emit_opcode(Opcode::Negate),
            _ => debug_assert!(false, "no unary operator for {:?}", kind),
        }
    }

    fn binary(&mut self) {
        let kind = self.previous.kind;
        let rule = ParseRule::for_kind(kind);
        self.parse_precedence(rule.precedence.next());
        match kind {
            TokenKind::Plus => self.emit_opcode(Opcode::Add),
            TokenKind::Minus => self.emit_opcode(Opcode::Sub),
            TokenKind::Star => self.emit_opcode(Opcode::Mul),
            TokenKind::Slash => self.emit_opcode(Opcode::Div),
            _ => debug_assert!(false, "no binary operator for {:?}", kind),
        }
        // Two operands in, one out.
        self.pending = self.pending.saturating_sub(1);
    }

    fn number(&mut self) {
        let token = self.previous;
        match token.lexeme.parse::<Val>() {
            Ok(val) => self.emit_constant(val),
            Err(_) => self.error_at(token, "Invalid number."),
        }
    }
}
