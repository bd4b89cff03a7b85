use super::{Column, Line};
use crate::mach::Address;
use std::borrow::Cow;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line: Line,
    column: Column,
    offset: Option<Address>,
    message: Cow<'static, str>,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, @$offset:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_offset($offset)
    };
    ($err:ident, @$offset:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_offset($offset)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .in_column($col)
    };
    ($err:ident, $line:expr, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line: 0,
            column: 0,
            offset: None,
            message: Cow::Borrowed(""),
        }
    }

    pub fn in_line(self, line: Line) -> Error {
        debug_assert_eq!(self.line, 0);
        Error { line, ..self }
    }

    pub fn in_column(self, column: Column) -> Error {
        debug_assert_eq!(self.column, 0);
        Error { column, ..self }
    }

    pub fn at_offset(self, offset: Address) -> Error {
        debug_assert!(self.offset.is_none());
        Error {
            offset: Some(offset),
            ..self
        }
    }

    pub fn message<S: Into<Cow<'static, str>>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line(&self) -> Line {
        self.line
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn offset(&self) -> Option<Address> {
        self.offset
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    /// Runtime faults come from malformed chunks, never from source text.
    pub fn is_fault(&self) -> bool {
        !matches!(self.code, ErrorCode::LexError | ErrorCode::ParseError)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    LexError = 1,
    ParseError = 2,
    StackOverflow = 10,
    StackUnderflow = 11,
    UnknownOpcode = 12,
    InvalidConstant = 13,
    EndOfChunk = 14,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            LexError => "LEX ERROR",
            ParseError => "PARSE ERROR",
            StackOverflow => "STACK OVERFLOW",
            StackUnderflow => "STACK UNDERFLOW",
            UnknownOpcode => "UNKNOWN OPCODE",
            InvalidConstant => "INVALID CONSTANT",
            EndOfChunk => "END OF CHUNK",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(offset) = self.offset {
            suffix.push_str(&format!(" offset {}", offset));
        } else if self.line > 0 {
            suffix.push_str(&format!(" {}:{}", self.line, self.column));
        }
        if suffix.is_empty() {
            write!(f, "{}", self.code)?;
        } else {
            write!(f, "{} at{}", self.code, suffix)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}
