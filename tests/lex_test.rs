use nyx::lang::{Scanner, Token, TokenKind};

fn tokens(s: &str) -> Vec<Token> {
    Scanner::new(s).collect()
}

fn kinds(s: &str) -> Vec<TokenKind> {
    Scanner::new(s).map(|t| t.kind).collect()
}

#[test]
fn test_punctuation() {
    use TokenKind::*;
    assert_eq!(
        kinds("(){},.;"),
        [LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Semicolon, Eof]
    );
}

#[test]
fn test_compound_operators() {
    use TokenKind::*;
    assert_eq!(
        kinds("+ += - -= * *= / /= ! != = == < <= > >="),
        [
            Plus,
            PlusEqual,
            Minus,
            MinusEqual,
            Star,
            StarEqual,
            Slash,
            SlashEqual,
            Bang,
            BangEqual,
            Equal,
            EqualEqual,
            Less,
            LessEqual,
            Greater,
            GreaterEqual,
            Eof
        ]
    );
}

#[test]
fn test_lone_slash_is_division() {
    use TokenKind::*;
    assert_eq!(kinds("8 / 2"), [Number, Slash, Number, Eof]);
}

#[test]
fn test_line_comment() {
    let t = tokens("1 // ignored 2 3\n+ 4");
    let lexemes: Vec<&str> = t.iter().map(|t| t.lexeme).collect();
    assert_eq!(lexemes, ["1", "+", "4", ""]);
    assert_eq!((t[1].line, t[1].column), (2, 1));
    assert_eq!((t[2].line, t[2].column), (2, 3));
}

#[test]
fn test_numbers() {
    let t = tokens("123 123.456 7");
    assert_eq!(t[0].lexeme, "123");
    assert_eq!(t[1].lexeme, "123.456");
    assert_eq!(t[1].column, 5);
    assert_eq!(t[2].lexeme, "7");
    assert!(t[..3].iter().all(|t| t.kind == TokenKind::Number));
}

#[test]
fn test_no_leading_sign() {
    use TokenKind::*;
    assert_eq!(kinds("-5"), [Minus, Number, Eof]);
}

#[test]
fn test_identifiers_and_keywords() {
    use TokenKind::*;
    assert_eq!(
        kinds("let x_1 = nil and _y or while whiles"),
        [Let, Identifier, Equal, Nil, And, Identifier, Or, While, Identifier, Eof]
    );
    assert_eq!(
        kinds("class else false for fun if print return super this true"),
        [Class, Else, False, For, Fun, If, Print, Return, Super, This, True, Eof]
    );
}

#[test]
fn test_string_spans_lines() {
    let t = tokens("\"a\nb\" 1");
    assert_eq!(t[0].kind, TokenKind::String);
    assert_eq!(t[0].lexeme, "\"a\nb\"");
    assert_eq!((t[1].line, t[1].column), (2, 4));
}

#[test]
fn test_unterminated_string() {
    let t = tokens("\"abc");
    assert_eq!(t[0].kind, TokenKind::Error);
    assert_eq!(t[0].lexeme, "Unterminated string.");
    assert_eq!(t[1].kind, TokenKind::Eof);
}

#[test]
fn test_unexpected_character() {
    let t = tokens("1 # 2");
    assert_eq!(t[1].kind, TokenKind::Error);
    assert_eq!(t[1].lexeme, "Unexpected character.");
    assert_eq!((t[1].line, t[1].column), (1, 3));
    assert_eq!(t[2].lexeme, "2");
}

#[test]
fn test_whitespace_and_positions() {
    let t = tokens(" \t1\r\n  +");
    assert_eq!((t[0].line, t[0].column), (1, 3));
    assert_eq!((t[1].line, t[1].column), (2, 3));
    assert_eq!((t[2].line, t[2].column), (2, 4));
}
