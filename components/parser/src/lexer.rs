//! Quill Lexer - tokenizes source text into tokens
//!
//! The lexer walks the input one byte at a time with a single byte of
//! lookahead. It never fails: bytes it cannot classify come back as
//! [`TokenKind::Illegal`] tokens and scanning carries on.

use crate::scanner::{
    is_binary_shape, is_digit, is_float_shape, is_letter, is_number_body, is_octal_shape,
};
use crate::token::{lookup_ident, Token, TokenKind};
use log::trace;

/// Lexer for Quill source text
pub struct Lexer<'a> {
    input: &'a str,
    /// Position of `ch`
    position: usize,
    /// Position of the byte after `ch`
    read_position: usize,
    /// Byte under examination, 0 once the input is exhausted
    ch: u8,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = self.byte_at(self.read_position);
        self.position = self.read_position;
        // Saturate so repeated reads past the end stay put
        if self.read_position <= self.input.len() {
            self.read_position += 1;
        }
    }

    fn peek_char(&self) -> u8 {
        self.byte_at(self.read_position)
    }

    fn byte_at(&self, index: usize) -> u8 {
        self.input.as_bytes().get(index).copied().unwrap_or(0)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get the next token from the source.
    ///
    /// Once the input is exhausted every further call returns an `Eof` token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.is_at_end() {
            return Token::eof();
        }

        let token = match self.ch {
            b'=' => self.one_or_two(TokenKind::Assign, TokenKind::Eq),
            b'!' => self.one_or_two(TokenKind::Bang, TokenKind::NotEq),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Asterisk),
            b'/' => self.single(TokenKind::Slash),
            b'<' => self.single(TokenKind::Lt),
            b'>' => self.single(TokenKind::Gt),
            b';' => self.single(TokenKind::Semicolon),
            b',' => self.single(TokenKind::Comma),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            ch if is_letter(ch) => {
                // Maximal munch, the cursor already sits past the identifier
                let literal = self.read_while(is_letter);
                return Token::new(lookup_ident(literal), literal);
            }
            ch if is_digit(ch) => return self.read_number(),
            _ => self.illegal_char(),
        };

        self.read_char();
        token
    }

    fn single(&self, kind: TokenKind) -> Token {
        Token::new(kind, &self.input[self.position..self.position + 1])
    }

    /// Emit the two-byte `double` kind when the next byte is `=`, else `one`
    fn one_or_two(&mut self, one: TokenKind, double: TokenKind) -> Token {
        if self.peek_char() == b'=' {
            let start = self.position;
            self.read_char();
            Token::new(double, &self.input[start..self.position + 1])
        } else {
            self.single(one)
        }
    }

    fn illegal_char(&mut self) -> Token {
        let input = self.input;
        let start = self.position;
        // Take the whole character so a multi-byte code point stays valid UTF-8
        let width = input[start..].chars().next().map_or(1, char::len_utf8);
        for _ in 1..width {
            self.read_char();
        }
        let literal = &input[start..start + width];
        trace!("illegal character {:?} at byte {}", literal, start);
        Token::new(TokenKind::Illegal, literal)
    }

    fn read_while(&mut self, accept: fn(u8) -> bool) -> &'a str {
        let input = self.input;
        let start = self.position;
        while !self.is_at_end() && accept(self.ch) {
            self.read_char();
        }
        &input[start..self.position]
    }

    fn read_number(&mut self) -> Token {
        let literal = self.read_while(is_number_body);
        let kind = classify_number(literal);
        let literal = match kind {
            TokenKind::Octal | TokenKind::Binary => &literal[2..],
            _ => literal,
        };
        if kind == TokenKind::Illegal {
            trace!("illegal number literal {:?}", literal);
        }
        Token::new(kind, literal)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }
}

/// Classify a fully scanned number literal
fn classify_number(literal: &str) -> TokenKind {
    if literal.starts_with("0x") {
        if is_octal_shape(literal) {
            TokenKind::Octal
        } else {
            TokenKind::Illegal
        }
    } else if literal.starts_with("0b") {
        if is_binary_shape(literal) {
            TokenKind::Binary
        } else {
            TokenKind::Illegal
        }
    } else if is_float_shape(literal) {
        TokenKind::Float
    } else {
        TokenKind::Int
    }
}

/// Lazy token stream that yields every token followed by a single `Eof`
pub struct Tokens<'a> {
    lexer: Lexer<'a>,
    done: bool,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.lexer.next_token();
        self.done = token.is(TokenKind::Eof);
        Some(token)
    }
}

impl<'a> IntoIterator for Lexer<'a> {
    type Item = Token;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Tokens<'a> {
        Tokens {
            lexer: self,
            done: false,
        }
    }
}

/// Tokenize source text lazily
///
/// # Example
///
/// ```
/// use parser::{tokenize, TokenKind};
///
/// let kinds: Vec<TokenKind> = tokenize("x + 1").map(|t| t.kind).collect();
/// assert_eq!(kinds, vec![TokenKind::Ident, TokenKind::Plus, TokenKind::Int, TokenKind::Eof]);
/// ```
pub fn tokenize(source: &str) -> Tokens<'_> {
    Lexer::new(source).into_iter()
}
