//! Pratt parser for Quill
//!
//! Statements are dispatched on the current token kind. Expressions are
//! parsed by precedence climbing over two handler tables, one for tokens in
//! prefix position and one for tokens in infix position. Problems are
//! recorded as diagnostics and parsing always runs to the end of input.

use crate::ast::*;
use crate::error::*;
use crate::lexer::Lexer;
use crate::number::{parse_int_auto, parse_int_radix};
use crate::token::{Token, TokenKind};
use core_types::Diagnostic;
use log::{debug, trace};
use std::collections::HashMap;

/// Deepest expression tree the parser builds.
///
/// Parsing, rendering and dropping a tree all recurse once per level, so the
/// limit keeps every one of them within an ordinary thread stack.
pub const MAX_NESTING_DEPTH: usize = 512;

type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Expression;
type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> Expression;

/// Binding power of operators, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Starting level
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// Unary `-x` `!x`
    Prefix,
    /// Reserved for call expressions
    Call,
}

impl Precedence {
    /// Infix binding power of a token kind
    pub fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Slash | TokenKind::Asterisk => Precedence::Product,
            _ => Precedence::Lowest,
        }
    }
}

/// Quill parser
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<Diagnostic>,
    /// Depth of the expression tree under construction
    depth: usize,
    /// Set once the current statement hit the nesting limit
    too_deep: bool,
    prefix_parse_fns: HashMap<TokenKind, PrefixParseFn<'a>>,
    infix_parse_fns: HashMap<TokenKind, InfixParseFn<'a>>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source text
    pub fn new(source: &'a str) -> Self {
        Self::from_lexer(Lexer::new(source))
    }

    /// Create a parser pulling tokens from an existing lexer
    pub fn from_lexer(lexer: Lexer<'a>) -> Self {
        let mut parser = Self {
            lexer,
            cur_token: Token::eof(),
            peek_token: Token::eof(),
            errors: Vec::new(),
            depth: 0,
            too_deep: false,
            prefix_parse_fns: HashMap::new(),
            infix_parse_fns: HashMap::new(),
        };

        parser.register_prefix(TokenKind::Ident, Self::parse_identifier);
        parser.register_prefix(TokenKind::Int, Self::parse_integer_literal);
        parser.register_prefix(TokenKind::Octal, Self::parse_octal_literal);
        parser.register_prefix(TokenKind::Binary, Self::parse_binary_literal);
        parser.register_prefix(TokenKind::Bang, Self::parse_prefix_expression);
        parser.register_prefix(TokenKind::Minus, Self::parse_prefix_expression);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
        ] {
            parser.register_infix(kind, Self::parse_infix_expression);
        }

        // Load cur_token and peek_token
        parser.next_token();
        parser.next_token();
        parser
    }

    fn register_prefix(&mut self, kind: TokenKind, handler: PrefixParseFn<'a>) {
        self.prefix_parse_fns.insert(kind, handler);
    }

    fn register_infix(&mut self, kind: TokenKind, handler: InfixParseFn<'a>) {
        self.infix_parse_fns.insert(kind, handler);
    }

    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
        trace!("current token {}", self.cur_token);
    }

    /// Parse the whole input into a program.
    ///
    /// Never fails: statements that could not be parsed are kept as
    /// [`Statement::Missing`] and the reasons are available from
    /// [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::Eof) {
            program.statements.push(self.parse_statement());
            self.next_token();
        }

        debug!(
            "parsed {} statements with {} errors",
            program.statements.len(),
            self.errors.len()
        );
        program
    }

    fn parse_statement(&mut self) -> Statement {
        self.too_deep = false;
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Statement {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return Statement::Missing;
        }
        let name = Identifier::new(self.cur_token.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return Statement::Missing;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_peek_semicolon();

        Statement::Let { token, name, value }
    }

    fn parse_return_statement(&mut self) -> Statement {
        let token = self.cur_token.clone();
        self.next_token();

        // Bare `return;` or `return` at end of input
        if self.cur_token_is(TokenKind::Semicolon) || self.cur_token_is(TokenKind::Eof) {
            return Statement::Return {
                token,
                return_value: None,
            };
        }

        let return_value = Some(self.parse_expression(Precedence::Lowest));
        self.skip_peek_semicolon();

        Statement::Return {
            token,
            return_value,
        }
    }

    fn parse_expression_statement(&mut self) -> Statement {
        let token = self.cur_token.clone();
        let expression = self.parse_expression(Precedence::Lowest);
        self.skip_peek_semicolon();

        Statement::Expression { token, expression }
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Expression {
        let entered = self.depth;
        let expression = self.parse_nested_expression(precedence);
        self.depth = entered;
        // A statement that went too deep yields no partial tree
        if self.too_deep {
            return Expression::Missing;
        }
        expression
    }

    fn parse_nested_expression(&mut self, precedence: Precedence) -> Expression {
        if !self.enter_nesting() {
            return Expression::Missing;
        }

        let prefix = match self.prefix_parse_fns.get(&self.cur_token.kind).copied() {
            Some(handler) => handler,
            None => {
                self.record(no_prefix_parser(self.cur_token.kind));
                return Expression::Missing;
            }
        };
        let mut left = prefix(self);

        while !self.too_deep
            && !self.peek_token_is(TokenKind::Semicolon)
            && precedence < self.peek_precedence()
        {
            let infix = match self.infix_parse_fns.get(&self.peek_token.kind).copied() {
                Some(handler) => handler,
                None => return left,
            };
            self.next_token();
            left = infix(self, left);

            // Each fold puts the previous tree one level further down
            if !self.enter_nesting() {
                return Expression::Missing;
            }
        }

        left
    }

    /// Go one level deeper; past the limit, record it once and skip the
    /// rest of the statement
    fn enter_nesting(&mut self) -> bool {
        if self.too_deep {
            return false;
        }
        self.depth += 1;
        if self.depth <= MAX_NESTING_DEPTH {
            return true;
        }

        self.too_deep = true;
        self.record(nesting_too_deep(MAX_NESTING_DEPTH));
        while !self.peek_token_is(TokenKind::Semicolon) && !self.peek_token_is(TokenKind::Eof) {
            self.next_token();
        }
        false
    }

    fn parse_identifier(&mut self) -> Expression {
        Expression::Identifier(Identifier::new(self.cur_token.clone()))
    }

    fn parse_integer_literal(&mut self) -> Expression {
        let value = parse_int_auto(&self.cur_token.literal);
        self.integer_literal(value.ok())
    }

    fn parse_octal_literal(&mut self) -> Expression {
        let value = parse_int_radix(&self.cur_token.literal, 8);
        self.integer_literal(value.ok())
    }

    fn parse_binary_literal(&mut self) -> Expression {
        let value = parse_int_radix(&self.cur_token.literal, 2);
        self.integer_literal(value.ok())
    }

    /// Build an integer node; a failed conversion is recorded and yields 0
    fn integer_literal(&mut self, value: Option<i64>) -> Expression {
        let token = self.cur_token.clone();
        let value = match value {
            Some(value) => value,
            None => {
                self.record(invalid_integer(&token.literal));
                0
            }
        };
        Expression::IntegerLiteral { token, value }
    }

    fn parse_prefix_expression(&mut self) -> Expression {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix);

        Expression::Prefix {
            token,
            operator,
            right: Box::new(right),
        }
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Expression {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();

        let precedence = self.cur_precedence();
        self.next_token();
        let right = self.parse_expression(precedence);

        Expression::Infix {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    fn skip_peek_semicolon(&mut self) {
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.is(kind)
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Advance if the upcoming token has the given kind, else record an error
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.record(unexpected_token(kind, self.peek_token.kind));
            false
        }
    }

    fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur_token.kind)
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    fn record(&mut self, diagnostic: Diagnostic) {
        debug!("parse error: {}", diagnostic);
        self.errors.push(diagnostic);
    }

    /// Diagnostics recorded so far, in the order they occurred
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Diagnostic messages recorded so far
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    /// Consume the parser, keeping only its diagnostics
    pub fn into_errors(self) -> Vec<Diagnostic> {
        self.errors
    }
}

/// Parse source text into a program and the diagnostics recorded on the way
///
/// # Example
///
/// ```
/// let (program, errors) = parser::parse("1 + 2 * 3");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "(1 + (2 * 3))");
/// ```
pub fn parse(source: &str) -> (Program, Vec<Diagnostic>) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();
    (program, parser.into_errors())
}
