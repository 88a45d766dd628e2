//! Abstract Syntax Tree node definitions
//!
//! Every node owns its children outright. Nodes that failed to parse are
//! kept in the tree as `Missing` markers so the rest of the program stays
//! addressable.

use crate::token::Token;
use serde::Serialize;
use std::fmt;

/// Common behavior of every AST node
pub trait Node {
    /// Literal text of the token the node was built from
    fn token_literal(&self) -> &str;
}

/// Root of a parsed program
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program {
    /// Statements in source order
    pub statements: Vec<Statement>,
}

/// Statements
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The `let` token
        token: Token,
        /// Bound name
        name: Identifier,
        /// Bound expression
        value: Expression,
    },

    /// `return [<value>];`
    Return {
        /// The `return` token
        token: Token,
        /// Returned expression, absent for a bare `return;`
        return_value: Option<Expression>,
    },

    /// An expression used as a statement
    Expression {
        /// First token of the expression
        token: Token,
        /// The expression
        expression: Expression,
    },

    /// A statement that failed to parse
    Missing,
}

/// Expressions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    /// Identifier reference
    Identifier(Identifier),

    /// 64-bit signed integer literal
    IntegerLiteral {
        /// Literal token
        token: Token,
        /// Converted value
        value: i64,
    },

    /// Unary operator applied to an operand
    Prefix {
        /// Operator token
        token: Token,
        /// Operator symbol
        operator: String,
        /// Operand
        right: Box<Expression>,
    },

    /// Binary operator
    Infix {
        /// Operator token
        token: Token,
        /// Left operand
        left: Box<Expression>,
        /// Operator symbol
        operator: String,
        /// Right operand
        right: Box<Expression>,
    },

    /// An expression that failed to parse
    Missing,
}

/// Identifier, also used as the name of a let binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    /// The `IDENT` token
    pub token: Token,
    /// Identifier name
    pub value: String,
}

impl Identifier {
    /// Build an identifier from its token
    pub fn new(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Self::default()
    }
}

impl Statement {
    /// Check for the failed-parse marker
    pub fn is_missing(&self) -> bool {
        matches!(self, Statement::Missing)
    }
}

impl Expression {
    /// Check for the failed-parse marker
    pub fn is_missing(&self) -> bool {
        matches!(self, Expression::Missing)
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |statement| statement.token_literal())
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let { token, .. }
            | Statement::Return { token, .. }
            | Statement::Expression { token, .. } => &token.literal,
            Statement::Missing => "",
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
            Expression::IntegerLiteral { token, .. }
            | Expression::Prefix { token, .. }
            | Expression::Infix { token, .. } => &token.literal,
            Expression::Missing => "",
        }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { token, name, value } => {
                write!(f, "{} {} = {};", token.literal, name, value)
            }
            Statement::Return {
                token,
                return_value,
            } => match return_value {
                Some(value) => write!(f, "{} {};", token.literal, value),
                None => write!(f, "{};", token.literal),
            },
            Statement::Expression { expression, .. } => write!(f, "{}", expression),
            Statement::Missing => Ok(()),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::IntegerLiteral { token, .. } => f.write_str(&token.literal),
            Expression::Prefix {
                operator, right, ..
            } => write!(f, "({}{})", operator, right),
            Expression::Infix {
                left,
                operator,
                right,
                ..
            } => write!(f, "({} {} {})", left, operator, right),
            Expression::Missing => Ok(()),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
