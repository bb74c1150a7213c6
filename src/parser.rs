use crate::error::{EvaluationError, Result};
use crate::lexer::{Lexer, Position, Token};
use crate::operator::Operator;
use log::{debug, trace};
use num_bigint::BigInt;
use std::fmt;

/// An element of an expression in postfix (reverse Polish) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostfixToken {
    /// A literal operand.
    Number(BigInt),
    /// A variable operand, resolved when the postfix form is evaluated.
    Variable(String),
    /// An operator applied to the two operands before it.
    Operator(Operator),
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostfixToken::Number(value) => write!(f, "{value}"),
            PostfixToken::Variable(name) => f.write_str(name),
            PostfixToken::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Entry on the operator stack. `(` is kept as a sentinel and never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(Operator),
    LeftParen,
}

/// Shunting-yard state for one line: the operator stack and the output queue.
struct PostfixBuilder<'a> {
    lexer: Lexer<'a>,
    operators: Vec<Pending>,
    output: Vec<PostfixToken>,
}

impl<'a> PostfixBuilder<'a> {
    fn from(line: &'a str) -> Self {
        PostfixBuilder {
            lexer: Lexer::new(line),
            operators: Vec::new(),
            output: Vec::new(),
        }
    }

    fn build(mut self) -> Result<Vec<PostfixToken>> {
        let mut position = Position::Operand;

        while let Some(token) = self.lexer.next_token(position)? {
            trace!("{position:?} token {token:?}");
            position = match (position, token) {
                (Position::Operand, Token::LeftParen) => {
                    self.operators.push(Pending::LeftParen);
                    Position::Operand
                }
                (Position::Operand, Token::Number(value)) => {
                    self.output.push(PostfixToken::Number(value));
                    Position::Operator
                }
                (Position::Operand, Token::Identifier(name)) => {
                    self.output.push(PostfixToken::Variable(name));
                    Position::Operator
                }
                (Position::Operator, Token::RightParen) => {
                    self.close_paren()?;
                    Position::Operator
                }
                (Position::Operator, Token::Operator(op)) => {
                    self.push_operator(op);
                    Position::Operand
                }
                (_, Token::Unknown(text)) => {
                    debug!("unrecognized `{text}` in {position:?} position");
                    return Err(EvaluationError::InvalidExpression);
                }
                // Missing operand, or an operand where an operator belongs.
                _ => return Err(EvaluationError::InvalidExpression),
            };
        }

        // Empty input or a trailing operator leaves an operand outstanding.
        if position == Position::Operand {
            return Err(EvaluationError::InvalidExpression);
        }

        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Operator(op) => self.output.push(PostfixToken::Operator(op)),
                Pending::LeftParen => return Err(EvaluationError::InvalidExpression),
            }
        }

        Ok(self.output)
    }

    /// Emit operators down to the matching `(` and drop the sentinel.
    fn close_paren(&mut self) -> Result<()> {
        loop {
            match self.operators.pop() {
                Some(Pending::Operator(op)) => self.output.push(PostfixToken::Operator(op)),
                Some(Pending::LeftParen) => return Ok(()),
                None => return Err(EvaluationError::InvalidExpression),
            }
        }
    }

    /// Push `op`, first emitting stacked operators that bind at least as tightly.
    fn push_operator(&mut self, op: Operator) {
        while let Some(&Pending::Operator(top)) = self.operators.last() {
            if top.precedence() < op.precedence() {
                break;
            }
            self.output.push(PostfixToken::Operator(top));
            self.operators.pop();
        }
        self.operators.push(Pending::Operator(op));
    }
}

/// Convert an infix line to postfix order.
///
/// The line must not contain an assignment. Identifiers are carried through as
/// [`PostfixToken::Variable`] and resolved only at evaluation time.
pub fn to_postfix(line: &str) -> Result<Vec<PostfixToken>> {
    let postfix = PostfixBuilder::from(line).build()?;
    debug!(
        "postfix: {}",
        postfix
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(postfix)
}
