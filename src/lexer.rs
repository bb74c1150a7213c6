//! A module implementing lexical analysis (tokenization) for arithmetic expressions.
//!
//! The lexer is a cursor over an immutable input line. Every call consumes at most one
//! token from the unconsumed suffix and advances the byte offset past it.

use crate::error::{EvaluationError, Result};
use crate::operator::{OPERATOR_SYMBOLS, Operator};
use num_bigint::BigInt;
use regex::Regex;
use std::sync::LazyLock;

/// A uniform sign run (`+++` or `--`) directly followed by digits.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\++|-+)?([0-9]+)").expect("number pattern is valid"));

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+").expect("identifier pattern is valid"));

/// A maximal run of sign characters, or a single multiplicative/exponent symbol.
static OPERATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-+]+|[*/^])").expect("operator pattern is valid"));

/// Represents a token resulting from lexical analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An integer literal, with any leading sign run already folded into its value.
    Number(BigInt),
    /// A variable name made of Latin letters.
    Identifier(String),
    /// A binary operator.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Text that matches nothing valid at this position.
    Unknown(String),
}

/// What the caller expects next, which decides how a `+`/`-` run is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// A value is expected: a sign run followed by digits is a signed number.
    Operand,
    /// An operator is expected: a sign run is an additive operator.
    Operator,
}

#[derive(Debug, Clone, Copy)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, pos: 0 }
    }

    /// The unconsumed part of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// True when only whitespace is left.
    pub fn is_blank(&self) -> bool {
        self.rest().trim_start().is_empty()
    }

    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn read_char(&mut self) -> Option<char> {
        let ch = self.peek_char();
        if let Some(c) = ch {
            self.pos += c.len_utf8();
        }
        ch
    }

    /// Skip whitespace and consume `expected` if it is the next character.
    pub fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek_char() == Some(expected) {
            self.read_char();
            true
        } else {
            false
        }
    }

    /// Consume an integer literal with an optional uniform sign run.
    ///
    /// Leading whitespace is always skipped. Returns `None` when no literal starts
    /// after it, leaving the cursor at the first non-blank character.
    pub fn number(&mut self) -> Option<BigInt> {
        self.skip_whitespace();
        let caps = NUMBER.captures(self.rest())?;
        let whole = caps.get(0)?;
        let digits = caps.get(2)?.as_str();
        let negative = caps
            .get(1)
            .is_some_and(|run| run.as_str().starts_with('-') && run.as_str().len() % 2 == 1);
        let magnitude: BigInt = digits.parse().ok()?;
        self.pos += whole.end();
        Some(if negative { -magnitude } else { magnitude })
    }

    /// Consume an identifier and check what follows it.
    ///
    /// A valid identifier is followed by the end of input, whitespace, `=`, `)` or an
    /// operator symbol. Anything else (as in `ab3c`) is `InvalidIdentifier`.
    pub fn identifier(&mut self) -> Result<String> {
        self.skip_whitespace();
        let found = IDENTIFIER
            .find(self.rest())
            .ok_or(EvaluationError::InvalidIdentifier)?;
        let name = found.as_str().to_string();
        self.pos += found.end();

        let after = self.rest();
        let follows_cleanly = match after.chars().next() {
            None => true,
            Some(c) if c.is_whitespace() => true,
            Some(c) => c == '=' || c == ')' || OPERATOR_SYMBOLS.contains(c),
        };
        if follows_cleanly {
            Ok(name)
        } else {
            Err(EvaluationError::InvalidIdentifier)
        }
    }

    /// Consume an operator token. A run of `+`/`-` is taken whole.
    fn operator(&mut self) -> Option<Token> {
        let found = OPERATOR.find(self.rest())?;
        let text = found.as_str();
        self.pos += found.end();
        Some(match Operator::from_symbol(text) {
            Some(op) => Token::Operator(op),
            None => Token::Unknown(text.to_string()),
        })
    }

    fn unknown(&mut self) -> Token {
        let rest = self.rest();
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.pos += len;
        Token::Unknown(rest[..len].to_string())
    }

    /// Produce the next token for the given position, or `None` at the end of input.
    ///
    /// Identifier lookahead failures are reported as errors; everything else that
    /// cannot be recognized comes back as `Token::Unknown`.
    pub fn next_token(&mut self, position: Position) -> Result<Option<Token>> {
        self.skip_whitespace();
        let Some(ch) = self.peek_char() else {
            return Ok(None);
        };

        let token = match (ch, position) {
            ('(', _) => {
                self.read_char();
                Token::LeftParen
            }
            (')', _) => {
                self.read_char();
                Token::RightParen
            }
            (c, Position::Operand) if c.is_ascii_alphabetic() => {
                Token::Identifier(self.identifier()?)
            }
            (_, Position::Operand) => match self.number() {
                Some(value) => Token::Number(value),
                None => self.unknown(),
            },
            (_, Position::Operator) => match self.operator() {
                Some(token) => token,
                None => self.unknown(),
            },
        };
        Ok(Some(token))
    }
}
