use thiserror::Error;

/// Errors produced while evaluating or assigning a line.
///
/// Every failure maps to exactly one kind. The `Display` text is what the shell
/// shows to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// Malformed operator/operand sequence, unmatched parenthesis, invalid exponent
    /// or a token that cannot be resolved.
    #[error("Invalid expression")]
    InvalidExpression,
    /// An identifier fails its lookahead check, or is missing on the left-hand side
    /// of an assignment.
    #[error("Invalid identifier")]
    InvalidIdentifier,
    /// Malformed right-hand side, or trailing content after an assignment.
    #[error("Invalid assignment")]
    InvalidAssignment,
    /// The identifier has never been assigned.
    #[error("Unknown variable")]
    UnknownVariable,
    /// Integer division with a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, EvaluationError>;
