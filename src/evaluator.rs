use crate::error::{EvaluationError, Result};
use crate::parser::PostfixToken;
use log::error;
use num_bigint::BigInt;

/// Reduce a postfix sequence to a single value.
///
/// Variables are looked up through `resolve` at the moment they are reached. For each
/// operator the most recently pushed value is the right operand.
pub fn evaluate_postfix<F>(postfix: Vec<PostfixToken>, resolve: F) -> Result<BigInt>
where
    F: Fn(&str) -> Result<BigInt>,
{
    let mut stack: Vec<BigInt> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            PostfixToken::Number(value) => stack.push(value),
            PostfixToken::Variable(name) => stack.push(resolve(&name)?),
            PostfixToken::Operator(op) => {
                let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                    error!("operand stack underflow at `{op}`");
                    return Err(EvaluationError::InvalidExpression);
                };
                stack.push(op.apply(lhs, rhs)?);
            }
        }
    }

    if stack.len() != 1 {
        error!("postfix reduction left {} values", stack.len());
        return Err(EvaluationError::InvalidExpression);
    }
    stack.pop().ok_or(EvaluationError::InvalidExpression)
}
