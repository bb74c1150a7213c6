use crate::env::Environment;
use crate::error::{EvaluationError, Result};
use crate::lexer::Lexer;
use num_bigint::BigInt;

/// A parsed `name = value` line whose right-hand side is already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: BigInt,
}

impl Assignment {
    /// Parse `identifier '=' (integer | identifier)` with nothing after it.
    ///
    /// A right-hand identifier is resolved against `env` immediately. Nothing is
    /// written to `env` here; see [`Assignment::commit`].
    pub fn parse(line: &str, env: &Environment) -> Result<Self> {
        let mut lexer = Lexer::new(line);

        let name = lexer.identifier()?;

        if !lexer.eat('=') {
            return Err(EvaluationError::InvalidIdentifier);
        }
        lexer.skip_whitespace();
        if lexer.is_blank() {
            return Err(EvaluationError::InvalidAssignment);
        }

        let value = match lexer.number() {
            Some(value) => value,
            None => {
                // A malformed right-hand identifier counts against the assignment,
                // unlike the left-hand side.
                let source = lexer
                    .identifier()
                    .map_err(|_| EvaluationError::InvalidAssignment)?;
                env.lookup(&source)?
            }
        };

        if !lexer.is_blank() {
            return Err(EvaluationError::InvalidAssignment);
        }

        Ok(Assignment { name, value })
    }

    pub fn commit(self, env: &mut Environment) {
        env.assign(self.name, self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(bindings: &[(&str, i64)]) -> Environment {
        let mut env = Environment::new();
        for (name, value) in bindings {
            env.assign(*name, BigInt::from(*value));
        }
        env
    }

    fn parsed(line: &str, env: &Environment) -> (String, BigInt) {
        let assignment = Assignment::parse(line, env).unwrap();
        (assignment.name, assignment.value)
    }

    #[test]
    fn test_literal_right_hand_side() {
        let env = Environment::new();
        assert_eq!(parsed("a = 5", &env), ("a".to_string(), BigInt::from(5)));
        assert_eq!(parsed("a=5", &env), ("a".to_string(), BigInt::from(5)));
        assert_eq!(parsed("  Big   =   -42  ", &env), ("Big".to_string(), BigInt::from(-42)));
        assert_eq!(parsed("a = ---7", &env), ("a".to_string(), BigInt::from(-7)));
    }

    #[test]
    fn test_variable_right_hand_side() {
        let env = env_with(&[("a", 9)]);
        assert_eq!(parsed("b = a", &env), ("b".to_string(), BigInt::from(9)));
        assert_eq!(
            Assignment::parse("b = c", &env),
            Err(EvaluationError::UnknownVariable)
        );
    }

    #[test]
    fn test_left_hand_side_errors() {
        let env = Environment::new();
        for line in ["3 = a", "a1 = 3", "= 3", "a b = 3", "a(= 3", "a + 1 = 3"] {
            assert_eq!(
                Assignment::parse(line, &env),
                Err(EvaluationError::InvalidIdentifier),
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_right_hand_side_errors() {
        let env = env_with(&[("a", 1)]);
        for line in ["a =", "a =   ", "a = 3 + 2", "a = b2", "a = 5b", "a = = 3", "a == 3", "a = a a", "a = +-3"] {
            assert_eq!(
                Assignment::parse(line, &env),
                Err(EvaluationError::InvalidAssignment),
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_commit_writes_binding() {
        let mut env = Environment::new();
        Assignment::parse("x = 10", &env).unwrap().commit(&mut env);
        assert_eq!(env.lookup("x"), Ok(BigInt::from(10)));
    }
}
