use int_calculator::{Calculator, EvaluationError};
use num_bigint::BigInt;
use proptest::prelude::*;

const MAX_DEPTH: u32 = 5;

/// A generated expression tree, used as the reference for the postfix pipeline.
#[derive(Debug, Clone)]
enum Expr {
    Literal(i64),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    /// Exponents stay small literals so values cannot explode.
    Pow(Box<Expr>, u32),
}

impl Expr {
    fn render(&self) -> String {
        match self {
            Expr::Literal(n) => n.to_string(),
            Expr::Add(l, r) => format!("({} + {})", l.render(), r.render()),
            Expr::Sub(l, r) => format!("({} - {})", l.render(), r.render()),
            Expr::Mul(l, r) => format!("({} * {})", l.render(), r.render()),
            Expr::Div(l, r) => format!("({} / {})", l.render(), r.render()),
            Expr::Pow(base, exp) => format!("({} ^ {})", base.render(), exp),
        }
    }

    fn eval(&self) -> Result<BigInt, EvaluationError> {
        Ok(match self {
            Expr::Literal(n) => BigInt::from(*n),
            Expr::Add(l, r) => l.eval()? + r.eval()?,
            Expr::Sub(l, r) => l.eval()? - r.eval()?,
            Expr::Mul(l, r) => l.eval()? * r.eval()?,
            Expr::Div(l, r) => {
                let lhs = l.eval()?;
                let rhs = r.eval()?;
                if rhs == BigInt::from(0) {
                    return Err(EvaluationError::DivisionByZero);
                }
                lhs / rhs
            }
            Expr::Pow(base, exp) => base.eval()?.pow(*exp),
        })
    }
}

fn expr() -> impl Strategy<Value = Expr> {
    let leaf = (-50i64..=50).prop_map(Expr::Literal);
    leaf.prop_recursive(MAX_DEPTH, 64, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::Add(Box::new(l), Box::new(r))),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::Sub(Box::new(l), Box::new(r))),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::Mul(Box::new(l), Box::new(r))),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::Div(Box::new(l), Box::new(r))),
            (inner, 0u32..4).prop_map(|(b, e)| Expr::Pow(Box::new(b), e)),
        ]
    })
}

proptest! {
    #[test]
    fn postfix_evaluation_matches_tree_evaluation(tree in expr()) {
        let calc = Calculator::new();
        let line = tree.render();
        prop_assert_eq!(calc.evaluate(&line), tree.eval(), "line: {}", line);
    }

    #[test]
    fn arbitrary_lines_never_panic(line in "[-+*/()a-c0-9= ]{0,40}") {
        let mut calc = Calculator::new();
        calc.assign("a = 2").unwrap();
        let before = calc.evaluate("a");
        let _ = calc.process(&line);
        if !line.contains('=') {
            prop_assert_eq!(calc.evaluate("a"), before);
        }
    }
}
