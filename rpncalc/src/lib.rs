extern crate lexers;

use thiserror::Error;

pub use config::Config;
pub use operator::{is_operator, precedence, Assoc, Operator};
pub use parser::{ParseError, RPNExpr, RPNToken, ShuntingParser};
pub use rpneval::{EvalErr, RPNEvaluator};
pub use stack::{Stack, StackError};

pub mod config;
pub mod operator;
pub mod parser;
pub mod stack;
#[cfg(test)]
mod parser_test;

mod rpnprint;
mod rpneval;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalErr),
}

/// An expression converted to postfix together with its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub postfix: RPNExpr,
    pub value: f64,
}

/// Convert `expr` to postfix and evaluate it, both under `config`.
pub fn calculate(expr: &str, config: &Config) -> Result<Calculation, CalcError> {
    let postfix = ShuntingParser::new(*config).parse_str(expr)?;
    let value = RPNEvaluator::new(*config).eval(&postfix)?;
    Ok(Calculation{postfix, value})
}
