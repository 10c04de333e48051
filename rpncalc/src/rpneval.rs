use lexers::{PostfixToken, PostfixTokenizer};
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::Config;
use crate::operator::Operator;
use crate::parser::RPNExpr;
use crate::stack::{Stack, StackError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalErr {
    #[error(transparent)]
    Stack(#[from] StackError),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),
    #[error("Malformed number: {0}")]
    MalformedNumber(String),
    #[error("Empty operand stack")]
    EmptyResult,
}

fn apply(op: Operator, lhs: f64, rhs: f64) -> Result<f64, EvalErr> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Sub => Ok(lhs - rhs),
        Operator::Mul => Ok(lhs * rhs),
        Operator::Div if rhs == 0.0 => Err(EvalErr::DivisionByZero),
        Operator::Div => Ok(lhs / rhs),
        Operator::Pow => Ok(lhs.powf(rhs)),
    }
}

/// Evaluates postfix text left to right with a single operand stack.
#[derive(Debug, Clone, Default)]
pub struct RPNEvaluator {
    config: Config,
}

impl RPNEvaluator {
    pub fn new(config: Config) -> Self {
        RPNEvaluator{config}
    }

    pub fn eval(&self, rpn: &RPNExpr) -> Result<f64, EvalErr> {
        self.eval_str(&rpn.to_string())
    }

    pub fn eval_str(&self, postfix: &str) -> Result<f64, EvalErr> {
        let mut operands = Stack::with_capacity(self.config.stack_capacity);

        for token in PostfixTokenizer::new(postfix) {
            trace!(?token, "eval");
            match token {
                PostfixToken::Number(num) => operands.push(num)?,
                PostfixToken::PartialNumber(word, num) => {
                    if self.config.strict {
                        return Err(EvalErr::MalformedNumber(word));
                    }
                    operands.push(num)?;
                }
                PostfixToken::Word(word) => match self.operator(&word)? {
                    Some(op) => {
                        let rhs = operands.pop()?;
                        let lhs = operands.pop()?;
                        operands.push(apply(op, lhs, rhs)?)?;
                    }
                    None => debug!(%word, "skipping unrecognized token"),
                },
            }
        }
        if operands.is_empty() {
            return Err(EvalErr::EmptyResult);
        }
        if operands.len() > 1 {
            debug!(leftover = operands.len() - 1, "operands left under the result");
        }
        Ok(operands.pop()?)
    }

    // permissive mode only looks at the first character, "+5" reads as '+'
    fn operator(&self, word: &str) -> Result<Option<Operator>, EvalErr> {
        let mut chars = word.chars();
        let op = chars.next().and_then(Operator::from_char);
        if self.config.strict && (op.is_none() || chars.next().is_some()) {
            return Err(EvalErr::InvalidOperator(word.to_string()));
        }
        Ok(op)
    }
}
