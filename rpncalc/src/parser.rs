use lexers::{InfixToken, InfixTokenizer};
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::Config;
use crate::operator::{Assoc, Operator};
use crate::stack::{Stack, StackError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
    #[error(transparent)]
    Stack(#[from] StackError),
    #[error("Expression too long ({len} characters, at most {max} fit)")]
    InputTooLong { len: usize, max: usize },
    #[error("Postfix output does not fit in {max} characters")]
    OutputOverflow { max: usize },
    #[error("Unknown character: {0:?}")]
    UnknownChar(char),
    #[error("Malformed number: {0}")]
    MalformedNumber(String),
}

#[derive(Clone, PartialEq, Debug)]
pub enum RPNToken {
    Number(String), // lexeme as it appeared in the infix text
    Op(Operator),
}

impl RPNToken {
    // characters it takes in the postfix text
    fn width(&self) -> usize {
        match self {
            RPNToken::Number(lexeme) => lexeme.chars().count(),
            RPNToken::Op(_) => 1,
        }
    }
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct RPNExpr(pub Vec<RPNToken>);

// what the converter parks on its stack
#[derive(Clone, Copy, PartialEq, Debug)]
enum Pending {
    Op(Operator),
    OParen,
}

// bounded postfix output, each token is written followed by a space
struct Output {
    tokens: Vec<RPNToken>,
    written: usize,
    max: usize,
}

impl Output {
    fn new(max: usize) -> Self {
        Output{tokens: Vec::new(), written: 0, max}
    }

    fn push(&mut self, token: RPNToken) -> Result<(), ParseError> {
        let written = self.written + token.width() + 1;
        // keep one slot for the terminator
        if written >= self.max {
            return Err(ParseError::OutputOverflow{max: self.max});
        }
        trace!(?token, "emit");
        self.written = written;
        self.tokens.push(token);
        Ok(())
    }
}

fn well_formed_number(lexeme: &str) -> bool {
    let mut parts = lexeme.splitn(2, '.');
    let int = parts.next().unwrap_or("");
    let frac = parts.next().unwrap_or("");
    !int.is_empty() && !frac.contains('.')
}

/// Infix to postfix conversion with the shunting-yard algorithm.
#[derive(Debug, Clone, Default)]
pub struct ShuntingParser {
    config: Config,
}

impl ShuntingParser {
    pub fn new(config: Config) -> Self {
        ShuntingParser{config}
    }

    pub fn parse_str(&self, expr: &str) -> Result<RPNExpr, ParseError> {
        let len = expr.chars().count();
        if len >= self.config.buffer_len {
            return Err(ParseError::InputTooLong{
                len, max: self.config.buffer_len.saturating_sub(1)});
        }
        self.parse(&mut InfixTokenizer::new(expr.chars()))
    }

    pub fn parse(&self, lex: &mut impl Iterator<Item = InfixToken>) -> Result<RPNExpr, ParseError> {
        let mut out = Output::new(self.config.buffer_len);
        let mut stack = Stack::with_capacity(self.config.stack_capacity);

        for token in lex {
            match token {
                InfixToken::Number(lexeme) => {
                    if self.config.strict && !well_formed_number(&lexeme) {
                        return Err(ParseError::MalformedNumber(lexeme));
                    }
                    out.push(RPNToken::Number(lexeme))?;
                }
                InfixToken::Op(c) => match Operator::from_char(c) {
                    Some(op) => {
                        self.pop_operators(op, &mut stack, &mut out)?;
                        stack.push(Pending::Op(op))?;
                    }
                    None => self.skip(c)?,
                },
                InfixToken::OParen => stack.push(Pending::OParen)?,
                InfixToken::CParen => loop {
                    if stack.is_empty() {
                        return Err(ParseError::MismatchedParentheses);
                    }
                    match stack.pop()? {
                        Pending::OParen => break,
                        Pending::Op(op) => out.push(RPNToken::Op(op))?,
                    }
                },
                InfixToken::Space => (),
                InfixToken::Unknown(c) => self.skip(c)?,
            }
        }
        while !stack.is_empty() {
            match stack.pop()? {
                Pending::OParen => return Err(ParseError::MismatchedParentheses),
                Pending::Op(op) => out.push(RPNToken::Op(op))?,
            }
        }
        let rpn = RPNExpr(out.tokens);
        debug!(postfix = %rpn, "converted");
        Ok(rpn)
    }

    // move pending operators that bind at least as tight as `op` to the output
    fn pop_operators(&self, op: Operator, stack: &mut Stack<Pending>, out: &mut Output)
        -> Result<(), ParseError>
    {
        while !stack.is_empty() {
            let top = match *stack.peek()? {
                Pending::Op(top) => top,
                Pending::OParen => break,
            };
            if top.precedence() < op.precedence() {
                break;
            }
            // never taken while every operator is left-associative
            if top.precedence() == op.precedence() && op.assoc() == Assoc::Right {
                break;
            }
            stack.pop()?;
            out.push(RPNToken::Op(top))?;
        }
        Ok(())
    }

    fn skip(&self, c: char) -> Result<(), ParseError> {
        if self.config.strict {
            return Err(ParseError::UnknownChar(c));
        }
        debug!(?c, "skipping unrecognized character");
        Ok(())
    }
}
