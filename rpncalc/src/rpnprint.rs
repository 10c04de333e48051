use crate::parser::{RPNExpr, RPNToken};
use std::fmt;

impl fmt::Display for RPNToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RPNToken::Number(lexeme) => write!(f, "{}", lexeme),
            RPNToken::Op(op) => write!(f, "{}", op),
        }
    }
}

// tokens separated by a single space, no trailing space
impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{}", first)?;
        }
        for token in tokens {
            write!(f, " {}", token)?;
        }
        Ok(())
    }
}
