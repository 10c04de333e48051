use crate::helpers::{DIGITS, WHITE};
use crate::scanner::Scanner;

const OPS: &[char] = &['+', '-', '*', '/', '^'];

#[derive(Clone, PartialEq, Debug)]
pub enum InfixToken {
    Number(String), // verbatim run of digits and '.'
    Op(char),
    OParen, CParen,
    Space,
    Unknown(char),
}

/// Splits infix arithmetic into tokens, one character of look-ahead.
///
/// Numeric literals are not validated: any run of digits and '.' is a
/// single `Number`, so "1.2.3" comes out as is.
pub struct InfixTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> InfixTokenizer<I> {
    pub fn new(source: I) -> Self {
        InfixTokenizer{src: Scanner::new(source)}
    }

    fn is_numeric(c: &char) -> bool {
        *c == '.' || DIGITS.contains(c)
    }

    fn get_token(&mut self) -> Option<InfixToken> {
        let first = self.src.peek()?;
        if Self::is_numeric(&first) {
            while self.src.peek().filter(Self::is_numeric).is_some() {
                self.src.next();
            }
            return Some(InfixToken::Number(self.src.extract_string()));
        }
        if self.src.skip_all(WHITE) {
            self.src.ignore();
            return Some(InfixToken::Space);
        }
        self.src.next();
        self.src.ignore();
        Some(match first {
            '(' => InfixToken::OParen,
            ')' => InfixToken::CParen,
            c if OPS.contains(&c) => InfixToken::Op(c),
            c => InfixToken::Unknown(c),
        })
    }
}

impl<I: Iterator<Item=char>> Iterator for InfixTokenizer<I> {
    type Item = InfixToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////
