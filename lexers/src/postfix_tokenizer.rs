use std::str::{FromStr, Split};

use crate::helpers;
use crate::scanner::Scanner;

#[derive(Clone, PartialEq, Debug)]
pub enum PostfixToken {
    Number(f64),
    // numeric head followed by junk, eg: "1.2.3" holds 1.2
    PartialNumber(String, f64),
    Word(String),
}

/// Splits postfix text on single spaces, runs of spaces and a trailing
/// space are tolerated.
///
/// A word is numeric when it starts with a digit or with '-' followed by a
/// digit, so "-3" is a negative literal and never a unary minus.
pub struct PostfixTokenizer<'a> {
    words: Split<'a, char>,
}

impl<'a> PostfixTokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        PostfixTokenizer{words: source.split(' ')}
    }

    fn looks_numeric(word: &str) -> bool {
        let mut chars = word.chars();
        match (chars.next(), chars.next()) {
            (Some(c), _) if c.is_ascii_digit() => true,
            (Some('-'), Some(d)) => d.is_ascii_digit(),
            _ => false,
        }
    }

    fn classify(word: &str) -> PostfixToken {
        if !Self::looks_numeric(word) {
            return PostfixToken::Word(word.to_string());
        }
        let mut scanner = Scanner::new(word.chars());
        let head = match helpers::scan_number(&mut scanner) {
            Some(head) => head,
            None => return PostfixToken::Word(word.to_string()),
        };
        match f64::from_str(&head) {
            Ok(num) if head.len() == word.len() => PostfixToken::Number(num),
            Ok(num) => PostfixToken::PartialNumber(word.to_string(), num),
            Err(_) => PostfixToken::Word(word.to_string()),
        }
    }
}

impl<'a> Iterator for PostfixTokenizer<'a> {
    type Item = PostfixToken;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let word = self.words.next()?;
            if !word.is_empty() {
                return Some(Self::classify(word));
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
