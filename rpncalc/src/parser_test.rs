use crate::config::Config;
use crate::operator::Operator;
use crate::parser::{ParseError, RPNToken, ShuntingParser};
use crate::stack::StackError;

fn postfix(expr: &str) -> String {
    ShuntingParser::default().parse_str(expr).unwrap().to_string()
}

#[test]
fn test_parse1() {
    let rpn = ShuntingParser::default().parse_str("3+4*2/(1-5)^2^3").unwrap();
    let expect = [
        RPNToken::Number(format!("3")),
        RPNToken::Number(format!("4")),
        RPNToken::Number(format!("2")),
        RPNToken::Op(Operator::Mul),
        RPNToken::Number(format!("1")),
        RPNToken::Number(format!("5")),
        RPNToken::Op(Operator::Sub),
        RPNToken::Number(format!("2")),
        RPNToken::Op(Operator::Pow),
        RPNToken::Number(format!("3")),
        RPNToken::Op(Operator::Pow),
        RPNToken::Op(Operator::Div),
        RPNToken::Op(Operator::Add),
    ];
    assert_eq!(rpn.0, expect);
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(postfix("3+4*2"), "3 4 2 * +");
    assert_eq!(postfix("(1+2)*3"), "1 2 + 3 *");
    assert_eq!(postfix("2*3+4"), "2 3 * 4 +");
    assert_eq!(postfix("2^3*4"), "2 3 ^ 4 *");
    assert_eq!(postfix("((7))"), "7");
    assert_eq!(postfix("5/0"), "5 0 /");
}

#[test]
fn left_associative() {
    assert_eq!(postfix("8-3-2"), "8 3 - 2 -");
    assert_eq!(postfix("8/4/2"), "8 4 / 2 /");
    assert_eq!(postfix("2^3^2"), "2 3 ^ 2 ^");
    assert_eq!(postfix("1-2+3"), "1 2 - 3 +");
}

#[test]
fn permissive_input() {
    assert_eq!(postfix("1.2.3+1"), "1.2.3 1 +");
    assert_eq!(postfix("3a+4"), "3 4 +");
    assert_eq!(postfix("3%4"), "3 4");
    assert_eq!(postfix(".5*2"), ".5 2 *");
    assert_eq!(postfix(""), "");
}

#[test]
fn whitespace_separates() {
    assert_eq!(postfix(" 3 +\t4 "), "3 4 +");
    assert_eq!(postfix("1 2"), "1 2");
    let strict = ShuntingParser::new(Config::strict());
    assert_eq!(strict.parse_str("( 1 + 2 ) * 3").unwrap().to_string(), "1 2 + 3 *");
}

#[test]
fn strict_input() {
    let strict = ShuntingParser::new(Config::strict());
    assert_eq!(strict.parse_str("1.2.3+1"), Err(ParseError::MalformedNumber(format!("1.2.3"))));
    assert_eq!(strict.parse_str(".5*2"), Err(ParseError::MalformedNumber(format!(".5"))));
    assert_eq!(strict.parse_str("3a+4"), Err(ParseError::UnknownChar('a')));
    assert_eq!(strict.parse_str("7.+1").unwrap().to_string(), "7. 1 +");
}

#[test]
fn bad_parse() {
    let parser = ShuntingParser::default();
    assert_eq!(parser.parse_str("(1+2"), Err(ParseError::MismatchedParentheses));
    assert_eq!(parser.parse_str("1+2)"), Err(ParseError::MismatchedParentheses));
    assert_eq!(parser.parse_str(")("), Err(ParseError::MismatchedParentheses));
    assert_eq!(parser.parse_str("((1)"), Err(ParseError::MismatchedParentheses));
    assert_eq!(parser.parse_str("(1))+(2"), Err(ParseError::MismatchedParentheses));
}

#[test]
fn balanced_never_mismatched() {
    let parser = ShuntingParser::default();
    for expr in ["(1)", "((1+2)*(3-4))", "(((2)))^(1)", "1+(2*(3+(4/5)))", "()"].iter() {
        assert!(parser.parse_str(expr).is_ok(), "{}", expr);
    }
}

#[test]
fn operator_stack_overflow() {
    let parser = ShuntingParser::new(Config::default().with_stack_capacity(2));
    assert_eq!(parser.parse_str("(((1)))"),
               Err(ParseError::Stack(StackError::Overflow(2))));
    assert_eq!(parser.parse_str("((1))").unwrap().to_string(), "1");
}

#[test]
fn bounded_buffers() {
    let parser = ShuntingParser::default();
    let long = "1".repeat(100);
    assert_eq!(parser.parse_str(&long), Err(ParseError::InputTooLong{len: 100, max: 99}));

    let parser = ShuntingParser::new(Config::default().with_buffer_len(10));
    assert_eq!(parser.parse_str("1+2+3+4"), Err(ParseError::OutputOverflow{max: 10}));
    // "1 2 + 3 + " takes 10 characters, one more than fits
    assert_eq!(parser.parse_str("1+2+3"), Err(ParseError::OutputOverflow{max: 10}));
    assert_eq!(parser.parse_str("12+3").unwrap().to_string(), "12 3 +");
}

#[test]
fn repeated_parses_are_independent() {
    let parser = ShuntingParser::default();
    assert!(parser.parse_str("(1+").is_err());
    for _ in 0..3 {
        assert_eq!(parser.parse_str("1+2").unwrap().to_string(), "1 2 +");
    }
}

#[test]
fn strict_literal_shape() {
    let strict = ShuntingParser::new(Config::strict());
    for ok in ["7", "7.", "7.25", "0.0"].iter() {
        assert_eq!(strict.parse_str(ok).unwrap().to_string(), *ok);
    }
    for bad in [".", ".5", "1..2", "1.2.3"].iter() {
        assert_eq!(strict.parse_str(bad), Err(ParseError::MalformedNumber(bad.to_string())));
    }
}
