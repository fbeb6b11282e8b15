use std::ops::Deref;
use std::str::FromStr;

use lexers::{ArithToken, ArithTokenizer};
use log::{debug, trace};
use thiserror::Error;

use crate::token::{precedence, Operator, Token};

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ParseError {
    #[error("No input provided")]
    EmptyInput,
    #[error("Unknown token \"{token}\" at index {index}")]
    UnknownToken { token: char, index: usize },
    #[error("Could not find pair for \")\" at index {index}")]
    UnmatchedCloseParen { index: usize },
    #[error("Could not find pair for \"(\" at index {index}")]
    UnmatchedOpenParen { index: usize },
    #[error("Number {lexeme} at index {index} does not fit in 64 bits")]
    NumberOverflow { lexeme: String, index: usize },
}

/// An expression in postfix order. When produced by the parser it only
/// holds `Number` and `Operator` tokens.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RPNExpr(pub Vec<Token>);

impl Deref for RPNExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] {
        &self.0
    }
}

impl From<Vec<Token>> for RPNExpr {
    fn from(tokens: Vec<Token>) -> Self {
        RPNExpr(tokens)
    }
}

impl FromStr for RPNExpr {
    type Err = ParseError;
    fn from_str(expr: &str) -> Result<Self, Self::Err> {
        ShuntingParser::parse_str(expr)
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse(&mut ArithTokenizer::new(expr.chars()))
    }

    pub fn parse(
        lex: &mut impl Iterator<Item = (usize, ArithToken)>,
    ) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        // operators and open parens, tagged with their input index
        let mut stack: Vec<(usize, Token)> = Vec::new();
        let mut seen_any = false;

        for (index, lexeme) in lex {
            seen_any = true;
            match lexeme {
                ArithToken::Digits(digits) => match digits.parse::<i64>() {
                    Ok(n) => out.push(Token::Number(n)),
                    Err(_) => {
                        return Err(ParseError::NumberOverflow { lexeme: digits, index })
                    }
                },
                ArithToken::Op(symbol) => {
                    let op = Operator::from_symbol(symbol)
                        .ok_or(ParseError::UnknownToken { token: symbol, index })?;
                    // equal precedence pops too, giving left associativity
                    while let Some(&(_, Token::Operator(top))) = stack.last() {
                        if precedence(top) < precedence(op) {
                            break;
                        }
                        trace!("{} binds at least as tight as {}, moving to output", top, op);
                        out.push(Token::Operator(top));
                        stack.pop();
                    }
                    stack.push((index, Token::Operator(op)));
                }
                ArithToken::OParen => stack.push((index, Token::LeftParen)),
                ArithToken::CParen => loop {
                    match stack.pop() {
                        Some((_, Token::LeftParen)) => break,
                        Some((_, token)) => out.push(token),
                        None => return Err(ParseError::UnmatchedCloseParen { index }),
                    }
                },
                ArithToken::Unknown(token) => {
                    return Err(ParseError::UnknownToken { token, index })
                }
            }
            trace!("at {}: output {:?}, stack {:?}", index, out, stack);
        }
        if !seen_any {
            return Err(ParseError::EmptyInput);
        }
        while let Some((index, top)) = stack.pop() {
            match top {
                Token::LeftParen => return Err(ParseError::UnmatchedOpenParen { index }),
                token => out.push(token),
            }
        }
        let rpn = RPNExpr(out);
        debug!("parsed rpn: {:?}", rpn.0);
        Ok(rpn)
    }
}
