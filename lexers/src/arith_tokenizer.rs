#![deny(warnings)]

use crate::scanner::Scanner;

static WHITE: &[char] = &[' '];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static OPS: &[char] = &['+', '-', '*', '/'];


#[derive(Clone, PartialEq, Debug)]
pub enum ArithToken {
    Digits(String),
    Op(char),
    OParen, CParen,
    Unknown(char),
}

// Splits a char stream into lexemes tagged with the index of their
// first char. Has no notion of precedence or integer ranges.
pub struct ArithTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> ArithTokenizer<I> {
    pub fn new(source: I) -> Self {
        ArithTokenizer{src: Scanner::new(source)}
    }

    fn get_token(&mut self) -> Option<(usize, ArithToken)> {
        self.src.skip_all(WHITE);
        self.src.ignore();
        let index = self.src.offset();
        let token = if self.src.skip_all(DIGITS) {
            ArithToken::Digits(self.src.extract_string())
        } else if let Some(op) = self.src.accept_any(OPS) {
            ArithToken::Op(op)
        } else if self.src.accept(&'(').is_some() {
            ArithToken::OParen
        } else if self.src.accept(&')').is_some() {
            ArithToken::CParen
        } else {
            ArithToken::Unknown(self.src.next()?)
        };
        self.src.ignore();
        Some((index, token))
    }
}

impl<I: Iterator<Item=char>> Iterator for ArithTokenizer<I> {
    type Item = (usize, ArithToken);
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////
