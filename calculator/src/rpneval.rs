use log::{debug, trace};
use thiserror::Error;

use crate::parser::RPNExpr;
use crate::token::{Operator, Token};

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum EvalErr {
    #[error("Nothing to process")]
    EmptyTokens,
    #[error("Insufficient amount of arguments")]
    InsufficientOperands,
    #[error("Insufficient amount of operators")]
    InsufficientOperators,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Integer overflow")]
    Overflow,
    #[error("Unexpected token \"{0}\" in RPN")]
    UnexpectedToken(Token),
}

// Division truncates toward zero: -7 / 2 == -3
fn apply(op: Operator, l: i64, r: i64) -> Result<i64, EvalErr> {
    match op {
        Operator::Add => l.checked_add(r).ok_or(EvalErr::Overflow),
        Operator::Sub => l.checked_sub(r).ok_or(EvalErr::Overflow),
        Operator::Mul => l.checked_mul(r).ok_or(EvalErr::Overflow),
        Operator::Div if r == 0 => Err(EvalErr::DivisionByZero),
        Operator::Div => l.checked_div(r).ok_or(EvalErr::Overflow),
    }
}

pub fn evaluate_rpn(tokens: &[Token]) -> Result<i64, EvalErr> {
    if tokens.is_empty() {
        return Err(EvalErr::EmptyTokens);
    }
    let mut operands = Vec::new();

    for token in tokens.iter() {
        match *token {
            Token::Number(num) => operands.push(num),
            Token::Operator(op) => {
                let r = operands.pop().ok_or(EvalErr::InsufficientOperands)?;
                let l = operands.pop().ok_or(EvalErr::InsufficientOperands)?;
                let value = apply(op, l, r)?;
                trace!("{} {} {} = {}", l, op, r, value);
                operands.push(value);
            }
            Token::LeftParen | Token::RightParen => {
                return Err(EvalErr::UnexpectedToken(*token))
            }
        }
    }
    match operands[..] {
        [value] => {
            debug!("evaluated to {}", value);
            Ok(value)
        }
        _ => Err(EvalErr::InsufficientOperators),
    }
}

impl RPNExpr {
    pub fn eval(&self) -> Result<i64, EvalErr> {
        evaluate_rpn(&self.0)
    }
}
