//! Integer arithmetic on infix expressions.
//!
//! Input is converted to Reverse Polish Notation with the shunting-yard
//! algorithm and then reduced on a value stack.
//!
//! ```
//! assert_eq!(calculator::evaluate("(15 + 7) / 2 - (65 - 61) * 2"), Ok(3));
//! ```

use thiserror::Error;

pub use parser::ParseError;
pub use parser::RPNExpr;
pub use parser::ShuntingParser;
pub use rpneval::evaluate_rpn;
pub use rpneval::EvalErr;
pub use token::{precedence, Operator, Token};

mod parser;

mod rpneval;

mod rpnprint;
mod token;

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalErr),
}

/// Convert an infix expression to RPN.
pub fn parse(input: &str) -> Result<RPNExpr, ParseError> {
    ShuntingParser::parse_str(input)
}

/// Parse and evaluate `input`. Errors from either stage are passed through.
pub fn evaluate(input: &str) -> Result<i64, Error> {
    let rpn = parse(input)?;
    Ok(evaluate_rpn(&rpn)?)
}
