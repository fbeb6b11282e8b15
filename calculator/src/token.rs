use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// Binding strength of each operator, higher binds tighter.
/// All operators are left associative.
pub const fn precedence(op: Operator) -> usize {
    match op {
        Operator::Add | Operator::Sub => 1,
        Operator::Mul | Operator::Div => 2,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Token {
    Number(i64),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols() {
        for sym in ['+', '-', '*', '/'] {
            let op = Operator::from_symbol(sym).unwrap();
            assert_eq!(op.symbol(), sym);
        }
        assert_eq!(Operator::from_symbol('^'), None);
        assert_eq!(Operator::from_symbol('('), None);
    }

    #[test]
    fn precedence_table() {
        assert_eq!(precedence(Operator::Add), precedence(Operator::Sub));
        assert_eq!(precedence(Operator::Mul), precedence(Operator::Div));
        assert!(precedence(Operator::Mul) > precedence(Operator::Add));
    }

    #[test]
    fn display() {
        assert_eq!(Token::Number(-42).to_string(), "-42");
        assert_eq!(Token::Operator(Operator::Div).to_string(), "/");
        assert_eq!(Token::LeftParen.to_string(), "(");
        assert_eq!(Token::RightParen.to_string(), ")");
    }
}
