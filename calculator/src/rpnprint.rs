use crate::parser::RPNExpr;
use crate::token::{precedence, Operator, Token};
use std::fmt;

enum Step {
    Visit(usize),
    Infix(Operator),
    Open,
    Close,
}

impl RPNExpr {
    // Index of the root token and the (lhs, rhs) operand indices of every
    // operator. None if the tokens don't reduce to a single tree.
    fn operand_indices(&self) -> Option<(usize, Vec<(usize, usize)>)> {
        let mut kids = vec![(0, 0); self.0.len()];
        let mut stack = Vec::new();
        for (i, token) in self.0.iter().enumerate() {
            match *token {
                Token::Number(_) => stack.push(i),
                Token::Operator(_) => {
                    let r = stack.pop()?;
                    let l = stack.pop()?;
                    kids[i] = (l, r);
                    stack.push(i);
                }
                Token::LeftParen | Token::RightParen => return None,
            }
        }
        match stack[..] {
            [root] => Some((root, kids)),
            _ => None,
        }
    }

    fn binding(&self, i: usize) -> usize {
        match self.0[i] {
            Token::Operator(op) => precedence(op),
            _ => usize::MAX,
        }
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn operand(todo: &mut Vec<Step>, i: usize, parens: bool) {
            if parens {
                todo.extend([Step::Close, Step::Visit(i), Step::Open]);
            } else {
                todo.push(Step::Visit(i));
            }
        }

        let (root, kids) = match self.operand_indices() {
            Some(tree) => tree,
            None => {
                let tokens = self.0.iter().map(|t| t.to_string()).collect::<Vec<_>>();
                return write!(f, "{}", tokens.join(" "));
            }
        };
        // explicit stack, steps are pushed in reverse print order
        let mut todo = vec![Step::Visit(root)];
        while let Some(step) = todo.pop() {
            match step {
                Step::Visit(i) => match self.0[i] {
                    Token::Operator(op) => {
                        let (l, r) = kids[i];
                        let prec = precedence(op);
                        // everything is left associative, so an equal precedence
                        // subtree on the right needs its parens back
                        operand(&mut todo, r, self.binding(r) <= prec);
                        todo.push(Step::Infix(op));
                        operand(&mut todo, l, self.binding(l) < prec);
                    }
                    token => write!(f, "{}", token)?,
                },
                Step::Infix(op) => write!(f, " {} ", op)?,
                Step::Open => write!(f, "(")?,
                Step::Close => write!(f, ")")?,
            }
        }
        Ok(())
    }
}

///////////////////////////////////////////////////////////////////////////////
