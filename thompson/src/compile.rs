use crate::ast::{BinaryOp, Expr, UnaryOp};

use automata::NFA;

impl Expr {
    /// Build an NFA accepting the language of this expression, combining the automata of the
    /// subexpressions bottom-up. Every subexpression is built into a fresh automaton, so no two
    /// operands ever share states.
    pub fn compile(&self) -> NFA<char> {
        let nfa = self.build();
        log::debug!(
            "compiled {} into {} states, {} accepting",
            self,
            nfa.total_states(),
            nfa.final_states().len()
        );
        nfa
    }

    fn build(&self) -> NFA<char> {
        match self {
            Expr::Empty => NFA::new_epsilon(),
            Expr::Atom(c) => NFA::atom(*c),
            Expr::Unary(op, e) => {
                let c1 = e.build();
                match op {
                    UnaryOp::Star => c1.kleene_star(),
                    UnaryOp::Plus => c1.plus(),
                    UnaryOp::Optional => c1.make_optional(),
                }
            }
            Expr::Binary(op, l, r) => {
                let c1 = l.build();
                let c2 = r.build();
                match op {
                    BinaryOp::Concat => c1.concat(c2),
                    BinaryOp::Alternate => c1.or(c2),
                }
            }
        }
    }
}

impl From<&Expr> for NFA<char> {
    #[inline]
    fn from(expr: &Expr) -> Self {
        expr.compile()
    }
}
