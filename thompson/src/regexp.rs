use crate::ast::Expr;

use automata::NFA;

/// A compiled regular expression for matching strings. It may be used to determine if given
/// strings are within the language described by the regular expression.
#[derive(Clone, Debug)]
pub struct RegExp {
    /// The regular expression represented by this structure.
    expr: Expr,
    /// The compiled automaton used to evaluate input strings.
    nfa: NFA<char>,
}

impl RegExp {
    /// Compile an expression tree. States left unreachable by alternation are dropped.
    #[inline]
    pub fn new(expr: Expr) -> Self {
        let mut nfa = expr.compile();
        nfa.prune();

        RegExp { expr, nfa }
    }

    #[inline]
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    #[inline]
    pub fn nfa(&self) -> &NFA<char> {
        &self.nfa
    }

    #[inline]
    pub fn into_nfa(self) -> NFA<char> {
        self.nfa
    }

    /// Determine if the whole input string is within the language described by the regular
    /// expression.
    #[inline]
    pub fn is_match(&self, input: &str) -> bool {
        self.nfa.matches(input)
    }
}

impl From<Expr> for RegExp {
    #[inline]
    fn from(expr: Expr) -> Self {
        RegExp::new(expr)
    }
}
