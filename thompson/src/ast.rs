use std::fmt::{self, Display, Formatter};

/// A node of a regular expression tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Matches only the empty string.
    Empty,
    Atom(char),
    Unary(UnaryOp, Box<Self>),
    Binary(BinaryOp, Box<Self>, Box<Self>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnaryOp {
    Star,
    Plus,
    Optional,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BinaryOp {
    Concat,
    Alternate,
}

impl Expr {
    #[inline]
    pub fn atom(c: char) -> Self {
        Expr::Atom(c)
    }

    /// The concatenation of one atom per character. An empty string gives [`Expr::Empty`].
    #[inline]
    pub fn literal(s: &str) -> Self {
        s.chars()
            .map(Expr::Atom)
            .reduce(Expr::concat)
            .unwrap_or(Expr::Empty)
    }

    #[inline]
    pub fn concat(self, other: Self) -> Self {
        Expr::Binary(BinaryOp::Concat, Box::new(self), Box::new(other))
    }

    #[inline]
    pub fn alternate(self, other: Self) -> Self {
        Expr::Binary(BinaryOp::Alternate, Box::new(self), Box::new(other))
    }

    #[inline]
    pub fn star(self) -> Self {
        Expr::Unary(UnaryOp::Star, Box::new(self))
    }

    #[inline]
    pub fn plus(self) -> Self {
        Expr::Unary(UnaryOp::Plus, Box::new(self))
    }

    #[inline]
    pub fn optional(self) -> Self {
        Expr::Unary(UnaryOp::Optional, Box::new(self))
    }

    /// Whether the expression matches the empty string.
    pub fn is_nullable(&self) -> bool {
        match self {
            Expr::Empty => true,
            Expr::Atom(_) => false,
            Expr::Unary(UnaryOp::Plus, e) => e.is_nullable(),
            Expr::Unary(_, _) => true,
            Expr::Binary(BinaryOp::Concat, l, r) => l.is_nullable() && r.is_nullable(),
            Expr::Binary(BinaryOp::Alternate, l, r) => l.is_nullable() || r.is_nullable(),
        }
    }

    #[inline]
    fn is_simple(&self) -> bool {
        matches!(self, Expr::Empty | Expr::Atom(_))
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Empty => write!(f, "()"),
            Expr::Atom(c) if "()|*+?\\".contains(*c) => write!(f, "\\{}", c),
            Expr::Atom(c) => write!(f, "{}", c),
            Expr::Unary(op, e) => {
                let op = match op {
                    UnaryOp::Star => '*',
                    UnaryOp::Plus => '+',
                    UnaryOp::Optional => '?',
                };
                if e.is_simple() {
                    write!(f, "{}{}", e, op)
                } else {
                    write!(f, "({}){}", e, op)
                }
            }
            Expr::Binary(BinaryOp::Concat, l, r) => {
                for e in [l, r].iter() {
                    match ***e {
                        Expr::Binary(BinaryOp::Alternate, _, _) => write!(f, "({})", e)?,
                        _ => write!(f, "{}", e)?,
                    }
                }
                Ok(())
            }
            Expr::Binary(BinaryOp::Alternate, l, r) => write!(f, "{}|{}", l, r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal() {
        assert_eq!(Expr::Empty, Expr::literal(""));
        assert_eq!(Expr::atom('a'), Expr::literal("a"));
        assert_eq!(
            Expr::atom('a').concat(Expr::atom('b')).concat(Expr::atom('c')),
            Expr::literal("abc")
        );
    }

    #[test]
    fn test_nullable() {
        assert!(Expr::Empty.is_nullable());
        assert!(!Expr::atom('a').is_nullable());
        assert!(Expr::atom('a').star().is_nullable());
        assert!(!Expr::atom('a').plus().is_nullable());
        assert!(Expr::atom('a').optional().plus().is_nullable());
        assert!(Expr::atom('a').optional().is_nullable());
        assert!(!Expr::atom('a').concat(Expr::atom('b').star()).is_nullable());
        assert!(Expr::atom('a').alternate(Expr::Empty).is_nullable());
    }

    #[test]
    fn test_display() {
        let e = Expr::atom('a')
            .alternate(Expr::literal("bc"))
            .star()
            .concat(Expr::atom('*').optional());
        assert_eq!(r"(a|bc)*\*?", e.to_string());

        let e = Expr::literal("ab").concat(Expr::atom('c').alternate(Expr::Empty));
        assert_eq!("ab(c|())", e.to_string());
    }
}
