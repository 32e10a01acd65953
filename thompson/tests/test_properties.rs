use std::collections::BTreeSet;

use quickcheck::{quickcheck, Arbitrary, Gen};
use thompson::{BinaryOp, Expr, RegExp, UnaryOp};

/// An expression tree over the alphabet {a, b}, at most a few levels deep.
#[derive(Clone, Debug)]
struct ArbExpr(Expr);

/// An input string over {a, b, c}; `c` never occurs in an expression.
#[derive(Clone, Debug)]
struct Input(String);

fn gen_expr(g: &mut Gen, depth: usize) -> Expr {
    let choice = if depth == 0 {
        u8::arbitrary(g) % 3
    } else {
        u8::arbitrary(g) % 8
    };
    match choice {
        0 => Expr::Empty,
        1 => Expr::atom('a'),
        2 => Expr::atom('b'),
        3 => gen_expr(g, depth - 1).star(),
        4 => gen_expr(g, depth - 1).plus(),
        5 => gen_expr(g, depth - 1).optional(),
        6 => gen_expr(g, depth - 1).concat(gen_expr(g, depth - 1)),
        _ => gen_expr(g, depth - 1).alternate(gen_expr(g, depth - 1)),
    }
}

impl Arbitrary for ArbExpr {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbExpr(gen_expr(g, 4))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let children: Vec<Expr> = match &self.0 {
            Expr::Empty | Expr::Atom(_) => vec![],
            Expr::Unary(_, e) => vec![(**e).clone()],
            Expr::Binary(_, l, r) => vec![(**l).clone(), (**r).clone()],
        };
        Box::new(children.into_iter().map(ArbExpr))
    }
}

impl Arbitrary for Input {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 7;
        Input(
            (0..len)
                .filter_map(|_| g.choose(&['a', 'a', 'b', 'b', 'c']).copied())
                .collect(),
        )
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let chars: Vec<char> = self.0.chars().collect();
        Box::new(chars.shrink().map(|cs| Input(cs.into_iter().collect())))
    }
}

/// The positions at which a match of `expr` starting at `start` can end.
fn ends(expr: &Expr, input: &[char], start: usize) -> BTreeSet<usize> {
    match expr {
        Expr::Empty => std::iter::once(start).collect(),
        Expr::Atom(c) => match input.get(start) {
            Some(d) if d == c => std::iter::once(start + 1).collect(),
            _ => BTreeSet::new(),
        },
        Expr::Unary(UnaryOp::Optional, e) => {
            let mut set = ends(e, input, start);
            set.insert(start);
            set
        }
        Expr::Unary(UnaryOp::Star, e) => repeat_ends(e, input, start),
        Expr::Unary(UnaryOp::Plus, e) => ends(e, input, start)
            .into_iter()
            .flat_map(|mid| repeat_ends(e, input, mid))
            .collect(),
        Expr::Binary(BinaryOp::Concat, l, r) => ends(l, input, start)
            .into_iter()
            .flat_map(|mid| ends(r, input, mid))
            .collect(),
        Expr::Binary(BinaryOp::Alternate, l, r) => {
            let mut set = ends(l, input, start);
            set.extend(ends(r, input, start));
            set
        }
    }
}

fn repeat_ends(expr: &Expr, input: &[char], start: usize) -> BTreeSet<usize> {
    let mut seen = BTreeSet::new();
    let mut work = vec![start];
    while let Some(pos) = work.pop() {
        if seen.insert(pos) {
            work.extend(ends(expr, input, pos));
        }
    }
    seen
}

fn reference_match(expr: &Expr, s: &str) -> bool {
    let input: Vec<char> = s.chars().collect();
    ends(expr, &input, 0).contains(&input.len())
}

quickcheck! {
    fn prop_agrees_with_reference(e: ArbExpr, s: Input) -> bool {
        let expected = reference_match(&e.0, &s.0);
        e.0.compile().matches(&s.0) == expected && RegExp::new(e.0.clone()).is_match(&s.0) == expected
    }

    fn prop_nullable(e: ArbExpr) -> bool {
        e.0.compile().matches("") == e.0.is_nullable()
    }

    fn prop_or(l: ArbExpr, r: ArbExpr, s: Input) -> bool {
        let either = l.0.compile().matches(&s.0) || r.0.compile().matches(&s.0);
        l.0.alternate(r.0).compile().matches(&s.0) == either
    }

    fn prop_concat_complete(l: ArbExpr, r: ArbExpr, u: Input, v: Input) -> bool {
        let lhs = l.0.compile();
        let rhs = r.0.compile();
        if !(lhs.matches(&u.0) && rhs.matches(&v.0)) {
            return true;
        }
        let joined = format!("{}{}", u.0, v.0);
        lhs.concat(rhs).matches(&joined)
    }

    fn prop_concat_sound(l: ArbExpr, r: ArbExpr, s: Input) -> bool {
        let nfa = l.0.clone().concat(r.0.clone()).compile();
        if !nfa.matches(&s.0) {
            return true;
        }
        let lhs = l.0.compile();
        let rhs = r.0.compile();
        s.0.char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(s.0.len()))
            .any(|i| lhs.matches(&s.0[..i]) && rhs.matches(&s.0[i..]))
    }

    fn prop_optional(e: ArbExpr, s: Input) -> bool {
        let expected = s.0.is_empty() || e.0.compile().matches(&s.0);
        let once = e.0.compile().make_optional();
        let twice = once.clone().make_optional();
        once.matches(&s.0) == expected && twice.matches(&s.0) == expected
    }

    fn prop_kleene_star_contains_repeats(e: ArbExpr, u: Input, n: u8) -> bool {
        let nfa = e.0.compile();
        if !nfa.matches(&u.0) {
            return true;
        }
        let repeated = u.0.repeat(usize::from(n % 4));
        nfa.kleene_star().matches(&repeated)
    }
}
