//! Regular expression trees compiled to Thompson NFAs.
//!
//! There is no pattern syntax here: callers that already hold a parsed tree build an [`Expr`]
//! and hand it to [`RegExp::new`].
//!
//! ```
//! use thompson::{Expr, RegExp};
//!
//! // (a|b)*abb
//! let expr = Expr::atom('a')
//!     .alternate(Expr::atom('b'))
//!     .star()
//!     .concat(Expr::literal("abb"));
//! let re = RegExp::new(expr);
//!
//! assert!(re.is_match("babb"));
//! assert!(!re.is_match("ab"));
//! ```
#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

mod compile;
mod regexp;

pub mod ast;

pub use automata;
pub use ast::{BinaryOp, Expr, UnaryOp};
pub use regexp::*;

#[cfg(test)]
#[ctor::ctor]
fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}
