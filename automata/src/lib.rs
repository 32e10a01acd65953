//! Thompson-construction NFAs.
//!
//! Automata are built bottom-up from [`NFA::atom`] with the composition operators
//! [`NFA::concat`], [`NFA::or`], [`NFA::make_optional`] and [`NFA::kleene_star`], then run
//! against input with [`NFA::is_match`].
//!
//! ```
//! use thompson_automata::NFA;
//!
//! let ab = NFA::atom('a').concat(NFA::atom('b'));
//! let nfa = ab.or(NFA::atom('c')).kleene_star();
//!
//! assert!(nfa.matches(""));
//! assert!(nfa.matches("abcab"));
//! assert!(!nfa.matches("ba"));
//! ```
#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

mod error;
mod prune;
mod simulate;

#[cfg(feature = "dot")]
mod dot;

pub mod nfa;
pub mod state;

pub use error::{GraphError, GraphResult};
pub use nfa::NFA;
pub use simulate::{Iter, Step};
pub use state::{State, StateId, Transition};

#[cfg(test)]
#[ctor::ctor]
fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}
