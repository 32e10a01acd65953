use std::collections::HashMap;
use std::hash::Hash;

/// Handle of a state within the arena of the NFA that owns it. Two states are the same state
/// exactly when their handles are equal.
pub type StateId = usize;

/// A transition between states in an NFA.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Transition<T: Clone + Eq + Hash> {
    /// A transition on some input symbol.
    Some(T),
    /// An epsilon transition allows the NFA to change its state spontaneously without consuming an
    /// input symbol.
    Epsilon,
}

impl<T: Clone + Eq + Hash> Transition<T> {
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Transition::Epsilon)
    }
}

/// A node of the state graph. A state without outgoing edges holds an empty map.
#[derive(Clone, Debug, PartialEq)]
pub struct State<T: Clone + Eq + Hash> {
    transitions: HashMap<Transition<T>, Vec<StateId>>,
}

impl<T> State<T>
where
    T: Clone + Eq + Hash,
{
    /// Create a state with no outgoing edges.
    #[inline]
    pub fn new() -> Self {
        State {
            transitions: HashMap::new(),
        }
    }

    /// All outgoing edges, grouped by label.
    #[inline]
    pub fn transitions(&self) -> &HashMap<Transition<T>, Vec<StateId>> {
        &self.transitions
    }

    /// The destinations under the given label, in insertion order. Empty if there are none.
    #[inline]
    pub fn destinations(&self, label: &Transition<T>) -> &[StateId] {
        self.transitions
            .get(label)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    #[inline]
    pub(crate) fn add(&mut self, label: Transition<T>, end: StateId) {
        self.transitions.entry(label).or_default().push(end);
    }

    /// Append every edge of `other` onto this state. Existing edges are never removed or
    /// replaced; a destination added twice simply appears twice.
    #[inline]
    pub(crate) fn merge(&mut self, other: &State<T>) {
        for (label, ends) in other.transitions.iter() {
            self.transitions
                .entry(label.clone())
                .or_default()
                .extend(ends.iter().copied());
        }
    }

    /// Rewrite every destination through `f`.
    #[inline]
    pub(crate) fn remap<F>(&mut self, mut f: F)
    where
        F: FnMut(StateId) -> StateId,
    {
        for ends in self.transitions.values_mut() {
            for end in ends.iter_mut() {
                *end = f(*end);
            }
        }
    }
}

impl<T> Default for State<T>
where
    T: Clone + Eq + Hash,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
