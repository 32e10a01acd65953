use crate::nfa::NFA;
use crate::state::{StateId, Transition};

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

impl<T> NFA<T>
where
    T: Clone + Eq + Hash,
{
    /// Computes the function epsilon-closure for some given state in the NFA. Returns the set of
    /// all states accessible from the given state on epsilon transitions only, including itself.
    #[inline]
    pub fn epsilon_closure(&self, state: StateId) -> HashSet<StateId> {
        let mut closure = HashSet::new();
        closure.insert(state);
        self.close_over_epsilon(closure)
    }

    /// Computes the union of epsilon-closures for each state in the given set of states.
    #[inline]
    pub fn epsilon_closure_set(&self, state_set: &HashSet<StateId>) -> HashSet<StateId> {
        self.close_over_epsilon(state_set.clone())
    }

    fn close_over_epsilon(&self, mut closure: HashSet<StateId>) -> HashSet<StateId> {
        let mut stack: Vec<StateId> = closure.iter().copied().collect();

        while let Some(s) = stack.pop() {
            let destinations = match self.state(s) {
                Some(state) => state.destinations(&Transition::Epsilon),
                None => continue,
            };
            for &dest in destinations {
                if closure.insert(dest) {
                    stack.push(dest);
                }
            }
        }

        closure
    }

    /// The states reached from `state_set` by consuming `input`. Epsilon transitions are not
    /// followed.
    #[inline]
    fn move_set<S>(&self, state_set: &HashSet<StateId>, input: &S) -> HashSet<StateId>
    where
        T: PartialEq<S>,
    {
        let mut set = HashSet::new();
        for state in state_set.iter().filter_map(|&s| self.state(s)) {
            let input_transitions = state
                .transitions()
                .iter()
                .filter(|(t, _)| match *t {
                    Transition::Some(symbol) => *symbol == *input,
                    Transition::Epsilon => false,
                })
                .flat_map(|(_, dest)| dest.iter().copied());
            set.extend(input_transitions);
        }
        set
    }

    #[inline]
    fn step<S>(&self, state_set: &HashSet<StateId>, input: &S) -> HashSet<StateId>
    where
        T: PartialEq<S>,
    {
        let moved_set = self.move_set(state_set, input);
        self.epsilon_closure_set(&moved_set)
    }

    #[inline]
    fn any_final(&self, state_set: &HashSet<StateId>) -> bool {
        self.final_states().iter().any(|f| state_set.contains(f))
    }

    /// Determines if the given input is accepted by the NFA.
    pub fn is_match<I>(&self, input: I) -> bool
    where
        T: PartialEq<I::Item>,
        I: IntoIterator,
    {
        let mut state_set = self.epsilon_closure(self.start_state());

        let mut consumed = 0usize;
        for is in input.into_iter() {
            state_set = self.step(&state_set, &is);
            consumed += 1;
            if state_set.is_empty() {
                log::debug!("stuck after {} symbols", consumed);
                return false;
            }
        }

        let accepted = self.any_final(&state_set);
        log::debug!(
            "consumed {} symbols, {} active states, accepted: {}",
            consumed,
            state_set.len(),
            accepted
        );
        accepted
    }

    /// Step through the input one symbol at a time, reporting the active states after each
    /// symbol.
    #[inline]
    pub fn iter_on<I>(&self, input: I) -> Iter<'_, T, I::IntoIter>
    where
        I: IntoIterator,
        T: PartialEq<I::Item>,
    {
        Iter {
            nfa: self,
            input: input.into_iter(),
            state_set: Some(self.epsilon_closure(self.start_state())),
        }
    }
}

impl NFA<char> {
    /// Determines if the given string is accepted by the NFA.
    #[inline]
    pub fn matches(&self, input: &str) -> bool {
        self.is_match(input.chars())
    }
}

/// An iterator over the steps of a simulation. See [`NFA::iter_on`].
#[derive(Debug)]
pub struct Iter<'a, T, I>
where
    T: Clone + Eq + Hash,
    I: Iterator,
{
    nfa: &'a NFA<T>,

    input: I,
    /// `None` once the simulation is stuck.
    state_set: Option<HashSet<StateId>>,
}

impl<T, I> Iter<'_, T, I>
where
    T: Clone + Eq + Hash,
    T: PartialEq<I::Item>,
    I: Iterator,
{
    /// The states that are active after the symbols consumed so far. Empty once stuck.
    #[inline]
    pub fn active_states(&self) -> HashSet<StateId> {
        self.state_set.clone().unwrap_or_default()
    }

    /// Whether the symbols consumed so far are accepted.
    #[inline]
    pub fn is_accepting(&self) -> bool {
        match &self.state_set {
            Some(set) => self.nfa.any_final(set),
            None => false,
        }
    }
}

/// A single step of the simulation.
#[derive(Debug)]
pub enum Step<S> {
    /// The symbol was consumed. Each active state is paired with whether it is accepting.
    Normal(S, HashMap<StateId, bool>),
    /// No active state had a transition on the symbol. This is always the last step.
    Stuck(S),
}

impl<T, I> Iterator for Iter<'_, T, I>
where
    T: Clone + Eq + Hash,
    T: PartialEq<I::Item>,
    I: Iterator,
{
    type Item = Step<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let current_set = self.state_set.as_ref()?;
        let is = self.input.next()?;

        let next_set = self.nfa.step(current_set, &is);
        if next_set.is_empty() {
            self.state_set = None;
            return Some(Step::Stuck(is));
        }

        let next_set_map = next_set
            .iter()
            .map(|&s| (s, self.nfa.is_final(s)))
            .collect();
        self.state_set = Some(next_set);
        Some(Step::Normal(is, next_set_map))
    }
}
