use crate::error::{GraphError, GraphResult};
use crate::state::{State, StateId, Transition};

use std::hash::Hash;

/// A non-deterministic finite automaton, or NFA.
///
/// Every NFA owns an arena of states, addressed by [`StateId`]. The composition operators take
/// their operands by value: the states of the right-hand operand are moved into the arena of the
/// left-hand operand, shifted past its existing states. A consumed NFA can therefore never share
/// states with the automaton it was merged into. Cloning an NFA copies the whole arena.
#[derive(Clone, Debug)]
pub struct NFA<T: Clone + Eq + Hash> {
    /// An NFA has a single start state.
    start_state: StateId,
    /// The accepting states, in the order they were marked.
    final_states: Vec<StateId>,
    /// There is a state labeled i for every i where 0 <= i < states.len().
    states: Vec<State<T>>,
}

impl<T> NFA<T>
where
    T: Clone + Eq + Hash,
{
    /// Create a new NFA with a single, non-accepting start state. It accepts nothing.
    #[allow(clippy::new_without_default)]
    #[inline]
    pub fn new() -> Self {
        NFA {
            start_state: 0,
            final_states: Vec::new(),
            states: vec![State::new()],
        }
    }

    /// Create a new NFA with a start state, a single accepting state, and an epsilon transition
    /// between them. It accepts only the empty input.
    #[inline]
    pub fn new_epsilon() -> Self {
        let mut nfa = NFA::new();
        let accepting_state = nfa.add_state(true);
        nfa.states[nfa.start_state].add(Transition::Epsilon, accepting_state);

        nfa
    }

    /// Create an NFA that accepts exactly the one-symbol input `symbol`.
    #[inline]
    pub fn atom(symbol: T) -> Self {
        let mut nfa = NFA::new();
        let accepting_state = nfa.add_state(true);
        nfa.states[nfa.start_state].add(Transition::Some(symbol), accepting_state);

        nfa
    }

    /// Concatenate `other` onto this NFA. Every accepting state of `self` receives a copy of the
    /// edges leaving the start state of `other`, and the accepting states of `other` become the
    /// accepting states of the result.
    ///
    /// If `other` accepts the empty input through its start state, the accepting states of `self`
    /// stay accepting.
    pub fn concat(mut self, other: NFA<T>) -> Self {
        let NFA {
            start_state: other_start,
            final_states: other_finals,
            states: other_states,
        } = other;
        let other_nullable = other_finals.contains(&other_start);

        let offset = self.absorb(other_states);
        let other_start = other_start + offset;

        for &final_state in self.final_states.clone().iter() {
            self.merge_into(final_state, other_start);
        }

        let mut final_states = if other_nullable {
            std::mem::take(&mut self.final_states)
        } else {
            Vec::new()
        };
        for other_final in other_finals {
            let other_final = other_final + offset;
            if !final_states.contains(&other_final) {
                final_states.push(other_final);
            }
        }
        self.final_states = final_states;

        log::trace!(
            "concat: {} states, finals {:?}",
            self.states.len(),
            self.final_states
        );
        self
    }

    /// Alternate this NFA with `other`. A fresh join state receives the edges of both start
    /// states and becomes the new start; the accepting states are the union of both operands'.
    ///
    /// The old start states stay allocated but are no longer reachable. See [`NFA::prune`].
    pub fn or(mut self, other: NFA<T>) -> Self {
        let NFA {
            start_state: other_start,
            final_states: other_finals,
            states: other_states,
        } = other;
        let nullable = self.is_final(self.start_state) || other_finals.contains(&other_start);

        let offset = self.absorb(other_states);
        let self_start = self.start_state;
        let join = self.add_state(false);
        self.merge_into(join, self_start);
        self.merge_into(join, other_start + offset);
        self.start_state = join;

        for other_final in other_finals {
            self.mark_final(other_final + offset);
        }
        if nullable {
            self.mark_final(join);
        }

        log::trace!(
            "or: {} states, start {}, finals {:?}",
            self.states.len(),
            self.start_state,
            self.final_states
        );
        self
    }

    /// Additionally accept the empty input by marking the start state as accepting. Applying this
    /// more than once has no further effect.
    ///
    /// If some edge leads back into the start state, a fresh start state carrying a copy of its
    /// edges is made accepting instead, so that no looping input is accepted along with the empty
    /// one.
    #[inline]
    pub fn make_optional(mut self) -> Self {
        if !self.is_final(self.start_state) {
            self.isolate_start();
            let start = self.start_state;
            self.mark_final(start);
        }
        self
    }

    /// Accept zero or more repetitions of this NFA. The start state is made accepting, and every
    /// other accepting state receives a copy of the start state's edges.
    pub fn kleene_star(self) -> Self {
        let mut nfa = self.make_optional();
        let start = nfa.start_state;
        let start_edges = nfa.states[start].clone();

        for &final_state in nfa.final_states.iter() {
            if final_state != start {
                nfa.states[final_state].merge(&start_edges);
            }
        }

        log::trace!(
            "kleene_star: {} states, finals {:?}",
            nfa.states.len(),
            nfa.final_states
        );
        nfa
    }

    /// Accept one or more repetitions of this NFA.
    #[inline]
    pub fn plus(self) -> Self {
        self.clone().concat(self.kleene_star())
    }

    /// Add a state to the NFA. The label of the state is returned. The total number of states is
    /// always greater than the label of the newest state by 1.
    #[inline]
    pub fn add_state(&mut self, is_final: bool) -> StateId {
        let label = self.states.len();
        self.states.push(State::new());
        if is_final {
            self.final_states.push(label);
        }

        label
    }

    /// Add a fresh state with no outgoing edges.
    #[inline]
    pub fn new_state(&mut self) -> StateId {
        self.add_state(false)
    }

    /// Add a transition. Fails if one or more of the states does not exist.
    #[inline]
    pub fn add_transition(
        &mut self,
        start: StateId,
        end: StateId,
        label: Transition<T>,
    ) -> GraphResult<()> {
        self.check_state(start)?;
        self.check_state(end)?;

        self.states[start].add(label, end);
        Ok(())
    }

    /// Add a non-epsilon transition. See [`NFA::add_transition`].
    #[inline]
    pub fn add_labeled_transition(
        &mut self,
        start: StateId,
        end: StateId,
        label: T,
    ) -> GraphResult<()> {
        self.add_transition(start, end, Transition::Some(label))
    }

    /// Add an epsilon transition. See [`NFA::add_transition`].
    #[inline]
    pub fn add_epsilon_transition(&mut self, start: StateId, end: StateId) -> GraphResult<()> {
        self.add_transition(start, end, Transition::Epsilon)
    }

    /// Append every edge leaving `src` onto `dst`. No edge of `dst` is removed or replaced.
    #[inline]
    pub fn copy_transitions(&mut self, dst: StateId, src: StateId) -> GraphResult<()> {
        self.check_state(dst)?;
        self.check_state(src)?;

        self.merge_into(dst, src);
        Ok(())
    }

    /// Mark a state as accepting.
    #[inline]
    pub fn set_final(&mut self, state: StateId) -> GraphResult<()> {
        self.check_state(state)?;

        self.mark_final(state);
        Ok(())
    }

    #[inline]
    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    #[inline]
    pub fn final_states(&self) -> &[StateId] {
        &self.final_states
    }

    #[inline]
    pub fn total_states(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_final(&self, state: StateId) -> bool {
        self.final_states.contains(&state)
    }

    /// Returns the state with the given label, if it exists.
    #[inline]
    pub fn state(&self, state: StateId) -> Option<&State<T>> {
        self.states.get(state)
    }

    #[inline]
    pub(crate) fn states(&self) -> &[State<T>] {
        &self.states
    }

    /// Replace the arena, start and accepting states wholesale. Callers must keep every handle in
    /// range.
    #[inline]
    pub(crate) fn replace_parts(
        &mut self,
        start_state: StateId,
        final_states: Vec<StateId>,
        states: Vec<State<T>>,
    ) {
        self.start_state = start_state;
        self.final_states = final_states;
        self.states = states;
    }

    #[inline]
    fn check_state(&self, state: StateId) -> GraphResult<()> {
        if state < self.states.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownState {
                state,
                total: self.states.len(),
            })
        }
    }

    /// Replace the start state with a fresh copy when any edge leads into it.
    fn isolate_start(&mut self) {
        let start = self.start_state;
        let has_incoming = self
            .states
            .iter()
            .any(|state| state.transitions().values().flatten().any(|&end| end == start));
        if !has_incoming {
            return;
        }

        let fresh = self.add_state(false);
        self.merge_into(fresh, start);
        self.start_state = fresh;
        log::trace!("moved start state {} to {}", start, fresh);
    }

    #[inline]
    fn mark_final(&mut self, state: StateId) {
        if !self.is_final(state) {
            self.final_states.push(state);
        }
    }

    #[inline]
    fn merge_into(&mut self, dst: StateId, src: StateId) {
        let src_state = self.states[src].clone();
        self.states[dst].merge(&src_state);
    }

    /// Move the states of another NFA into this one. The states keep their edges, shifted by the
    /// returned offset.
    #[inline]
    fn absorb(&mut self, states: Vec<State<T>>) -> usize {
        let offset = self.states.len();
        self.states.extend(states.into_iter().map(|mut state| {
            state.remap(|end| end + offset);
            state
        }));

        offset
    }
}
