use crate::nfa::NFA;
use crate::state::StateId;

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

impl<T> NFA<T>
where
    T: Clone + Eq + Hash,
{
    /// Returns every state reachable from the start state on any transition, epsilon included.
    pub fn reachable_states(&self) -> HashSet<StateId> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        visited.insert(self.start_state());
        queue.push_back(self.start_state());

        while let Some(s) = queue.pop_front() {
            let state = match self.state(s) {
                Some(state) => state,
                None => continue,
            };
            for dest in state.transitions().values().flatten() {
                if visited.insert(*dest) {
                    queue.push_back(*dest);
                }
            }
        }

        visited
    }

    /// Drop every state that is unreachable from the start state, such as the old start states
    /// left behind by [`NFA::or`]. The surviving states are renumbered densely with the start
    /// state first, and accepting states that were dropped are unmarked. The accepted language does
    /// not change. Returns the number of states removed.
    pub fn prune(&mut self) -> usize {
        let reachable = self.reachable_states();
        let before = self.total_states();

        let start = self.start_state();
        let mut order: Vec<StateId> = reachable.into_iter().filter(|&s| s != start).collect();
        order.sort_unstable();
        order.insert(0, start);

        // Destinations of reachable states are themselves reachable, so every edge that survives
        // finds its new label here.
        let mut labels = vec![None; before];
        for (new, &old) in order.iter().enumerate() {
            labels[old] = Some(new);
        }

        let states = order
            .iter()
            .map(|&old| {
                let mut state = self.states()[old].clone();
                state.remap(|end| labels[end].unwrap_or(end));
                state
            })
            .collect();
        let final_states = self
            .final_states()
            .iter()
            .filter_map(|&f| labels[f])
            .collect();

        self.replace_parts(0, final_states, states);

        let removed = before - self.total_states();
        log::debug!("pruned {} unreachable states", removed);
        removed
    }
}
