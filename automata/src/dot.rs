use crate::nfa::NFA;
use crate::state::Transition;

use std::fmt::Display;
use std::hash::Hash;
use std::io;
use std::io::Write;

impl<T> NFA<T>
where
    T: Clone + Eq + Hash + Display,
{
    /// Render the NFA in Graphviz DOT format. Accepting states are drawn as double circles and
    /// the start state is marked by an edge from an invisible node.
    pub fn output_dot(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w, "digraph {{")?;
        writeln!(w, "start[shape=point, style=invis]")?;
        writeln!(w, "start -> id{}", self.start_state())?;

        for src in 0..self.total_states() {
            let attrs = if self.is_final(src) {
                ", shape=doublecircle"
            } else {
                ""
            };
            writeln!(w, "node[label=\"{src}\"{attrs}] id{src}")?;

            let state = match self.state(src) {
                Some(state) => state,
                None => continue,
            };
            for (label, ends) in state.transitions() {
                let sym = match label {
                    Transition::Some(symbol) => escape(&symbol.to_string()),
                    Transition::Epsilon => "ε".to_owned(),
                };
                for tgt in ends {
                    writeln!(w, "id{src} -> id{tgt} [label=\"{sym}\"]")?;
                }
            }
        }

        writeln!(w, "}}")?;

        Ok(())
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
