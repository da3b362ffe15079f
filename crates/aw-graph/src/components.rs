//! Decomposition of a graph into connected components.

use std::hash::Hash;
use std::iter::FusedIterator;

use crate::graph::ConnectivityGraph;

/// Iterator over the connected components of a [`ConnectivityGraph`].
///
/// Created by [`ConnectivityGraph::split_into_connected_graphs`]. Components
/// are discovered lazily by scanning vertex handles in ascending order; each
/// unassigned vertex collects every unassigned vertex reachable from it
/// (scanned in descending handle order). Every vertex of the source graph is
/// yielded exactly once.
#[derive(Debug)]
pub struct ConnectedGraphs<'a, V> {
    graph: &'a ConnectivityGraph<V>,
    assigned: Vec<bool>,
    cursor: usize,
}

impl<'a, V> ConnectedGraphs<'a, V> {
    /// The graph's reachability cells must be fresh.
    pub(crate) fn new(graph: &'a ConnectivityGraph<V>) -> Self {
        Self {
            graph,
            assigned: vec![false; graph.vertex_count()],
            cursor: 0,
        }
    }
}

impl<V: Eq + Hash + Clone> Iterator for ConnectedGraphs<'_, V> {
    type Item = ConnectivityGraph<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.assigned.len();
        while self.cursor < n && self.assigned[self.cursor] {
            self.cursor += 1;
        }
        if self.cursor >= n {
            return None;
        }

        let root = self.cursor;
        self.assigned[root] = true;
        let mut members = vec![root];
        for j in (0..n).rev() {
            if !self.assigned[j] && self.graph.cell(root, j).is_linked() {
                self.assigned[j] = true;
                members.push(j);
            }
        }
        Some(self.graph.subgraph(&members))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.assigned.iter().filter(|&&done| !done).count();
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl<V: Eq + Hash + Clone> FusedIterator for ConnectedGraphs<'_, V> {}
