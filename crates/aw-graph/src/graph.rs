//! Undirected connectivity graph over arbitrary vertex identities.

use std::hash::Hash;

use tracing::trace;

use crate::components::ConnectedGraphs;
use crate::edge::EdgeState;
use crate::error::{GraphError, GraphResult};
use crate::indexing::VertexIndex;

/// Undirected graph answering reachability questions over declared edges.
///
/// The graph stores:
/// - A dense vertex index (first-seen order, handles never reassigned).
/// - A square adjacency matrix (row-major) of [`EdgeState`] cells.
/// - A staleness flag set by every edge mutation.
///
/// Reachability is computed lazily: queries run a transitive closure pass
/// over the matrix when the graph is stale, marking reachable pairs as
/// [`EdgeState::Derived`]. Only `Direct` cells are authoritative.
///
/// Equality compares the raw representation, staleness flag included. A graph
/// that has answered a query is therefore not equal to a freshly built graph
/// with the same edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityGraph<V> {
    index: VertexIndex<V>,
    adjacency: Vec<EdgeState>,
    stale: bool,
}

impl<V: Eq + Hash + Clone> ConnectivityGraph<V> {
    /// Build a graph with the given vertices and no edges.
    ///
    /// Repeated vertices keep their first handle.
    pub fn from_vertices<I>(vertices: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = V>,
    {
        let mut index = VertexIndex::new();
        for vertex in vertices {
            index.insert(vertex);
        }
        if index.is_empty() {
            return Err(GraphError::InvalidInput { what: "vertices" });
        }
        Ok(Self::with_index(index))
    }

    /// Build a graph from edge pairs; endpoints are registered in first-seen order.
    ///
    /// A repeated pair leaves the graph unchanged. A pair joining a vertex to
    /// itself registers the vertex but declares no edge.
    pub fn from_edge_pairs<I>(pairs: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut index = VertexIndex::new();
        let mut handle_pairs = Vec::new();
        for (from, to) in pairs {
            let i = index.insert(from);
            let j = index.insert(to);
            handle_pairs.push((i, j));
        }
        if index.is_empty() {
            return Err(GraphError::InvalidInput { what: "edge pairs" });
        }

        let mut graph = Self::with_index(index);
        for (i, j) in handle_pairs {
            graph.set_pair(i, j, EdgeState::Direct);
        }
        Ok(graph)
    }

    /// Declare an edge between two known vertices.
    pub fn add_edge(&mut self, from: &V, to: &V) -> GraphResult<()> {
        let (i, j) = self.handles(from, to)?;
        self.set_pair(i, j, EdgeState::Direct);
        self.stale = true;
        Ok(())
    }

    /// Remove the relationship between two known vertices, whatever its state.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> GraphResult<()> {
        let (i, j) = self.handles(from, to)?;
        self.set_pair(i, j, EdgeState::Absent);
        self.stale = true;
        Ok(())
    }

    /// True if a path of declared edges joins `from` and `to`.
    ///
    /// A vertex is always reachable from itself.
    pub fn is_reachable(&mut self, from: &V, to: &V) -> GraphResult<bool> {
        let (i, j) = self.handles(from, to)?;
        self.complete_paths();
        Ok(i == j || self.cell(i, j).is_linked())
    }

    /// True if the whole graph forms a single connected component.
    pub fn is_connected(&mut self) -> bool {
        self.complete_paths();
        (1..self.vertex_count()).all(|j| self.cell(0, j).is_linked())
    }

    /// Decompose the graph into its connected components.
    ///
    /// Each yielded graph holds one component's vertices (in this graph's
    /// handle order) and only the direct edges among them. This graph is left
    /// intact apart from its refreshed reachability cells.
    pub fn split_into_connected_graphs(&mut self) -> ConnectedGraphs<'_, V> {
        self.complete_paths();
        ConnectedGraphs::new(self)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains(vertex)
    }

    /// Raw state of the cell between two vertices, without recomputation.
    ///
    /// `Derived` cells are meaningless while [`is_stale`](Self::is_stale) is true.
    pub fn edge_state(&self, from: &V, to: &V) -> GraphResult<EdgeState> {
        let (i, j) = self.handles(from, to)?;
        Ok(self.cell(i, j))
    }

    /// Build a graph holding `members` (handles of this graph) and the direct
    /// edges among them.
    pub(crate) fn subgraph(&self, members: &[usize]) -> Self {
        let mut sorted = members.to_vec();
        sorted.sort_unstable();

        let mut index = VertexIndex::new();
        for &handle in &sorted {
            index.insert(self.index.vertex(handle).clone());
        }
        let mut graph = Self::with_index(index);
        for (a, &i) in sorted.iter().enumerate() {
            for (b, &j) in sorted.iter().enumerate().skip(a + 1) {
                if self.cell(i, j).is_direct() {
                    graph.set_pair(a, b, EdgeState::Direct);
                }
            }
        }
        graph
    }

    fn handles(&self, from: &V, to: &V) -> GraphResult<(usize, usize)> {
        let i = self
            .index
            .handle(from)
            .ok_or(GraphError::UnknownVertex { end: "source" })?;
        let j = self
            .index
            .handle(to)
            .ok_or(GraphError::UnknownVertex { end: "target" })?;
        Ok((i, j))
    }
}

impl<V> ConnectivityGraph<V> {
    fn with_index(index: VertexIndex<V>) -> Self {
        let n = index.len();
        Self {
            index,
            adjacency: vec![EdgeState::Absent; n * n],
            stale: true,
        }
    }

    /// Known vertices in handle (insertion) order.
    pub fn vertices(&self) -> &[V] {
        self.index.vertices()
    }

    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// True when edges changed since the last reachability pass.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Declared edges, each unordered pair reported once.
    pub fn direct_edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        let n = self.vertex_count();
        (0..n).flat_map(move |i| {
            (i + 1..n)
                .filter(move |&j| self.cell(i, j).is_direct())
                .map(move |j| (self.index.vertex(i), self.index.vertex(j)))
        })
    }

    pub(crate) fn cell(&self, i: usize, j: usize) -> EdgeState {
        self.adjacency[i * self.vertex_count() + j]
    }

    fn set_pair(&mut self, i: usize, j: usize, state: EdgeState) {
        // The diagonal stays Absent.
        if i == j {
            return;
        }
        let n = self.vertex_count();
        self.adjacency[i * n + j] = state;
        self.adjacency[j * n + i] = state;
    }

    /// Transitive closure pass over the three-state matrix.
    fn complete_paths(&mut self) {
        if !self.stale {
            return;
        }
        let n = self.vertex_count();
        trace!(vertices = n, "recomputing reachability");

        for cell in &mut self.adjacency {
            if *cell == EdgeState::Derived {
                *cell = EdgeState::Absent;
            }
        }

        for k in 0..n {
            for i in 0..n {
                if i != k && !self.cell(k, i).is_linked() {
                    continue;
                }
                for j in 0..n {
                    if i == j || self.cell(i, j).is_linked() {
                        continue;
                    }
                    if j == k || self.cell(k, j).is_linked() {
                        self.set_pair(i, j, EdgeState::Derived);
                    }
                }
            }
        }
        self.stale = false;
    }
}
