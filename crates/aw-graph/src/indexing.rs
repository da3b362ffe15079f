//! Stable dense indexing for vertex identities.
//!
//! Maps arbitrary hashable vertex values to contiguous handles (0..N) used to
//! address the adjacency matrix. Handles are assigned in first-seen order and
//! never reassigned.

use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered vertex index.
///
/// Provides O(1) bidirectional lookup between vertex values and handles.
#[derive(Debug, Clone)]
pub struct VertexIndex<V> {
    /// Contiguous list of vertices (handle -> vertex).
    keys: Vec<V>,

    /// Reverse lookup: vertex -> handle.
    handles: HashMap<V, usize>,
}

impl<V: Eq + Hash + Clone> VertexIndex<V> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            handles: HashMap::new(),
        }
    }

    /// Return the handle of `vertex`, registering it if it is new.
    pub fn insert(&mut self, vertex: V) -> usize {
        if let Some(&handle) = self.handles.get(&vertex) {
            return handle;
        }
        let handle = self.keys.len();
        self.keys.push(vertex.clone());
        self.handles.insert(vertex, handle);
        handle
    }

    /// Get the handle for a vertex.
    pub fn handle(&self, vertex: &V) -> Option<usize> {
        self.handles.get(vertex).copied()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.handles.contains_key(vertex)
    }
}

impl<V> VertexIndex<V> {
    /// Number of registered vertices.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Get the vertex for a handle (panics if out of bounds).
    pub fn vertex(&self, handle: usize) -> &V {
        &self.keys[handle]
    }

    /// All vertices in handle order.
    pub fn vertices(&self) -> &[V] {
        &self.keys
    }
}

impl<V: Eq + Hash + Clone> Default for VertexIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

// The reverse map is derived from `keys`, comparing the ordered keys is enough.
impl<V: PartialEq> PartialEq for VertexIndex<V> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl<V: Eq> Eq for VertexIndex<V> {}
