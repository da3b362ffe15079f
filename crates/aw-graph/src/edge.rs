//! Adjacency cell states.

/// Relationship recorded between two vertex handles.
///
/// Only `Direct` entries are declared by callers. `Derived` entries are
/// reachability facts filled in by the closure pass and are discarded
/// whenever the declared edges change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeState {
    /// No relationship.
    #[default]
    Absent,
    /// Explicitly declared edge.
    Direct,
    /// Reachable through a chain of direct edges.
    Derived,
}

impl EdgeState {
    /// True for `Direct` and `Derived`.
    pub fn is_linked(self) -> bool {
        !matches!(self, EdgeState::Absent)
    }

    pub fn is_direct(self) -> bool {
        matches!(self, EdgeState::Direct)
    }
}
