//! Poles: connection points of elements.

use std::collections::BTreeMap;

use aw_core::{ElementId, PoleId, PotentialId, SchemeId, WireId};

/// Handle to a pole, tagged with the scheme that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoleRef {
    pub scheme: SchemeId,
    pub pole: PoleId,
}

/// A connection point belonging to an element.
///
/// `potential` is a non-owning back reference into the scheme's potential
/// registry; only the scheme's wiring operations update it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pole {
    pub(crate) id: PoleId,
    pub(crate) element: ElementId,
    pub(crate) name: String,
    pub(crate) potential: PotentialId,
    /// Peer pole -> wire joining the two.
    pub(crate) wires: BTreeMap<PoleId, WireId>,
}

impl Pole {
    pub fn id(&self) -> PoleId {
        self.id
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The potential this pole currently belongs to.
    pub fn potential(&self) -> PotentialId {
        self.potential
    }

    /// Wire to `peer`, if the two poles are wired directly.
    pub fn wire_to(&self, peer: PoleId) -> Option<WireId> {
        self.wires.get(&peer).copied()
    }

    /// `(peer, wire)` pairs, ordered by peer.
    pub fn wires(&self) -> impl Iterator<Item = (PoleId, WireId)> + '_ {
        self.wires.iter().map(|(&peer, &wire)| (peer, wire))
    }
}
