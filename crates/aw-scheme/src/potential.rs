//! Potentials: sets of electrically joined poles.

use std::collections::BTreeSet;

use aw_core::{PoleId, PotentialId};

/// A set of poles joined by declared wires (an equipotential net).
///
/// The pole set is the authoritative membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Potential {
    pub(crate) id: PotentialId,
    pub(crate) poles: BTreeSet<PoleId>,
}

impl Potential {
    pub(crate) fn new(id: PotentialId, poles: impl IntoIterator<Item = PoleId>) -> Self {
        Self {
            id,
            poles: poles.into_iter().collect(),
        }
    }

    pub fn id(&self) -> PotentialId {
        self.id
    }

    pub fn poles(&self) -> &BTreeSet<PoleId> {
        &self.poles
    }

    pub fn contains(&self, pole: PoleId) -> bool {
        self.poles.contains(&pole)
    }

    pub fn len(&self) -> usize {
        self.poles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poles.is_empty()
    }
}
