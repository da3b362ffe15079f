//! Wires: declared connections between two poles.

use aw_core::{PoleId, WireId};

/// A declared connection between two distinct poles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wire {
    pub(crate) id: WireId,
    pub(crate) src: PoleId,
    pub(crate) dst: PoleId,
}

impl Wire {
    pub fn id(&self) -> WireId {
        self.id
    }

    pub fn src(&self) -> PoleId {
        self.src
    }

    pub fn dst(&self) -> PoleId {
        self.dst
    }

    /// The end opposite to `pole`, or `None` if `pole` is not an end.
    pub fn other_end(&self, pole: PoleId) -> Option<PoleId> {
        if pole == self.src {
            Some(self.dst)
        } else if pole == self.dst {
            Some(self.src)
        } else {
            None
        }
    }
}
