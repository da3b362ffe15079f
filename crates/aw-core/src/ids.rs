//! Handles for the things a scheme owns.

use core::fmt;
use core::num::NonZeroU32;

/// Dense handle into one of a scheme's arenas (elements, poles, wires,
/// potentials).
///
/// Stored as index+1 so that `Option<Id>` costs nothing extra in the pole
/// and wire tables.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Handle for the slot at `index`.
    ///
    /// # Panics
    ///
    /// If `index` is `u32::MAX`. Schemes check their counters before calling
    /// this and report exhaustion as an error instead.
    pub fn from_index(index: u32) -> Self {
        match index.checked_add(1).and_then(NonZeroU32::new) {
            Some(raw) => Self(raw),
            None => panic!("slot index {index} has no handle"),
        }
    }

    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

pub type ElementId = Id;
pub type PoleId = Id;
pub type WireId = Id;
pub type PotentialId = Id;

/// Identity of a scheme (diagram).
///
/// Handles carry the scheme they were issued by so a scheme can reject
/// poles that belong to a different diagram.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemeId(u32);

impl SchemeId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SchemeId({})", self.0)
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scheme#{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pole_label_uses_slot(slot in 0_u32..1_000_000) {
            let pole: PoleId = Id::from_index(slot);
            prop_assert_eq!(pole.to_string(), slot.to_string());
            prop_assert_eq!(format!("{pole:?}"), format!("Id({slot})"));
        }
    }
}
