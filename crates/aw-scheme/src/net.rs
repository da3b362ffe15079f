//! Net maintenance: keeping potentials consistent with the wire graph.
//!
//! Two poles share a potential iff a path of declared wires joins them.
//! Wiring two poles merges their potentials; unwiring builds a transient
//! [`ConnectivityGraph`] over the wires of the affected potential and splits
//! the potential when the removed wire was its only link between the ends.

use aw_core::{PoleId, PotentialId, WireId};
use aw_graph::ConnectivityGraph;
use tracing::debug;

use crate::error::{SchemeError, SchemeResult};
use crate::pole::PoleRef;
use crate::potential::Potential;
use crate::scheme::Scheme;
use crate::wire::Wire;

impl Scheme {
    /// Wire two poles together, returning the wire.
    ///
    /// If the poles are already wired directly the existing wire is returned.
    /// Otherwise the destination's potential is folded into the source's
    /// potential and a new wire is registered on both poles.
    pub fn wire(&mut self, src: PoleRef, dst: PoleRef) -> SchemeResult<WireId> {
        let src = self.resolve_pole(src, "source")?;
        let dst = self.resolve_pole(dst, "destination")?;
        if src == dst {
            return Err(SchemeError::SelfLoop { pole: src });
        }
        if let Some(existing) = self.poles[src.index() as usize].wire_to(dst) {
            return Ok(existing);
        }

        let id = self.alloc_wire_id()?;
        let into = self.poles[src.index() as usize].potential;
        let from = self.poles[dst.index() as usize].potential;
        if into != from {
            self.merge_potentials(into, from)?;
        }

        self.wires.insert(id, Wire { id, src, dst });
        self.pole_mut(src).wires.insert(dst, id);
        self.pole_mut(dst).wires.insert(src, id);
        debug!(wire = %id, %src, %dst, potential = %into, "wired poles");
        Ok(id)
    }

    /// Remove the wire between two poles.
    ///
    /// When no other path of wires joins the poles, their potential is
    /// replaced by two new potentials, one per side. Unwiring poles that are
    /// not wired directly does nothing.
    pub fn unwire(&mut self, src: PoleRef, dst: PoleRef) -> SchemeResult<()> {
        let src = self.resolve_pole(src, "source")?;
        let dst = self.resolve_pole(dst, "destination")?;
        if src == dst {
            return Err(SchemeError::SelfLoop { pole: src });
        }
        let Some(wire) = self.poles[src.index() as usize].wire_to(dst) else {
            return Ok(());
        };

        let potential = self.poles[src.index() as usize].potential;
        if let Some((src_side, dst_side)) = self.split_sides(potential, src, dst)? {
            let a = self.alloc_potential_id()?;
            let b = self.alloc_potential_id()?;
            self.potentials.remove(&potential);
            self.install_potential(a, src_side);
            self.install_potential(b, dst_side);
            debug!(%potential, src_side = %a, dst_side = %b, "split potential");
        }

        self.pole_mut(src).wires.remove(&dst);
        self.pole_mut(dst).wires.remove(&src);
        self.wires.remove(&wire);
        debug!(%wire, %src, %dst, "unwired poles");
        Ok(())
    }

    /// Pole sets on each side of the `src`-`dst` wire, or `None` when the
    /// potential stays connected without it.
    fn split_sides(
        &self,
        potential: PotentialId,
        src: PoleId,
        dst: PoleId,
    ) -> SchemeResult<Option<(Vec<PoleId>, Vec<PoleId>)>> {
        let pairs: Vec<(PoleId, PoleId)> = self
            .potential_wires(potential)?
            .into_iter()
            .map(|w| (w.src, w.dst))
            .collect();
        let mut graph = ConnectivityGraph::from_edge_pairs(pairs)?;
        graph.remove_edge(&src, &dst)?;
        if graph.is_reachable(&src, &dst)? {
            return Ok(None);
        }

        let mut src_side = None;
        let mut dst_side = None;
        for part in graph.split_into_connected_graphs() {
            if part.contains(&src) {
                src_side = Some(part.vertices().to_vec());
            } else if part.contains(&dst) {
                dst_side = Some(part.vertices().to_vec());
            }
        }
        match (src_side, dst_side) {
            (Some(a), Some(b)) => Ok(Some((a, b))),
            _ => Err(SchemeError::Invariant {
                what: "unwired poles missing from their potential's wire graph",
            }),
        }
    }

    /// Move every pole of `from` into `into`, one at a time.
    fn merge_potentials(&mut self, into: PotentialId, from: PotentialId) -> SchemeResult<()> {
        if !self.potentials.contains_key(&into) {
            return Err(SchemeError::UnknownPotential { potential: into });
        }
        let mut absorbed = self
            .potentials
            .remove(&from)
            .ok_or(SchemeError::UnknownPotential { potential: from })?;

        let moved = absorbed.len();
        while let Some(pole) = absorbed.poles.pop_first() {
            if let Some(target) = self.potentials.get_mut(&into) {
                target.poles.insert(pole);
            }
            self.poles[pole.index() as usize].potential = into;
        }
        debug!(%into, %from, moved, "merged potentials");
        Ok(())
    }

    fn install_potential(&mut self, id: PotentialId, poles: Vec<PoleId>) {
        for &pole in &poles {
            self.pole_mut(pole).potential = id;
        }
        self.potentials.insert(id, Potential::new(id, poles));
    }
}
