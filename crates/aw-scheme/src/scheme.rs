//! The scheme: registry of elements, poles, potentials and wires.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU32, Ordering};

use aw_core::{ElementId, Id, PoleId, PotentialId, SchemeId, WireId};

use crate::element::{Element, ElementRef};
use crate::error::{SchemeError, SchemeResult};
use crate::pole::{Pole, PoleRef};
use crate::potential::Potential;
use crate::wire::Wire;

static NEXT_SCHEME_ID: AtomicU32 = AtomicU32::new(0);

/// An editable wiring diagram.
///
/// The scheme owns every element, pole, potential and wire. Callers hold
/// [`ElementRef`]/[`PoleRef`] handles; a handle issued by another scheme is
/// rejected. Every pole belongs to exactly one potential at all times: a new
/// pole starts alone in its own potential, and [`Scheme::wire`] /
/// [`Scheme::unwire`] keep potentials equal to the connected groups of wires.
#[derive(Debug)]
pub struct Scheme {
    pub(crate) id: SchemeId,
    name: String,
    pub(crate) elements: Vec<Element>,
    pub(crate) poles: Vec<Pole>,
    pub(crate) potentials: BTreeMap<PotentialId, Potential>,
    pub(crate) wires: BTreeMap<WireId, Wire>,
    next_potential: usize,
    next_wire: usize,
}

impl Scheme {
    /// Create an empty scheme.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SchemeId::new(NEXT_SCHEME_ID.fetch_add(1, Ordering::Relaxed)),
            name: name.into(),
            elements: Vec::new(),
            poles: Vec::new(),
            potentials: BTreeMap::new(),
            wires: BTreeMap::new(),
            next_potential: 0,
            next_wire: 0,
        }
    }

    pub fn id(&self) -> SchemeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Add an element with the given designator.
    pub fn add_element(&mut self, tag: impl Into<String>) -> SchemeResult<ElementRef> {
        let id = id_at(self.elements.len(), "element")?;
        let element = Element::new(id, self.id, tag.into())?;
        self.elements.push(element);
        Ok(ElementRef {
            scheme: self.id,
            element: id,
        })
    }

    /// Add a pole to an element; the pole starts in a potential of its own.
    pub fn add_pole(
        &mut self,
        element: ElementRef,
        name: impl Into<String>,
    ) -> SchemeResult<PoleRef> {
        let element_id = self.resolve_element(element)?;
        let id = id_at(self.poles.len(), "pole")?;
        let potential = self.alloc_potential_id()?;

        self.potentials
            .insert(potential, Potential::new(potential, [id]));
        self.poles.push(Pole {
            id,
            element: element_id,
            name: name.into(),
            potential,
            wires: BTreeMap::new(),
        });
        self.elements[element_id.index() as usize].poles.push(id);

        Ok(PoleRef {
            scheme: self.id,
            pole: id,
        })
    }

    pub fn element(&self, element: ElementRef) -> SchemeResult<&Element> {
        let id = self.resolve_element(element)?;
        Ok(&self.elements[id.index() as usize])
    }

    pub fn element_mut(&mut self, element: ElementRef) -> SchemeResult<&mut Element> {
        let id = self.resolve_element(element)?;
        Ok(&mut self.elements[id.index() as usize])
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn pole(&self, pole: PoleRef) -> SchemeResult<&Pole> {
        let id = self.resolve_pole(pole, "requested")?;
        Ok(&self.poles[id.index() as usize])
    }

    /// Handle for a pole id of this scheme.
    pub fn pole_ref(&self, pole: PoleId) -> SchemeResult<PoleRef> {
        if (pole.index() as usize) < self.poles.len() {
            Ok(PoleRef {
                scheme: self.id,
                pole,
            })
        } else {
            Err(SchemeError::UnknownPole { pole })
        }
    }

    /// Look up a pole by element designator and pole name.
    pub fn find_pole(&self, tag: &str, pole_name: &str) -> Option<PoleRef> {
        let element = self.elements.iter().find(|e| e.tag() == tag)?;
        let pole = element
            .poles
            .iter()
            .map(|&id| &self.poles[id.index() as usize])
            .find(|p| p.name == pole_name)?;
        Some(PoleRef {
            scheme: self.id,
            pole: pole.id,
        })
    }

    /// Human-readable `TAG.POLE` label.
    pub fn pole_label(&self, pole: PoleId) -> SchemeResult<String> {
        let pole = self
            .poles
            .get(pole.index() as usize)
            .ok_or(SchemeError::UnknownPole { pole })?;
        let element = &self.elements[pole.element.index() as usize];
        Ok(format!("{}.{}", element.tag(), pole.name))
    }

    /// The potential a pole currently belongs to.
    pub fn potential_of(&self, pole: PoleRef) -> SchemeResult<&Potential> {
        let id = self.pole(pole)?.potential;
        self.potential(id)
    }

    pub fn potential(&self, id: PotentialId) -> SchemeResult<&Potential> {
        self.potentials
            .get(&id)
            .ok_or(SchemeError::UnknownPotential { potential: id })
    }

    /// All live potentials, ordered by id.
    pub fn potentials(&self) -> impl Iterator<Item = &Potential> {
        self.potentials.values()
    }

    pub fn wire_by_id(&self, id: WireId) -> SchemeResult<&Wire> {
        self.wires
            .get(&id)
            .ok_or(SchemeError::UnknownWire { wire: id })
    }

    /// All wires, ordered by id.
    pub fn wires(&self) -> impl Iterator<Item = &Wire> {
        self.wires.values()
    }

    /// Distinct wires attached to the poles of a potential.
    pub fn potential_wires(&self, id: PotentialId) -> SchemeResult<Vec<&Wire>> {
        let potential = self.potential(id)?;
        let ids: BTreeSet<WireId> = potential
            .poles
            .iter()
            .flat_map(|&p| self.poles[p.index() as usize].wires.values().copied())
            .collect();
        ids.into_iter().map(|w| self.wire_by_id(w)).collect()
    }

    /// Other wires sharing the potential of `wire`.
    pub fn composed_with(&self, wire: WireId) -> SchemeResult<Vec<&Wire>> {
        let src = self.wire_by_id(wire)?.src;
        let potential = self.poles[src.index() as usize].potential;
        Ok(self
            .potential_wires(potential)?
            .into_iter()
            .filter(|w| w.id != wire)
            .collect())
    }

    pub(crate) fn resolve_element(&self, element: ElementRef) -> SchemeResult<ElementId> {
        if element.scheme != self.id {
            return Err(SchemeError::ForeignElement {
                end: "element",
                owner: element.scheme,
                scheme: self.id,
            });
        }
        if (element.element.index() as usize) < self.elements.len() {
            Ok(element.element)
        } else {
            Err(SchemeError::UnknownElement {
                element: element.element,
            })
        }
    }

    /// Check that a pole handle was issued by this scheme and that its
    /// owning element belongs here.
    pub(crate) fn resolve_pole(&self, pole: PoleRef, end: &'static str) -> SchemeResult<PoleId> {
        if pole.scheme != self.id {
            return Err(SchemeError::ForeignElement {
                end,
                owner: pole.scheme,
                scheme: self.id,
            });
        }
        let found = self
            .poles
            .get(pole.pole.index() as usize)
            .ok_or(SchemeError::UnknownPole { pole: pole.pole })?;
        let owner = self
            .elements
            .get(found.element.index() as usize)
            .ok_or(SchemeError::UnknownElement {
                element: found.element,
            })?;
        if owner.scheme != self.id {
            return Err(SchemeError::ForeignElement {
                end,
                owner: owner.scheme,
                scheme: self.id,
            });
        }
        Ok(pole.pole)
    }

    pub(crate) fn alloc_potential_id(&mut self) -> SchemeResult<PotentialId> {
        let id = id_at(self.next_potential, "potential")?;
        self.next_potential += 1;
        Ok(id)
    }

    pub(crate) fn alloc_wire_id(&mut self) -> SchemeResult<WireId> {
        let id = id_at(self.next_wire, "wire")?;
        self.next_wire += 1;
        Ok(id)
    }

    pub(crate) fn pole_mut(&mut self, id: PoleId) -> &mut Pole {
        &mut self.poles[id.index() as usize]
    }
}

/// Id for a 0-based index; `Id` stores index+1 in a `u32`.
fn id_at(index: usize, what: &'static str) -> SchemeResult<Id> {
    u32::try_from(index)
        .ok()
        .filter(|&i| i < u32::MAX)
        .map(Id::from_index)
        .ok_or(SchemeError::IdSpaceExhausted { what })
}
