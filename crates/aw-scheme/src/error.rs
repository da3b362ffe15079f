//! Error types for scheme editing.

use aw_core::{AwError, ElementId, PoleId, PotentialId, SchemeId, WireId};
use aw_graph::GraphError;
use thiserror::Error;

/// Result type for scheme operations.
pub type SchemeResult<T> = Result<T, SchemeError>;

/// Errors raised by scheme operations, always before any state is changed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// A handle issued by another scheme was passed in.
    #[error("{end} pole belongs to {owner}, not {scheme}")]
    ForeignElement {
        end: &'static str,
        owner: SchemeId,
        scheme: SchemeId,
    },

    /// A wire cannot start and end at the same pole.
    #[error("Wire should not start and end at the same pole {pole}")]
    SelfLoop { pole: PoleId },

    #[error("Unknown pole {pole}")]
    UnknownPole { pole: PoleId },

    #[error("Unknown element {element}")]
    UnknownElement { element: ElementId },

    #[error("Unknown wire {wire}")]
    UnknownWire { wire: WireId },

    #[error("Unknown potential {potential}")]
    UnknownPotential { potential: PotentialId },

    /// The element `Id` attribute cannot be blank.
    #[error("Element id cannot be blank")]
    BlankElementId,

    /// No further ids of this kind can be allocated.
    #[error("No {what} ids left in this scheme")]
    IdSpaceExhausted { what: &'static str },

    #[error("Scheme invariant violated: {what}")]
    Invariant { what: &'static str },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl From<SchemeError> for AwError {
    fn from(err: SchemeError) -> Self {
        match err {
            SchemeError::ForeignElement { .. } => AwError::ForeignElement {
                what: err.to_string(),
            },
            SchemeError::SelfLoop { pole } => AwError::SelfLoop {
                pole: pole.to_string(),
            },
            SchemeError::UnknownPole { pole } => AwError::UnknownId {
                what: "pole",
                id: pole.index(),
            },
            SchemeError::UnknownElement { element } => AwError::UnknownId {
                what: "element",
                id: element.index(),
            },
            SchemeError::UnknownWire { wire } => AwError::UnknownId {
                what: "wire",
                id: wire.index(),
            },
            SchemeError::UnknownPotential { potential } => AwError::UnknownId {
                what: "potential",
                id: potential.index(),
            },
            SchemeError::BlankElementId => AwError::InvalidArg {
                what: "element id cannot be blank",
            },
            SchemeError::IdSpaceExhausted { what } => AwError::IdSpaceExhausted { what },
            SchemeError::Invariant { what } => AwError::Invariant { what },
            SchemeError::Graph(graph) => graph.into(),
        }
    }
}
