use thiserror::Error;

pub type AwResult<T> = Result<T, AwError>;

/// Shared error for the wiring crates.
///
/// Crate-local errors (`GraphError`, `SchemeError`) convert into this type so
/// applications can handle a single error kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AwError {
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    #[error("Unknown vertex: {what}")]
    UnknownVertex { what: String },

    #[error("Element does not belong to this scheme: {what}")]
    ForeignElement { what: String },

    #[error("Wire would start and end at the same pole {pole}")]
    SelfLoop { pole: String },

    #[error("Unknown {what} id {id}")]
    UnknownId { what: &'static str, id: u32 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("No {what} ids left")]
    IdSpaceExhausted { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
