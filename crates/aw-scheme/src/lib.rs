//! aw-scheme: editable wiring diagram model.
//!
//! Provides:
//! - The [`Scheme`] registry of elements, poles, potentials and wires
//! - Net maintenance: [`Scheme::wire`] merges potentials,
//!   [`Scheme::unwire`] splits them when a wire was the only link
//!
//! # Example
//!
//! ```
//! use aw_scheme::Scheme;
//!
//! let mut scheme = Scheme::new("panel");
//! let k1 = scheme.add_element("K1").unwrap();
//! let k2 = scheme.add_element("K2").unwrap();
//! let a = scheme.add_pole(k1, "A1").unwrap();
//! let b = scheme.add_pole(k2, "A1").unwrap();
//!
//! scheme.wire(a, b).unwrap();
//! assert_eq!(scheme.potential_of(a).unwrap().len(), 2);
//!
//! scheme.unwire(a, b).unwrap();
//! assert_eq!(scheme.potential_of(a).unwrap().len(), 1);
//! ```

pub mod element;
pub mod error;
mod net;
pub mod pole;
pub mod potential;
pub mod scheme;
pub mod wire;

// Re-exports for ergonomics
pub use element::{Element, ElementRef, ID_ATTRIBUTE};
pub use error::{SchemeError, SchemeResult};
pub use pole::{Pole, PoleRef};
pub use potential::Potential;
pub use scheme::Scheme;
pub use wire::Wire;
