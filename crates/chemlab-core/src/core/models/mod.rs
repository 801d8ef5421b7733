//! # Core Models Module
//!
//! Data structures describing the molecules of the lab.
//!
//! - [`atom`] - Element tags, halogen reactants and the atom record
//! - [`molecule`] - Molecule records and their category
//! - [`topology`] - Bond-graph validation and bond deduplication
//! - [`ids`] - String identifiers for atoms and molecules
//!
//! ```ignore
//! use chemlab::core::models::atom::{Atom, AtomType};
//! use nalgebra::Point3;
//!
//! let carbon = Atom::new("c1", AtomType::Carbon, Point3::origin(), ["h1", "h2", "h3", "h4"]);
//! assert_eq!(carbon.connected_to.len(), 4);
//! ```

pub mod atom;
pub mod ids;
pub mod molecule;
pub mod topology;
