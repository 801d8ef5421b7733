//! # Core Module
//!
//! Stateless building blocks shared by the engine and any user interface.
//!
//! - **Molecular Representation** ([`models`]) - Atoms, molecules and bond-graph validation
//! - **Catalog** ([`catalog`]) - The compiled-in molecule fixture and its query operations
//! - **Formula Derivation** ([`formula`]) - Hill-order empirical formulas
//! - **Element Styling** ([`elements`]) - Display names, colours and radii per element
//! - **Scene Geometry** ([`scene`]) - Render primitives and click picking

pub mod catalog;
pub mod elements;
pub mod formula;
pub mod models;
pub mod scene;
