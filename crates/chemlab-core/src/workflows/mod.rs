//! # Workflows Module
//!
//! One-shot entry points that combine the catalog with the engine for callers that do
//! not need a long-lived interactive session.
//!
//! - **Reaction Workflow** ([`react`]) - Applies a sequence of substitutions to a
//!   catalog molecule and prepares the matching explanation request.
//! - **Inspection Workflows** ([`inspect`]) - Describes a molecule, or prepares the
//!   explanation request for an industrial process run on it.
//!
//! Interactive front ends drive [`crate::engine::session::reduce`] directly instead.

pub mod inspect;
pub mod react;
