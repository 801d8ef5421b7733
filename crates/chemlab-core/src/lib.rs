//! # Hydrocarbon Lab Core Library
//!
//! The rule engine behind an interactive hydrocarbon teaching tool: a compiled-in
//! catalog of ball-and-stick molecules, a one-for-one halogen substitution engine
//! with Hill-order formula derivation, and a pure session state machine that a
//! user interface drives with discrete events.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Atom`, `Molecule`), the
//!   validated molecule [`core::catalog::Catalog`], Hill formula derivation, element
//!   styling and scene geometry for renderers.
//!
//! - **[`engine`]: The Logic Core.** The substitution rule, the session reducer
//!   (`(state, event) -> (state, effects)`) with its request-generation guard, and the
//!   explanation request model handed to external text backends.
//!
//! - **[`workflows`]: The Public API.** One-shot procedures that tie the two layers
//!   together, such as running a batch of substitutions on a catalog molecule.
//!
//! Nothing in this crate performs I/O or blocks; network access and timers belong
//! to the caller.

pub mod core;
pub mod engine;
pub mod workflows;
