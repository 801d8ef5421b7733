//! # Engine Module
//!
//! The rules of the virtual lab and the state machine that applies them.
//!
//! - **Substitution** ([`substitution`]) - One-for-one hydrogen replacement by a halogen
//! - **Session** ([`session`]) - The session record, its events and the pure reducer
//! - **Explanations** ([`explain`]) - Requests for descriptive text and their fallbacks
//! - **Configuration** ([`config`], [`context`]) - Session timing parameters and shared collaborators
//! - **Progress** ([`progress`]) - Callback-based progress reporting for workflows
//! - **Error Handling** ([`error`]) - Classified substitution and workflow failures
//!
//! The engine never blocks. Time enters the reducer through event payloads, and
//! explanation requests leave it as effects for the caller to execute.

pub mod config;
pub mod context;
pub mod error;
pub mod explain;
pub mod progress;
pub mod session;
pub mod substitution;
