//! Todo-board state engine.
//!
//! This module implements the task state-transition and derived-view engine
//! of the source application: an ordered task collection with a closed set
//! of transitions, a pure view filter, and the persistence seams the
//! surrounding application wires in. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
