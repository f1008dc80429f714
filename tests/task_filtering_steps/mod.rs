//! Step definitions for task filtering BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
