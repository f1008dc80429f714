//! Adapter implementations of the board ports.

pub mod fs;
pub mod http;
pub mod memory;
