//! CLI command implementations.

pub mod common;
pub mod encode;
pub mod qubits;
pub mod send;
pub mod version;
