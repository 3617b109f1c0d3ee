//! Revisioning primitives
//!
//! Hashing, name synthesis, placement, and companion propagation for a single
//! file. The orchestrator strings these together per file group.

pub mod companion;
pub mod hasher;
pub mod namer;
pub mod path;
pub mod placer;
