//! Stratagem engine library.
//!
//! A single-ply heuristic player for a hidden-information capture-the-flag
//! board game. Exposes the board model, strategy configuration, placement,
//! move generation, scoring, and protocol modules for use by integration
//! tests and the binary entry point.

pub mod belief;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod protocol;
pub mod setup;
