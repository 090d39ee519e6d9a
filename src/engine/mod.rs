//! The attendance ledger computation core: pure, synchronous, no I/O.
//! Raw punches flow one way through it: sequencer → classifier →
//! aggregator → assembler.

pub mod aggregator;
pub mod assembler;
pub mod classifier;
pub mod duration;
pub mod error;
pub mod sequencer;
