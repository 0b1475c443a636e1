//! Symptom classifier adapter.
//!
//! Wraps a black-box text classifier that maps a lowercased symptom
//! narrative to one probability per known medicine label. The rule-based
//! advisory core does not depend on this crate; prediction is a separate,
//! optional path with a fixed input/output contract.

pub mod classifier;
pub mod mock;

pub use classifier::*;
pub use mock::*;
