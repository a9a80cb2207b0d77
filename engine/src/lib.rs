pub mod engine;
pub mod evaluator;
pub mod transposition_hash;

pub use crate::engine::*;
pub use crate::evaluator::*;
pub use crate::transposition_hash::*;
