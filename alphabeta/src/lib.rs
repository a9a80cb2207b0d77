pub mod alpha_beta;
#[cfg(test)]
mod alpha_beta_tests;
#[cfg(test)]
mod take_away_game;
pub mod transposition_table;

pub use alpha_beta::*;
pub use transposition_table::*;
