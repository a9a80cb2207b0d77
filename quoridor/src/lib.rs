pub mod action;
pub mod constants;
pub mod coordinate;
pub mod engine;
pub mod evaluation;
pub mod game_state;
pub mod options;
pub mod player;
pub mod reason;
pub mod search;
pub mod snapshot;

mod display;
mod geometry;
mod legality;
mod pathing;
mod serde;
mod zobrist;


pub use self::action::*;
pub use self::coordinate::*;
pub use self::engine::*;
pub use self::evaluation::*;
pub use self::game_state::*;
pub use self::options::*;
pub use self::player::{Goal, Seat};
pub use self::reason::*;
pub use self::search::*;
pub use self::snapshot::*;

pub use alphabeta::{SearchResult, SearchStats};
