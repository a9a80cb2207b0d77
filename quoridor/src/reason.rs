use serde::Serialize;
use thiserror::Error;

/// Why a move was refused. Refusals are ordinary results, not faults, and never alter the game.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Reason {
    #[error("the game is already over")]
    GameOver,
    #[error("expected `MOVE <coord>` or `WALL <H|V> <coord>`")]
    InvalidFormat,
    #[error("the coordinate is malformed")]
    InvalidCoordinate,
    #[error("wall orientation must be H or V")]
    InvalidOrientation,
    #[error("the target cell is off the board")]
    PawnOffBoard,
    #[error("the target cell is occupied by another pawn")]
    PawnOccupied,
    #[error("a wall blocks the way")]
    PawnWallBlock,
    #[error("the target is neither an adjacent step nor a valid jump")]
    PawnNotAdjacentOrJump,
    #[error("no walls left to place")]
    WallNoWallsLeft,
    #[error("the wall anchor is off the placement grid")]
    WallOffBoard,
    #[error("a wall is already placed there")]
    WallOverlap,
    #[error("the wall crosses or overlaps an existing wall")]
    WallConflict,
    #[error("the wall would cut a player off from their goal")]
    WallPathBlock,
}

impl Reason {
    /// Stable identifier, identical to the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            Reason::GameOver => "GameOver",
            Reason::InvalidFormat => "InvalidFormat",
            Reason::InvalidCoordinate => "InvalidCoordinate",
            Reason::InvalidOrientation => "InvalidOrientation",
            Reason::PawnOffBoard => "PawnOffBoard",
            Reason::PawnOccupied => "PawnOccupied",
            Reason::PawnWallBlock => "PawnWallBlock",
            Reason::PawnNotAdjacentOrJump => "PawnNotAdjacentOrJump",
            Reason::WallNoWallsLeft => "WallNoWallsLeft",
            Reason::WallOffBoard => "WallOffBoard",
            Reason::WallOverlap => "WallOverlap",
            Reason::WallConflict => "WallConflict",
            Reason::WallPathBlock => "WallPathBlock",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_code_matches_serialized_form() {
        let reasons = [
            Reason::GameOver,
            Reason::InvalidFormat,
            Reason::InvalidCoordinate,
            Reason::InvalidOrientation,
            Reason::PawnOffBoard,
            Reason::PawnOccupied,
            Reason::PawnWallBlock,
            Reason::PawnNotAdjacentOrJump,
            Reason::WallNoWallsLeft,
            Reason::WallOffBoard,
            Reason::WallOverlap,
            Reason::WallConflict,
            Reason::WallPathBlock,
        ];

        for reason in reasons {
            assert_eq!(json!(reason), reason.code());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Reason::WallOverlap.to_string(),
            "a wall is already placed there"
        );
    }
}
