use serde::{Deserialize, Serialize};

use super::game_state::GameState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub player: usize,
    pub position: String,
    pub walls_remaining: usize,
}

/// Fixed shape view of a game for handing across a transport boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board_size: usize,
    pub players: Vec<PlayerSnapshot>,
    pub placed_walls: Vec<String>,
    pub current_player: usize,
    pub winner: Option<usize>,
    pub is_game_over: bool,
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        let players = self
            .players()
            .map(|player| PlayerSnapshot {
                player,
                position: self.pawn_coord(player).unwrap_or_default(),
                walls_remaining: self.walls_remaining(player),
            })
            .collect();

        GameSnapshot {
            board_size: self.board_size(),
            players,
            placed_walls: self.placed_wall_strings(),
            current_player: self.current_player(),
            winner: self.winner(),
            is_game_over: self.is_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_snapshot_serializes_to_fixed_shape() {
        let mut game_state = GameState::initial();
        game_state.apply_move("MOVE E2").unwrap();
        game_state.apply_move("WALL V A1").unwrap();
        game_state.apply_move("WALL H E5").unwrap();

        let value = serde_json::to_value(game_state.snapshot()).unwrap();

        assert_eq!(
            value,
            json!({
                "board_size": 9,
                "players": [
                    { "player": 1, "position": "E2", "walls_remaining": 9 },
                    { "player": 2, "position": "E9", "walls_remaining": 9 }
                ],
                "placed_walls": ["WALL H E5", "WALL V A1"],
                "current_player": 2,
                "winner": null,
                "is_game_over": false
            })
        );
    }

    #[test]
    fn test_snapshot_of_finished_game() {
        let mut game_state = GameState::new(3, 2).unwrap();
        game_state.apply_move("MOVE B2").unwrap();
        game_state.apply_move("MOVE A3").unwrap();
        game_state.apply_move("MOVE B3").unwrap();

        let snapshot = game_state.snapshot();

        assert_eq!(snapshot.current_player, 1);
        assert_eq!(snapshot.winner, Some(1));
        assert!(snapshot.is_game_over);
        assert_eq!(snapshot.players[0].position, "B3");
    }

    #[test]
    fn test_four_player_snapshot_lists_every_seat() {
        let game_state = GameState::new(9, 4).unwrap();
        let json = serde_json::to_string(&game_state.snapshot()).unwrap();
        let snapshot: GameSnapshot = serde_json::from_str(&json).unwrap();

        let positions = snapshot
            .players
            .iter()
            .map(|p| p.position.as_str())
            .collect::<Vec<_>>();

        assert_eq!(positions, vec!["E1", "E9", "A5", "I5"]);
        assert!(snapshot.players.iter().all(|p| p.walls_remaining == 5));
    }
}
