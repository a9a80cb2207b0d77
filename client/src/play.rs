use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Result};
use itertools::Itertools;
use log::info;
use quoridor::{search, GameOptions, GameState, SearchOptions};

const WALLS_TO_LIST: usize = 12;

/// Plays a game on stdin and stdout. The human sits in seat `human`, the bot takes every other seat.
pub fn play_interactive(
    human: usize,
    game_options: &GameOptions,
    search_options: &SearchOptions,
) -> Result<()> {
    let mut game_state = GameState::new(game_options.board_size, game_options.num_players)?;

    if !game_state.players().any(|p| p == human) {
        bail!(
            "Player {} is not a seat in a {} player game",
            human,
            game_state.num_players()
        );
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game_state.is_game_over() {
        let player = game_state.current_player();

        if player != human {
            let action = search(&mut game_state, search_options)
                .map(|result| result.action)
                .ok_or_else(|| anyhow!("Player {} has no legal move", player))?;

            game_state
                .apply_action(&action)
                .map_err(|reason| anyhow!("Bot move {} was rejected: {}", action, reason))?;
            println!("Player {} plays {}", player, action);
            continue;
        }

        println!("{}", game_state);
        print!("Player {} > ", player);
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                info!("Input closed, leaving the game at move {}", game_state.move_number());
                return Ok(());
            }
        };

        if let Err(reason) = game_state.apply_move(&line) {
            println!("Rejected {:?} ({}): {}", line.trim(), reason.code(), reason);
            print_valid_moves(&game_state, player);
        }
    }

    println!("{}", game_state);

    if let Some(winner) = game_state.winner() {
        println!("Player {} wins after {} moves", winner, game_state.move_number());
    }

    Ok(())
}

fn print_valid_moves(game_state: &GameState, player: usize) {
    let pawn_moves = game_state
        .valid_pawn_moves(player)
        .iter()
        .map(|target| format!("MOVE {}", target))
        .join(", ");

    println!("Pawn moves: {}", pawn_moves);

    let walls = game_state.valid_wall_placements(player);
    if walls.is_empty() {
        println!("No wall placements available");
        return;
    }

    println!(
        "{} wall placements, for example: {}",
        walls.len(),
        walls.iter().take(WALLS_TO_LIST).join(", ")
    );
}
