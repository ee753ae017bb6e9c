use crate::board::{Board, Player, Slot};
use crate::error::Result;
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    pub player: Player,
    pub slot: Slot,
    /// Mover's store count once the sow finished
    pub score: u32,
    pub free_turn: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The player to move had no legal move
    NoMoves(Player),
    TurnLimit,
}

#[derive(Clone, Debug)]
pub struct GameRecord {
    pub turns: Vec<Turn>,
    pub board: Board,
    pub stop: StopReason,
}

/// One side has emptied all of its regular slots
pub fn is_terminal(board: &Board) -> bool {
    board.side_pieces(Player::One) == 0 || board.side_pieces(Player::Two) == 0
}

/// Both players pick moves with `find_best_move` until someone is stuck or
/// `max_turns` sows have been played.
///
/// A sow ending in an unapplied free turn keeps the same mover.
pub fn play_greedy(board: &Board, first: Player, max_turns: u32) -> Result<GameRecord> {
    let mut current = board.clone();
    let mut player = first;
    let mut turns = Vec::new();

    let stop = loop {
        if turns.len() as u32 >= max_turns {
            break StopReason::TurnLimit;
        }
        let Some(slot) = current.find_best_move(player)? else {
            break StopReason::NoMoves(player);
        };

        let report = current.sow(slot.position, player)?;
        let free_turn = report.ended_in_free_turn();
        let score = current.score(player)?;
        debug!("turn {}: {player} plays {slot} -> {score}", turns.len() + 1);
        turns.push(Turn {
            player,
            slot,
            score,
            free_turn,
        });

        if !free_turn {
            player = player.opponent();
        }
    };

    Ok(GameRecord {
        turns,
        board: current,
        stop,
    })
}
