// kalah-cli/src/main.rs
#![forbid(unsafe_code)]

use std::error::Error;

use clap::Parser;
use kalah_core::{play_greedy, Board, Player, SearchConfig, StopReason, STANDARD_COUNTS};

#[derive(Parser, Debug)]
#[command(name = "kalah", about = "Pick a greedy Kalah move for a seeded board")]
struct Args {
    /// 14 comma-separated counts: player1 slots, player1 store, player2 slots, player2 store
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    counts: Option<Vec<u32>>,

    /// Player to move: player1 | player2
    #[arg(long, default_value = "player1")]
    player: String,

    /// Sow the follow-up move of a free turn instead of only reporting it
    #[arg(long)]
    chain_free_turns: bool,

    /// Stop simulating on forks deeper than this (first non-empty slot wins)
    #[arg(long)]
    max_depth: Option<u32>,

    /// Print every candidate move with its resulting score
    #[arg(long)]
    evaluate: bool,

    /// Print the board before choosing
    #[arg(long)]
    show: bool,

    // ---------------- self-play ----------------
    /// Play both sides greedily from the seeded board
    #[arg(long)]
    play: bool,

    /// Turn limit for --play
    #[arg(long, default_value_t = 200)]
    max_turns: u32,
}

impl Args {
    fn config(&self) -> SearchConfig {
        let config = if self.chain_free_turns {
            SearchConfig::chained()
        } else {
            SearchConfig::default()
        };
        match self.max_depth {
            Some(depth) => config.with_max_depth(depth),
            None => config,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("parsed arguments: {args:?}");

    let player: Player = args.player.parse()?;
    let mut board = Board::with_config(args.config());
    board.populate(args.counts.as_deref().unwrap_or(&STANDARD_COUNTS[..]))?;

    if args.show {
        println!("{board}");
    }

    if args.play {
        let record = play_greedy(&board, player, args.max_turns)?;
        for (i, turn) in record.turns.iter().enumerate() {
            let marker = if turn.free_turn { " (free turn)" } else { "" };
            println!("{:>3}. {} -> {}{}", i + 1, turn.slot, turn.score, marker);
        }
        println!("{}", record.board);
        match record.stop {
            StopReason::NoMoves(p) => println!("stopped: {p} has no moves"),
            StopReason::TurnLimit => println!("stopped: turn limit reached"),
        }
        println!(
            "score: player1 {} / player2 {}",
            record.board.score(Player::One)?,
            record.board.score(Player::Two)?
        );
        return Ok(());
    }

    if args.evaluate {
        for eval in board.evaluate_moves(player)? {
            println!("{} -> {}", eval.slot, eval.score);
        }
    }

    match board.find_best_move(player)? {
        Some(slot) => println!("{slot}"),
        None => println!("no move"),
    }
    Ok(())
}
