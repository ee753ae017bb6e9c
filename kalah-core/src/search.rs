use crate::board::{Board, Player, Slot};
use crate::error::Result;
use crate::moves::SowReport;
use log::{debug, trace, warn};

/// Outcome of simulating one candidate move on a fork
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEvaluation {
    pub slot: Slot,
    /// Mover's store count after the simulated sow
    pub score: u32,
}

/// Winning candidate of a search, with the fork it was simulated on
#[derive(Clone, Debug)]
pub(crate) struct BestLine {
    pub slot: Slot,
    /// Fork after the sow and its report; `None` when the depth cap skipped simulation
    pub outcome: Option<(Board, SowReport)>,
}

/// One simulated candidate
struct Line {
    eval: MoveEvaluation,
    fork: Board,
    report: SowReport,
}

impl Board {
    fn simulate_moves(&self, player: Player) -> Result<Vec<Line>> {
        self.legal_moves(player)
            .into_iter()
            .map(|position| {
                let slot = self.slot(position)?;
                let mut fork = self.fork();
                let target = fork.slot_position(&slot)?;
                let report = fork.sow(target, player)?;
                let score = fork.score(player)?;
                trace!("depth {}: {slot} -> {score}", self.depth());
                Ok(Line {
                    eval: MoveEvaluation { slot, score },
                    fork,
                    report,
                })
            })
            .collect()
    }

    /// Simulate every legal move of `player` on its own fork, in position order.
    pub fn evaluate_moves(&self, player: Player) -> Result<Vec<MoveEvaluation>> {
        Ok(self
            .simulate_moves(player)?
            .into_iter()
            .map(|line| line.eval)
            .collect())
    }

    pub(crate) fn best_line(&self, player: Player) -> Result<Option<BestLine>> {
        if self.config().depth_exceeded(self.depth()) {
            let fallback = self
                .legal_moves(player)
                .first()
                .map(|&p| self.slot(p))
                .transpose()?;
            warn!(
                "fork depth {} exceeds cap {:?}; falling back to first non-empty slot",
                self.depth(),
                self.config().max_depth
            );
            return Ok(fallback.map(|slot| BestLine {
                slot,
                outcome: None,
            }));
        }

        let mut best_score = self.score(player)?;
        let mut choice = None;
        for line in self.simulate_moves(player)? {
            if line.eval.score >= best_score {
                best_score = line.eval.score;
                choice = Some(line);
            }
        }

        if self.depth() == 0 {
            debug!(
                "best move for {player}: {} (score {best_score})",
                choice
                    .as_ref()
                    .map_or_else(|| "none".to_string(), |l| l.eval.slot.to_string())
            );
        }
        Ok(choice.map(|line| BestLine {
            slot: line.eval.slot,
            outcome: Some((line.fork, line.report)),
        }))
    }

    /// Greedy one-ply choice: the move leaving `player` with the largest store.
    ///
    /// Ties go to the later slot. Returns `None` only when `player` has no
    /// legal move.
    pub fn find_best_move(&self, player: Player) -> Result<Option<Slot>> {
        Ok(self.best_line(player)?.map(|line| line.slot))
    }
}
