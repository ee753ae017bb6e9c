use crate::board::{Board, Player, Slot, SlotKind, NUM_SLOTS};
use crate::error::{BoardError, Result};
use log::{debug, trace};

/// A free turn granted while sowing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FreeTurn {
    /// Store that received the last piece
    pub store: usize,
    /// Best move found for the extra turn, if the search produced one
    pub follow_up: Option<Slot>,
    /// Whether `follow_up` was sown as part of this call
    pub applied: bool,
}

/// Summary of a single `sow` call
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SowReport {
    /// Number of distribution passes, avalanche re-sows included
    pub laps: u32,
    pub dropped: u32,
    /// Position that received the last piece
    pub last: Option<usize>,
    pub free_turns: Vec<FreeTurn>,
}

impl SowReport {
    pub fn ended_in_free_turn(&self) -> bool {
        self.free_turns.last().is_some_and(|t| !t.applied)
    }

    /// Append the report of a follow-up sow made on a fork
    fn absorb(&mut self, nested: SowReport) {
        self.laps += nested.laps;
        self.dropped += nested.dropped;
        self.last = nested.last.or(self.last);
        self.free_turns.extend(nested.free_turns);
    }
}

fn next_position(pos: usize) -> usize {
    (pos + 1) % NUM_SLOTS
}

/// Pieces land in every regular slot and the mover's own store only
fn accepts(slot: &Slot, player: Player) -> bool {
    slot.kind == SlotKind::Regular || slot.owner == player
}

impl Board {
    /// Regular slots of `player` that hold pieces, in position order
    pub fn legal_moves(&self, player: Player) -> Vec<usize> {
        self.slots()
            .iter()
            .filter(|s| s.owner == player && s.kind == SlotKind::Regular && s.pieces > 0)
            .map(|s| s.position)
            .collect()
    }

    pub fn has_moves(&self, player: Player) -> bool {
        self.slots()
            .iter()
            .any(|s| s.owner == player && s.kind == SlotKind::Regular && s.pieces > 0)
    }

    pub fn sow_slot(&mut self, slot: &Slot, player: Player) -> Result<SowReport> {
        let position = self.slot_position(slot)?;
        self.sow(position, player)
    }

    /// Sow every piece from `start` for `player`.
    ///
    /// Ending on an occupied regular slot picks that slot up and keeps going.
    /// Ending in the mover's own store, with pieces still on their side, runs
    /// the best-move search for the free turn; under `FreeTurnPolicy::Chain`
    /// the move it finds is sown as part of this call.
    pub fn sow(&mut self, start: usize, player: Player) -> Result<SowReport> {
        if start >= NUM_SLOTS {
            return Err(BoardError::PositionOutOfRange { position: start });
        }

        let mut report = SowReport::default();
        let mut pos = start;

        loop {
            let mut pieces = std::mem::take(&mut self.slot_mut(pos).pieces);
            if pieces == 0 {
                return Ok(report);
            }
            report.laps += 1;
            trace!("lap {} from {pos}: {pieces} pieces", report.laps);

            while pieces > 0 {
                pos = next_position(pos);
                let slot = self.slot_mut(pos);
                if accepts(slot, player) {
                    slot.pieces += 1;
                    pieces -= 1;
                    report.dropped += 1;
                }
            }
            report.last = Some(pos);

            let last = self.slots()[pos];
            if last.is_store() && last.owner == player && self.has_moves(player) {
                let line = self.best_line(player)?;
                let follow_up = line.as_ref().map(|l| l.slot);
                let applied = follow_up.is_some() && self.config().chains_free_turns();
                debug!(
                    "free turn for {player} at depth {}: follow-up {}",
                    self.depth(),
                    follow_up.map_or_else(|| "none".to_string(), |s| s.to_string())
                );
                report.free_turns.push(FreeTurn {
                    store: pos,
                    follow_up,
                    applied,
                });

                let Some(line) = line.filter(|_| applied) else {
                    return Ok(report);
                };
                match line.outcome {
                    // the search already sowed the follow-up on its fork
                    Some((fork, nested)) => {
                        self.adopt(&fork);
                        report.absorb(nested);
                        return Ok(report);
                    }
                    None => pos = line.slot.position,
                }
            } else if last.is_store() || last.pieces <= 1 {
                return Ok(report);
            }
            // avalanche: the landing slot is picked up on the next lap
        }
    }
}
