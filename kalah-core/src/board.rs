use crate::error::{BoardError, Result};
use crate::rules::SearchConfig;
use std::fmt;
use std::str::FromStr;

/// Board positions, in sowing order:
/// - 0-5: player1's regular slots
/// - 6: player1's store
/// - 7-12: player2's regular slots
/// - 13: player2's store
pub const NUM_SLOTS: usize = 14;
pub const SIDE_LEN: usize = 7;
pub const P1_SLOTS: std::ops::Range<usize> = 0..6;
pub const P1_STORE: usize = 6;
pub const P2_SLOTS: std::ops::Range<usize> = 7..13;
pub const P2_STORE: usize = 13;
pub const STANDARD_COUNTS: [u32; NUM_SLOTS] = [4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Player::One => "player1",
            Player::Two => "player2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Player {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "player1" | "p1" | "1" => Ok(Player::One),
            "player2" | "p2" | "2" => Ok(Player::Two),
            _ => Err(BoardError::UnknownPlayer(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Regular,
    Store,
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SlotKind::Regular => "regular",
            SlotKind::Store => "store",
        })
    }
}

/// A single slot. Position, owner and kind are fixed by the layout; only
/// `pieces` changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub position: usize,
    pub owner: Player,
    pub kind: SlotKind,
    pub pieces: u32,
}

impl Slot {
    fn at(position: usize) -> Self {
        let owner = if position < SIDE_LEN {
            Player::One
        } else {
            Player::Two
        };
        let kind = if position % SIDE_LEN == SIDE_LEN - 1 {
            SlotKind::Store
        } else {
            SlotKind::Regular
        };
        Slot {
            position,
            owner,
            kind,
            pieces: 0,
        }
    }

    /// Index within the owner's side (0-6)
    pub fn side_index(&self) -> usize {
        self.position % SIDE_LEN
    }

    pub fn is_store(&self) -> bool {
        self.kind == SlotKind::Store
    }

    /// Same layout cell, ignoring the piece count
    fn same_cell(&self, other: &Slot) -> bool {
        self.position == other.position && self.owner == other.owner && self.kind == other.kind
    }
}

/// Formats as `"player1 regular 0"`
impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.owner, self.kind, self.side_index())
    }
}

#[derive(Clone, Debug)]
pub struct Board {
    slots: [Slot; NUM_SLOTS],
    depth: u32,
    config: SearchConfig,
}

impl Board {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Board {
            slots: std::array::from_fn(Slot::at),
            depth: 0,
            config,
        }
    }

    pub fn from_counts(counts: &[u32]) -> Result<Self> {
        let mut board = Self::new();
        board.populate(counts)?;
        Ok(board)
    }

    pub fn standard() -> Self {
        let mut board = Self::new();
        for (slot, &count) in board.slots.iter_mut().zip(STANDARD_COUNTS.iter()) {
            slot.pieces = count;
        }
        board
    }

    /// Sets every slot's count, in position order. Length and total are
    /// checked before anything is touched.
    pub fn populate(&mut self, counts: &[u32]) -> Result<()> {
        if counts.len() != NUM_SLOTS {
            return Err(BoardError::InvalidCounts {
                expected: NUM_SLOTS,
                got: counts.len(),
            });
        }
        // every slot stays within the total, so sowing cannot overflow a count
        if counts.iter().try_fold(0u32, |acc, &c| acc.checked_add(c)).is_none() {
            return Err(BoardError::TooManyPieces);
        }

        self.slots.iter_mut().for_each(|s| s.pieces = 0);
        for (slot, &count) in self.slots.iter_mut().zip(counts) {
            slot.pieces = count;
        }
        Ok(())
    }

    /// Independent copy for lookahead, one level deeper than `self`.
    pub fn fork(&self) -> Board {
        Board {
            slots: self.slots,
            depth: self.depth + 1,
            config: self.config,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn slots(&self) -> &[Slot; NUM_SLOTS] {
        &self.slots
    }

    pub fn slot(&self, position: usize) -> Result<Slot> {
        self.slots
            .get(position)
            .copied()
            .ok_or(BoardError::PositionOutOfRange { position })
    }

    pub fn pieces(&self) -> [u32; NUM_SLOTS] {
        self.slots.map(|s| s.pieces)
    }

    pub fn total_pieces(&self) -> u32 {
        self.slots.iter().map(|s| s.pieces).sum()
    }

    /// Store count for `player`. The store is located by owner and kind, not
    /// by index.
    pub fn score(&self, player: Player) -> Result<u32> {
        self.slots
            .iter()
            .find(|s| s.owner == player && s.is_store())
            .map(|s| s.pieces)
            .ok_or(BoardError::MissingStore(player))
    }

    /// Position of `slot` on this board. Rejects slots whose cell does not
    /// exist here.
    pub fn slot_position(&self, slot: &Slot) -> Result<usize> {
        self.slots
            .iter()
            .position(|s| s.same_cell(slot))
            .ok_or(BoardError::ForeignSlot {
                position: slot.position,
            })
    }

    /// Take over the slot state of `other`, keeping this board's depth and config
    pub(crate) fn adopt(&mut self, other: &Board) {
        self.slots = other.slots;
    }

    pub(crate) fn slot_mut(&mut self, position: usize) -> &mut Slot {
        &mut self.slots[position]
    }

    /// Piece count of `player`'s regular slots
    pub fn side_pieces(&self, player: Player) -> u32 {
        self.slots
            .iter()
            .filter(|s| s.owner == player && !s.is_store())
            .map(|s| s.pieces)
            .sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Two rows, player1's side on top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |range: std::ops::Range<usize>| {
            self.slots[range]
                .iter()
                .map(|s| format!("{:>2}", s.pieces))
                .collect::<Vec<_>>()
                .join(" ")
        };
        writeln!(f, "{}", row(0..SIDE_LEN))?;
        write!(f, "   {}", row(SIDE_LEN..NUM_SLOTS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let board = Board::new();
        let slots = board.slots();
        assert_eq!(slots.len(), 14);
        assert_eq!(slots.iter().filter(|s| s.is_store()).count(), 2);
        assert_eq!(slots[P1_STORE].kind, SlotKind::Store);
        assert_eq!(slots[P2_STORE].kind, SlotKind::Store);

        for p in P1_SLOTS {
            assert_eq!(slots[p].owner, Player::One);
            assert_eq!(slots[p].kind, SlotKind::Regular);
        }
        for p in P2_SLOTS {
            assert_eq!(slots[p].owner, Player::Two);
            assert_eq!(slots[p].kind, SlotKind::Regular);
        }
        assert_eq!(slots[P1_STORE].owner, Player::One);
        assert_eq!(slots[P2_STORE].owner, Player::Two);
        assert!(slots.iter().all(|s| s.pieces == 0));
        assert!(slots.iter().enumerate().all(|(i, s)| s.position == i));
    }

    #[test]
    fn test_populate() {
        let counts = [1, 2, 1, 2, 1, 2, 3, 4, 5, 4, 5, 4, 5, 6];
        let mut board = Board::new();
        board.populate(&counts).unwrap();
        assert_eq!(board.pieces(), counts);

        board.populate(&[0; 14]).unwrap();
        assert_eq!(board.total_pieces(), 0);
    }

    #[test]
    fn test_populate_rejects_wrong_length_without_mutation() {
        let mut board = Board::standard();
        let err = board.populate(&[1, 2, 3]).unwrap_err();
        assert_eq!(err, BoardError::InvalidCounts { expected: 14, got: 3 });
        assert_eq!(board.pieces(), STANDARD_COUNTS);
    }

    #[test]
    fn test_populate_rejects_overflowing_total() {
        let mut board = Board::standard();
        let mut counts = [0; 14];
        counts[0] = 1;
        counts[1] = u32::MAX;
        assert_eq!(board.populate(&counts), Err(BoardError::TooManyPieces));
        assert_eq!(board.pieces(), STANDARD_COUNTS);

        counts[0] = 0;
        board.populate(&counts).unwrap();
        assert_eq!(board.total_pieces(), u32::MAX);
    }

    #[test]
    fn test_fork_copies_counts_and_increments_depth() {
        let board = Board::from_counts(&[1, 2, 1, 2, 1, 2, 3, 4, 5, 4, 5, 4, 5, 6]).unwrap();
        let mut fork = board.fork();
        assert_eq!(fork.pieces(), board.pieces());
        assert_eq!(fork.depth(), 1);
        assert_eq!(fork.fork().depth(), 2);

        fork.slot_mut(0).pieces = 9;
        assert_eq!(board.slot(0).unwrap().pieces, 1);
    }

    #[test]
    fn test_score() {
        let board = Board::from_counts(&[0, 0, 0, 0, 0, 0, 3, 0, 0, 0, 5, 4, 5, 6]).unwrap();
        assert_eq!(board.score(Player::One), Ok(3));
        assert_eq!(board.score(Player::Two), Ok(6));
        assert_eq!(board.score(Player::One), board.score(Player::One));
    }

    #[test]
    fn test_slot_position() {
        let board = Board::new();
        let fork = board.fork();
        assert_eq!(board.slot_position(&board.slots()[0]), Ok(0));
        assert_eq!(board.slot_position(&board.slots()[13]), Ok(13));
        // slots are matched by cell, so a fork's slot resolves here too
        assert_eq!(board.slot_position(&fork.slots()[5]), Ok(5));

        let bogus = Slot {
            position: 6,
            owner: Player::Two,
            kind: SlotKind::Store,
            pieces: 0,
        };
        assert_eq!(
            board.slot_position(&bogus),
            Err(BoardError::ForeignSlot { position: 6 })
        );
    }

    #[test]
    fn test_slot_display() {
        let board = Board::new();
        assert_eq!(board.slots()[0].to_string(), "player1 regular 0");
        assert_eq!(board.slots()[6].to_string(), "player1 store 6");
        assert_eq!(board.slots()[12].to_string(), "player2 regular 5");
    }

    #[test]
    fn test_player_parse() {
        assert_eq!("player1".parse::<Player>(), Ok(Player::One));
        assert_eq!("P2".parse::<Player>(), Ok(Player::Two));
        assert!("player3".parse::<Player>().is_err());
        assert_eq!(Player::One.opponent(), Player::Two);
    }

    #[test]
    fn test_board_display() {
        let board = Board::standard();
        assert_eq!(
            board.to_string(),
            " 4  4  4  4  4  4  0\n    4  4  4  4  4  4  0"
        );
    }
}
