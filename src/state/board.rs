//! Static board configuration.
//!
//! The board is a linear track of 100 cells with fixed snake and ladder
//! jumps. It is built once at game construction and never mutated; move
//! resolution looks jumps up by their start cell in O(1).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A board cell number (1..=100). Players not yet on the board sit at 0.
pub type Cell = u8;

/// Highest cell on the board. Reaching it exactly wins the game.
pub const FINAL_CELL: Cell = 100;

/// Snake count in the classic configuration.
pub const SNAKE_COUNT: usize = 10;

/// Ladder count in the classic configuration.
pub const LADDER_COUNT: usize = 11;

/// Classic snake table: (start, end), start > end.
const SNAKES: [(Cell, Cell); SNAKE_COUNT] = [
    (16, 6),
    (46, 25),
    (49, 11),
    (62, 19),
    (64, 60),
    (74, 53),
    (89, 68),
    (92, 88),
    (95, 75),
    (99, 80),
];

/// Classic ladder table: (start, end), start < end.
const LADDERS: [(Cell, Cell); LADDER_COUNT] = [
    (2, 38),
    (7, 14),
    (8, 31),
    (15, 26),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (78, 98),
    (87, 94),
];

/// Jump kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpKind {
    /// Teleports downward (start > end)
    Snake,
    /// Teleports upward (start < end)
    Ladder,
}

impl JumpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snake => "snake",
            Self::Ladder => "ladder",
        }
    }
}

/// A single snake or ladder.
///
/// Landing exactly on `start` teleports the player to `end`. A teleport is
/// terminal for the move: the destination is never looked up again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jump {
    pub start: Cell,
    pub end: Cell,
    pub kind: JumpKind,
}

impl Jump {
    pub fn new(start: Cell, end: Cell, kind: JumpKind) -> Self {
        Self { start, end, kind }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "start": self.start,
            "end": self.end,
            "kind": self.kind.as_str()
        })
    }
}

/// The fixed board: ordered snake/ladder tables plus a start-cell index.
#[derive(Debug, Clone)]
pub struct Board {
    snakes: Vec<Jump>,
    ladders: Vec<Jump>,
    /// start cell -> jump, unambiguous by construction
    by_start: HashMap<Cell, Jump>,
}

impl Board {
    /// Build the classic board: 10 snakes (first 16 -> 6) and 11 ladders
    /// (first 2 -> 38).
    pub fn classic() -> Self {
        let snakes: Vec<Jump> = SNAKES
            .iter()
            .map(|&(start, end)| Jump::new(start, end, JumpKind::Snake))
            .collect();
        let ladders: Vec<Jump> = LADDERS
            .iter()
            .map(|&(start, end)| Jump::new(start, end, JumpKind::Ladder))
            .collect();

        let mut by_start = HashMap::with_capacity(snakes.len() + ladders.len());
        for jump in snakes.iter().chain(ladders.iter()) {
            // No cell may start two jumps, and nothing may start at 100.
            debug_assert!(jump.start < FINAL_CELL);
            let previous = by_start.insert(jump.start, *jump);
            debug_assert!(previous.is_none());
        }

        Self {
            snakes,
            ladders,
            by_start,
        }
    }

    /// All snakes in table order.
    pub fn snakes(&self) -> &[Jump] {
        &self.snakes
    }

    /// All ladders in table order.
    pub fn ladders(&self) -> &[Jump] {
        &self.ladders
    }

    /// The jump starting at `cell`, if any.
    pub fn jump_at(&self, cell: Cell) -> Option<&Jump> {
        self.by_start.get(&cell)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        let board = Board::classic();
        assert_eq!(board.snakes().len(), 10);
        assert_eq!(board.ladders().len(), 11);
    }

    #[test]
    fn test_calibration_entries() {
        let board = Board::classic();

        let first_snake = board.snakes()[0];
        assert_eq!(first_snake.start, 16);
        assert_eq!(first_snake.end, 6);

        let first_ladder = board.ladders()[0];
        assert_eq!(first_ladder.start, 2);
        assert_eq!(first_ladder.end, 38);
    }

    #[test]
    fn test_jump_directions() {
        let board = Board::classic();

        for snake in board.snakes() {
            assert_eq!(snake.kind, JumpKind::Snake);
            assert!(snake.start > snake.end, "snake {:?} must go down", snake);
        }
        for ladder in board.ladders() {
            assert_eq!(ladder.kind, JumpKind::Ladder);
            assert!(ladder.start < ladder.end, "ladder {:?} must go up", ladder);
        }
    }

    #[test]
    fn test_lookup_by_start() {
        let board = Board::classic();

        let snake = board.jump_at(16).unwrap();
        assert_eq!(snake.end, 6);

        let ladder = board.jump_at(2).unwrap();
        assert_eq!(ladder.end, 38);

        // Jump ends are not starts
        assert!(board.jump_at(6).is_none());
        assert!(board.jump_at(38).is_none());

        // Plain cells have no jump
        assert!(board.jump_at(1).is_none());
        assert!(board.jump_at(100).is_none());
    }

    #[test]
    fn test_unambiguous_starts() {
        let board = Board::classic();

        // Every table entry is reachable through the index, so no two
        // jumps can share a start cell.
        for jump in board.snakes().iter().chain(board.ladders().iter()) {
            assert_eq!(board.jump_at(jump.start), Some(jump));
        }
        assert_eq!(board.snakes().len() + board.ladders().len(), 21);
    }

    #[test]
    fn test_jump_to_json() {
        let jump = Jump::new(16, 6, JumpKind::Snake);
        let json = jump.to_json();
        assert_eq!(json["start"], 16);
        assert_eq!(json["end"], 6);
        assert_eq!(json["kind"], "snake");
    }
}
