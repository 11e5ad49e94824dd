//! State management module for the Snake and Ladder engine.
//!
//! This module provides the core state types:
//!
//! - `board` - Static snake/ladder configuration (where do jumps go?)
//! - `player` - Player records and the registration roster
//! - `game` - The game session state machine
//!
//! # Lifecycle
//!
//! ```text
//! ┌───────────┐  start        ┌───────────┐  move landing   ┌───────────┐
//! │   Lobby   │──────────────▶│  Active   │────────────────▶│ Finished  │
//! └───────────┘ (≥ 2 players) └───────────┘  exactly on 100 └───────────┘
//!   ▲       │                   ▲       │                     terminal:
//!   └───────┘                   └───────┘                     all mutating
//!   register_player             non-winning move              calls are
//!   (up to 4)                   (turn rotates, or             rejected
//!                                repeats on a 6)
//! ```
//!
//! `Lobby` accepts registrations only; `Active` accepts moves only. The
//! winner is recorded exactly once, at the transition to `Finished`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use snake_ladder_state::state::{Game, GameError};
//!
//! let mut game = Game::new();
//! let p1 = game.register_player("0x8ecc...71f1")?;
//! let p2 = game.register_player("0xdD87...2148")?;
//! game.start()?;
//!
//! // The identity layer resolves the caller to a player id; the engine
//! // validates the claimed id against the turn.
//! let outcome = game.make_move(p1, 4)?;
//! ```

pub mod board;
pub mod game;
pub mod player;

// Re-export commonly used types
pub use board::{Board, Cell, Jump, JumpKind, FINAL_CELL, LADDER_COUNT, SNAKE_COUNT};
pub use game::{
    Game, GameError, GameStatus, MoveOutcome, DICE_MAX, DICE_MIN, MAX_PLAYERS, MIN_PLAYERS,
};
pub use player::{Player, PlayerId, Roster};
