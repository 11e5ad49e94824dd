//! Snake and Ladder State Library
//!
//! This crate provides the authoritative rules engine for a Snake and Ladder
//! game on a 100-cell board.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Board** - The fixed snake/ladder configuration with O(1) jump lookup
//!   by start cell.
//!
//! - **Roster** - Registered players in turn order, with reverse lookup from
//!   identity to player id.
//!
//! - **Game** - The session state machine: registration, start, dice-move
//!   resolution, win detection. Invalid calls are rejected with clear errors
//!   and never leave partial state behind.
//!
//! # Design Principles
//!
//! 1. **The state machine validates every transition** - Lifecycle, turn and
//!    dice violations are rejected at the call site with a [`GameError`];
//!    a rejected call mutates nothing.
//!
//! 2. **The dice value is caller input** - The engine never rolls its own
//!    dice. Fairness of the roll is the caller's concern, not this crate's.
//!
//! 3. **No networking** - This crate is pure state, no transport or identity
//!    verification. Callers pass an already-authenticated identity string.
//!
//! 4. **Serialization-ready** - The session and its parts convert to JSON
//!    snapshots for durable commit or client display.
//!
//! # Example
//!
//! ```rust
//! use snake_ladder_state::state::Game;
//!
//! let mut game = Game::new();
//! let alice = game.register_player("alice").unwrap();
//! let bob = game.register_player("bob").unwrap();
//! game.start().unwrap();
//! assert_eq!(game.chance(), Some(alice));
//!
//! // Alice rolls a 2, lands on cell 2 and climbs its ladder to 38.
//! let outcome = game.make_move(alice, 2).unwrap();
//! assert_eq!(outcome.to, 38);
//! assert_eq!(game.chance(), Some(bob));
//! ```
//!
//! [`GameError`]: state::GameError

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
