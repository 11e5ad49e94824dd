//! Game session state machine.
//!
//! Owns the board, the player roster and the session lifecycle, and exposes
//! the two mutating transitions (registration and dice moves) plus read-only
//! queries. Every precondition violation aborts the call with no partial
//! state change; the session stays usable after any rejected call.

use crate::state::board::{Board, Cell, Jump, FINAL_CELL};
use crate::state::player::{Player, PlayerId, Roster};

/// Minimum players needed to start.
pub const MIN_PLAYERS: usize = 2;

/// Maximum players per game.
pub const MAX_PLAYERS: usize = 4;

/// Lowest valid dice value.
pub const DICE_MIN: u8 = 1;

/// Highest valid dice value. Rolling it grants another chance.
pub const DICE_MAX: u8 = 6;

/// Game lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Accepting registrations, not started
    #[default]
    Lobby,
    /// Started, accepting moves
    Active,
    /// A player reached the final cell; terminal
    Finished,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lobby => "lobby",
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Check if the game accepts moves.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Check if the game can no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// Game errors.
///
/// All variants are caller-input or lifecycle violations; none are fatal to
/// the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    GameAlreadyStarted,
    GameNotStarted,
    GameHasAlreadyEnded,
    NotEnoughPlayers,
    PlayerAlreadyExists,
    CannotAddMorePlayers,
    NotYourChance,
    InvalidNumberOnDice,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GameAlreadyStarted => write!(f, "Game has already started"),
            Self::GameNotStarted => write!(f, "Game has not started"),
            Self::GameHasAlreadyEnded => write!(f, "Game has already ended"),
            Self::NotEnoughPlayers => write!(f, "Add more players to start the game"),
            Self::PlayerAlreadyExists => write!(f, "Player already exists"),
            Self::CannotAddMorePlayers => write!(f, "Cannot add more players"),
            Self::NotYourChance => write!(f, "Not your chance to move"),
            Self::InvalidNumberOnDice => write!(f, "Invalid number on dice"),
        }
    }
}

impl std::error::Error for GameError {}

/// What a successful move did, for event emission by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Player who moved
    pub player_id: PlayerId,

    /// Dice value supplied
    pub dice: u8,

    /// Cell before the move (0 if not yet on the board)
    pub from: Cell,

    /// Cell after the move, teleports applied
    pub to: Cell,

    /// The snake or ladder taken, if the move landed on one
    pub jump: Option<Jump>,

    /// Whether the roll overshot the final cell and was absorbed
    pub absorbed: bool,

    /// Whether this move won the game
    pub won: bool,

    /// Player id holding the turn after this move
    pub next_turn: PlayerId,
}

/// Game session state.
///
/// One instance per game; instances are fully independent of each other.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    roster: Roster,
    status: GameStatus,

    /// 1-based id of the player whose move is valid; meaningful only
    /// while the game is active
    current_turn: PlayerId,

    /// Set exactly once, when a player reaches the final cell
    winner: Option<PlayerId>,

    created_at: chrono::DateTime<chrono::Utc>,
    started_at: Option<chrono::DateTime<chrono::Utc>>,
    ended_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Game {
    /// Create a new game on the classic board with no players.
    pub fn new() -> Self {
        Self {
            board: Board::classic(),
            roster: Roster::new(),
            status: GameStatus::Lobby,
            current_turn: 0,
            winner: None,
            created_at: chrono::Utc::now(),
            started_at: None,
            ended_at: None,
        }
    }

    /// Register a player, assigning the next sequential id.
    pub fn register_player(&mut self, identity: &str) -> Result<PlayerId, GameError> {
        if self.status != GameStatus::Lobby {
            return Err(GameError::GameAlreadyStarted);
        }

        if self.roster.contains(identity) {
            return Err(GameError::PlayerAlreadyExists);
        }

        if self.roster.len() >= MAX_PLAYERS {
            return Err(GameError::CannotAddMorePlayers);
        }

        self.roster
            .add(identity)
            .ok_or(GameError::PlayerAlreadyExists)
    }

    /// Start the game, fixing turn order to registration order.
    ///
    /// The first-registered player always moves first.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::Lobby {
            return Err(GameError::GameAlreadyStarted);
        }

        if self.roster.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }

        self.status = GameStatus::Active;
        self.current_turn = 1;
        self.started_at = Some(chrono::Utc::now());

        Ok(())
    }

    /// Apply a dice move for the player holding the turn.
    ///
    /// The dice value is trusted caller input; this crate never rolls its
    /// own dice. Resolution: advance by the dice value, absorb overshoots
    /// past the final cell, win on landing it exactly, otherwise take the
    /// single snake or ladder starting at the landing cell, if any. A roll
    /// of 6 keeps the turn; anything else passes it in registration order.
    pub fn make_move(&mut self, player_id: PlayerId, dice: u8) -> Result<MoveOutcome, GameError> {
        match self.status {
            GameStatus::Lobby => return Err(GameError::GameNotStarted),
            GameStatus::Finished => return Err(GameError::GameHasAlreadyEnded),
            GameStatus::Active => {}
        }

        if !(DICE_MIN..=DICE_MAX).contains(&dice) {
            return Err(GameError::InvalidNumberOnDice);
        }

        if player_id != self.current_turn {
            return Err(GameError::NotYourChance);
        }

        // current_turn always names a registered player while active
        let from = self.roster.get(player_id).map_or(0, |p| p.position);
        let tentative = from + dice;

        let mut jump = None;
        let mut absorbed = false;
        let mut won = false;

        let to = if tentative > FINAL_CELL {
            // Overshoot is absorbed: stay put, the turn still moves on
            absorbed = true;
            from
        } else if tentative == FINAL_CELL {
            won = true;
            FINAL_CELL
        } else {
            match self.board.jump_at(tentative) {
                // A teleport is terminal; the destination is not looked up
                Some(j) => {
                    jump = Some(*j);
                    j.end
                }
                None => tentative,
            }
        };

        if let Some(player) = self.roster.get_mut(player_id) {
            player.position = to;
        }

        if won {
            self.status = GameStatus::Finished;
            self.winner = Some(player_id);
            self.ended_at = Some(chrono::Utc::now());
        } else if dice != DICE_MAX {
            self.current_turn = self.current_turn % self.roster.len() as PlayerId + 1;
        }

        Ok(MoveOutcome {
            player_id,
            dice,
            from,
            to,
            jump,
            absorbed,
            won,
            next_turn: self.current_turn,
        })
    }

    // Queries

    /// All snakes in table order.
    pub fn snakes(&self) -> &[Jump] {
        self.board.snakes()
    }

    /// All ladders in table order.
    pub fn ladders(&self) -> &[Jump] {
        self.board.ladders()
    }

    /// The board configuration.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game has started (stays true once finished).
    pub fn is_started(&self) -> bool {
        self.status != GameStatus::Lobby
    }

    /// Check if the game has ended.
    pub fn is_ended(&self) -> bool {
        self.status.is_terminal()
    }

    /// Registered player count.
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Look up a player id by identity.
    pub fn player_id(&self, identity: &str) -> Option<PlayerId> {
        self.roster.id_of(identity)
    }

    /// A player's current cell (0 if not yet on the board).
    pub fn player_position(&self, player_id: PlayerId) -> Option<Cell> {
        self.roster.get(player_id).map(|p| p.position)
    }

    /// Get a player by id.
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.roster.get(player_id)
    }

    /// All players in registration order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.roster.players()
    }

    /// Id of the player holding the turn; `None` unless active.
    pub fn chance(&self) -> Option<PlayerId> {
        if self.status.is_active() {
            Some(self.current_turn)
        } else {
            None
        }
    }

    /// The winner's id, once the game has ended.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Convert the full session state to a JSON snapshot.
    pub fn to_json(&self) -> serde_json::Value {
        let players: Vec<serde_json::Value> =
            self.roster.players().map(|p| p.to_json()).collect();
        let snakes: Vec<serde_json::Value> =
            self.board.snakes().iter().map(|j| j.to_json()).collect();
        let ladders: Vec<serde_json::Value> =
            self.board.ladders().iter().map(|j| j.to_json()).collect();

        serde_json::json!({
            "status": self.status.as_str(),
            "players": players,
            "current_turn": self.chance(),
            "winner": self.winner,
            "snakes": snakes,
            "ladders": ladders,
            "created_at": self.created_at,
            "started_at": self.started_at,
            "ended_at": self.ended_at
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
