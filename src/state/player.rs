//! Player records and the registration roster.
//!
//! Players register with an opaque identity (an address or account id from
//! the caller's identity layer) and receive a 1-based sequential id.
//! Registration order fixes turn order; players are never removed.

use std::collections::HashMap;

use crate::state::board::Cell;

/// 1-based player id, assigned in registration order.
pub type PlayerId = u8;

/// A registered player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Sequential id (1, 2, 3, ...)
    pub id: PlayerId,

    /// Opaque unique identity from the caller's identity layer
    pub identity: String,

    /// Current cell; 0 means not yet on the board, 100 means finished
    pub position: Cell,

    /// When the player registered
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

impl Player {
    pub fn new(id: PlayerId, identity: String) -> Self {
        Self {
            id,
            identity,
            position: 0,
            joined_at: chrono::Utc::now(),
        }
    }

    /// Check if the player has entered the board.
    pub fn is_on_board(&self) -> bool {
        self.position > 0
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "identity": self.identity,
            "position": self.position
        })
    }
}

/// Ordered player roster with identity reverse lookup.
///
/// The ordered sequence and the identity index are updated together at
/// registration and never diverge.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// Players in registration order; index i holds player id i+1
    players: Vec<Player>,

    /// identity -> player id
    identity_index: HashMap<String, PlayerId>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an identity, assigning the next sequential id.
    ///
    /// Returns `None` if the identity is already registered. The caller is
    /// responsible for capacity and lifecycle checks.
    pub fn add(&mut self, identity: &str) -> Option<PlayerId> {
        if self.identity_index.contains_key(identity) {
            return None;
        }

        let id = self.players.len() as PlayerId + 1;
        self.players.push(Player::new(id, identity.to_string()));
        self.identity_index.insert(identity.to_string(), id);
        Some(id)
    }

    /// Look up a player id by identity.
    pub fn id_of(&self, identity: &str) -> Option<PlayerId> {
        self.identity_index.get(identity).copied()
    }

    /// Check if an identity is registered.
    pub fn contains(&self, identity: &str) -> bool {
        self.identity_index.contains_key(identity)
    }

    /// Get a player by id.
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        if id == 0 {
            return None;
        }
        self.players.get(id as usize - 1)
    }

    /// Get a mutable player by id.
    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        if id == 0 {
            return None;
        }
        self.players.get_mut(id as usize - 1)
    }

    /// All players in registration order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Player count.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut roster = Roster::new();

        assert_eq!(roster.add("alice"), Some(1));
        assert_eq!(roster.add("bob"), Some(2));
        assert_eq!(roster.add("carol"), Some(3));
        assert_eq!(roster.len(), 3);

        // Ids map back to players in registration order
        assert_eq!(roster.get(1).unwrap().identity, "alice");
        assert_eq!(roster.get(2).unwrap().identity, "bob");
        assert_eq!(roster.get(3).unwrap().identity, "carol");
    }

    #[test]
    fn test_reverse_lookup() {
        let mut roster = Roster::new();
        roster.add("alice").unwrap();
        roster.add("bob").unwrap();

        assert_eq!(roster.id_of("alice"), Some(1));
        assert_eq!(roster.id_of("bob"), Some(2));
        assert_eq!(roster.id_of("mallory"), None);
        assert!(roster.contains("alice"));
        assert!(!roster.contains("mallory"));
    }

    #[test]
    fn test_duplicate_identity_rejected() {
        let mut roster = Roster::new();
        roster.add("alice").unwrap();

        assert_eq!(roster.add("alice"), None);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_new_player_off_board() {
        let mut roster = Roster::new();
        let id = roster.add("alice").unwrap();

        let player = roster.get(id).unwrap();
        assert_eq!(player.position, 0);
        assert!(!player.is_on_board());
    }

    #[test]
    fn test_get_bounds() {
        let mut roster = Roster::new();
        roster.add("alice").unwrap();

        assert!(roster.get(0).is_none());
        assert!(roster.get(1).is_some());
        assert!(roster.get(2).is_none());
    }

    #[test]
    fn test_player_to_json() {
        let player = Player::new(1, "alice".to_string());
        let json = player.to_json();
        assert_eq!(json["id"], 1);
        assert_eq!(json["identity"], "alice");
        assert_eq!(json["position"], 0);
    }
}
