use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("player count must be between 2 and 10, got {0}")]
    PlayerCount(usize),
    #[error("expected {expected} player ids, got {got}")]
    PlayerIdCount { expected: usize, got: usize },
    #[error("duplicate player id: {0}")]
    DuplicatePlayerId(String),
    #[error("expected {expected} seat stacks, got {got}")]
    StackCount { expected: usize, got: usize },
    #[error("invalid blinds: small {small}, big {big}")]
    InvalidBlinds { small: u64, big: u64 },
}

/// Table setup. Every field has a default, so partial documents deserialize.
///
/// ```
/// use holdem_rs::config::TableConfig;
///
/// let cfg = TableConfig::new(6).with_blinds(5, 10).with_seed(7);
/// assert!(cfg.validate().is_ok());
/// assert_eq!(cfg.seat_ids()[0], "P1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub num_players: usize,
    pub small_blind: u64,
    pub big_blind: u64,
    pub starting_stack: u64,
    /// Seat ids in seat order; `P1..Pn` when absent.
    pub player_ids: Option<Vec<String>>,
    /// Per-seat stacks overriding `starting_stack`.
    pub stacks: Option<Vec<u64>>,
    /// Shuffle seed. Unseeded tables draw one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_players: MIN_PLAYERS,
            small_blind: 10,
            big_blind: 20,
            starting_stack: 1000,
            player_ids: None,
            stacks: None,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn new(num_players: usize) -> Self {
        Self { num_players, ..Self::default() }
    }

    pub fn with_blinds(mut self, small_blind: u64, big_blind: u64) -> Self {
        self.small_blind = small_blind;
        self.big_blind = big_blind;
        self
    }

    pub fn with_starting_stack(mut self, stack: u64) -> Self {
        self.starting_stack = stack;
        self
    }

    pub fn with_player_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_stacks(mut self, stacks: Vec<u64>) -> Self {
        self.stacks = Some(stacks);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(ConfigError::PlayerCount(self.num_players));
        }
        if self.big_blind == 0 || self.small_blind > self.big_blind {
            return Err(ConfigError::InvalidBlinds { small: self.small_blind, big: self.big_blind });
        }
        if let Some(ids) = &self.player_ids {
            if ids.len() != self.num_players {
                return Err(ConfigError::PlayerIdCount { expected: self.num_players, got: ids.len() });
            }
            let mut seen = HashSet::new();
            if let Some(dup) = ids.iter().find(|id| !seen.insert(id.as_str())) {
                return Err(ConfigError::DuplicatePlayerId(dup.clone()));
            }
        }
        if let Some(stacks) = &self.stacks {
            if stacks.len() != self.num_players {
                return Err(ConfigError::StackCount { expected: self.num_players, got: stacks.len() });
            }
        }
        Ok(())
    }

    pub fn seat_ids(&self) -> Vec<String> {
        match &self.player_ids {
            Some(ids) => ids.clone(),
            None => (1..=self.num_players).map(|i| format!("P{i}")).collect(),
        }
    }

    pub fn seat_stacks(&self) -> Vec<u64> {
        match &self.stacks {
            Some(stacks) => stacks.clone(),
            None => vec![self.starting_stack; self.num_players],
        }
    }
}
