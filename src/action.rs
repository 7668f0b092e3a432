//! Action vocabulary shared by the engine, snapshots and agents.

use crate::deck::DeckError;
use crate::evaluator::EvalError;
use crate::game::Phase;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six things a player can do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl ActionKind {
    pub const ALL: [ActionKind; 6] = [
        ActionKind::Fold,
        ActionKind::Check,
        ActionKind::Call,
        ActionKind::Bet,
        ActionKind::Raise,
        ActionKind::AllIn,
    ];

    pub const fn token(self) -> &'static str {
        match self {
            ActionKind::Fold => "FOLD",
            ActionKind::Check => "CHECK",
            ActionKind::Call => "CALL",
            ActionKind::Bet => "BET",
            ActionKind::Raise => "RAISE",
            ActionKind::AllIn => "ALL_IN",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown action: '{0}'")]
pub struct ActionParseError(pub String);

impl FromStr for ActionKind {
    type Err = ActionParseError;

    /// Tokens are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|k| k.token() == s)
            .ok_or_else(|| ActionParseError(s.to_string()))
    }
}

/// A legal move for the player to act, with its amount bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegalAction {
    Fold,
    Check,
    /// Chips the call costs, capped at the stack.
    Call { amount: u64 },
    /// Bounds on the total bet.
    Bet { min: u64, max: u64 },
    /// Bounds on the total raise-to amount.
    Raise { min: u64, max: u64 },
    /// Total round bet after shoving.
    AllIn { amount: u64 },
}

impl LegalAction {
    pub const fn kind(&self) -> ActionKind {
        match self {
            LegalAction::Fold => ActionKind::Fold,
            LegalAction::Check => ActionKind::Check,
            LegalAction::Call { .. } => ActionKind::Call,
            LegalAction::Bet { .. } => ActionKind::Bet,
            LegalAction::Raise { .. } => ActionKind::Raise,
            LegalAction::AllIn { .. } => ActionKind::AllIn,
        }
    }
}

/// One applied action, as kept in the round log and the hand trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ActionRecord {
    pub player_id: String,
    pub seat: usize,
    pub kind: ActionKind,
    /// The player's round bet after the action.
    pub total: u64,
    /// How far the action lifted the current bet; 0 for folds, checks and calls.
    pub raise_increment: u64,
    pub all_in: bool,
    pub phase: Phase,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
    #[error("hand evaluation failed: {0}")]
    Evaluation(#[from] EvalError),
}

/// Rejections from the engine. The table is unchanged whenever one is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("no hand in progress")]
    NoHandInProgress,
    #[error("a hand is already in progress")]
    HandInProgress,
    #[error("not enough players with chips: {funded}")]
    NotEnoughPlayers { funded: usize },
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
    #[error("cannot check facing a bet of {to_call}")]
    CannotCheck { to_call: u64 },
    #[error("nothing to call")]
    NothingToCall,
    #[error("betting is not allowed when facing a bet")]
    BetNotAllowed,
    #[error("raising is not allowed without a bet")]
    RaiseNotAllowed,
    #[error("action was not reopened; only call or fold")]
    ActionNotReopened,
    #[error("amount too small: min {min}, got {got}")]
    AmountTooSmall { min: u64, got: u64 },
    #[error("amount too large: max {max}, got {got}")]
    AmountTooLarge { max: u64, got: u64 },
    #[error("target must exceed current bet: current {current}, target {target}")]
    TargetTooLow { current: u64, target: u64 },
    #[error("player has no chips")]
    NoChips,
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}
