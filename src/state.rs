//! Serializable views of a table: one public, one per player.

use crate::action::ActionKind;
use crate::cards::Card;
use crate::game::{Phase, Winner};
use crate::player::PlayerStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: String,
    pub seat: usize,
    pub stack: u64,
    /// Chips in front of the player this betting round.
    pub current_bet: u64,
    /// Chips committed over the whole hand.
    pub total_bet: u64,
    pub status: PlayerStatus,
    pub last_action: Option<String>,
}

/// What everyone at the table can see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    pub phase: Phase,
    pub hand_number: u64,
    pub pot: u64,
    pub current_bet: u64,
    pub last_raise: u64,
    pub board: Vec<Card>,
    pub dealer: usize,
    pub small_blind_seat: Option<usize>,
    pub big_blind_seat: Option<usize>,
    pub current_player: Option<String>,
    pub players: Vec<PlayerView>,
    /// Filled in once the hand is over.
    pub winners: Vec<Winner>,
}

/// Bounds on a bet or raise-to amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaiseRange {
    pub min: u64,
    pub max: u64,
}

/// A pot-relative sizing hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaiseSuggestion {
    pub name: String,
    /// Raise-to amount, clamped into the legal range.
    pub total: u64,
    /// Whether the unclamped amount was already legal.
    pub valid: bool,
}

/// What only one player can see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateState {
    pub player_id: String,
    pub hole_cards: Vec<Card>,
    /// Empty unless it is this player's turn.
    pub legal_actions: Vec<ActionKind>,
    pub chips_to_call: u64,
    pub min_raise: u64,
    /// The player's own bet this round.
    pub current_bet: u64,
    pub raise_range: Option<RaiseRange>,
    pub pot_raises: Vec<RaiseSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub public: PublicState,
    pub private: Option<PrivateState>,
}

impl GameState {
    /// Whether `player_id` is the one to act.
    pub fn is_turn_of(&self, player_id: &str) -> bool {
        self.public.current_player.as_deref() == Some(player_id)
    }
}

const POT_FRACTIONS: [(&str, u64, u64); 4] =
    [("1/3 Pot", 1, 3), ("1/2 Pot", 1, 2), ("Pot", 1, 1), ("2x Pot", 2, 1)];

/// Raise-to amounts of a third, half, one and two pots.
///
/// The pot counts the caller's pending call. Each total is clamped into
/// `range`, and `valid` records whether clamping was needed against
/// `[min_raise, range.max]`.
///
/// ```
/// use holdem_rs::state::{pot_raise_suggestions, RaiseRange};
///
/// let hints = pot_raise_suggestions(60, 20, 40, 80, RaiseRange { min: 80, max: 1000 });
/// assert_eq!(hints[2].total, 120);
/// assert!(!hints[0].valid);
/// assert_eq!(hints[0].total, 80);
/// ```
pub fn pot_raise_suggestions(
    pot: u64,
    to_call: u64,
    current_bet: u64,
    min_raise: u64,
    range: RaiseRange,
) -> Vec<RaiseSuggestion> {
    let effective = pot + to_call;
    POT_FRACTIONS
        .iter()
        .map(|&(name, num, den)| {
            let raw = current_bet + effective * num / den;
            RaiseSuggestion {
                name: name.to_string(),
                total: raw.max(range.min).min(range.max),
                valid: (min_raise..=range.max).contains(&raw),
            }
        })
        .collect()
}
