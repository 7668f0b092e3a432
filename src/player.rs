use crate::hand::HoleCards;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum PlayerStatus {
    Active,
    Folded,
    AllIn,
    /// No chips at hand start; sits the hand out.
    Out,
}

/// A seated player's chips and per-hand state.
///
/// `round_bet` never exceeds `total_bet`; both reset when a new hand starts.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct PlayerAccount {
    pub(crate) id: String,
    pub(crate) seat: usize,
    pub(crate) stack: u64,
    pub(crate) round_bet: u64,
    pub(crate) total_bet: u64,
    pub(crate) status: PlayerStatus,
    pub(crate) hole: Option<HoleCards>,
    pub(crate) has_acted: bool,
    pub(crate) last_action: Option<String>,
}

impl PlayerAccount {
    pub fn new(id: impl Into<String>, seat: usize, stack: u64) -> Self {
        Self {
            id: id.into(),
            seat,
            stack,
            round_bet: 0,
            total_bet: 0,
            status: if stack > 0 { PlayerStatus::Active } else { PlayerStatus::Out },
            hole: None,
            has_acted: false,
            last_action: None,
        }
    }

    /// Returns the player's id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the player's seat index
    pub fn seat(&self) -> usize {
        self.seat
    }

    /// Returns the chips not yet committed
    pub fn stack(&self) -> u64 {
        self.stack
    }

    /// Returns the chips committed in the current betting round
    pub fn round_bet(&self) -> u64 {
        self.round_bet
    }

    /// Returns the chips committed over the whole hand
    pub fn total_bet(&self) -> u64 {
        self.total_bet
    }

    /// Returns the player's status
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Returns the player's hole cards
    pub fn hole(&self) -> Option<HoleCards> {
        self.hole
    }

    /// Returns whether the player has acted since action was last reopened
    pub fn has_acted(&self) -> bool {
        self.has_acted
    }

    /// Returns the player's last action as a string
    pub fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }

    /// Still contesting the pot.
    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    /// Can still make betting decisions.
    pub fn can_act(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// Move up to `amount` chips from the stack into the current bet. Returns
    /// the chips actually moved; emptying the stack makes the player all-in.
    pub fn commit(&mut self, amount: u64) -> u64 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.round_bet += paid;
        self.total_bet += paid;
        if self.stack == 0 && self.status == PlayerStatus::Active {
            self.status = PlayerStatus::AllIn;
        }
        paid
    }

    pub fn deal(&mut self, hole: HoleCards) {
        self.hole = Some(hole);
    }

    /// Fold and muck.
    pub fn fold(&mut self) {
        self.status = PlayerStatus::Folded;
        self.hole = None;
    }

    pub fn award(&mut self, amount: u64) {
        self.stack += amount;
    }

    pub(crate) fn reset_for_new_hand(&mut self) {
        self.round_bet = 0;
        self.total_bet = 0;
        self.hole = None;
        self.has_acted = false;
        self.last_action = None;
        self.status = if self.stack > 0 { PlayerStatus::Active } else { PlayerStatus::Out };
    }

    pub(crate) fn reset_for_new_round(&mut self) {
        self.round_bet = 0;
        self.has_acted = false;
    }
}
