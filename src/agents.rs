//! Agents: pluggable decision makers for seated players.
//!
//! An [`Agent`] sees the same [`GameState`] a remote player would and answers
//! with a [`Decision`]. [`AgentTable`] maps player ids to agents and plays hands
//! through the [`GameEngine`] boundary, so drivers never touch table internals.

use crate::action::{ActionError, ActionKind};
use crate::engine::GameEngine;
use crate::game::Winner;
use crate::state::GameState;
use core::fmt;

mod random;

pub use random::{RandomAgent, RandomProfile};

/// One answer to "your turn". `amount` is the raise-to total for BET and RAISE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub kind: ActionKind,
    pub amount: u64,
}

impl Decision {
    pub const fn new(kind: ActionKind, amount: u64) -> Self {
        Self { kind, amount }
    }

    pub const fn fold() -> Self {
        Self::new(ActionKind::Fold, 0)
    }

    pub const fn check() -> Self {
        Self::new(ActionKind::Check, 0)
    }

    pub const fn call() -> Self {
        Self::new(ActionKind::Call, 0)
    }
}

/// A seat controller.
pub trait Agent {
    /// Called with the agent's own view when it is their turn.
    fn act(&mut self, state: &GameState) -> Decision;

    /// Called once per agent after every finished hand.
    fn on_hand_end(&mut self, _state: &GameState) {}
}

/// Always checks when it can and calls otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct CallingAgent;

impl Agent for CallingAgent {
    fn act(&mut self, state: &GameState) -> Decision {
        let facing = state.private.as_ref().is_some_and(|p| p.chips_to_call > 0);
        if facing {
            Decision::call()
        } else {
            Decision::check()
        }
    }
}

/// Agents keyed by player id.
#[derive(Default)]
pub struct AgentTable {
    seats: Vec<(String, Box<dyn Agent>)>,
}

impl fmt::Debug for AgentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<&str> = self.seats.iter().map(|(id, _)| id.as_str()).collect();
        write!(f, "AgentTable({})", ids.join(","))
    }
}

impl AgentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `agent` to `player_id`, replacing any previous one.
    pub fn set_agent(&mut self, player_id: impl Into<String>, agent: Box<dyn Agent>) {
        let player_id = player_id.into();
        match self.seats.iter_mut().find(|(id, _)| *id == player_id) {
            Some(slot) => slot.1 = agent,
            None => self.seats.push((player_id, agent)),
        }
    }

    pub fn has_agent(&self, player_id: &str) -> bool {
        self.seats.iter().any(|(id, _)| id == player_id)
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    fn agent_mut(&mut self, player_id: &str) -> Option<&mut Box<dyn Agent>> {
        self.seats.iter_mut().find(|(id, _)| id == player_id).map(|(_, a)| a)
    }

    /// Start a hand and prompt agents until it is over. Returns the winners.
    ///
    /// A rejected decision is replaced with CHECK, or FOLD when checking is not
    /// legal. Fails with `UnknownPlayer` when the player to act has no agent.
    pub fn play_hand(&mut self, engine: &mut dyn GameEngine) -> Result<Vec<Winner>, ActionError> {
        engine.start_hand()?;
        while engine.is_hand_running() {
            let Some(player_id) = engine.current_player_id() else {
                break;
            };
            let state = engine.state(Some(&player_id));
            let agent = self
                .agent_mut(&player_id)
                .ok_or_else(|| ActionError::UnknownPlayer(player_id.clone()))?;
            let decision = agent.act(&state);

            if let Err(err) = engine.take_action(decision.kind, decision.amount) {
                let can_check = state
                    .private
                    .as_ref()
                    .is_some_and(|p| p.legal_actions.contains(&ActionKind::Check));
                let fallback = if can_check { ActionKind::Check } else { ActionKind::Fold };
                log::warn!(
                    "{player_id}: {} {} rejected ({err}); playing {fallback}",
                    decision.kind,
                    decision.amount
                );
                engine.take_action(fallback, 0)?;
            }
        }

        for (id, agent) in &mut self.seats {
            agent.on_hand_end(&engine.state(Some(id.as_str())));
        }
        Ok(engine.winners())
    }
}
