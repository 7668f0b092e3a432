// Engine API boundary. Drivers (the simulator, agents, tests) go through this
// trait instead of the concrete table so they can be swapped or mocked.

use crate::action::{ActionError, ActionKind, ActionRecord, LegalAction};
use crate::game::{Game, Winner};
use crate::state::GameState;

pub trait GameEngine {
    // Hand lifecycle
    fn start_hand(&mut self) -> Result<(), ActionError>;
    fn is_hand_running(&self) -> bool;

    // Player actions
    fn take_action(&mut self, kind: ActionKind, amount: u64) -> Result<ActionRecord, ActionError>;

    // Queries
    fn legal_actions(&self) -> Vec<LegalAction>;
    fn current_player_id(&self) -> Option<String>;
    fn state(&self, for_player: Option<&str>) -> GameState;
    fn winners(&self) -> Vec<Winner>;
}

impl GameEngine for Game {
    fn start_hand(&mut self) -> Result<(), ActionError> {
        Game::start_hand(self)
    }
    fn is_hand_running(&self) -> bool {
        Game::is_hand_running(self)
    }

    fn take_action(&mut self, kind: ActionKind, amount: u64) -> Result<ActionRecord, ActionError> {
        Game::take_action(self, kind, amount)
    }

    fn legal_actions(&self) -> Vec<LegalAction> {
        Game::legal_actions(self)
    }
    fn current_player_id(&self) -> Option<String> {
        Game::current_player_id(self).map(str::to_string)
    }
    fn state(&self, for_player: Option<&str>) -> GameState {
        Game::state(self, for_player)
    }
    fn winners(&self) -> Vec<Winner> {
        Game::winners(self).to_vec()
    }
}
