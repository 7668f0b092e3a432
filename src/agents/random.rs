use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Agent, Decision};
use crate::action::ActionKind;
use crate::state::GameState;

/// Knobs for [`RandomAgent`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RandomProfile {
    /// Chance of folding when facing a bet.
    pub fold_probability: f64,
    /// Chance of betting or raising when allowed.
    pub raise_probability: f64,
    /// Chance of shoving when neither bet nor raise is open but all-in is.
    pub all_in_probability: f64,
    pub rng_seed: Option<u64>,
}

impl RandomProfile {
    /// Set a deterministic RNG seed for reproducible decisions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_probabilities(mut self, fold: f64, raise: f64) -> Self {
        self.fold_probability = fold.clamp(0.0, 1.0);
        self.raise_probability = raise.clamp(0.0, 1.0);
        self
    }
}

impl Default for RandomProfile {
    fn default() -> Self {
        Self { fold_probability: 0.1, raise_probability: 0.3, all_in_probability: 0.05, rng_seed: None }
    }
}

/// Plays uniformly among a few coarse choices. Only ever picks listed actions,
/// and sizes bets from the pot hints or the legal range.
#[derive(Debug)]
pub struct RandomAgent {
    profile: RandomProfile,
    rng: ChaCha8Rng,
}

impl RandomAgent {
    pub fn new(profile: RandomProfile) -> Self {
        let rng = match profile.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self { profile, rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomProfile::default().with_seed(seed))
    }

    pub fn profile(&self) -> &RandomProfile {
        &self.profile
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new(RandomProfile::default())
    }
}

impl Agent for RandomAgent {
    fn act(&mut self, state: &GameState) -> Decision {
        let Some(private) = state.private.as_ref() else {
            return Decision::fold();
        };
        let legal = &private.legal_actions;
        let can = |k: ActionKind| legal.contains(&k);

        if private.chips_to_call > 0 && self.rng.random_bool(self.profile.fold_probability) {
            return Decision::fold();
        }

        let sizing = if can(ActionKind::Bet) {
            Some(ActionKind::Bet)
        } else if can(ActionKind::Raise) {
            Some(ActionKind::Raise)
        } else {
            None
        };
        if let (Some(kind), Some(range)) = (sizing, private.raise_range) {
            if self.rng.random_bool(self.profile.raise_probability) {
                let hints: Vec<u64> =
                    private.pot_raises.iter().filter(|h| h.valid).map(|h| h.total).collect();
                let amount = if !hints.is_empty() && self.rng.random_bool(0.5) {
                    hints[self.rng.random_range(0..hints.len())]
                } else {
                    self.rng.random_range(range.min..=range.max)
                };
                return Decision::new(kind, amount);
            }
        } else if can(ActionKind::AllIn) && self.rng.random_bool(self.profile.all_in_probability) {
            return Decision::new(ActionKind::AllIn, 0);
        }

        if can(ActionKind::Check) {
            Decision::check()
        } else if can(ActionKind::Call) {
            Decision::call()
        } else {
            Decision::fold()
        }
    }
}
