//! The hand state machine.
//!
//! A [`Game`] owns one table: seats, deck, board, the current betting round
//! and the hand's action trail. Callers start a hand, then feed the current
//! actor's decisions through [`Game::take_action`] until the phase reaches
//! [`Phase::HandOver`].

use crate::action::{ActionError, ActionKind, ActionRecord, LegalAction, ShowdownError};
use crate::cards::Card;
use crate::config::{ConfigError, TableConfig};
use crate::deck::{Deck, DeckError};
use crate::evaluator::Category;
use crate::hand::{Board, HoleCards};
use crate::player::PlayerAccount;
use crate::pot::{self, Pot};
use crate::rules::{self, BettingRound};
use crate::state::{self, GameState, PlayerView, PrivateState, PublicState, RaiseRange};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Phase {
    Waiting,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    HandOver,
}

impl Phase {
    /// Phases in which players act.
    pub fn is_betting(self) -> bool {
        matches!(self, Phase::Preflop | Phase::Flop | Phase::Turn | Phase::River)
    }

    pub const fn token(self) -> &'static str {
        match self {
            Phase::Waiting => "WAITING",
            Phase::Preflop => "PREFLOP",
            Phase::Flop => "FLOP",
            Phase::Turn => "TURN",
            Phase::River => "RIVER",
            Phase::Showdown => "SHOWDOWN",
            Phase::HandOver => "HAND_OVER",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

pub const FOLD_WIN_DESCRIPTION: &str = "All other players folded";

/// One player's winnings for the hand, summed over every pot they took.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Winner {
    pub player_id: String,
    pub seat: usize,
    pub amount: u64,
    /// `None` when the hand ended without a showdown.
    pub category: Option<Category>,
    pub description: String,
    pub best_five: Vec<Card>,
}

#[derive(Debug)]
pub struct Game {
    config: TableConfig,
    rng: ChaCha8Rng,
    deck: Deck,
    board: Board,
    players: Vec<PlayerAccount>,
    phase: Phase,
    hand_number: u64,
    dealer: usize,
    sb_seat: Option<usize>,
    bb_seat: Option<usize>,
    current: Option<usize>,
    round: BettingRound,
    pots: Vec<Pot>,
    winners: Vec<Winner>,
    history: Vec<ActionRecord>,
}

impl Game {
    /// ```
    /// use holdem_rs::config::TableConfig;
    /// use holdem_rs::game::{Game, Phase};
    ///
    /// let mut game = Game::new(TableConfig::new(3).with_seed(1)).unwrap();
    /// game.start_hand().unwrap();
    /// assert_eq!(game.phase(), Phase::Preflop);
    /// assert_eq!(game.pot_total(), 30);
    /// ```
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let players = config
            .seat_ids()
            .into_iter()
            .zip(config.seat_stacks())
            .enumerate()
            .map(|(seat, (id, stack))| PlayerAccount::new(id, seat, stack))
            .collect();
        Ok(Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            deck: Deck::standard(),
            board: Board::default(),
            players,
            phase: Phase::Waiting,
            hand_number: 0,
            dealer: 0,
            sb_seat: None,
            bb_seat: None,
            current: None,
            round: BettingRound::default(),
            pots: Vec::new(),
            winners: Vec::new(),
            history: Vec::new(),
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Hands started so far; the running hand's number.
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }

    pub fn dealer(&self) -> usize {
        self.dealer
    }

    pub fn small_blind_seat(&self) -> Option<usize> {
        self.sb_seat
    }

    pub fn big_blind_seat(&self) -> Option<usize> {
        self.bb_seat
    }

    /// Seat of the player to act, if anyone.
    pub fn current_seat(&self) -> Option<usize> {
        self.current
    }

    pub fn current_player_id(&self) -> Option<&str> {
        self.current.map(|s| self.players[s].id())
    }

    pub fn players(&self) -> &[PlayerAccount] {
        &self.players
    }

    pub fn player(&self, id: &str) -> Option<&PlayerAccount> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn seat_of(&self, id: &str) -> Option<usize> {
        self.player(id).map(|p| p.seat())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All chips committed this hand, collected or still in front of players.
    pub fn pot_total(&self) -> u64 {
        self.players.iter().map(|p| p.total_bet()).sum()
    }

    pub fn current_bet(&self) -> u64 {
        self.round.current_bet()
    }

    pub fn last_raise(&self) -> u64 {
        self.round.last_raise()
    }

    pub fn min_raise_total(&self) -> u64 {
        self.round.min_raise_total(self.config.big_blind)
    }

    /// Pots from the last showdown.
    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    /// Winners of the last finished hand; empty while a hand runs.
    pub fn winners(&self) -> &[Winner] {
        &self.winners
    }

    /// Actions of the current betting round.
    pub fn round_actions(&self) -> &[ActionRecord] {
        self.round.actions()
    }

    /// Every action of the current (or last) hand.
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    pub fn history_recent(&self, n: usize) -> &[ActionRecord] {
        &self.history[self.history.len().saturating_sub(n)..]
    }

    pub fn is_hand_running(&self) -> bool {
        self.phase.is_betting() || self.phase == Phase::Showdown
    }

    /// Deal a new hand: move the button, post blinds, deal hole cards.
    ///
    /// Fails without touching the table when a hand is running or fewer than
    /// two players have chips.
    pub fn start_hand(&mut self) -> Result<(), ActionError> {
        if self.is_hand_running() {
            return Err(ActionError::HandInProgress);
        }
        let funded = self.players.iter().filter(|p| p.stack() > 0).count();
        if funded < 2 {
            log::warn!("cannot start hand: only {funded} player(s) have chips");
            return Err(ActionError::NotEnoughPlayers { funded });
        }

        self.hand_number += 1;
        self.deck = Deck::standard();
        self.deck.shuffle_with(&mut self.rng);
        self.board.clear();
        self.pots.clear();
        self.winners.clear();
        self.history.clear();
        for p in &mut self.players {
            p.reset_for_new_hand();
        }
        self.move_button();

        let (sb, bb) = self.blind_seats().ok_or(ActionError::NotEnoughPlayers { funded })?;
        self.sb_seat = Some(sb);
        self.bb_seat = Some(bb);
        log::info!(
            "hand #{} starts: dealer seat {}, {} players",
            self.hand_number,
            self.dealer,
            funded
        );
        self.post_blind(sb, self.config.small_blind, "SB");
        self.post_blind(bb, self.config.big_blind, "BB");
        self.deal_hole_cards().map_err(ShowdownError::from)?;

        self.phase = Phase::Preflop;
        self.round = BettingRound::preflop(self.config.big_blind);
        let n = self.players.len();
        let players = &self.players;
        let first = rules::first_to_act_preflop(n, self.dealer, bb, funded == 2, |s| {
            players[s].is_in_hand()
        });
        match first {
            Some(seat) => self.resume_from(seat)?,
            None => self.end_betting_round()?,
        }
        Ok(())
    }

    /// Apply the current actor's decision. `amount` is the raise-to total for
    /// BET and RAISE and is ignored otherwise.
    ///
    /// Illegal actions are rejected and leave the table unchanged.
    pub fn take_action(&mut self, kind: ActionKind, amount: u64) -> Result<ActionRecord, ActionError> {
        if !self.phase.is_betting() {
            return Err(ActionError::NoHandInProgress);
        }
        let seat = self.current.ok_or(ActionError::NoHandInProgress)?;
        let record = self.apply(seat, kind, amount)?;
        log::debug!(
            "{} {}: {} -> {}{}",
            self.phase,
            record.player_id,
            record.kind,
            record.total,
            if record.all_in { " (all-in)" } else { "" }
        );
        self.round.record(record.clone());
        self.history.push(record.clone());
        self.advance(seat)?;
        Ok(record)
    }

    /// Legal actions for the player to act; empty when nobody is to act.
    pub fn legal_actions(&self) -> Vec<LegalAction> {
        self.current.map_or_else(Vec::new, |seat| self.legal_actions_at(seat))
    }

    /// Legal actions for `player_id`, empty unless it is their turn.
    pub fn legal_actions_for(&self, player_id: &str) -> Vec<LegalAction> {
        match self.seat_of(player_id) {
            Some(seat) if self.current == Some(seat) => self.legal_actions_at(seat),
            _ => Vec::new(),
        }
    }

    /// Public snapshot, plus the private view of `for_player` when given and seated.
    pub fn state(&self, for_player: Option<&str>) -> GameState {
        GameState {
            public: self.public_state(),
            private: for_player.and_then(|id| self.seat_of(id)).map(|seat| self.private_state(seat)),
        }
    }

    pub fn public_state(&self) -> PublicState {
        PublicState {
            phase: self.phase,
            hand_number: self.hand_number,
            pot: self.pot_total(),
            current_bet: self.round.current_bet(),
            last_raise: self.round.last_raise(),
            board: self.board.as_slice().to_vec(),
            dealer: self.dealer,
            small_blind_seat: self.sb_seat,
            big_blind_seat: self.bb_seat,
            current_player: self.current_player_id().map(str::to_string),
            players: self
                .players
                .iter()
                .map(|p| PlayerView {
                    id: p.id().to_string(),
                    seat: p.seat(),
                    stack: p.stack(),
                    current_bet: p.round_bet(),
                    total_bet: p.total_bet(),
                    status: p.status(),
                    last_action: p.last_action().map(str::to_string),
                })
                .collect(),
            winners: self.winners.clone(),
        }
    }

    fn private_state(&self, seat: usize) -> PrivateState {
        let p = &self.players[seat];
        let legal = if self.current == Some(seat) { self.legal_actions_at(seat) } else { Vec::new() };
        let raise_range = legal.iter().find_map(|a| match *a {
            LegalAction::Bet { min, max } | LegalAction::Raise { min, max } => Some(RaiseRange { min, max }),
            _ => None,
        });
        let current_bet = self.round.current_bet();
        let to_call = current_bet.saturating_sub(p.round_bet());
        let min_raise = self.min_raise_total();
        let pot_raises = raise_range
            .map(|range| state::pot_raise_suggestions(self.pot_total(), to_call, current_bet, min_raise, range))
            .unwrap_or_default();
        PrivateState {
            player_id: p.id().to_string(),
            hole_cards: p.hole().map(|h| h.as_array().to_vec()).unwrap_or_default(),
            legal_actions: legal.iter().map(LegalAction::kind).collect(),
            chips_to_call: to_call,
            min_raise,
            current_bet: p.round_bet(),
            raise_range,
            pot_raises,
        }
    }

    fn legal_actions_at(&self, seat: usize) -> Vec<LegalAction> {
        let p = &self.players[seat];
        if !self.phase.is_betting() || !p.can_act() {
            return Vec::new();
        }
        let big_blind = self.config.big_blind;
        let current_bet = self.round.current_bet();
        let to_call = current_bet.saturating_sub(p.round_bet());
        let max_total = p.stack() + p.round_bet();
        // A player who already acted may only call or fold until a full raise reopens.
        let open = !p.has_acted();

        let mut actions = vec![LegalAction::Fold];
        if to_call == 0 {
            actions.push(LegalAction::Check);
        } else {
            actions.push(LegalAction::Call { amount: to_call.min(p.stack()) });
        }
        if open && p.stack() > to_call {
            if current_bet == 0 {
                if p.stack() >= big_blind {
                    actions.push(LegalAction::Bet { min: big_blind, max: max_total });
                }
            } else {
                let min = self.round.min_raise_total(big_blind).min(max_total);
                actions.push(LegalAction::Raise { min, max: max_total });
            }
        }
        if p.stack() > 0 && (open || p.stack() <= to_call) {
            actions.push(LegalAction::AllIn { amount: max_total });
        }
        actions
    }

    /// Validate and apply one action for `seat`. Nothing changes on error.
    fn apply(&mut self, seat: usize, kind: ActionKind, amount: u64) -> Result<ActionRecord, ActionError> {
        let big_blind = self.config.big_blind;
        let current_bet = self.round.current_bet();
        let p = &self.players[seat];
        let (stack, round_bet, open) = (p.stack(), p.round_bet(), !p.has_acted());
        let to_call = current_bet.saturating_sub(round_bet);
        let max_total = stack + round_bet;

        let mut raise_increment = 0;
        let label = match kind {
            ActionKind::Fold => {
                self.players[seat].fold();
                "Fold".to_string()
            }
            ActionKind::Check => {
                if to_call > 0 {
                    return Err(ActionError::CannotCheck { to_call });
                }
                "Check".to_string()
            }
            ActionKind::Call => {
                if to_call == 0 {
                    return Err(ActionError::NothingToCall);
                }
                let paid = self.players[seat].commit(to_call);
                format!("Call {paid}")
            }
            ActionKind::Bet => {
                if current_bet > 0 {
                    return Err(ActionError::BetNotAllowed);
                }
                if !open {
                    return Err(ActionError::ActionNotReopened);
                }
                if amount < big_blind {
                    return Err(ActionError::AmountTooSmall { min: big_blind, got: amount });
                }
                if amount > max_total {
                    return Err(ActionError::AmountTooLarge { max: max_total, got: amount });
                }
                self.players[seat].commit(amount - round_bet);
                self.round.open_bet(amount);
                raise_increment = amount;
                self.reopen_for_others(seat);
                format!("Bet {amount}")
            }
            ActionKind::Raise => {
                if current_bet == 0 {
                    return Err(ActionError::RaiseNotAllowed);
                }
                if !open {
                    return Err(ActionError::ActionNotReopened);
                }
                if amount > max_total {
                    return Err(ActionError::AmountTooLarge { max: max_total, got: amount });
                }
                if amount <= current_bet {
                    return Err(ActionError::TargetTooLow { current: current_bet, target: amount });
                }
                let all_in = amount == max_total;
                let min = self.round.min_raise_total(big_blind);
                if amount < min && !all_in {
                    return Err(ActionError::AmountTooSmall { min, got: amount });
                }
                self.players[seat].commit(amount - round_bet);
                raise_increment = amount - current_bet;
                if self.round.raise_to(amount, all_in, big_blind) {
                    self.reopen_for_others(seat);
                }
                format!("Raise to {amount}")
            }
            ActionKind::AllIn => {
                if stack == 0 {
                    return Err(ActionError::NoChips);
                }
                if max_total > current_bet && !open {
                    return Err(ActionError::ActionNotReopened);
                }
                self.players[seat].commit(stack);
                if max_total > current_bet {
                    raise_increment = max_total - current_bet;
                    if self.round.raise_to(max_total, true, big_blind) {
                        self.reopen_for_others(seat);
                    }
                }
                format!("All-in {max_total}")
            }
        };

        let phase = self.phase;
        let p = &mut self.players[seat];
        p.has_acted = true;
        p.last_action = Some(label);
        Ok(ActionRecord {
            player_id: p.id().to_string(),
            seat,
            kind,
            total: p.round_bet(),
            raise_increment,
            all_in: p.stack() == 0 && p.is_in_hand(),
            phase,
        })
    }

    fn reopen_for_others(&mut self, seat: usize) {
        for p in self.players.iter_mut().filter(|p| p.seat() != seat && p.can_act()) {
            p.has_acted = false;
        }
    }

    fn in_hand_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_in_hand()).count()
    }

    fn needs_to_act(&self, seat: usize) -> bool {
        let p = &self.players[seat];
        p.can_act() && (!p.has_acted() || p.round_bet() < self.round.current_bet())
    }

    /// Nobody owes an action, or the only player left with chips has matched
    /// the bet and has nobody to bet against.
    fn round_complete(&self) -> bool {
        if !(0..self.players.len()).any(|s| self.needs_to_act(s)) {
            return true;
        }
        let bet = self.round.current_bet();
        let mut active = self.players.iter().filter(|p| p.can_act());
        match (active.next(), active.next()) {
            (Some(only), None) => only.round_bet() >= bet,
            _ => false,
        }
    }

    fn next_actor(&self, from: usize, inclusive: bool) -> Option<usize> {
        if self.round_complete() {
            return None;
        }
        let n = self.players.len();
        let skip = usize::from(!inclusive);
        (0..n).map(|i| (from + skip + i) % n).find(|&s| self.needs_to_act(s))
    }

    fn resume_from(&mut self, seat: usize) -> Result<(), ShowdownError> {
        self.current = self.next_actor(seat, true);
        if self.current.is_none() {
            self.end_betting_round()?;
        }
        Ok(())
    }

    fn advance(&mut self, from: usize) -> Result<(), ShowdownError> {
        if self.in_hand_count() < 2 {
            self.award_uncontested();
            return Ok(());
        }
        match self.next_actor(from, false) {
            Some(seat) => {
                self.current = Some(seat);
                Ok(())
            }
            None => self.end_betting_round(),
        }
    }

    fn end_betting_round(&mut self) -> Result<(), ShowdownError> {
        self.current = None;
        let with_chips = self.players.iter().filter(|p| p.is_in_hand() && p.stack() > 0).count();
        if with_chips <= 1 {
            self.run_out_board()?;
            return self.showdown();
        }
        let (next, count) = match self.phase {
            Phase::Preflop => (Phase::Flop, 3),
            Phase::Flop => (Phase::Turn, 1),
            Phase::Turn => (Phase::River, 1),
            _ => return self.showdown(),
        };
        self.deal_street(next, count)?;
        self.open_postflop_round()
    }

    fn open_postflop_round(&mut self) -> Result<(), ShowdownError> {
        for p in &mut self.players {
            p.reset_for_new_round();
        }
        self.round = BettingRound::postflop();
        let n = self.players.len();
        let players = &self.players;
        let first = rules::first_to_act_postflop(n, self.dealer, |s| players[s].is_in_hand());
        match first {
            Some(seat) => self.resume_from(seat),
            None => self.showdown(),
        }
    }

    fn deal_street(&mut self, phase: Phase, count: usize) -> Result<(), DeckError> {
        self.deck.burn()?;
        let cards = self.deck.deal(count)?;
        self.board.extend(cards);
        self.phase = phase;
        let shown: Vec<String> = self.board.as_slice().iter().map(|c| c.to_string()).collect();
        log::debug!("{phase}: [{}]", shown.join(" "));
        Ok(())
    }

    fn run_out_board(&mut self) -> Result<(), DeckError> {
        while !self.board.is_complete() {
            let (phase, count) = match self.board.len() {
                0 => (Phase::Flop, 3),
                3 => (Phase::Turn, 1),
                _ => (Phase::River, 1),
            };
            self.deal_street(phase, count)?;
        }
        Ok(())
    }

    fn showdown(&mut self) -> Result<(), ShowdownError> {
        self.phase = Phase::Showdown;
        self.current = None;
        self.pots = pot::compute_side_pots(&self.players);
        for (i, pot) in self.pots.iter().enumerate() {
            log::debug!("pot {i}: {} chips, eligible seats {:?}", pot.amount, pot.eligible);
        }
        let awards = pot::settle(&self.pots, &self.players, self.board.as_slice(), self.dealer)?;

        let mut winners: Vec<Winner> = Vec::new();
        for award in awards {
            self.players[award.seat].award(award.amount);
            match winners.iter_mut().find(|w| w.seat == award.seat) {
                Some(w) => w.amount += award.amount,
                None => winners.push(Winner {
                    player_id: self.players[award.seat].id().to_string(),
                    seat: award.seat,
                    amount: award.amount,
                    category: Some(award.evaluation.category),
                    description: award.evaluation.description(),
                    best_five: award.evaluation.best_five.to_vec(),
                }),
            }
        }
        let n = self.players.len();
        let first = (self.dealer + 1) % n;
        winners.sort_by_key(|w| (w.seat + n - first) % n);
        for w in &winners {
            self.players[w.seat].last_action = Some(format!("Win {}", w.amount));
            log::info!("hand #{}: {} wins {} with {}", self.hand_number, w.player_id, w.amount, w.description);
        }
        self.winners = winners;
        self.phase = Phase::HandOver;
        Ok(())
    }

    fn award_uncontested(&mut self) {
        self.current = None;
        let total = self.pot_total();
        if let Some(seat) = self.players.iter().position(|p| p.is_in_hand()) {
            let p = &mut self.players[seat];
            p.award(total);
            p.last_action = Some(format!("Win {total}"));
            log::info!("hand #{}: {} wins {} uncontested", self.hand_number, p.id(), total);
            self.pots = vec![Pot { amount: total, eligible: vec![seat] }];
            self.winners = vec![Winner {
                player_id: p.id().to_string(),
                seat,
                amount: total,
                category: None,
                description: FOLD_WIN_DESCRIPTION.to_string(),
                best_five: Vec::new(),
            }];
        }
        self.phase = Phase::HandOver;
    }

    /// First hand: first funded seat from seat 0. Afterwards: next funded seat.
    fn move_button(&mut self) {
        let n = self.players.len();
        let start = if self.hand_number == 1 { 0 } else { self.dealer + 1 };
        let players = &self.players;
        if let Some(seat) = (0..n).map(|i| (start + i) % n).find(|&s| players[s].is_in_hand()) {
            self.dealer = seat;
        }
    }

    fn blind_seats(&self) -> Option<(usize, usize)> {
        let funded: Vec<usize> = self.players.iter().filter(|p| p.is_in_hand()).map(|p| p.seat()).collect();
        let dealer_index = funded.iter().position(|&s| s == self.dealer)?;
        let (sb, bb) = rules::blind_positions(funded.len(), dealer_index)?;
        Some((funded[sb], funded[bb]))
    }

    fn post_blind(&mut self, seat: usize, amount: u64, label: &str) {
        let p = &mut self.players[seat];
        let paid = p.commit(amount);
        p.last_action = Some(format!("{label} {paid}"));
        log::debug!("{} posts {label} {paid}{}", p.id(), if p.stack() == 0 { " (all-in)" } else { "" });
    }

    /// One card at a time around the table, starting left of the button.
    fn deal_hole_cards(&mut self) -> Result<(), DeckError> {
        let n = self.players.len();
        let order: Vec<usize> = (1..=n)
            .map(|i| (self.dealer + i) % n)
            .filter(|&s| self.players[s].is_in_hand())
            .collect();
        let first = self.deck.deal(order.len())?;
        let second = self.deck.deal(order.len())?;
        for (i, &seat) in order.iter().enumerate() {
            if let Ok(hole) = HoleCards::try_new(first[i], second[i]) {
                self.players[seat].deal(hole);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerStatus;

    fn mk_game(n: usize) -> Game {
        Game::new(TableConfig::new(n).with_seed(42)).unwrap()
    }

    #[test]
    fn waiting_table_rejects_actions() {
        let mut g = mk_game(2);
        assert_eq!(g.phase(), Phase::Waiting);
        assert_eq!(g.take_action(ActionKind::Check, 0), Err(ActionError::NoHandInProgress));
        assert!(g.legal_actions().is_empty());
    }

    #[test]
    fn cannot_start_twice() {
        let mut g = mk_game(3);
        g.start_hand().unwrap();
        assert_eq!(g.start_hand(), Err(ActionError::HandInProgress));
    }

    #[test]
    fn three_handed_blinds_and_utg() {
        let mut g = mk_game(3);
        g.start_hand().unwrap();
        assert_eq!(g.dealer(), 0);
        assert_eq!((g.small_blind_seat(), g.big_blind_seat()), (Some(1), Some(2)));
        assert_eq!(g.current_seat(), Some(0));
        assert_eq!(g.deck.remaining(), 52 - 6);
        assert!(g.players().iter().all(|p| p.hole().is_some()));
    }

    #[test]
    fn folding_around_awards_the_big_blind() {
        let mut g = mk_game(3);
        g.start_hand().unwrap();
        g.take_action(ActionKind::Fold, 0).unwrap();
        g.take_action(ActionKind::Fold, 0).unwrap();
        assert_eq!(g.phase(), Phase::HandOver);
        assert_eq!(g.winners().len(), 1);
        assert_eq!(g.winners()[0].seat, 2);
        assert_eq!(g.winners()[0].amount, 30);
        assert_eq!(g.winners()[0].description, FOLD_WIN_DESCRIPTION);
        assert_eq!(g.players()[2].stack(), 1010);
        assert!(g.players()[0].hole().is_none());
    }

    #[test]
    fn rejected_action_changes_nothing() {
        let mut g = mk_game(3);
        g.start_hand().unwrap();
        let before = g.public_state();
        assert_eq!(g.take_action(ActionKind::Check, 0), Err(ActionError::CannotCheck { to_call: 20 }));
        assert_eq!(
            g.take_action(ActionKind::Raise, 30),
            Err(ActionError::AmountTooSmall { min: 40, got: 30 })
        );
        assert_eq!(
            g.take_action(ActionKind::Raise, 5000),
            Err(ActionError::AmountTooLarge { max: 1000, got: 5000 })
        );
        assert_eq!(g.take_action(ActionKind::Bet, 40), Err(ActionError::BetNotAllowed));
        assert_eq!(g.public_state(), before);
        assert!(g.history().is_empty());
    }

    #[test]
    fn check_down_reaches_showdown_with_full_board() {
        let mut g = mk_game(2);
        g.start_hand().unwrap();
        g.take_action(ActionKind::Call, 0).unwrap();
        g.take_action(ActionKind::Check, 0).unwrap();
        for _ in 0..3 {
            assert!(g.phase().is_betting());
            g.take_action(ActionKind::Check, 0).unwrap();
            g.take_action(ActionKind::Check, 0).unwrap();
        }
        assert_eq!(g.phase(), Phase::HandOver);
        assert_eq!(g.board().len(), 5);
        // 4 hole cards, 3 burns, 5 board cards
        assert_eq!(g.deck.dealt().len(), 12);
        let total: u64 = g.players().iter().map(|p| p.stack()).sum();
        assert_eq!(total, 2000);
        assert!(!g.winners().is_empty());
    }

    #[test]
    fn all_in_and_call_runs_out_the_board() {
        let mut g = mk_game(2);
        g.start_hand().unwrap();
        g.take_action(ActionKind::AllIn, 0).unwrap();
        assert!(g.legal_actions().iter().all(|a| !matches!(a, LegalAction::Raise { .. })));
        g.take_action(ActionKind::Call, 0).unwrap();
        assert_eq!(g.phase(), Phase::HandOver);
        assert_eq!(g.board().len(), 5);
        let total: u64 = g.players().iter().map(|p| p.stack()).sum();
        assert_eq!(total, 2000);
    }

    #[test]
    fn short_blind_poster_is_all_in() {
        let cfg = TableConfig::new(3).with_stacks(vec![1000, 1000, 15]).with_seed(3);
        let mut g = Game::new(cfg).unwrap();
        g.start_hand().unwrap();
        assert_eq!(g.players()[2].status(), PlayerStatus::AllIn);
        assert_eq!(g.players()[2].round_bet(), 15);
        assert_eq!(g.current_bet(), 20);
    }

    #[test]
    fn busted_players_are_skipped_by_the_button() {
        let cfg = TableConfig::new(3).with_stacks(vec![0, 500, 500]).with_seed(5);
        let mut g = Game::new(cfg).unwrap();
        g.start_hand().unwrap();
        assert_eq!(g.dealer(), 1);
        assert_eq!(g.players()[0].status(), PlayerStatus::Out);
        assert!(g.players()[0].hole().is_none());
        // heads-up between seats 1 and 2: dealer posts the small blind and acts first
        assert_eq!(g.small_blind_seat(), Some(1));
        assert_eq!(g.current_seat(), Some(1));
    }

    #[test]
    fn one_funded_player_cannot_start() {
        let cfg = TableConfig::new(2).with_stacks(vec![0, 500]);
        let mut g = Game::new(cfg).unwrap();
        assert_eq!(g.start_hand(), Err(ActionError::NotEnoughPlayers { funded: 1 }));
        assert_eq!(g.hand_number(), 0);
    }
}
