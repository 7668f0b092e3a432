//! Betting law: blind placement, turn order, minimum raises and the
//! short all-in reopen rule.
//!
//! Seat functions work on a ring of `seat_count` seats and take an `in_hand`
//! predicate, so they can be checked without a table.

use crate::action::ActionRecord;

/// Small- and big-blind positions within the ring of funded seats.
///
/// Heads-up the dealer posts the small blind; otherwise the two seats after
/// the dealer post. Returns `None` with fewer than two seats.
///
/// ```
/// use holdem_rs::rules::blind_positions;
///
/// assert_eq!(blind_positions(2, 1), Some((1, 0)));
/// assert_eq!(blind_positions(4, 3), Some((0, 1)));
/// ```
pub fn blind_positions(active_count: usize, dealer_index: usize) -> Option<(usize, usize)> {
    if active_count < 2 {
        return None;
    }
    if active_count == 2 {
        return Some((dealer_index, (dealer_index + 1) % 2));
    }
    Some(((dealer_index + 1) % active_count, (dealer_index + 2) % active_count))
}

/// First seat strictly after `from`, going clockwise, that satisfies `pred`.
/// `from` itself is checked last.
pub fn next_seat_where(
    seat_count: usize,
    from: usize,
    pred: impl Fn(usize) -> bool,
) -> Option<usize> {
    (1..=seat_count).map(|step| (from + step) % seat_count).find(|&seat| pred(seat))
}

/// Heads-up the dealer opens preflop; otherwise the first in-hand seat after
/// the big blind does.
pub fn first_to_act_preflop(
    seat_count: usize,
    dealer: usize,
    big_blind: usize,
    heads_up: bool,
    in_hand: impl Fn(usize) -> bool,
) -> Option<usize> {
    if heads_up && in_hand(dealer) {
        return Some(dealer);
    }
    next_seat_where(seat_count, big_blind, in_hand)
}

/// Postflop action starts with the first in-hand seat left of the dealer.
pub fn first_to_act_postflop(
    seat_count: usize,
    dealer: usize,
    in_hand: impl Fn(usize) -> bool,
) -> Option<usize> {
    next_seat_where(seat_count, dealer, in_hand)
}

/// Smallest legal full raise-to amount.
pub fn min_raise_total(current_bet: u64, last_raise: u64, big_blind: u64) -> u64 {
    current_bet + last_raise.max(big_blind)
}

/// Outcome of [`reopens_action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReopenDecision {
    /// Whether players who already acted get to act again.
    pub reopens: bool,
    /// Running total of consecutive short all-in increments after this action.
    pub short_all_in_sum: u64,
    /// Raise increment that sizes the next minimum raise.
    pub last_raise: u64,
}

/// Decide whether a raise reopens betting for players who already acted.
///
/// A full raise (at least `max(last_raise, big_blind)`) always reopens. A
/// short all-in only reopens once the short all-ins since the last full raise
/// add up to that threshold. A short raise that is not all-in never reopens;
/// the engine rejects it before asking.
///
/// ```
/// use holdem_rs::rules::reopens_action;
///
/// // Bet 100, then a short all-in raise of 50 does not reopen...
/// let first = reopens_action(50, true, 100, 20, 0);
/// assert!(!first.reopens);
/// // ...but a second one of 60 brings the sum to 110 and does.
/// let second = reopens_action(60, true, 100, 20, first.short_all_in_sum);
/// assert!(second.reopens);
/// assert_eq!(second.last_raise, 110);
/// ```
pub fn reopens_action(
    raise_increment: u64,
    is_all_in: bool,
    last_raise: u64,
    big_blind: u64,
    short_all_in_sum: u64,
) -> ReopenDecision {
    let threshold = last_raise.max(big_blind);
    if raise_increment >= threshold {
        return ReopenDecision { reopens: true, short_all_in_sum: 0, last_raise: raise_increment };
    }
    if !is_all_in {
        return ReopenDecision { reopens: false, short_all_in_sum, last_raise };
    }
    let sum = short_all_in_sum + raise_increment;
    if sum >= threshold {
        ReopenDecision { reopens: true, short_all_in_sum: 0, last_raise: sum }
    } else {
        ReopenDecision { reopens: false, short_all_in_sum: sum, last_raise }
    }
}

/// State of one betting round. A fresh one is opened for every street.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BettingRound {
    current_bet: u64,
    last_raise: u64,
    short_all_in_sum: u64,
    actions: Vec<ActionRecord>,
}

impl BettingRound {
    /// Preflop opens facing the nominal big blind, whatever the poster could cover.
    pub fn preflop(big_blind: u64) -> Self {
        Self { current_bet: big_blind, last_raise: big_blind, ..Self::default() }
    }

    pub fn postflop() -> Self {
        Self::default()
    }

    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    /// Size of the last full raise (or accumulated short all-ins that reopened).
    pub fn last_raise(&self) -> u64 {
        self.last_raise
    }

    pub fn short_all_in_sum(&self) -> u64 {
        self.short_all_in_sum
    }

    pub fn min_raise_total(&self, big_blind: u64) -> u64 {
        min_raise_total(self.current_bet, self.last_raise, big_blind)
    }

    /// Open the betting with `amount`. Always reopens.
    pub fn open_bet(&mut self, amount: u64) {
        self.current_bet = amount;
        self.last_raise = amount;
        self.short_all_in_sum = 0;
    }

    /// Lift the current bet to `new_total`. Returns whether action reopens.
    pub fn raise_to(&mut self, new_total: u64, is_all_in: bool, big_blind: u64) -> bool {
        let increment = new_total.saturating_sub(self.current_bet);
        let decision =
            reopens_action(increment, is_all_in, self.last_raise, big_blind, self.short_all_in_sum);
        self.current_bet = new_total;
        self.short_all_in_sum = decision.short_all_in_sum;
        self.last_raise = decision.last_raise;
        decision.reopens
    }

    pub fn record(&mut self, record: ActionRecord) {
        self.actions.push(record);
    }

    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinds_heads_up_and_ring() {
        assert_eq!(blind_positions(1, 0), None);
        assert_eq!(blind_positions(2, 0), Some((0, 1)));
        assert_eq!(blind_positions(3, 0), Some((1, 2)));
        assert_eq!(blind_positions(3, 2), Some((0, 1)));
    }

    #[test]
    fn next_seat_wraps_and_checks_origin_last() {
        assert_eq!(next_seat_where(4, 3, |_| true), Some(0));
        assert_eq!(next_seat_where(4, 1, |s| s == 1), Some(1));
        assert_eq!(next_seat_where(4, 1, |_| false), None);
    }

    #[test]
    fn preflop_opener_skips_folded_seats() {
        let out = [false, true, true, false, true];
        let in_hand = |s: usize| out[s];
        // 5 seats, dealer 4, big blind at seat 1: UTG is seat 2.
        assert_eq!(first_to_act_preflop(5, 4, 1, false, in_hand), Some(2));
        assert_eq!(first_to_act_preflop(5, 4, 2, false, in_hand), Some(4));
        assert_eq!(first_to_act_preflop(2, 0, 1, true, |_| true), Some(0));
    }

    #[test]
    fn postflop_opener_is_left_of_dealer() {
        assert_eq!(first_to_act_postflop(3, 0, |_| true), Some(1));
        assert_eq!(first_to_act_postflop(3, 0, |s| s != 1), Some(2));
        assert_eq!(first_to_act_postflop(2, 1, |_| true), Some(0));
    }

    #[test]
    fn min_raise_uses_larger_of_last_raise_and_big_blind() {
        assert_eq!(min_raise_total(50, 30, 20), 80);
        assert_eq!(min_raise_total(0, 0, 20), 20);
        assert_eq!(min_raise_total(20, 10, 20), 40);
    }

    #[test]
    fn full_raise_reopens_and_clears_sum() {
        let d = reopens_action(100, false, 80, 20, 30);
        assert_eq!(d, ReopenDecision { reopens: true, short_all_in_sum: 0, last_raise: 100 });
    }

    #[test]
    fn short_non_all_in_never_reopens() {
        let d = reopens_action(10, false, 80, 20, 75);
        assert_eq!(d, ReopenDecision { reopens: false, short_all_in_sum: 75, last_raise: 80 });
    }

    #[test]
    fn round_tracks_short_all_ins() {
        let mut round = BettingRound::preflop(20);
        assert!(round.raise_to(100, false, 20));
        assert_eq!(round.last_raise(), 80);
        assert_eq!(round.min_raise_total(20), 180);

        assert!(!round.raise_to(150, true, 20));
        assert_eq!(round.short_all_in_sum(), 50);
        assert_eq!(round.min_raise_total(20), 230);

        assert!(round.raise_to(220, true, 20));
        assert_eq!(round.short_all_in_sum(), 0);
        assert_eq!(round.last_raise(), 120);
    }

    #[test]
    fn opening_bet_sets_the_raise_size() {
        let mut round = BettingRound::postflop();
        assert_eq!(round.current_bet(), 0);
        round.open_bet(60);
        assert_eq!(round.min_raise_total(20), 120);
    }
}
