//! Main and side pots, and their settlement at showdown.

use crate::cards::Card;
use crate::evaluator::{evaluate, EvalError, Evaluation};
use crate::player::PlayerAccount;
use serde::{Deserialize, Serialize};

/// One pot and the seats that can win it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pot {
    pub amount: u64,
    pub eligible: Vec<usize>,
}

/// A share of one pot paid to one seat.
#[derive(Debug, Clone)]
pub struct PotAward {
    pub pot: usize,
    pub seat: usize,
    pub amount: u64,
    pub evaluation: Evaluation,
}

/// Split the hand's contributions into a main pot and side pots.
///
/// Each distinct contribution level forms one pot, worth the step up from the
/// previous level times the players who reached it. Folded players pay into
/// pots but are never eligible. The main pot comes first.
///
/// ```
/// use holdem_rs::player::PlayerAccount;
/// use holdem_rs::pot::compute_side_pots;
///
/// let mut players = vec![
///     PlayerAccount::new("a", 0, 100),
///     PlayerAccount::new("b", 1, 500),
///     PlayerAccount::new("c", 2, 500),
/// ];
/// players[0].commit(100);
/// players[1].commit(300);
/// players[2].commit(300);
/// let pots = compute_side_pots(&players);
/// assert_eq!(pots[0].amount, 300);
/// assert_eq!(pots[0].eligible, vec![0, 1, 2]);
/// assert_eq!(pots[1].amount, 400);
/// assert_eq!(pots[1].eligible, vec![1, 2]);
/// ```
pub fn compute_side_pots(players: &[PlayerAccount]) -> Vec<Pot> {
    let mut levels: Vec<u64> =
        players.iter().map(|p| p.total_bet()).filter(|&c| c > 0).collect();
    levels.sort_unstable();
    levels.dedup();

    let mut pots = Vec::with_capacity(levels.len());
    let mut previous = 0u64;
    for level in levels {
        let reached: Vec<&PlayerAccount> =
            players.iter().filter(|p| p.total_bet() >= level).collect();
        let amount = (level - previous) * reached.len() as u64;
        let eligible = reached.iter().filter(|p| p.is_in_hand()).map(|p| p.seat()).collect();
        pots.push(Pot { amount, eligible });
        previous = level;
    }
    pots
}

/// Divide `amount` evenly among `winners`. Leftover chips go one at a time to
/// the winners nearest the dealer's left, moving clockwise.
pub fn split_pot(amount: u64, winners: &[usize], dealer: usize, seat_count: usize) -> Vec<(usize, u64)> {
    if winners.is_empty() || seat_count == 0 {
        return Vec::new();
    }
    let first = (dealer + 1) % seat_count;
    let mut ordered = winners.to_vec();
    ordered.sort_by_key(|&seat| (seat + seat_count - first) % seat_count);

    let share = amount / ordered.len() as u64;
    let odd = (amount % ordered.len() as u64) as usize;
    ordered
        .into_iter()
        .enumerate()
        .map(|(i, seat)| (seat, share + u64::from(i < odd)))
        .collect()
}

/// Award every pot to the best eligible hand on `board`.
///
/// Players without hole cards or no longer in the hand are skipped. A pot with
/// nobody left to contest it awards nothing.
pub fn settle(
    pots: &[Pot],
    players: &[PlayerAccount],
    board: &[Card],
    dealer: usize,
) -> Result<Vec<PotAward>, EvalError> {
    let mut awards = Vec::new();
    for (index, pot) in pots.iter().enumerate() {
        let mut contenders: Vec<(usize, Evaluation)> = Vec::with_capacity(pot.eligible.len());
        for &seat in &pot.eligible {
            let Some(player) = players.get(seat).filter(|p| p.is_in_hand()) else {
                continue;
            };
            let Some(hole) = player.hole() else {
                continue;
            };
            contenders.push((seat, evaluate(&hole.with_board(board))?));
        }
        let Some(best) = contenders.iter().map(|(_, e)| e.strength()).min() else {
            log::debug!("pot {index} of {} has no contenders", pot.amount);
            continue;
        };
        let winners: Vec<(usize, Evaluation)> =
            contenders.into_iter().filter(|(_, e)| e.strength() == best).collect();
        let seats: Vec<usize> = winners.iter().map(|(s, _)| *s).collect();

        for (seat, amount) in split_pot(pot.amount, &seats, dealer, players.len()) {
            if let Some((_, evaluation)) = winners.iter().find(|(s, _)| *s == seat) {
                awards.push(PotAward { pot: index, seat, amount, evaluation: *evaluation });
            }
        }
    }
    Ok(awards)
}
