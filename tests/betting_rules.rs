use holdem_rs::rules::{min_raise_total, reopens_action, BettingRound, ReopenDecision};
use proptest::prelude::*;

proptest! {
    #[test]
    fn min_raise_is_at_least_one_big_blind(current in 0u64..10_000, last in 0u64..10_000, bb in 1u64..500) {
        let total = min_raise_total(current, last, bb);
        prop_assert!(total >= current + bb);
        prop_assert!(total >= current + last);
        prop_assert!(total == current + bb || total == current + last);
    }

    #[test]
    fn full_raises_always_reopen(last in 0u64..1000, bb in 1u64..100, extra in 0u64..1000, sum in 0u64..1000, all_in in any::<bool>()) {
        let increment = last.max(bb) + extra;
        let d = reopens_action(increment, all_in, last, bb, sum);
        prop_assert_eq!(d, ReopenDecision { reopens: true, short_all_in_sum: 0, last_raise: increment });
    }

    #[test]
    fn short_all_ins_accumulate_until_a_full_raise(last in 20u64..500, parts in prop::collection::vec(1u64..20, 1..8)) {
        let bb = 20;
        let mut sum = 0;
        let mut last_raise = last;
        let mut running = 0;
        for part in parts {
            let d = reopens_action(part, true, last_raise, bb, sum);
            running += part;
            if running >= last {
                prop_assert!(d.reopens);
                prop_assert_eq!(d.last_raise, running);
                break;
            }
            prop_assert!(!d.reopens);
            prop_assert_eq!(d.short_all_in_sum, running);
            sum = d.short_all_in_sum;
            last_raise = d.last_raise;
        }
    }
}

#[test]
fn raise_to_fifty_then_min_raise_is_eighty() {
    let mut round = BettingRound::preflop(20);
    assert_eq!(round.min_raise_total(20), 40);
    assert!(round.raise_to(50, false, 20));
    assert_eq!(round.last_raise(), 30);
    assert_eq!(round.min_raise_total(20), 80);
}

#[test]
fn opening_bet_below_big_blind_size_still_uses_big_blind() {
    let mut round = BettingRound::postflop();
    assert_eq!(round.min_raise_total(20), 20);
    round.open_bet(20);
    assert_eq!(round.min_raise_total(20), 40);
}

#[test]
fn double_short_all_in_reopens() {
    // UTG raises to 100 (increment 80), then shoves of 150 and 220.
    let mut round = BettingRound::preflop(20);
    assert!(round.raise_to(100, false, 20));
    assert!(!round.raise_to(150, true, 20));
    assert_eq!(round.last_raise(), 80);
    assert!(round.raise_to(220, true, 20));
    assert_eq!(round.last_raise(), 120);
    assert_eq!(round.min_raise_total(20), 340);
}
