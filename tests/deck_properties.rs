use holdem_rs::cards::Card;
use holdem_rs::deck::{Deck, DeckError, DECK_SIZE};
use proptest::prelude::*;
use std::collections::HashSet;

fn all_cards(deck: &Deck) -> HashSet<Card> {
    deck.undealt().iter().chain(deck.dealt()).copied().collect()
}

proptest! {
    #[test]
    fn dealing_conserves_the_deck(seed in any::<u64>(), draws in prop::collection::vec(0usize..8, 0..10)) {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        let mut taken = 0;
        for n in draws {
            match deck.deal(n) {
                Ok(cards) => {
                    prop_assert_eq!(cards.len(), n);
                    taken += n;
                }
                Err(DeckError::InsufficientCards { requested, remaining }) => {
                    prop_assert_eq!(requested, n);
                    prop_assert!(remaining < n);
                }
                Err(other) => prop_assert!(false, "unexpected {other:?}"),
            }
            prop_assert_eq!(deck.remaining() + deck.dealt().len(), DECK_SIZE);
            prop_assert_eq!(all_cards(&deck).len(), DECK_SIZE);
        }
        prop_assert_eq!(deck.dealt().len(), taken);
    }

    #[test]
    fn same_seed_same_order(seed in any::<u64>()) {
        let mut a = Deck::standard();
        let mut b = Deck::standard();
        a.shuffle_seeded(seed);
        b.shuffle_seeded(seed);
        prop_assert_eq!(a.undealt(), b.undealt());
    }
}

#[test]
fn exhausting_the_deck_is_an_error() {
    let mut deck = Deck::standard();
    deck.deal(50).unwrap();
    assert_eq!(deck.deal(3), Err(DeckError::InsufficientCards { requested: 3, remaining: 2 }));
    assert_eq!(deck.remaining(), 2);
    deck.burn().unwrap();
    deck.deal_one().unwrap();
    assert!(deck.is_empty());
    assert!(deck.burn().is_err());
}
