use crate::cards::Card;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DECK_SIZE: usize = 52;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("insufficient cards: requested {requested}, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },
}

/// A standard 52-card deck split into undealt and dealt cards.
///
/// Every card is in exactly one of the two piles, so their sizes always sum to 52.
#[derive(Debug, Clone)]
pub struct Deck {
    undealt: Vec<Card>,
    dealt: Vec<Card>,
}

impl Deck {
    /// ```
    /// use holdem_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.remaining(), 52);
    /// assert!(deck.dealt().is_empty());
    /// ```
    pub fn standard() -> Self {
        let undealt = (0..DECK_SIZE as u8)
            .filter_map(|id| Card::from_id(id).ok())
            .collect();
        Self {
            undealt,
            dealt: Vec::with_capacity(DECK_SIZE),
        }
    }

    /// Number of undealt cards.
    pub fn remaining(&self) -> usize {
        self.undealt.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undealt.is_empty()
    }

    pub fn undealt(&self) -> &[Card] {
        &self.undealt
    }

    /// Cards dealt or burned so far, in order.
    pub fn dealt(&self) -> &[Card] {
        &self.dealt
    }

    /// Shuffle the undealt cards using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.undealt.shuffle(&mut rng);
    }

    /// Shuffle the undealt cards using the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.undealt.shuffle(rng);
    }

    /// Deal `n` cards from the top of the deck.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.undealt.len() {
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining: self.undealt.len(),
            });
        }
        let rest = self.undealt.split_off(n);
        let hand = std::mem::replace(&mut self.undealt, rest);
        self.dealt.extend_from_slice(&hand);
        Ok(hand)
    }

    pub fn deal_one(&mut self) -> Result<Card, DeckError> {
        let mut cards = self.deal(1)?;
        cards.pop().ok_or(DeckError::InsufficientCards {
            requested: 1,
            remaining: 0,
        })
    }

    /// Discard the top card face down.
    pub fn burn(&mut self) -> Result<Card, DeckError> {
        self.deal_one()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
