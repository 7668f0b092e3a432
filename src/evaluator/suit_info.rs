use crate::cards::{Card, Suit};

/// Flush detection for a five-card hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card; 5]) -> Self {
        let suit = cards[0].suit();
        let flush_suit = cards.iter().all(|c| c.suit() == suit).then_some(suit);
        SuitInfo { flush_suit }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn five(s: &str) -> [Card; 5] {
        let v = parse_cards(s).unwrap();
        [v[0], v[1], v[2], v[3], v[4]]
    }

    #[test]
    fn one_suit_is_a_flush() {
        let info = SuitInfo::detect(&five("2c 3c 4c 5c 7c"));
        assert!(info.is_flush());
        assert_eq!(info.flush_suit, Some(Suit::Clubs));
    }

    #[test]
    fn a_single_offsuit_card_breaks_it() {
        let info = SuitInfo::detect(&five("As Kh Qs Js 9s"));
        assert!(!info.is_flush());
    }
}
