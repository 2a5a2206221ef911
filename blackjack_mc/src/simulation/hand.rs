use std::fmt;

use super::{Card, Rank};
use crate::BLACKJACK;

/// Cards held in one hand, with the total kept up to date after every card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    total: u8,
    bust: bool,
}

impl Hand {
    pub fn new() -> Hand {
        Hand {
            cards: Vec::with_capacity(3),
            total: 0,
            bust: false,
        }
    }

    /// A hand seeded with one card, as left behind by a split.
    pub fn with_card(card: Card) -> Hand {
        let mut hand = Hand::new();
        hand.receive_card(card);
        hand
    }

    pub fn receive_card(&mut self, card: Card) {
        self.cards.push(card);
        (self.total, self.bust) = score(&self.cards);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn total(&self) -> u8 {
        self.total
    }

    pub fn is_bust(&self) -> bool {
        self.bust
    }

    /// Exactly two cards of the same rank. A King and a Queen are not a pair.
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.total = 0;
        self.bust = false;
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

/// Scores a list of cards, returning the total and whether it busts.
///
/// Every Ace starts at 11 and is demoted to 1, one at a time, only while the
/// total is above 21.
pub fn score(cards: &[Card]) -> (u8, bool) {
    let mut total: u16 = 0;
    let mut soft_aces = 0;
    for card in cards {
        if card.rank == Rank::Ace {
            soft_aces += 1;
        }
        total += card.blackjack_value() as u16;
    }
    while total > BLACKJACK as u16 && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }
    (total.min(u8::MAX as u16) as u8, total > BLACKJACK as u16)
}
