use super::{Card, Rank, Suit};

use strum::IntoEnumIterator;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Represents a shoe in the real world. Cards are dealt from the end of `cards`.
///
/// The random source is owned by the shoe, so two shoes built from equally
/// seeded generators deal the same sequence.
#[derive(Debug, Clone)]
pub struct Shoe<R: Rng = StdRng> {
    number_of_decks: u8,
    cards: Vec<Card>,
    rng: R,
    reshuffles: u32,
}

impl<R: Rng> Shoe<R> {
    /// Creates a new shoe of `number_of_decks` full decks, shuffled with `rng`.
    ///
    /// Panics if `number_of_decks` is 0.
    pub fn new(number_of_decks: u8, rng: R) -> Shoe<R> {
        let mut shoe = Shoe::empty(number_of_decks, rng);
        shoe.fill();
        shoe.cards.shuffle(&mut shoe.rng);
        shoe
    }

    /// Creates a shoe that deals exactly `order`, first card first. Once those
    /// cards run out the shoe refills with `number_of_decks` shuffled decks.
    ///
    /// Panics if `number_of_decks` is 0.
    pub fn with_order(number_of_decks: u8, mut order: Vec<Card>, rng: R) -> Shoe<R> {
        let mut shoe = Shoe::empty(number_of_decks, rng);
        order.reverse();
        shoe.cards = order;
        shoe
    }

    fn empty(number_of_decks: u8, rng: R) -> Shoe<R> {
        assert!(number_of_decks > 0, "A shoe needs at least one deck");
        Shoe {
            number_of_decks,
            cards: Vec::with_capacity(number_of_decks as usize * 52),
            rng,
            reshuffles: 0,
        }
    }

    /// Throws away whatever is left, rebuilds all decks and shuffles them.
    pub fn refill(&mut self) {
        self.fill();
        self.cards.shuffle(&mut self.rng);
        self.reshuffles += 1;
    }

    /// Deals one card. An empty shoe refills itself first, so this never fails.
    /// Callers that care about reshuffles compare `reshuffles()` before and after.
    pub fn deal_card(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            self.refill();
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in a freshly filled shoe.
    pub fn full_size(&self) -> usize {
        self.number_of_decks as usize * 52
    }

    pub fn number_of_decks(&self) -> u8 {
        self.number_of_decks
    }

    /// How many times the shoe ran dry and was refilled.
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    fn fill(&mut self) {
        self.cards.clear();
        for _ in 0..self.number_of_decks {
            for suit in Suit::iter() {
                for rank in Rank::iter() {
                    self.cards.push(Card { rank, suit });
                }
            }
        }
    }
}
