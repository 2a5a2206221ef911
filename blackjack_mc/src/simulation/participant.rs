use std::marker::PhantomData;

use rand::Rng;

use super::{hand::Hand, shoe::Shoe, Card};
use crate::DEALER_STAND_THRESHOLD;

mod private {
    pub trait Sealed {}

    impl Sealed for super::Player {}
    impl Sealed for super::Dealer {}
}

/// The seat a `Participant` occupies. Decides which extra operations it exposes:
/// only a player can split, only a dealer has an upcard and a drawing policy.
pub trait Role: private::Sealed {
    const NAME: &'static str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Player;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dealer;

impl Role for Player {
    const NAME: &'static str = "player";
}

impl Role for Dealer {
    const NAME: &'static str = "dealer";
}

/// Someone holding hands at the table. A player holds 1 hand, or 2 after a split.
/// A dealer always holds exactly 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant<K: Role> {
    hands: Vec<Hand>,
    role: PhantomData<K>,
}

impl<K: Role> Participant<K> {
    pub fn new() -> Self {
        Participant {
            hands: vec![Hand::new()],
            role: PhantomData,
        }
    }

    pub fn role_name(&self) -> &'static str {
        K::NAME
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Panics if `hand_index` is out of range.
    pub fn hand(&self, hand_index: usize) -> &Hand {
        &self.hands[hand_index]
    }

    /// Draws one card from the shoe into the given hand and returns it.
    pub fn draw_card<R: Rng>(&mut self, shoe: &mut Shoe<R>, hand_index: usize) -> Card {
        let card = shoe.deal_card();
        self.hands[hand_index].receive_card(card);
        card
    }

    pub fn all_hands_bust(&self) -> bool {
        self.hands.iter().all(Hand::is_bust)
    }

    /// Removes the hands that come from a split, leaving 1 empty hand.
    pub fn clear(&mut self) {
        self.hands.truncate(1);
        self.hands[0].clear();
    }
}

impl<K: Role> Default for Participant<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl Participant<Player> {
    /// Only one split per round, and only on two cards of the same rank.
    pub fn can_split(&self) -> bool {
        self.hands.len() == 1 && self.hands[0].is_pair()
    }

    /// Splits the only hand into two, each completed by one card from the shoe.
    /// The first hand keeps the first card and draws first.
    ///
    /// Returns false and leaves the hands untouched if splitting is not allowed.
    pub fn split<R: Rng>(&mut self, shoe: &mut Shoe<R>) -> bool {
        if !self.can_split() {
            return false;
        }
        let cards = self.hands[0].cards();
        let mut first = Hand::with_card(cards[0]);
        let mut second = Hand::with_card(cards[1]);
        first.receive_card(shoe.deal_card());
        second.receive_card(shoe.deal_card());
        self.hands = vec![first, second];
        true
    }
}

impl Participant<Dealer> {
    /// The face-up card, once dealt.
    pub fn upcard(&self) -> Option<Card> {
        self.hands[0].cards().first().copied()
    }

    /// Draws until the total reaches the stand threshold or busts.
    pub fn take_turn<R: Rng>(&mut self, shoe: &mut Shoe<R>) -> &Hand {
        while self.hands[0].total() < DEALER_STAND_THRESHOLD {
            self.draw_card(shoe, 0);
        }
        &self.hands[0]
    }
}
