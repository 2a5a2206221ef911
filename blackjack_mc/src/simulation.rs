pub mod hand;
pub mod participant;
pub mod shoe;

use crate::{strategy::Strategy, Action, DecisionContext, Outcome, RoundError};
use blackjack_mc_macros::allowed_phase;
use rand::rngs::StdRng;
use rand::Rng;
use strum_macros::{Display, EnumIter};

use self::{
    hand::Hand,
    participant::{Dealer, Participant, Player},
    shoe::Shoe,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Face cards count 10 and an Ace counts 11. Hands demote Aces to 1 on
    /// their own.
    pub fn blackjack_value(self) -> u8 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            numeric => numeric as u8,
        }
    }
}

/// Represents a card in the real world with a rank and a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn blackjack_value(&self) -> u8 {
        self.rank.blackjack_value()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self.rank {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };
        let suit = match self.suit {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        };
        write!(f, "{}{}", value, suit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RoundPhase {
    Dealing,
    /// The player is acting on the hand at this index.
    PlayerTurn(usize),
    DealerTurn,
    Settlement,
    Done,
}

/// What a finished round leaves behind. One outcome and one final total per
/// player hand, so a split round carries two of each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub player_final_scores: Vec<u8>,
    pub dealer_final_score: u8,
    pub outcomes: Vec<Outcome>,
}

impl RoundRecord {
    pub fn is_split(&self) -> bool {
        self.outcomes.len() > 1
    }

    /// Final total of the first player hand, the one kept in score lists.
    pub fn primary_player_score(&self) -> u8 {
        self.player_final_scores[0]
    }
}

/// One round of Blackjack between a single player and the dealer.
///
/// The round moves through `Dealing`, `PlayerTurn(i)` for each player hand,
/// `DealerTurn` (skipped when every player hand busts), `Settlement` and `Done`.
/// Each step method is only accepted in its own phase. `play` drives all the
/// steps with a strategy; a console can call the steps itself.
pub struct Round<R: Rng = StdRng> {
    current_phase: RoundPhase,
    shoe: Shoe<R>,
    player: Participant<Player>,
    dealer: Participant<Dealer>,
    reported_reshuffles: u32,
}

impl<R: Rng> Round<R> {
    pub fn new(shoe: Shoe<R>) -> Self {
        let reported_reshuffles = shoe.reshuffles();
        Round {
            current_phase: RoundPhase::Dealing,
            shoe,
            player: Participant::new(),
            dealer: Participant::new(),
            reported_reshuffles,
        }
    }

    /// Plays the whole round with `strategy`, reporting every step to `handler`.
    /// Can be called at Dealing phase.
    ///
    /// A split asked for on a hand that cannot split is an error: the round is
    /// left as it was before that decision.
    pub fn play<S, H>(&mut self, strategy: &S, handler: &mut H) -> Result<RoundRecord, RoundError>
    where
        S: Strategy + ?Sized,
        H: RoundEventHandler,
    {
        self.deal_initial_cards()?;
        self.report_reshuffles(handler);
        if let Some(upcard) = self.dealer.upcard() {
            handler.on_deal_cards(self.player.hand(0), upcard);
        }

        while let Some(context) = self.decision_context() {
            let hand_index = self.current_hand_index();
            let action = strategy.decide(&context);
            handler.on_make_decision(action, hand_index);
            match action {
                Action::Hit => {
                    self.play_hit()?;
                    if self.player.hand(hand_index).is_bust() {
                        handler.on_player_bust(hand_index);
                    }
                }
                Action::Stand => {
                    self.play_stand()?;
                }
                Action::Split => {
                    self.play_split()?;
                    handler.on_split(&self.player);
                }
            }
            self.report_reshuffles(handler);
        }

        if self.current_phase == RoundPhase::DealerTurn {
            self.dealer_plays()?;
            self.report_reshuffles(handler);
            handler.on_dealer_finished(self.dealer.hand(0));
        }

        let record = self.settle()?;
        handler.on_summary_round(&record);
        Ok(record)
    }

    /// Can be called at Dealing phase.
    /// Deals player, player, dealer, dealer.
    #[allowed_phase(Dealing)]
    pub fn deal_initial_cards(&mut self) -> Result<(), RoundError> {
        self.player.draw_card(&mut self.shoe, 0);
        self.player.draw_card(&mut self.shoe, 0);
        self.dealer.draw_card(&mut self.shoe, 0);
        self.dealer.draw_card(&mut self.shoe, 0);
        self.current_phase = RoundPhase::PlayerTurn(0);
        Ok(())
    }

    /// What the strategy sees for the acting hand. None outside PlayerTurn phase.
    pub fn decision_context(&self) -> Option<DecisionContext> {
        let RoundPhase::PlayerTurn(hand_index) = self.current_phase else {
            return None;
        };
        let upcard = self.dealer.upcard()?;
        Some(DecisionContext {
            hand_total: self.player.hand(hand_index).total(),
            dealer_up_value: upcard.blackjack_value(),
            can_split: self.player.can_split(),
        })
    }

    /// Can be called at PlayerTurn phase.
    /// Returns true if the acting hand busted and the turn moved on.
    #[allowed_phase(PlayerTurn)]
    pub fn play_hit(&mut self) -> Result<bool, RoundError> {
        let hand_index = self.current_hand_index();
        self.player.draw_card(&mut self.shoe, hand_index);
        if self.player.hand(hand_index).is_bust() {
            self.move_to_next_hand();
            return Ok(true);
        }
        Ok(false)
    }

    /// Can be called at PlayerTurn phase.
    /// Returns true, the acting hand is always finished.
    #[allowed_phase(PlayerTurn)]
    pub fn play_stand(&mut self) -> Result<bool, RoundError> {
        self.move_to_next_hand();
        Ok(true)
    }

    /// Can be called at PlayerTurn phase.
    /// Splits the only hand. Play resumes on the first of the two new hands.
    #[allowed_phase(PlayerTurn)]
    pub fn play_split(&mut self) -> Result<(), RoundError> {
        let hand_index = self.current_hand_index();
        if !self.player.split(&mut self.shoe) {
            let reason = if self.player.hands().len() > 1 {
                "only one split is allowed per round"
            } else {
                "only two cards of the same rank can be split"
            };
            return Err(RoundError::InvalidAction {
                action: Action::Split,
                hand_index,
                reason,
            });
        }
        self.current_phase = RoundPhase::PlayerTurn(0);
        Ok(())
    }

    /// Can be called at DealerTurn phase.
    /// Makes dealer draw until she reaches the stand threshold.
    #[allowed_phase(DealerTurn)]
    pub fn dealer_plays(&mut self) -> Result<(), RoundError> {
        self.dealer.take_turn(&mut self.shoe);
        self.current_phase = RoundPhase::Settlement;
        Ok(())
    }

    /// Can be called at Settlement phase.
    /// Settles every player hand on its own against the dealer.
    #[allowed_phase(Settlement)]
    pub fn settle(&mut self) -> Result<RoundRecord, RoundError> {
        let dealer_hand = self.dealer.hand(0);
        let record = RoundRecord {
            player_final_scores: self.player.hands().iter().map(Hand::total).collect(),
            dealer_final_score: dealer_hand.total(),
            outcomes: self
                .player
                .hands()
                .iter()
                .map(|hand| settle_hand(hand, dealer_hand))
                .collect(),
        };
        self.current_phase = RoundPhase::Done;
        Ok(record)
    }

    /// Can be called at Done phase.
    /// Clears both participants and keeps the shoe for another round.
    #[allowed_phase(Done)]
    pub fn start_next_round(&mut self) -> Result<(), RoundError> {
        self.player.clear();
        self.dealer.clear();
        self.current_phase = RoundPhase::Dealing;
        Ok(())
    }

    pub fn phase(&self) -> RoundPhase {
        self.current_phase
    }

    pub fn player(&self) -> &Participant<Player> {
        &self.player
    }

    pub fn dealer(&self) -> &Participant<Dealer> {
        &self.dealer
    }

    pub fn shoe(&self) -> &Shoe<R> {
        &self.shoe
    }

    pub fn into_shoe(self) -> Shoe<R> {
        self.shoe
    }

    fn current_hand_index(&self) -> usize {
        match self.current_phase {
            RoundPhase::PlayerTurn(hand_index) => hand_index,
            _ => 0,
        }
    }

    /// Move to the next player hand. If no more hands, the dealer plays unless
    /// every hand busted.
    fn move_to_next_hand(&mut self) {
        let next = self.current_hand_index() + 1;
        self.current_phase = if next < self.player.hands().len() {
            RoundPhase::PlayerTurn(next)
        } else if self.player.all_hands_bust() {
            RoundPhase::Settlement
        } else {
            RoundPhase::DealerTurn
        };
    }

    fn report_reshuffles<H: RoundEventHandler>(&mut self, handler: &mut H) {
        let reshuffles = self.shoe.reshuffles();
        if reshuffles != self.reported_reshuffles {
            self.reported_reshuffles = reshuffles;
            handler.on_reshuffle(reshuffles);
        }
    }
}

/// A busted player hand loses even if the dealer busts too.
pub fn settle_hand(player_hand: &Hand, dealer_hand: &Hand) -> Outcome {
    if player_hand.is_bust() {
        Outcome::Loss
    } else if dealer_hand.is_bust() {
        Outcome::Win
    } else if player_hand.total() > dealer_hand.total() {
        Outcome::Win
    } else if player_hand.total() < dealer_hand.total() {
        Outcome::Loss
    } else {
        Outcome::Tie
    }
}

/// Hooks called by `Round::play`. Every method does nothing by default.
pub trait RoundEventHandler {
    fn on_deal_cards(&mut self, _player_hand: &Hand, _upcard: Card) {}
    fn on_make_decision(&mut self, _action: Action, _hand_index: usize) {}
    fn on_split(&mut self, _player: &Participant<Player>) {}
    fn on_player_bust(&mut self, _hand_index: usize) {}
    fn on_reshuffle(&mut self, _reshuffles: u32) {}
    fn on_dealer_finished(&mut self, _dealer_hand: &Hand) {}
    fn on_summary_round(&mut self, _record: &RoundRecord) {}
}

/// Reports rounds through the `log` facade: reshuffles at debug, everything
/// else at trace.
#[derive(Debug, Clone, Default)]
pub struct LoggingHandler {
    round_id: u64,
}

impl LoggingHandler {
    pub fn new(round_id: u64) -> Self {
        LoggingHandler { round_id }
    }
}

impl RoundEventHandler for LoggingHandler {
    fn on_deal_cards(&mut self, player_hand: &Hand, upcard: Card) {
        log::trace!(
            "round #{}: player has {} ({}), dealer shows {}",
            self.round_id,
            player_hand,
            player_hand.total(),
            upcard
        );
    }

    fn on_make_decision(&mut self, action: Action, hand_index: usize) {
        log::trace!("round #{}: hand {} -> {}", self.round_id, hand_index, action);
    }

    fn on_split(&mut self, player: &Participant<Player>) {
        log::trace!(
            "round #{}: split into [{}] and [{}]",
            self.round_id,
            player.hand(0),
            player.hand(1)
        );
    }

    fn on_player_bust(&mut self, hand_index: usize) {
        log::trace!("round #{}: hand {} busts", self.round_id, hand_index);
    }

    fn on_reshuffle(&mut self, reshuffles: u32) {
        log::debug!(
            "round #{}: shoe was empty, reshuffled ({} so far)",
            self.round_id,
            reshuffles
        );
    }

    fn on_dealer_finished(&mut self, dealer_hand: &Hand) {
        log::trace!(
            "round #{}: dealer has {} ({}){}",
            self.round_id,
            dealer_hand,
            dealer_hand.total(),
            if dealer_hand.is_bust() { ", busts" } else { "" }
        );
    }

    fn on_summary_round(&mut self, record: &RoundRecord) {
        log::trace!("round #{}: {:?}", self.round_id, record.outcomes);
        self.round_id += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReferenceStrategy;

    use rand::SeedableRng;

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    fn stacked_round(ranks: &[Rank]) -> Round {
        let cards = ranks.iter().map(|rank| card(*rank)).collect();
        Round::new(Shoe::with_order(1, cards, StdRng::seed_from_u64(0)))
    }

    struct AlwaysHit;

    impl Strategy for AlwaysHit {
        fn name(&self) -> String {
            String::from("always_hit")
        }

        fn decide(&self, _: &DecisionContext) -> Action {
            Action::Hit
        }
    }

    /// Splits whenever possible, otherwise stands.
    struct SplitThenStand;

    impl Strategy for SplitThenStand {
        fn name(&self) -> String {
            String::from("split_then_stand")
        }

        fn decide(&self, context: &DecisionContext) -> Action {
            if context.can_split {
                Action::Split
            } else {
                Action::Stand
            }
        }
    }

    struct AlwaysSplit;

    impl Strategy for AlwaysSplit {
        fn name(&self) -> String {
            String::from("always_split")
        }

        fn decide(&self, _: &DecisionContext) -> Action {
            Action::Split
        }
    }

    #[derive(Default)]
    struct Recorder {
        decisions: Vec<(Action, usize)>,
        busts: Vec<usize>,
        splits: usize,
        dealer_finished: bool,
        reshuffles: Vec<u32>,
    }

    impl RoundEventHandler for Recorder {
        fn on_make_decision(&mut self, action: Action, hand_index: usize) {
            self.decisions.push((action, hand_index));
        }

        fn on_split(&mut self, _: &Participant<Player>) {
            self.splits += 1;
        }

        fn on_player_bust(&mut self, hand_index: usize) {
            self.busts.push(hand_index);
        }

        fn on_reshuffle(&mut self, reshuffles: u32) {
            self.reshuffles.push(reshuffles);
        }

        fn on_dealer_finished(&mut self, _: &Hand) {
            self.dealer_finished = true;
        }
    }

    #[test]
    fn test_allowed_phase() {
        let mut round = stacked_round(&[Rank::Ten, Rank::Nine, Rank::Ten, Rank::Seven]);
        assert_eq!(round.phase(), RoundPhase::Dealing);
        let err = round.play_hit().unwrap_err();
        assert_eq!(
            err,
            RoundError::WrongPhase {
                operation: "play_hit",
                expected: "PlayerTurn",
                actual: RoundPhase::Dealing,
            }
        );
        assert!(round.deal_initial_cards().is_ok());
        assert_eq!(round.phase(), RoundPhase::PlayerTurn(0));
        assert!(round.deal_initial_cards().is_err());
        assert!(round.settle().is_err());
    }

    #[test]
    fn deals_player_player_dealer_dealer() {
        let mut round = stacked_round(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        round.deal_initial_cards().unwrap();
        assert_eq!(round.player().hand(0).cards(), &[card(Rank::Two), card(Rank::Three)]);
        assert_eq!(round.dealer().hand(0).cards(), &[card(Rank::Four), card(Rank::Five)]);
        assert_eq!(round.dealer().upcard(), Some(card(Rank::Four)));
    }

    #[test]
    fn busted_player_loses_and_dealer_does_not_draw() {
        let mut round = stacked_round(&[Rank::Ten, Rank::Six, Rank::Nine, Rank::Two, Rank::King]);
        let mut recorder = Recorder::default();
        let record = round.play(&AlwaysHit, &mut recorder).unwrap();
        assert_eq!(record.outcomes, vec![Outcome::Loss]);
        assert_eq!(record.player_final_scores, vec![26]);
        assert_eq!(record.dealer_final_score, 11);
        assert_eq!(recorder.busts, vec![0]);
        assert!(!recorder.dealer_finished);
        assert_eq!(round.phase(), RoundPhase::Done);
    }

    #[test]
    fn standing_player_wins_when_dealer_busts() {
        let mut round = stacked_round(&[Rank::Ten, Rank::Nine, Rank::Ten, Rank::Six, Rank::Queen]);
        let record = round
            .play(&ReferenceStrategy::Basic, &mut Recorder::default())
            .unwrap();
        assert_eq!(record.outcomes, vec![Outcome::Win]);
        assert_eq!(record.player_final_scores, vec![19]);
        assert_eq!(record.dealer_final_score, 26);
    }

    #[test]
    fn equal_totals_tie_and_lower_total_loses() {
        let mut round = stacked_round(&[Rank::Ten, Rank::Eight, Rank::King, Rank::Eight]);
        let record = round
            .play(&ReferenceStrategy::Basic, &mut LoggingHandler::default())
            .unwrap();
        assert_eq!(record.outcomes, vec![Outcome::Tie]);

        let mut round = stacked_round(&[Rank::Ten, Rank::Seven, Rank::King, Rank::Nine]);
        let record = round
            .play(&ReferenceStrategy::Basic, &mut LoggingHandler::default())
            .unwrap();
        assert_eq!(record.outcomes, vec![Outcome::Loss]);
        assert_eq!(record.dealer_final_score, 19);
    }

    #[test]
    fn split_round_settles_each_hand() {
        // Player 8 8, dealer K 7; split hands draw Q and 5.
        let mut round = stacked_round(&[
            Rank::Eight,
            Rank::Eight,
            Rank::King,
            Rank::Seven,
            Rank::Queen,
            Rank::Five,
        ]);
        let mut recorder = Recorder::default();
        let record = round.play(&SplitThenStand, &mut recorder).unwrap();
        assert!(record.is_split());
        assert_eq!(record.player_final_scores, vec![18, 13]);
        assert_eq!(record.primary_player_score(), 18);
        assert_eq!(record.dealer_final_score, 17);
        assert_eq!(record.outcomes, vec![Outcome::Win, Outcome::Loss]);
        assert_eq!(recorder.splits, 1);
        assert_eq!(
            recorder.decisions,
            vec![(Action::Split, 0), (Action::Stand, 0), (Action::Stand, 1)]
        );
    }

    #[test]
    fn split_hands_are_played_in_order() {
        let mut round = stacked_round(&[
            Rank::Nine,
            Rank::Nine,
            Rank::Ten,
            Rank::Seven,
            Rank::Two,
            Rank::Ace,
        ]);
        round.deal_initial_cards().unwrap();
        round.play_split().unwrap();
        assert_eq!(round.phase(), RoundPhase::PlayerTurn(0));
        assert_eq!(round.player().hand(0).total(), 11);
        assert_eq!(round.player().hand(1).total(), 20);
        assert!(!round.decision_context().unwrap().can_split);

        assert!(round.play_stand().unwrap());
        assert_eq!(round.phase(), RoundPhase::PlayerTurn(1));
        assert_eq!(round.decision_context().unwrap().hand_total, 20);
        assert!(round.play_stand().unwrap());
        assert_eq!(round.phase(), RoundPhase::DealerTurn);
    }

    #[test]
    fn both_split_hands_bust_skips_dealer() {
        let mut round = stacked_round(&[
            Rank::Ten,
            Rank::Ten,
            Rank::Six,
            Rank::Five,
            Rank::Six,
            Rank::Five,
            Rank::King,
            Rank::Queen,
        ]);
        round.deal_initial_cards().unwrap();
        round.play_split().unwrap();
        assert!(round.play_hit().unwrap());
        assert_eq!(round.phase(), RoundPhase::PlayerTurn(1));
        assert!(round.play_hit().unwrap());
        assert_eq!(round.phase(), RoundPhase::Settlement);
        let record = round.settle().unwrap();
        assert_eq!(record.outcomes, vec![Outcome::Loss, Outcome::Loss]);
        assert_eq!(record.dealer_final_score, 11);
    }

    #[test]
    fn ineligible_split_is_rejected_without_mutation() {
        let mut round = stacked_round(&[Rank::Ten, Rank::Nine, Rank::Ten, Rank::Seven]);
        round.deal_initial_cards().unwrap();
        let player_before = round.player().clone();
        let shoe_before = round.shoe().len();

        let err = round.play_split().unwrap_err();
        assert!(matches!(
            err,
            RoundError::InvalidAction {
                action: Action::Split,
                hand_index: 0,
                ..
            }
        ));
        assert_eq!(round.player(), &player_before);
        assert_eq!(round.shoe().len(), shoe_before);
        assert_eq!(round.phase(), RoundPhase::PlayerTurn(0));
    }

    #[test]
    fn second_split_is_rejected() {
        let mut round = stacked_round(&[
            Rank::Four,
            Rank::Four,
            Rank::Ten,
            Rank::Seven,
            Rank::Four,
            Rank::Four,
        ]);
        round.deal_initial_cards().unwrap();
        round.play_split().unwrap();
        assert!(round.player().hand(0).is_pair());
        let err = round.play_split().unwrap_err();
        assert_eq!(
            err,
            RoundError::InvalidAction {
                action: Action::Split,
                hand_index: 0,
                reason: "only one split is allowed per round",
            }
        );
    }

    #[test]
    fn strategy_asking_for_bad_split_fails_the_round() {
        let mut round = stacked_round(&[Rank::Ten, Rank::Nine, Rank::Ten, Rank::Seven]);
        let result = round.play(&AlwaysSplit, &mut Recorder::default());
        assert!(matches!(result, Err(RoundError::InvalidAction { .. })));
        assert_eq!(round.player().hands().len(), 1);
    }

    #[test]
    fn start_next_round_reuses_the_shoe() {
        let mut round = stacked_round(&[
            Rank::Ten,
            Rank::Nine,
            Rank::Ten,
            Rank::Seven,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
        ]);
        assert!(round.start_next_round().is_err());
        round
            .play(&ReferenceStrategy::Conservative, &mut Recorder::default())
            .unwrap();
        round.start_next_round().unwrap();
        assert_eq!(round.phase(), RoundPhase::Dealing);
        assert_eq!(round.player().hands().len(), 1);
        assert!(round.dealer().hand(0).cards().is_empty());
        round.deal_initial_cards().unwrap();
        assert_eq!(round.player().hand(0).total(), 5);
        assert_eq!(round.dealer().hand(0).total(), 9);
    }

    #[test]
    fn reshuffle_is_reported_to_handler() {
        // Player 10 9 then the stacked cards run out while dealing the dealer.
        let mut round = stacked_round(&[Rank::Ten, Rank::Nine, Rank::Ten]);
        let mut recorder = Recorder::default();
        round
            .play(&ReferenceStrategy::Basic, &mut recorder)
            .unwrap();
        assert_eq!(recorder.reshuffles.first(), Some(&1));
        assert!(round.shoe().reshuffles() >= 1);
    }

    #[test]
    fn settle_hand_rules() {
        let hand = |ranks: &[Rank]| {
            let mut hand = Hand::new();
            for rank in ranks {
                hand.receive_card(card(*rank));
            }
            hand
        };
        let bust = hand(&[Rank::Ten, Rank::Ten, Rank::Two]);
        let twenty = hand(&[Rank::Ten, Rank::Queen]);
        let eighteen = hand(&[Rank::Ten, Rank::Eight]);
        assert_eq!(settle_hand(&bust, &bust), Outcome::Loss);
        assert_eq!(settle_hand(&eighteen, &bust), Outcome::Win);
        assert_eq!(settle_hand(&twenty, &eighteen), Outcome::Win);
        assert_eq!(settle_hand(&eighteen, &twenty), Outcome::Loss);
        assert_eq!(settle_hand(&twenty, &twenty), Outcome::Tie);
    }

    #[test]
    fn card_values_and_display() {
        assert_eq!(card(Rank::Ace).blackjack_value(), 11);
        assert_eq!(card(Rank::Queen).blackjack_value(), 10);
        assert_eq!(card(Rank::Seven).blackjack_value(), 7);
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "TH");
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).to_string(), "AC");
    }
}
