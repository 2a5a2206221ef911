use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};
use strum_macros::EnumIter;

use crate::Action;

/// Everything a strategy is allowed to see when the acting hand needs a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionContext {
    /// Current total of the acting hand.
    pub hand_total: u8,
    /// Blackjack value of the dealer's upcard, an Ace counting 11.
    pub dealer_up_value: u8,
    /// Whether `Action::Split` would be accepted right now.
    pub can_split: bool,
}

/// A playing policy. Decisions depend on the context alone, so one value can be
/// shared by every trial of a run, across threads.
pub trait Strategy: Sync {
    fn name(&self) -> String;
    fn decide(&self, context: &DecisionContext) -> Action;
}

/// Threshold policies on the hand total and the dealer upcard. None of them
/// ever splits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize_enum_str, Deserialize_enum_str,
)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceStrategy {
    /// Hit on 11 or less, and on 12 to 16 against a 7 or better.
    Basic,
    /// Hit on 15 or less, and on 16 or 17 against a 9, ten-value or Ace.
    Aggressive,
    /// Hit on 11 or less, and on exactly 12 against a 7 or better.
    Conservative,
}

impl Strategy for ReferenceStrategy {
    fn name(&self) -> String {
        self.to_string()
    }

    fn decide(&self, context: &DecisionContext) -> Action {
        let total = context.hand_total;
        let up = context.dealer_up_value;
        let hit = match self {
            ReferenceStrategy::Basic => total <= 11 || (total <= 16 && up >= 7),
            ReferenceStrategy::Aggressive => {
                total <= 15 || ((16..=17).contains(&total) && (9..=11).contains(&up))
            }
            ReferenceStrategy::Conservative => total <= 11 || (total == 12 && up >= 7),
        };
        if hit {
            Action::Hit
        } else {
            Action::Stand
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn decide(strategy: ReferenceStrategy, hand_total: u8, dealer_up_value: u8) -> Action {
        strategy.decide(&DecisionContext {
            hand_total,
            dealer_up_value,
            can_split: false,
        })
    }

    #[test]
    fn basic_strategy_table() {
        let s = ReferenceStrategy::Basic;
        assert_eq!(decide(s, 11, 2), Action::Hit);
        assert_eq!(decide(s, 12, 6), Action::Stand);
        assert_eq!(decide(s, 12, 7), Action::Hit);
        assert_eq!(decide(s, 16, 11), Action::Hit);
        assert_eq!(decide(s, 17, 11), Action::Stand);
    }

    #[test]
    fn aggressive_strategy_table() {
        let s = ReferenceStrategy::Aggressive;
        assert_eq!(decide(s, 15, 2), Action::Hit);
        assert_eq!(decide(s, 16, 8), Action::Stand);
        assert_eq!(decide(s, 16, 9), Action::Hit);
        assert_eq!(decide(s, 17, 11), Action::Hit);
        assert_eq!(decide(s, 18, 10), Action::Stand);
    }

    #[test]
    fn conservative_strategy_table() {
        let s = ReferenceStrategy::Conservative;
        assert_eq!(decide(s, 11, 10), Action::Hit);
        assert_eq!(decide(s, 12, 6), Action::Stand);
        assert_eq!(decide(s, 12, 7), Action::Hit);
        assert_eq!(decide(s, 13, 11), Action::Stand);
    }

    #[test]
    fn reference_strategies_never_split() {
        for strategy in ReferenceStrategy::iter() {
            for hand_total in 2..=21 {
                for dealer_up_value in 2..=11 {
                    let action = strategy.decide(&DecisionContext {
                        hand_total,
                        dealer_up_value,
                        can_split: true,
                    });
                    assert_ne!(action, Action::Split);
                }
            }
        }
    }

    #[test]
    fn strategy_names_round_trip() {
        for strategy in ReferenceStrategy::iter() {
            assert_eq!(strategy.name().parse::<ReferenceStrategy>().unwrap(), strategy);
        }
        assert_eq!(ReferenceStrategy::Basic.name(), "basic");
        assert!("reckless".parse::<ReferenceStrategy>().is_err());
    }
}
