use std::fmt::Display;

use serde::Serialize;

use crate::{simulation::RoundRecord, Outcome};

/// The summary of one run, one row per (strategy, number of decks) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub strategy_name: String,
    pub number_of_decks: u8,
    pub wins: u64,
    pub losses: u64,
    pub ties: u64,
    /// `(losses - wins) / hands * 100`. 0 when no hand was played.
    pub house_edge_pct: f64,
    /// Final total of the first player hand, one per trial.
    pub player_scores: Vec<u8>,
    /// Final dealer total, one per trial.
    pub dealer_scores: Vec<u8>,
}

impl SummaryRecord {
    /// Counts every outcome of every hand, split hands included, while the
    /// score lists keep one entry per trial.
    pub fn aggregate(
        strategy_name: impl Into<String>,
        number_of_decks: u8,
        records: &[RoundRecord],
    ) -> Self {
        let mut wins = 0;
        let mut losses = 0;
        let mut ties = 0;
        let mut player_scores = Vec::with_capacity(records.len());
        let mut dealer_scores = Vec::with_capacity(records.len());
        for record in records {
            for outcome in &record.outcomes {
                match outcome {
                    Outcome::Win => wins += 1,
                    Outcome::Loss => losses += 1,
                    Outcome::Tie => ties += 1,
                }
            }
            player_scores.push(record.primary_player_score());
            dealer_scores.push(record.dealer_final_score);
        }

        SummaryRecord {
            strategy_name: strategy_name.into(),
            number_of_decks,
            wins,
            losses,
            ties,
            house_edge_pct: house_edge_pct(wins, losses, ties),
            player_scores,
            dealer_scores,
        }
    }

    pub fn total_hands(&self) -> u64 {
        self.wins + self.losses + self.ties
    }

    pub fn win_pct(&self) -> f64 {
        percentage(self.wins, self.total_hands())
    }

    pub fn loss_pct(&self) -> f64 {
        percentage(self.losses, self.total_hands())
    }

    pub fn tie_pct(&self) -> f64 {
        percentage(self.ties, self.total_hands())
    }

    pub fn average_player_score(&self) -> f64 {
        average(&self.player_scores)
    }

    pub fn average_dealer_score(&self) -> f64 {
        average(&self.dealer_scores)
    }
}

pub fn house_edge_pct(wins: u64, losses: u64, ties: u64) -> f64 {
    let total = wins + losses + ties;
    if total == 0 {
        return 0.0;
    }
    (losses as f64 - wins as f64) / total as f64 * 100.0
}

fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn average(scores: &[u8]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let sum: u64 = scores.iter().map(|&s| s as u64).sum();
    sum as f64 / scores.len() as f64
}

impl Display for SummaryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const WIDTH: usize = 60;
        const TEXT_WIDTH: usize = "average dealer score".len() + 10;
        const NUM_WIDTH: usize = WIDTH - TEXT_WIDTH;
        writeln!(
            f,
            "{:-^WIDTH$}",
            format!(" {} / {} deck(s) ", self.strategy_name, self.number_of_decks)
        )?;
        writeln!(f, "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}", "total hands", self.total_hands())?;
        for (label, count, pct) in [
            ("wins", self.wins, self.win_pct()),
            ("losses", self.losses, self.loss_pct()),
            ("ties", self.ties, self.tie_pct()),
        ] {
            writeln!(
                f,
                "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
                label,
                format!("{} ({:.2}%)", count, pct)
            )?;
        }
        writeln!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$.2}",
            "average player score",
            self.average_player_score()
        )?;
        writeln!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$.2}",
            "average dealer score",
            self.average_dealer_score()
        )?;
        write!(
            f,
            "{:<TEXT_WIDTH$}{:>NUM_WIDTH$}",
            "house edge",
            format!("{:.2}%", self.house_edge_pct)
        )
    }
}
