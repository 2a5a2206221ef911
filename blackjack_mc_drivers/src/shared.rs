use blackjack_mc::{
    Action, ReferenceStrategy, SimulationError, SimulationRunner, SummaryRecord,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("unknown strategy {0:?}")]
    UnknownStrategy(String),

    #[error("at least one strategy is required")]
    NoStrategies,

    #[error("number_of_decks must list at least one value, each at least 1")]
    InvalidDecks,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: ConfigSimulation,
    #[serde(default)]
    pub output: ConfigOutput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigSimulation {
    pub strategies: Vec<String>,
    pub number_of_decks: Vec<u8>,
    pub trials: usize,
    pub seed: Option<u64>,
    pub number_of_threads: usize,
    pub persistent_shoe: bool,
}

impl Default for ConfigSimulation {
    /// The reference grid: every reference strategy against 1, 2, 4, 6 and 8 decks.
    fn default() -> Self {
        ConfigSimulation {
            strategies: vec![
                String::from("basic"),
                String::from("aggressive"),
                String::from("conservative"),
            ],
            number_of_decks: vec![1, 2, 4, 6, 8],
            trials: 1000,
            seed: None,
            number_of_threads: 1,
            persistent_shoe: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOutput {
    pub csv_path: Option<String>,
}

/// Every (strategy, number of decks) combination to run, and how to run it.
#[derive(Debug, Clone)]
pub struct SweepPlan {
    pub strategies: Vec<ReferenceStrategy>,
    pub number_of_decks: Vec<u8>,
    pub trials: usize,
    pub runner: SimulationRunner,
}

impl TryInto<SweepPlan> for ConfigSimulation {
    type Error = ConfigError;

    fn try_into(self) -> Result<SweepPlan, Self::Error> {
        if self.strategies.is_empty() {
            return Err(ConfigError::NoStrategies);
        }
        if self.number_of_decks.is_empty() || self.number_of_decks.contains(&0) {
            return Err(ConfigError::InvalidDecks);
        }
        let strategies = self
            .strategies
            .iter()
            .map(|name| {
                name.parse::<ReferenceStrategy>()
                    .map_err(|_| ConfigError::UnknownStrategy(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut runner = SimulationRunner::new()
            .with_number_of_threads(self.number_of_threads)
            .with_persistent_shoe(self.persistent_shoe);
        if let Some(seed) = self.seed {
            runner = runner.with_seed(seed);
        }

        Ok(SweepPlan {
            strategies,
            number_of_decks: self.number_of_decks,
            trials: self.trials,
            runner,
        })
    }
}

impl SweepPlan {
    /// Runs every combination, strategy-major, one summary each.
    pub fn run(&self) -> Result<Vec<SummaryRecord>, SimulationError> {
        let mut summaries = Vec::with_capacity(self.strategies.len() * self.number_of_decks.len());
        for strategy in &self.strategies {
            log::info!("running simulations for {}", strategy);
            for &number_of_decks in &self.number_of_decks {
                summaries.push(self.runner.run(strategy, self.trials, number_of_decks)?);
            }
        }
        Ok(summaries)
    }
}

/// Reads the content of a given config file and parses it to a Config.
pub fn parse_config_from_file(filename: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let filename = filename.as_ref();
    let file_content =
        fs::read_to_string(filename).map_err(|e| ConfigError::Io(filename.to_path_buf(), e))?;
    parse_config(&file_content)
}

pub fn parse_config(yaml: &str) -> Result<Config, ConfigError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Writes one CSV row per summary. Score lists are quoted and comma-joined.
pub fn write_csv<W: Write>(summaries: &[SummaryRecord], mut writer: W) -> std::io::Result<()> {
    writeln!(
        writer,
        "Strategy,Num_Decks,Wins,Losses,Ties,House Edge,Player Scores,Dealer Scores"
    )?;
    for summary in summaries {
        writeln!(
            writer,
            "{},{},{},{},{},{:.2}%,\"{}\",\"{}\"",
            summary.strategy_name,
            summary.number_of_decks,
            summary.wins,
            summary.losses,
            summary.ties,
            summary.house_edge_pct,
            join_scores(&summary.player_scores),
            join_scores(&summary.dealer_scores),
        )?;
    }
    writer.flush()
}

fn join_scores(scores: &[u8]) -> String {
    scores
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parses console input: `h`, `s`, `p` or a full action name, any case.
/// Returns None for anything else.
pub fn parse_action(input: &str) -> Option<Action> {
    match input.trim().to_lowercase().as_str() {
        "h" => Some(Action::Hit),
        "s" => Some(Action::Stand),
        "p" => Some(Action::Split),
        other => other.parse().ok(),
    }
}
