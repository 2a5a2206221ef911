use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::{
    simulation::{shoe::Shoe, LoggingHandler, Round, RoundRecord},
    strategy::Strategy,
    SimulationError, SummaryRecord,
};

/// Runs many independent rounds for one strategy and deck count.
///
/// Each trial gets its own shoe seeded from a per-trial seed. Those seeds are
/// drawn up front from the master seed, so a run gives the same records with
/// any number of threads.
#[derive(Debug, Clone, Default)]
pub struct SimulationRunner {
    seed: Option<u64>,
    number_of_threads: usize,
    persistent_shoe: bool,
}

impl SimulationRunner {
    /// A sequential runner with a seed drawn from entropy at each run.
    pub fn new() -> Self {
        SimulationRunner {
            seed: None,
            number_of_threads: 1,
            persistent_shoe: false,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// 0 means one thread per available core.
    pub fn with_number_of_threads(mut self, number_of_threads: usize) -> Self {
        self.number_of_threads = number_of_threads;
        self
    }

    /// Deal every trial of a run from one shoe instead of a fresh shoe per trial.
    /// Such runs are always sequential.
    pub fn with_persistent_shoe(mut self, persistent_shoe: bool) -> Self {
        self.persistent_shoe = persistent_shoe;
        self
    }

    /// Runs `trial_count` rounds and aggregates them.
    pub fn run<S: Strategy + ?Sized>(
        &self,
        strategy: &S,
        trial_count: usize,
        number_of_decks: u8,
    ) -> Result<SummaryRecord, SimulationError> {
        let records = self.run_trials(strategy, trial_count, number_of_decks)?;
        let summary = SummaryRecord::aggregate(strategy.name(), number_of_decks, &records);
        log::info!(
            "{} with {} deck(s): {} wins, {} losses, {} ties, house edge {:.2}%",
            summary.strategy_name,
            number_of_decks,
            summary.wins,
            summary.losses,
            summary.ties,
            summary.house_edge_pct
        );
        Ok(summary)
    }

    /// Runs `trial_count` rounds and returns one record per round, in trial order.
    pub fn run_trials<S: Strategy + ?Sized>(
        &self,
        strategy: &S,
        trial_count: usize,
        number_of_decks: u8,
    ) -> Result<Vec<RoundRecord>, SimulationError> {
        if number_of_decks == 0 {
            return Err(SimulationError::InvalidDeckCount(number_of_decks));
        }
        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!(
            "running {} trials of {} with {} deck(s), seed {}",
            trial_count,
            strategy.name(),
            number_of_decks,
            seed
        );

        if self.persistent_shoe {
            return self.run_with_persistent_shoe(strategy, trial_count, number_of_decks, seed);
        }

        let mut master = StdRng::seed_from_u64(seed);
        let trial_seeds: Vec<u64> = (0..trial_count).map(|_| master.gen()).collect();

        let number_of_threads = self.resolve_number_of_threads();
        if number_of_threads <= 1 {
            return trial_seeds
                .iter()
                .enumerate()
                .map(|(trial, &trial_seed)| run_trial(strategy, number_of_decks, trial, trial_seed))
                .collect();
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(number_of_threads)
            .build()?;
        pool.install(|| {
            trial_seeds
                .par_iter()
                .enumerate()
                .map(|(trial, &trial_seed)| run_trial(strategy, number_of_decks, trial, trial_seed))
                .collect()
        })
    }

    fn run_with_persistent_shoe<S: Strategy + ?Sized>(
        &self,
        strategy: &S,
        trial_count: usize,
        number_of_decks: u8,
        seed: u64,
    ) -> Result<Vec<RoundRecord>, SimulationError> {
        if self.resolve_number_of_threads() > 1 {
            log::warn!("a persistent shoe is shared by every trial, running sequentially");
        }
        let mut round = Round::new(Shoe::new(number_of_decks, StdRng::seed_from_u64(seed)));
        let mut handler = LoggingHandler::default();
        let mut records = Vec::with_capacity(trial_count);
        for trial in 0..trial_count {
            if trial > 0 {
                round
                    .start_next_round()
                    .map_err(|source| SimulationError::Round { trial, source })?;
            }
            let record = round
                .play(strategy, &mut handler)
                .map_err(|source| SimulationError::Round { trial, source })?;
            records.push(record);
        }
        Ok(records)
    }

    fn resolve_number_of_threads(&self) -> usize {
        if self.number_of_threads == 0 {
            match std::thread::available_parallelism() {
                Ok(n) => n.get(),
                Err(_) => 1,
            }
        } else {
            self.number_of_threads
        }
    }
}

fn run_trial<S: Strategy + ?Sized>(
    strategy: &S,
    number_of_decks: u8,
    trial: usize,
    trial_seed: u64,
) -> Result<RoundRecord, SimulationError> {
    let shoe = Shoe::new(number_of_decks, StdRng::seed_from_u64(trial_seed));
    let mut round = Round::new(shoe);
    round
        .play(strategy, &mut LoggingHandler::new(trial as u64))
        .map_err(|source| SimulationError::Round { trial, source })
}
