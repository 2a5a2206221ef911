use anyhow::Context;
use blackjack_mc_drivers::{parse_config_from_file, write_csv, Config, SweepPlan};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;

const DEFAULT_CONFIG_PATH: &str = "~/.blackjack_mc.yml";

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file. The reference grid is used when the
    /// default file does not exist
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,

    /// Number of trials per strategy and deck count, overrides the config
    #[arg(short, long)]
    trials: Option<usize>,

    /// Master seed, overrides the config
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where to write the CSV rows, overrides the config
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = CommandLineArgs::parse();

    let mut config = load_config(&args.config)?;
    if let Some(trials) = args.trials {
        config.simulation.trials = trials;
    }
    if args.seed.is_some() {
        config.simulation.seed = args.seed;
    }
    if args.output.is_some() {
        config.output.csv_path = args.output;
    }

    let plan: SweepPlan = config.simulation.try_into()?;
    let summaries = plan.run()?;
    for summary in &summaries {
        println!("{}\n", summary);
    }

    if let Some(path) = &config.output.csv_path {
        let file = File::create(path).with_context(|| format!("cannot create {}", path))?;
        write_csv(&summaries, BufWriter::new(file))?;
        log::info!("wrote {} rows to {}", summaries.len(), path);
    }
    Ok(())
}

fn load_config(path: &str) -> anyhow::Result<Config> {
    if path != DEFAULT_CONFIG_PATH {
        return Ok(parse_config_from_file(path)?);
    }
    let Some(home_dir) = home::home_dir() else {
        log::warn!("cannot find home directory, using the reference grid");
        return Ok(Config::default());
    };
    let config_file_path = home_dir.join(".blackjack_mc.yml");
    if config_file_path.is_file() {
        Ok(parse_config_from_file(config_file_path)?)
    } else {
        log::info!(
            "{} does not exist, using the reference grid",
            config_file_path.display()
        );
        Ok(Config::default())
    }
}
