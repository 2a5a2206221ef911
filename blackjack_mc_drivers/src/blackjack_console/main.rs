use anyhow::{anyhow, bail};
use blackjack_mc::{
    Action, ReferenceStrategy, Round, RoundError, RoundPhase, RoundRecord, Shoe, Strategy,
    SummaryRecord,
};
use blackjack_mc_drivers::parse_action;
use clap::Parser;
use dialoguer::{Confirm, Input};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Parser)]
#[command(author, about = "Play Blackjack against the dealer", long_about = None)]
struct CommandLineArgs {
    /// Number of decks in the shoe
    #[arg(short = 'd', long, default_value_t = 1)]
    number_of_decks: u8,

    /// Show what this reference strategy would do at every decision
    #[arg(short, long)]
    strategy: Option<String>,

    /// Seed for the shoe, for replaying a session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = CommandLineArgs::parse();
    if args.number_of_decks == 0 {
        bail!("number of decks must be at least 1");
    }
    let hint = match args.strategy.as_deref() {
        Some(name) => Some(
            name.parse::<ReferenceStrategy>()
                .map_err(|_| anyhow!("unknown strategy {:?}", name))?,
        ),
        None => None,
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // The shoe lasts the whole session.
    let mut round = Round::new(Shoe::new(args.number_of_decks, rng));
    let mut records: Vec<RoundRecord> = Vec::new();
    loop {
        let record = play_round(&mut round, hint)?;
        for (hand_index, outcome) in record.outcomes.iter().enumerate() {
            println!("Hand {}: {}", hand_index + 1, outcome);
        }
        records.push(record);

        let again = Confirm::new()
            .with_prompt("Play another round?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
        round.start_next_round()?;
    }

    println!(
        "{}",
        SummaryRecord::aggregate("console", args.number_of_decks, &records)
    );
    Ok(())
}

fn play_round(round: &mut Round, hint: Option<ReferenceStrategy>) -> anyhow::Result<RoundRecord> {
    let reshuffles = round.shoe().reshuffles();
    round.deal_initial_cards()?;

    while let Some(context) = round.decision_context() {
        let RoundPhase::PlayerTurn(hand_index) = round.phase() else {
            break;
        };
        let hand = round.player().hand(hand_index);
        println!("Hand {}: {} - Score: {}", hand_index + 1, hand, hand.total());
        if let Some(upcard) = round.dealer().upcard() {
            println!("Dealer's upcard: {}", upcard);
        }
        if let Some(strategy) = hint {
            println!("{} strategy recommends to {}", strategy, strategy.decide(&context));
        }

        let input: String = Input::new()
            .with_prompt("Hit (h), Stand (s) or Split (p)")
            .interact_text()?;
        let Some(action) = parse_action(&input) else {
            println!("Invalid action. Enter h to hit, s to stand or p to split.");
            continue;
        };

        let result = match action {
            Action::Hit => round.play_hit().map(|busted| {
                if busted {
                    println!("Hand {} busts!", hand_index + 1);
                }
            }),
            Action::Stand => round.play_stand().map(|_| ()),
            Action::Split => round.play_split().map(|_| println!("Player splits!")),
        };
        match result {
            Ok(()) => {}
            Err(RoundError::InvalidAction { reason, .. }) => println!("Cannot {}: {}", action, reason),
            Err(e) => return Err(e.into()),
        }
    }

    if round.phase() == RoundPhase::DealerTurn {
        round.dealer_plays()?;
    }
    let dealer_hand = round.dealer().hand(0);
    println!("Dealer's hand: {} - Score: {}", dealer_hand, dealer_hand.total());
    if dealer_hand.is_bust() {
        println!("Dealer busts!");
    }
    if round.shoe().reshuffles() != reshuffles {
        println!("Shoe was empty, reshuffled.");
    }
    Ok(round.settle()?)
}
