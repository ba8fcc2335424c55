use blackjack_ev::{parse_ranks, Decision, EvCalculator, Hand, Shoe};
use blackjack_ev_drivers::load_rule;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file. Defaults to ~/.blackjack.yml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Player cards, e.g. "A,7"
    #[arg(short, long)]
    player: String,

    /// Dealer cards, usually only the up card
    #[arg(short, long)]
    dealer: String,

    /// Number of decks, overriding the config
    #[arg(long)]
    decks: Option<u8>,

    /// Cards already dealt from the shoe, besides the player and dealer cards
    #[arg(short, long, default_value_t = String::new())]
    seen: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CommandLineArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CommandLineArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut rule = load_rule(args.config.as_deref())?;
    if let Some(decks) = args.decks {
        rule.number_of_decks = decks;
        rule = rule.normalized();
    }

    let player_hand = Hand::from_abbreviations(&args.player)?;
    let dealer_hand = Hand::from_abbreviations(&args.dealer)?;
    let seen = parse_ranks(&args.seen)?;

    let mut shoe = Shoe::new(rule.number_of_decks);
    shoe.remove_all(player_hand.cards())?;
    shoe.remove_all(dealer_hand.cards())?;
    shoe.remove_all(&seen)?;

    println!(
        "Shoe: {} decks, {} cards left, running count {:+}, true count {:+.2}",
        shoe.number_of_decks(),
        shoe.len(),
        shoe.running_count(),
        shoe.true_count()
    );
    println!("Player {} vs dealer {}", player_hand, dealer_hand);

    let mut calculator = EvCalculator::new(rule);
    log::debug!("{:#?}", calculator.rule());
    let situation = calculator.evaluate_situation(&shoe.card_count(), &player_hand, &dealer_hand)?;
    let (best_decision, _) = situation.best();
    for decision in [
        Decision::Stand,
        Decision::Hit,
        Decision::Double,
        Decision::Split,
        Decision::Surrender,
    ] {
        let ex = match situation.get(decision) {
            Some(ex) => format!("{:+.3}%", ex * 100.0),
            None => String::from("-"),
        };
        let marker = if decision == best_decision { " <=" } else { "" };
        println!("{:<10}{:>10}{}", decision.to_string(), ex, marker);
    }
    log::info!(
        "Evaluated {} states, best action {}",
        calculator.cache_len(),
        best_decision
    );
    Ok(())
}
