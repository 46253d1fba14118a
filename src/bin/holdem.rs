use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use holdem::cards::Deck;
use holdem::cards::Hand;
use holdem::census::Census;
use holdem::equity::Equity;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, global = true, help = "Worker threads for enumeration (default: all cores)")]
    threads: Option<usize>,
    #[arg(long, global = true, help = "Also write a debug log file into this directory")]
    log_dir: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Log debug output to the terminal")]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Evaluate and describe a hand of cards", alias = "ev")]
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    #[command(about = "Count hand classes over every (or a sample of) n-card hands")]
    Census {
        #[arg(long, default_value_t = 5)]
        cards: usize,
        #[arg(long)]
        samples: Option<usize>,
    },
    #[command(about = "Compute showdown equity between two or more holdings", alias = "eq")]
    Equity {
        #[arg(long = "hole", required = true, num_args = 1)]
        holes: Vec<String>,
        #[arg(long, default_value = "")]
        board: String,
        #[arg(long, help = "Monte Carlo rounds instead of exact enumeration")]
        rounds: Option<usize>,
    },
    #[command(about = "Deal random hands and describe them")]
    Sample {
        #[arg(long, default_value_t = 7)]
        cards: usize,
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    holdem::log(args.verbose, args.log_dir.as_deref()).context("initialize logger")?;
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configure thread pool")?;
    }
    match args.command {
        Command::Eval { cards } => eval(&cards.join(" ")),
        Command::Census { cards, samples } => census(cards, samples),
        Command::Equity {
            holes,
            board,
            rounds,
        } => equity(&holes, &board, rounds),
        Command::Sample { cards, count } => sample(cards, count),
    }
}

fn eval(cards: &str) -> anyhow::Result<()> {
    let hand = Hand::try_from(cards).with_context(|| format!("invalid hand {:?}", cards))?;
    let (value, description) = hand.classify();
    println!("{}", hand);
    println!("{:#010x} {}", u32::from(value), description);
    Ok(())
}

fn census(cards: usize, samples: Option<usize>) -> anyhow::Result<()> {
    anyhow::ensure!((1..=7).contains(&cards), "census covers 1 to 7 cards, got {}", cards);
    let census = match samples {
        Some(samples) => Census::sample(cards, samples),
        None => Census::exhaust(cards),
    };
    println!("{}", census);
    Ok(())
}

fn equity(holes: &[String], board: &str, rounds: Option<usize>) -> anyhow::Result<()> {
    let holes = holes
        .iter()
        .map(|hole| {
            Hand::try_from(hole.as_str()).with_context(|| format!("invalid hole {:?}", hole))
        })
        .collect::<anyhow::Result<Vec<Hand>>>()?;
    let board = Hand::try_from(board).with_context(|| format!("invalid board {:?}", board))?;
    let equities = match rounds {
        Some(rounds) => Equity::simulate(&holes, board, rounds),
        None => Equity::enumerate(&holes, board),
    }
    .context("compute equity")?;
    for (hole, equity) in holes.iter().zip(equities) {
        println!("{:<12}{}", hole.to_string(), equity);
    }
    Ok(())
}

fn sample(cards: usize, count: usize) -> anyhow::Result<()> {
    anyhow::ensure!(cards <= Hand::mask().count_ones() as usize, "cannot deal {} cards", cards);
    let ref mut rng = rand::rng();
    for _ in 0..count {
        let hand = Deck::new().deal(cards, rng);
        let (_, description) = hand.classify();
        println!("{:<24}{}", hand.to_string(), description);
    }
    Ok(())
}
