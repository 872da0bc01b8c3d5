//! Play Othello in the terminal, against the computer or another person.

use anyhow::{Context, Result};
use clap::Parser;
use flank_othello::{Location, Placement, Player, Session};
use flank_player::{ComputerPlayer, Difficulty, HardPolicy, Opponent, PlayConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flank-play")]
#[command(about = "Play Othello against the computer in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML config file. Missing files fall back to defaults.
    #[arg(short, long, default_value = "flank.toml")]
    config: PathBuf,

    /// Computer strength: easy, medium or hard
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Evaluation used by the hard tier: positional or differential
    #[arg(long)]
    hard_policy: Option<HardPolicy>,

    /// The colour the computer plays
    #[arg(long)]
    computer: Option<Player>,

    /// Two people share the terminal; the computer never moves
    #[arg(long)]
    two_player: bool,

    /// Seed for the easy tier's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    think_time_ms: Option<u64>,

    /// Print the default config file and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    /// Command-line flags take precedence over the config file.
    fn apply(&self, mut config: PlayConfig) -> PlayConfig {
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(hard_policy) = self.hard_policy {
            config.hard_policy = hard_policy;
        }
        if let Some(computer) = self.computer {
            config.computer = computer;
        }
        if let Some(think_time_ms) = self.think_time_ms {
            config.think_time_ms = think_time_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.two_player |= self.two_player;
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.print_config {
        print!("{}", PlayConfig::default_toml()?);
        return Ok(());
    }

    let config = PlayConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let config = cli.apply(config);
    config.validate()?;
    info!(?config, "starting game");

    run(&config)
}

fn build_opponent(config: &PlayConfig) -> Option<Opponent> {
    if config.two_player {
        return None;
    }

    let computer = match config.seed {
        Some(seed) => ComputerPlayer::seeded(config.difficulty, seed),
        None => ComputerPlayer::new(config.difficulty),
    };
    Some(Opponent::new(
        config.computer,
        computer.with_hard_policy(config.hard_policy),
    ))
}

fn report(placement: &Placement) {
    println!(
        "{} plays {} and flips {}",
        placement.player, placement.location, placement.flipped
    );
    if let Some(passed) = placement.passed {
        println!("{} has no legal moves and passes.", passed);
    }
}

fn run(config: &PlayConfig) -> Result<()> {
    let mut session = Session::new();
    let mut opponent = build_opponent(config);
    let think_time = Duration::from_millis(config.think_time_ms);

    if let Some(opponent) = &opponent {
        println!(
            "You play {}; the computer plays {} on {}.",
            opponent.color().opponent(),
            opponent.color(),
            config.difficulty
        );
    }
    println!("Enter moves like `d3`. `restart` starts over, `quit` exits.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if let Some(opponent) = opponent.as_mut() {
            while opponent.to_move(&session) {
                thread::sleep(think_time);
                if let Some(placement) = opponent.step(&mut session)? {
                    report(&placement);
                }
            }
        }

        println!("\n{}", session);
        if session.is_over().is_some() {
            println!("Type `restart` to play again or `quit` to exit.");
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim().to_ascii_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "restart" | "r" => session.reset(),
            input => match input.parse::<Location>() {
                Ok(location) => match session.play(location) {
                    Ok(placement) => report(&placement),
                    Err(err) => println!("Can't play {}: {}", location, err),
                },
                Err(err) => println!("{}", err),
            },
        }
    }

    Ok(())
}
