#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleships::{
    init_logging, play,
    ui::{MenuChoice, INSTRUCTIONS, MENU},
    CliPlayer, GameSession, Side,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let seed = match cli.command {
        Some(Commands::Play { seed }) => seed,
        None => None,
    };

    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut player = CliPlayer::stdio();
    let mut session = GameSession::new(&mut rng)?;
    loop {
        player.say(&format!("{}\n>>> ", MENU))?;
        let Some(line) = player.read_line() else {
            return Ok(());
        };
        match MenuChoice::parse(&line) {
            Some(MenuChoice::NewGame) => {
                session.reset(&mut rng)?;
                let winner = play(&mut session, &mut player, &mut rng)?;
                match winner {
                    Side::Human => player.say("\nYou win!\n")?,
                    Side::Opponent => player.say("\nComputer wins!\n")?,
                }
                return Ok(());
            }
            Some(MenuChoice::Instructions) => player.say(&format!("\n{}\n", INSTRUCTIONS))?,
            Some(MenuChoice::Quit) => return Ok(()),
            None => player.say("\nNot a valid option!\n\n")?,
        }
    }
}
