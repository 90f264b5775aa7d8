use battleships::{init_logging, play, AiPlayer, GameSession};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut player = AiPlayer::new();
    let mut session = GameSession::new(&mut rng)?;
    let winner = play(&mut session, &mut player, &mut rng)?;

    let result = json!({
        "seed": seed,
        "winner": winner,
        "attacks": session.attacks(),
        "human_remaining": session.human_fleet().remaining(),
        "opponent_remaining": session.opponent_fleet().remaining(),
        "rejections": player.rejections(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
