#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::{self, Cursor, Write};

    use battleships::{
        play, AttackOutcome, CellState, CliPlayer, Coordinate, GameError, GameSession, Grid,
        Player,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn player(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        CliPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reprompts_until_valid_label() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut p = player("Z9\nhello\nc4\n");
        let coord = p.choose_placement(&mut rng, &Grid::new());
        assert_eq!(coord, Some(Coordinate::new(3, 2)));
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("Not a valid input!").count(), 2);
        assert!(out.contains("Square number 1"));
    }

    #[test]
    fn test_empty_line_takes_suggestion() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let mut tracking = Grid::new();
        for (coord, _) in Grid::new().cells() {
            if coord != Coordinate::new(4, 4) {
                tracking.set(coord, CellState::Missed).unwrap();
            }
        }
        let mut p = player("\n");
        let coord = p.choose_target(&mut rng, &tracking, &Grid::new());
        assert_eq!(coord, Some(Coordinate::new(4, 4)));
        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("[E5]"));
        assert!(out.contains("Target tracker:"));
    }

    #[test]
    fn test_end_of_input_yields_none() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut p = player("X1\n");
        assert_eq!(p.choose_target(&mut rng, &Grid::new(), &Grid::new()), None);
    }

    #[test]
    fn test_notifications_are_printed() {
        let mut p = player("");
        p.handle_attack_result(Coordinate::new(0, 0), AttackOutcome::Hit);
        p.handle_opponent_attack(Coordinate::new(7, 7), AttackOutcome::Miss);
        p.handle_rejection(&GameError::AlreadyAttacked(Coordinate::new(1, 1)));
        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("A1 --HIT!--"));
        assert!(out.contains("H8 --THEY MISSED!--"));
        assert!(out.contains("B2 was already attacked"));
    }

    #[test]
    fn test_input_closed_mid_game() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut session = GameSession::new(&mut rng).unwrap();
        let mut p = player("A1\nA1\nB1\nC1\nD1\nE1\n");
        let err = play(&mut session, &mut p, &mut rng).unwrap_err();
        assert_eq!(err, GameError::InputClosed);
        assert_eq!(session.human_fleet().placed(), 5);
        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("A1 is already taken"));
    }

    /// Output sink whose writes always fail, like a closed stdout.
    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_closed_output_ends_input() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut p = CliPlayer::new(Cursor::new(b"Z9\nA1\n".to_vec()), ClosedOutput);
        assert!(p.say("hello").is_err());
        assert_eq!(p.choose_placement(&mut rng, &Grid::new()), None);
        assert_eq!(p.choose_target(&mut rng, &Grid::new(), &Grid::new()), None);
        // Notifications swallow the failure without panicking.
        p.handle_attack_result(Coordinate::new(0, 0), AttackOutcome::Hit);
    }

    #[test]
    fn test_closed_output_aborts_game() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut session = GameSession::new(&mut rng).unwrap();
        let mut p = CliPlayer::new(Cursor::new(b"A1\nB1\nC1\nD1\nE1\n".to_vec()), ClosedOutput);
        assert_eq!(play(&mut session, &mut p, &mut rng).unwrap_err(), GameError::InputClosed);
        assert_eq!(session.human_fleet().placed(), 0);
    }
}
