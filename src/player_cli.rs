#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdout, StdinLock, Write};
use std::string::String;

use crate::{
    common::{AttackOutcome, GameError},
    grid::{CellState, Coordinate, Grid},
    targeting::draw_cell,
    ui::{render_fleet, render_tracking},
};
use log::warn;
use rand::rngs::SmallRng;

use crate::player::Player;

/// Interactive player reading square labels from `input` and writing boards
/// and prompts to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the player, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one trimmed line. `None` on end of input or a read error.
    pub fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Write `text` without a trailing newline and flush.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    // Notifications have nowhere to report a failed write; the next prompt
    // sees the same error and ends input.
    fn notify(&mut self, text: &str) {
        if let Err(e) = self.say(text) {
            warn!("failed to write to player output: {}", e);
        }
    }

    // Prompt until a valid label is entered; an empty line takes `suggestion`.
    // A failed write ends input like end of file does.
    fn prompt_square(&mut self, suggestion: Option<Coordinate>) -> Option<Coordinate> {
        loop {
            let prompt = match suggestion {
                Some(s) => format!(
                    "\nSelect a square (format column then row, e.g. G3) [{}]\n\n>>> ",
                    s
                ),
                None => String::from("\nSelect a square (format column then row, e.g. G3)\n\n>>> "),
            };
            self.say(&prompt).ok()?;
            let line = self.read_line()?;
            if line.is_empty() {
                if let Some(s) = suggestion {
                    return Some(s);
                }
            }
            match Coordinate::from_label(&line) {
                Some(coord) => return Some(coord),
                None => self.say("\nNot a valid input!\n").ok()?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn choose_placement(&mut self, rng: &mut SmallRng, fleet: &Grid) -> Option<Coordinate> {
        let number = fleet.count(CellState::Occupied) + 1;
        let suggestion = draw_cell(rng, fleet, |state| state == CellState::Empty);
        self.say(&format!("\n{}\nSquare number {}", render_fleet(fleet), number))
            .ok()?;
        self.prompt_square(suggestion)
    }

    fn choose_target(&mut self, rng: &mut SmallRng, tracking: &Grid, fleet: &Grid) -> Option<Coordinate> {
        let suggestion = draw_cell(rng, tracking, |state| state == CellState::Empty);
        self.say(&format!(
            "\nIt's your turn!\n\nYour fleet:\n{}\nTarget tracker:\n{}",
            render_fleet(fleet),
            render_tracking(tracking)
        ))
        .ok()?;
        self.prompt_square(suggestion)
    }

    fn handle_attack_result(&mut self, coord: Coordinate, outcome: AttackOutcome) {
        match outcome {
            AttackOutcome::Hit => self.notify(&format!("\n{} --HIT!--\n", coord)),
            AttackOutcome::Miss => self.notify(&format!("\n{} --MISS!--\n", coord)),
        }
    }

    fn handle_opponent_attack(&mut self, coord: Coordinate, outcome: AttackOutcome) {
        match outcome {
            AttackOutcome::Hit => self.notify(&format!("\nThe opponent fires at {} --THEY HIT!--\n", coord)),
            AttackOutcome::Miss => self.notify(&format!("\nThe opponent fires at {} --THEY MISSED!--\n", coord)),
        }
    }

    fn handle_rejection(&mut self, err: &GameError) {
        self.notify(&format!("\n{}! Pick another square.\n", err));
    }
}
