//! Terminal input and presentation collaborator.
//!
//! Owns the only stdin reader in the process. Clones share it, so human
//! participants and the game loop all prompt through the same handle.

use crate::game::{Board, Mark, Position, Square};
use crate::game_loop::Mode;
use crate::players::Difficulty;
use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::Write;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing::debug;

/// Shared handle on terminal input and output.
#[derive(Clone)]
pub struct Console {
    lines: Arc<Mutex<Lines<BufReader<Stdin>>>>,
}

impl Console {
    /// Creates a console over the process's stdin and stdout.
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines())),
        }
    }

    /// Prints a prompt and reads one trimmed line.
    async fn read_line(&self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        std::io::stdout().flush()?;

        let mut lines = self.lines.lock().await;
        let line = lines
            .next_line()
            .await?
            .context("input stream closed")?;
        Ok(line.trim().to_string())
    }

    /// Reads a move, re-prompting until the line is two integers in 0-2.
    pub async fn read_move(&self) -> Result<Position> {
        loop {
            let line = self
                .read_line("Enter your move (row and column 0-2, e.g. 1 2): ")
                .await?;

            let mut parts = line.split_whitespace();
            let row = parts.next().and_then(|s| s.parse::<usize>().ok());
            let col = parts.next().and_then(|s| s.parse::<usize>().ok());

            if parts.next().is_none() {
                if let (Some(row), Some(col)) = (row, col) {
                    if let Some(pos) = Position::new(row, col) {
                        debug!(%pos, "read move from terminal");
                        return Ok(pos);
                    }
                }
            }

            println!("Invalid input. Please enter two numbers between 0 and 2.");
        }
    }

    /// Asks a yes/no question, re-prompting until the answer is clear.
    pub async fn confirm(&self, prompt: &str) -> Result<bool> {
        loop {
            let answer = self.read_line(prompt).await?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => println!("Please answer y or n."),
            }
        }
    }

    /// Asks which game mode to play.
    pub async fn choose_mode(&self) -> Result<Mode> {
        let modes: Vec<Mode> = Mode::iter().collect();
        let menu = modes
            .iter()
            .enumerate()
            .map(|(i, m)| format!("({}) {m}", i + 1))
            .collect::<Vec<_>>()
            .join(" | ");

        loop {
            let line = self.read_line(&format!("Select game mode {menu}: ")).await?;
            if let Ok(n) = line.parse::<usize>() {
                if (1..=modes.len()).contains(&n) {
                    return Ok(modes[n - 1]);
                }
            }
            println!("Please enter a number between 1 and {}.", modes.len());
        }
    }

    /// Asks which difficulty tier the computer should play at.
    pub async fn choose_difficulty(&self) -> Result<Difficulty> {
        let tiers: Vec<Difficulty> = Difficulty::iter().collect();
        let menu = tiers
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}={t}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");

        loop {
            let line = self
                .read_line(&format!("Select difficulty ({menu}): "))
                .await?;
            if let Ok(n) = line.parse::<usize>() {
                if (1..=tiers.len()).contains(&n) {
                    return Ok(tiers[n - 1]);
                }
            }
            println!("Please enter a number between 1 and {}.", tiers.len());
        }
    }

    /// Clears the visible screen and homes the cursor.
    pub fn clear_screen(&self) -> Result<()> {
        execute!(std::io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    /// Renders the board as a 3x3 grid with `|` and `---+---+---`
    /// separators, blank lines before and after.
    pub fn render_board(&self, board: &Board) {
        println!();
        for (i, row) in Position::ALL.chunks(3).enumerate() {
            let line = row
                .iter()
                .map(|&pos| match board.square(pos) {
                    Square::Empty => "   ".to_string(),
                    Square::Occupied(mark) => format!(" {mark} "),
                })
                .collect::<Vec<_>>()
                .join("|");
            println!("{line}");
            if i < 2 {
                println!("---+---+---");
            }
        }
        println!();
    }

    /// Announces whose turn it is.
    pub fn announce_turn(&self, name: &str, mark: Mark) {
        println!("{name}'s turn ({mark}):");
    }

    /// Warns that the proposed square was occupied.
    pub fn warn_invalid_move(&self) {
        println!("❌ Invalid move. Try again.");
    }

    /// Announces the winner.
    pub fn announce_winner(&self, name: &str) {
        println!("🎉 {name} wins!");
    }

    /// Announces a draw.
    pub fn announce_draw(&self) {
        println!("🤝 It's a draw!");
    }

    /// Says goodbye when the player declines a rematch.
    pub fn farewell(&self) {
        println!("👋 Thanks for playing! Goodbye.");
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
