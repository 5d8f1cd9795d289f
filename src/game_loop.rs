//! Top-level driver: configure a session, play it, offer a rematch.

use crate::console::Console;
use crate::game::{Mark, Participant, Session, SessionStatus};
use crate::players::{Computer, Difficulty, HumanInput};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// How the two participant slots are filled.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mode {
    /// Two humans sharing the terminal.
    #[strum(to_string = "Human vs Human")]
    HumanVsHuman,
    /// One human against the computer.
    #[strum(to_string = "Human vs Computer")]
    HumanVsComputer,
}

/// Repeatedly configures and plays sessions until the player declines a
/// rematch.
///
/// Mode and difficulty come from the command line when given; otherwise
/// they are asked interactively before every game, so a rematch can
/// switch opponents.
pub struct GameLoop {
    console: Console,
    mode: Option<Mode>,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
}

impl GameLoop {
    /// Creates the driver. `None` options fall back to interactive
    /// prompts.
    pub fn new(
        console: Console,
        mode: Option<Mode>,
        difficulty: Option<Difficulty>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            console,
            mode,
            difficulty,
            seed,
        }
    }

    /// Runs games until the player declines to continue.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let mut session = self.configure_session().await?;
            let status = session.run(&self.console).await?;
            self.present_outcome(&session, status)?;

            if !self.console.confirm("\n🔄 Play again? (y/n): ").await? {
                break;
            }
        }

        self.console.farewell();
        Ok(())
    }

    /// Builds a session for the chosen mode and difficulty.
    async fn configure_session(&mut self) -> Result<Session> {
        let mode = match self.mode {
            Some(mode) => mode,
            None => self.console.choose_mode().await?,
        };

        let session = match mode {
            Mode::HumanVsHuman => {
                info!(%mode, "configuring session");
                Session::new(
                    self.human("Player 1", Mark::X),
                    self.human("Player 2", Mark::O),
                )
            }
            Mode::HumanVsComputer => {
                let difficulty = match self.difficulty {
                    Some(difficulty) => difficulty,
                    None => self.console.choose_difficulty().await?,
                };
                info!(%mode, %difficulty, seed = ?self.seed, "configuring session");

                let computer = match self.seed {
                    Some(seed) => Computer::seeded(Mark::O, difficulty, seed),
                    None => Computer::new(Mark::O, difficulty),
                };
                Session::new(
                    self.human("Player", Mark::X),
                    Participant::new("Computer", Mark::O, Box::new(computer)),
                )
            }
        };

        Ok(session)
    }

    fn human(&self, name: &str, mark: Mark) -> Participant {
        Participant::new(name, mark, Box::new(HumanInput::new(self.console.clone())))
    }

    /// Shows the final board and announces the outcome.
    fn present_outcome(&self, session: &Session, status: SessionStatus) -> Result<()> {
        self.console.clear_screen()?;
        self.console.render_board(session.board());

        match status {
            SessionStatus::Won(mark) => {
                let name = session
                    .participant(mark)
                    .map(Participant::name)
                    .unwrap_or("Unknown");
                self.console.announce_winner(name);
            }
            SessionStatus::Draw => self.console.announce_draw(),
            SessionStatus::InProgress => {}
        }

        Ok(())
    }
}
