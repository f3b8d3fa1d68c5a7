use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tictactoe_common::config::ConfigContentProvider;
use tictactoe_common::games::tictactoe::{
    Difficulty, GameResult, GameSession, GameSettings, MoveError, calculate_move,
};
use tictactoe_common::{SessionRng, debug_log, log};

use crate::command::Command;
use crate::config::{ClientConfig, Storage};
use crate::error::ClientError;
use crate::render::{HELP, render_header, render_result, render_scores, render_turn};

/// Drives one terminal session: reads commands, plays the computer's turns and
/// persists settings and scores as they change.
pub struct Runner<R, W, P>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    P: ConfigContentProvider,
{
    session: GameSession,
    rng: Arc<Mutex<SessionRng>>,
    config: ClientConfig,
    storage: Storage<P>,
    input: R,
    output: W,
}

impl<R, W, P> Runner<R, W, P>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    P: ConfigContentProvider,
{
    pub fn new(
        session: GameSession,
        rng: SessionRng,
        config: ClientConfig,
        storage: Storage<P>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            session,
            rng: Arc::new(Mutex::new(rng)),
            config,
            storage,
            input,
            output,
        }
    }

    pub async fn run(&mut self) -> Result<(), ClientError> {
        let intro = format!("{}\nType h for help.\n", render_header(&self.session));
        self.write(&intro).await?;
        self.print_board().await?;

        let mut line = String::new();
        loop {
            if self.session.is_ai_turn() {
                self.play_ai_turn().await?;
                continue;
            }

            if self.session.state().is_in_progress() {
                let prompt = render_turn(&self.session);
                self.write(&prompt).await?;
            } else {
                self.write("> ").await?;
            }

            line.clear();
            if self.input.read_line(&mut line).await? == 0 {
                break;
            }

            match Command::parse(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.handle_command(command).await?,
                Ok(None) => {}
                Err(message) => self.write_line(&message).await?,
            }
        }

        self.write_line("Bye!").await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn handle_command(&mut self, command: Command) -> Result<(), ClientError> {
        match command {
            Command::Place(index) => match self.session.play_human_move(index) {
                Ok(result) => {
                    self.print_board().await?;
                    self.finish_round_if_over(result).await?;
                }
                Err(MoveError::GameOver) => {
                    self.write_line("The round is over. Type n to play again.").await?;
                }
                Err(e) => self.write_line(&e.to_string()).await?,
            },
            Command::NewRound => {
                self.session.new_round();
                self.print_board().await?;
            }
            Command::ResetScores => {
                self.session.reset_statistics();
                self.save_statistics();
                let scores = render_scores(&self.session);
                self.write_line(&scores).await?;
            }
            Command::ShowScores => {
                let scores = render_scores(&self.session);
                self.write_line(&scores).await?;
            }
            Command::SetDifficulty(difficulty) => self.set_difficulty(difficulty).await?,
            Command::ToggleMode => {
                let mut settings = *self.session.settings();
                settings.mode = settings.mode.toggled();
                self.apply_settings(settings).await?;
            }
            Command::Help => self.write_line(HELP).await?,
            Command::Quit => {}
        }
        Ok(())
    }

    async fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), ClientError> {
        let mut settings = *self.session.settings();
        settings.difficulty = difficulty;
        self.apply_settings(settings).await
    }

    async fn apply_settings(&mut self, settings: GameSettings) -> Result<(), ClientError> {
        self.session.update_settings(settings);
        self.config.game = settings;

        // Run-only overrides such as --no-delay stay out of the saved document.
        let mut stored = self.storage.settings.get_config().unwrap_or(self.config);
        stored.game = settings;
        if let Err(e) = self.storage.settings.set_config(&stored) {
            log!("Failed to save settings: {}", e);
        }

        let header = format!("{}. New round started.", render_header(&self.session));
        self.write_line(&header).await?;
        self.print_board().await
    }

    async fn play_ai_turn(&mut self) -> Result<(), ClientError> {
        let Some(input) = self.session.bot_input() else {
            return Ok(());
        };

        let delay = {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            self.config.ai_delay.sample(&mut rng)
        };
        self.write_line("Computer is thinking...").await?;
        self.output.flush().await?;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let rng = Arc::clone(&self.rng);
        let calculated_move = tokio::task::spawn_blocking(move || {
            let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            calculate_move(&input, &mut rng)
        })
        .await?;

        let index = calculated_move.ok_or(MoveError::NoAvailableMove)?;
        debug_log!("Computer ({}) picked cell {} at {}", input.ai_player, index + 1, input.difficulty);
        let result = self.session.apply_ai_move(index)?;

        self.write_line(&format!("Computer plays {}.", index + 1)).await?;
        self.print_board().await?;
        self.finish_round_if_over(result).await
    }

    async fn finish_round_if_over(&mut self, result: GameResult) -> Result<(), ClientError> {
        if !result.is_over() {
            return Ok(());
        }
        self.save_statistics();

        let message = format!(
            "{}\n{}\nType n for a new round or q to quit.",
            render_result(&self.session, &result),
            render_scores(&self.session)
        );
        self.write_line(&message).await
    }

    fn save_statistics(&self) {
        if let Err(e) = self.storage.statistics.set_config(self.session.statistics()) {
            log!("Failed to save statistics: {}", e);
        }
    }

    async fn print_board(&mut self) -> Result<(), ClientError> {
        let board = format!("\n{}\n", self.session.state().board());
        self.write_line(&board).await
    }

    async fn write_line(&mut self, text: &str) -> Result<(), ClientError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        Ok(())
    }

    async fn write(&mut self, text: &str) -> Result<(), ClientError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}
