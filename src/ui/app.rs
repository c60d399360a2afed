use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::game::{Status, COLS};
use crate::oracle::MoveOracle;
use crate::render::Renderer;
use crate::session::{GameSession, Generation, Phase, ResponseOutcome, SessionConfig};

type OracleResult = (Generation, Result<usize, crate::error::OracleError>);

/// The interactive application: owns the session, dispatches oracle turns to
/// the async runtime, and translates key presses into session operations.
pub struct App {
    session: GameSession,
    oracle: Arc<dyn MoveOracle>,
    runtime: tokio::runtime::Handle,
    response_tx: mpsc::UnboundedSender<OracleResult>,
    response_rx: mpsc::UnboundedReceiver<OracleResult>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(
        config: SessionConfig,
        oracle: Arc<dyn MoveOracle>,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        App {
            session: GameSession::new(config),
            oracle,
            runtime,
            response_tx,
            response_rx,
            selected_column: COLS / 2,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop.
    pub fn run<R: Renderer>(&mut self, renderer: &mut R) -> io::Result<()> {
        loop {
            self.pump_oracle();

            let mut snapshot = self.session.snapshot();
            if self.session.phase() == Phase::AwaitingHuman {
                snapshot.candidate_column = Some(self.selected_column);
            }
            if let Some(message) = &self.message {
                snapshot.message = Some(message.clone());
            }
            renderer.draw(&snapshot)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Drain finished oracle calls, then dispatch the next request if the
    /// session has one. Stale generations are discarded on arrival.
    fn pump_oracle(&mut self) {
        while let Ok((generation, result)) = self.response_rx.try_recv() {
            match result {
                Ok(column) => {
                    if self.session.apply_oracle_response(generation, column)
                        == ResponseOutcome::Applied
                    {
                        self.note_game_over();
                    }
                }
                Err(err) => self.session.oracle_failed(generation, err.to_string()),
            }
        }

        // Hold off on re-requesting while a failure is on display; the user
        // retries or abandons.
        if self.session.oracle_error().is_some() {
            return;
        }

        if let Some((generation, request)) = self.session.take_oracle_request() {
            let oracle = Arc::clone(&self.oracle);
            let tx = self.response_tx.clone();
            self.runtime.spawn(async move {
                let result = oracle.choose_move(&request).await;
                let _ = tx.send((generation, result));
            });
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('n') => {
                self.session.reset();
                self.message = None;
                self.selected_column = COLS / 2;
                return;
            }
            _ => {}
        }

        match self.session.phase() {
            Phase::Idle => self.handle_idle_key(key),
            Phase::AwaitingHuman => self.handle_turn_key(key),
            Phase::AwaitingOracle => {
                if key.code == KeyCode::Char('r') {
                    self.session.retry_oracle();
                }
            }
            Phase::GameOver => {}
        }
    }

    /// Pre-game configuration: side and level selection, then start.
    fn handle_idle_key(&mut self, key: KeyEvent) {
        let mut config = self.session.config();
        match key.code {
            KeyCode::Char('s') | KeyCode::Up | KeyCode::Down => {
                config.human_side = config.human_side.other();
                self.session.configure(config);
            }
            KeyCode::Left => {
                if config.level > 1 {
                    config.level -= 1;
                    self.session.configure(config);
                }
            }
            KeyCode::Right => {
                if config.level < 5 {
                    config.level += 1;
                    self.session.configure(config);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.session.start_game();
                self.message = None;
            }
            _ => {}
        }
    }

    fn handle_turn_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                // A full column is a silent no-op; the phase does not change
                // and nothing is reported.
                if self.session.human_move(self.selected_column) {
                    self.note_game_over();
                }
            }
            _ => {}
        }
    }

    fn note_game_over(&mut self) {
        if self.session.phase() != Phase::GameOver {
            return;
        }
        self.message = Some(match self.session.board().status() {
            Status::Win(player) => format!("{} wins", player.name()),
            Status::Tie => "Tie game".to_string(),
            Status::InProgress => unreachable!("game over without outcome"),
        });
    }

    #[cfg(test)]
    fn session(&self) -> &GameSession {
        &self.session
    }
}
