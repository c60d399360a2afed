//! Terminal front end: the event loop driving the session, and a ratatui
//! renderer for its snapshots.

mod app;
mod game_view;

pub use app::App;

use std::io;

use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::render::{GameSnapshot, Renderer};

/// Renderer drawing snapshots to a ratatui terminal.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        TerminalRenderer { terminal }
    }

    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn draw(&mut self, snapshot: &GameSnapshot) -> io::Result<()> {
        self.terminal
            .draw(|frame| game_view::render(frame, snapshot))?;
        Ok(())
    }
}
