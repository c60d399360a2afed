use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{Grid, Piece, Player, Status, COLS, ROWS};
use crate::render::GameSnapshot;
use crate::session::Phase;

pub fn render(frame: &mut Frame, snapshot: &GameSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(15),    // Board or setup panel
            Constraint::Length(3),  // Message
            Constraint::Length(4),  // Controls
        ])
        .split(frame.area());

    render_header(frame, snapshot, chunks[0]);
    if snapshot.phase == Phase::Idle {
        render_setup(frame, snapshot, chunks[1]);
    } else {
        render_board(frame, &snapshot.grid, snapshot, chunks[1]);
    }
    render_message(frame, snapshot, chunks[2]);
    render_controls(frame, snapshot.phase, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let (text, color) = match snapshot.phase {
        Phase::Idle => ("New game setup".to_string(), Color::White),
        Phase::AwaitingHuman => (
            format!("Your move ({})", snapshot.current_player.name()),
            player_color(snapshot.current_player),
        ),
        Phase::AwaitingOracle => (
            format!("Oracle thinking ({})", snapshot.current_player.name()),
            player_color(snapshot.current_player),
        ),
        Phase::GameOver => match snapshot.status {
            Status::Win(player) => (format!("{} wins", player.name()), player_color(player)),
            Status::Tie => ("Tie game".to_string(), Color::White),
            Status::InProgress => ("Game over".to_string(), Color::White),
        },
    };

    let header = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_setup(frame: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let side = Line::from(vec![
        Span::raw("Your side:  "),
        Span::styled(
            snapshot.human_side.name(),
            Style::default()
                .fg(player_color(snapshot.human_side))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  (s to switch)"),
    ]);

    let mut level_spans = vec![Span::raw("Level:      ")];
    for level in 1..=5u8 {
        let style = if level == snapshot.level {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        level_spans.push(Span::styled(format!(" {level} "), style));
    }

    let lines = vec![
        Line::raw(""),
        side,
        Line::raw(""),
        Line::from(level_spans),
        Line::raw(""),
        Line::raw("Press Enter to start"),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Setup"));
    frame.render_widget(panel, area);
}

fn render_board(frame: &mut Frame, grid: &Grid, snapshot: &GameSnapshot, area: Rect) {
    let mut lines = Vec::with_capacity(ROWS + 2);

    // Hover row: the candidate column for the player about to move.
    let mut hover = vec![Span::raw(" ")];
    for col in 0..COLS {
        let span = if snapshot.candidate_column == Some(col) {
            Span::styled("  ▼ ", Style::default().fg(player_color(snapshot.current_player)))
        } else {
            Span::raw("    ")
        };
        hover.push(span);
    }
    lines.push(Line::from(hover));

    for row in 0..ROWS {
        let mut spans = vec![Span::raw("|")];
        for col in 0..COLS {
            let (symbol, style) = match grid.get(row, col) {
                Piece::Empty => (" ·  ", Style::default().fg(Color::DarkGray)),
                Piece::PlayerOne => (" ●  ", Style::default().fg(Color::Red)),
                Piece::PlayerTwo => (" ●  ", Style::default().fg(Color::Yellow)),
            };
            spans.push(Span::styled(symbol, style));
        }
        spans.push(Span::raw("|"));
        lines.push(Line::from(spans));
    }

    let mut footer = vec![Span::raw(" ")];
    for col in 0..COLS {
        footer.push(Span::styled(
            format!("  {} ", col + 1),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(footer));

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, area);
}

fn render_message(frame: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let text = snapshot.message.as_deref().unwrap_or("");
    let message = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, area);
}

fn render_controls(frame: &mut Frame, phase: Phase, area: Rect) {
    let keys = match phase {
        Phase::Idle => "s: side | ←/→: level | Enter: start | q: quit",
        Phase::AwaitingHuman => "←/→: select column | Enter: drop | n: new game | q: quit",
        Phase::AwaitingOracle => "r: retry oracle | n: new game | q: quit",
        Phase::GameOver => "n: new game | q: quit",
    };

    let controls = Paragraph::new(keys)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, area);
}
