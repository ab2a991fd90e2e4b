//! TUI rendering with ratatui
//!
//! Panels for the breach terminal: masked target, breach-stage checklist,
//! message log, and session stats.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{StageMark, guessed_line, stage_line, stage_marks};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Decryption interface
            Constraint::Percentage(40), // System status
        ])
        .split(chunks[1]);

    render_decryption_panel(f, app, main_chunks[0]);
    render_status_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("SECURE ACCESS TERMINAL v1.0")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn render_decryption_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Masked word
            Constraint::Min(5),    // Message log
        ])
        .split(area);

    let word = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            app.round.masked_display(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("[{}]", app.round.category()),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" DECRYPTION INTERFACE ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(word, chunks[0]);

    render_messages(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(format!("> {}", msg.text)).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" LOG ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status_panel(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "BREACH STAGE:",
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for (stage, mark) in stage_marks(app.round.breach_level()) {
        let style = match mark {
            StageMark::Passed => Style::default().fg(Color::Red).add_modifier(Modifier::DIM),
            StageMark::Active => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            StageMark::Pending => Style::default().fg(Color::Green),
        };
        lines.push(Line::from(Span::styled(stage_line(stage, mark), style)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Guessed Letters:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        guessed_line(&app.round.guessed_sorted()),
        Style::default().fg(Color::Cyan),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Hints used: {}", app.round.hints_used())));

    let border_color = if app.round.breach_level() > 0 {
        Color::Red
    } else {
        Color::Green
    };

    let status = Paragraph::new(lines).block(
        Block::default()
            .title(" SYSTEM STATUS ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    f.render_widget(status, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => {
            if app.round.won() {
                (
                    " ACCESS GRANTED | 'n' re-initialize, 'q' quit ",
                    String::new(),
                    Color::Green,
                )
            } else {
                (
                    " SYSTEM COMPROMISED | 'n' re-initialize, 'q' quit ",
                    String::new(),
                    Color::Red,
                )
            }
        }
        InputMode::Guessing => (
            " ENTER KEY (letter or full password) | TAB hint | ESC quit ",
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let stage = Paragraph::new(format!("Stage: {}", app.round.breach_stage()))
        .alignment(Alignment::Center);
    f.render_widget(stage, chunks[0]);

    let stats_text = format!(
        "Wins: {} | Losses: {}",
        app.advisor.wins(),
        app.advisor.losses()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!(
        "Streak: {} | Difficulty: {}",
        app.advisor.streak(),
        app.advisor.recommended_difficulty()
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help = Paragraph::new("Enter: Submit | TAB: Hint | ESC: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
