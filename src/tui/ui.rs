//! Stateless UI rendering for the guessing game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::game::{HINT_COUNT, Phase};

use super::app::App;

/// Renders the whole screen from the app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                     // Title
            Constraint::Length(HINT_COUNT as u16 + 2), // Hints
            Constraint::Length(3),                     // Guess input
            Constraint::Min(4),                        // Status
            Constraint::Length(1),                     // Key help
        ])
        .split(area);

    draw_title(frame, chunks[0], app);
    draw_hints(frame, chunks[1], app);
    draw_input(frame, chunks[2], app);
    draw_status(frame, chunks[3], app);
    draw_help(frame, chunks[4], app);
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let controller = app.controller();
    let text = format!(
        "Who's That Pokémon?   Attempt {}/{}",
        controller.attempts(),
        controller.max_attempts()
    );
    let title = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn draw_hints(frame: &mut Frame, area: Rect, app: &App) {
    let controller = app.controller();
    let visible = controller.visible_hints();

    let lines: Vec<Line> = if controller.phase() == Phase::Loading {
        vec![Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        (0..HINT_COUNT)
            .map(|i| match visible.get(i) {
                Some(hint) => Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::Yellow)),
                    Span::raw(hint.clone()),
                ]),
                None => Line::from(Span::styled(
                    format!("{}. (locked)", i + 1),
                    Style::default().fg(Color::DarkGray),
                )),
            })
            .collect()
    };

    let hints = Paragraph::new(lines).block(Block::default().title("Hints").borders(Borders::ALL));
    frame.render_widget(hints, area);
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App) {
    let playing = app.controller().phase() == Phase::Playing;
    let style = if playing {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = if playing {
        format!("{}_", app.input())
    } else {
        app.input().to_string()
    };
    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().title("Your guess").borders(Borders::ALL));
    frame.render_widget(input, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let controller = app.controller();
    let phase = controller.phase();

    let color = match phase {
        Phase::Won => Color::Green,
        Phase::Lost | Phase::Error => Color::Red,
        Phase::Loading | Phase::Playing => Color::Yellow,
    };

    let mut lines = vec![Line::from(Span::styled(
        controller.message().to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];

    if let Some(error) = controller.error()
        && error != controller.message()
    {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    if matches!(phase, Phase::Won | Phase::Lost)
        && let Some(subject) = controller.subject()
    {
        lines.push(Line::from(format!(
            "#{} {}",
            subject.id(),
            subject.display_name()
        )));
        if let Some(image) = subject.image() {
            lines.push(Line::from(Span::styled(
                image.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let status = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Status").borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_help(frame: &mut Frame, area: Rect, app: &App) {
    let text = match app.controller().phase() {
        Phase::Playing => "Type a name, Enter to guess, Esc to quit",
        Phase::Loading => "Esc to quit",
        Phase::Won | Phase::Lost | Phase::Error => "r / Enter to play again, Esc to quit",
    };
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}
