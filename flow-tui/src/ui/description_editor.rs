use crate::app::App;
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

pub fn render_description_editor(frame: &mut Frame, app: &App, body: Rect, theme: &Theme) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(body);

    let (before, after) = app.description_input.split_at_cursor();
    let input = Paragraph::new(Line::from(vec![
        Span::styled(before.to_string(), Style::default().fg(theme.text)),
        Span::styled("█", Style::default().fg(theme.highlight)),
        Span::styled(after.to_string(), Style::default().fg(theme.text)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused))
            .title(Span::styled(
                " What are you working on? ",
                Style::default().fg(theme.text),
            ))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(input, outer[0]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(theme.highlight)),
        Span::raw(": Confirm  "),
        Span::styled("Esc", Style::default().fg(theme.highlight)),
        Span::raw(": Cancel  "),
        Span::styled("Ctrl+X", Style::default().fg(theme.highlight)),
        Span::raw(": Clear"),
    ]));
    frame.render_widget(hints, outer[1]);
}
