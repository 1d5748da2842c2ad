use crate::app::App;
use crate::ui::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

pub fn render_selection(frame: &mut Frame, app: &App, body: Rect, theme: &Theme, title: &str) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(body);

    // Search input
    let (before, after) = app.picker_input.split_at_cursor();
    let search = Paragraph::new(Line::from(vec![
        Span::styled(before.to_string(), Style::default().fg(theme.text)),
        Span::styled("█", Style::default().fg(theme.highlight)),
        Span::styled(after.to_string(), Style::default().fg(theme.text)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused))
            .title(Span::styled(
                format!(" {} — type to filter ", title),
                Style::default().fg(theme.text),
            ))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(search, outer[0]);

    // Result list
    let items: Vec<ListItem> = app
        .filtered_items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == app.filtered_index {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let marker = if i == app.filtered_index { "› " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(item.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(list, outer[1]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(theme.highlight)),
        Span::raw(": Navigate  "),
        Span::styled("Enter", Style::default().fg(theme.highlight)),
        Span::raw(": Select  "),
        Span::styled("Esc", Style::default().fg(theme.highlight)),
        Span::raw(": Cancel  "),
        Span::styled("Ctrl+X", Style::default().fg(theme.highlight)),
        Span::raw(": Clear filter"),
    ]));
    frame.render_widget(hints, outer[2]);
}
