use crate::app::App;
use crate::ui::{utils::centered_rect, Theme};
use flow_core::format_duration;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

pub fn render_delete_confirm_dialog(frame: &mut Frame, app: &App, _body: Rect, theme: &Theme) {
    let Some(ctx) = &app.delete_context else {
        return;
    };

    let area = centered_rect(52, 8, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Delete this time entry? This cannot be undone.",
            Style::default().fg(theme.text),
        )),
        Line::from(vec![
            Span::styled(
                ctx.label.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", format_duration(ctx.duration_seconds)),
                Style::default().fg(theme.muted),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Y/Enter", Style::default().fg(theme.error)),
            Span::raw(": Delete  "),
            Span::styled("N/Esc", Style::default().fg(theme.highlight)),
            Span::raw(": Keep"),
        ]),
    ];

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.error))
            .title(Span::styled(
                " Delete Entry ",
                Style::default().fg(theme.error),
            ))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(dialog, area);
}
