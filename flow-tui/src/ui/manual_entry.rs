use crate::app::{App, ManualField};
use crate::ui::{utils::centered_rect, Theme};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

pub fn render_manual_entry(frame: &mut Frame, app: &App, _body: Rect, theme: &Theme) {
    let Some(form) = &app.manual_entry else {
        return;
    };

    let area = centered_rect(58, 16, frame.area());
    frame.render_widget(Clear, area);

    let field = |label: &str, value: String, this: ManualField| -> Line<'static> {
        let focused = form.focused == this;
        let label_style = if focused {
            Style::default().fg(theme.highlight)
        } else {
            Style::default().fg(theme.muted)
        };
        let value_style = if focused {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        let cursor = if focused { "█" } else { "" };
        Line::from(vec![
            Span::styled(format!("{:<13}", label), label_style),
            Span::styled(value, value_style),
            Span::styled(cursor, Style::default().fg(theme.highlight)),
        ])
    };

    let pick_or = |value: &Option<String>, hint: &str| {
        value.clone().unwrap_or_else(|| format!("Enter to {}", hint))
    };

    let lines = vec![
        Line::from(""),
        field("Date", form.date_input.value.clone(), ManualField::Date),
        field("Hours", form.hours_input.value.clone(), ManualField::Hours),
        field(
            "Minutes",
            form.minutes_input.value.clone(),
            ManualField::Minutes,
        ),
        field(
            "Description",
            form.description_input.value.clone(),
            ManualField::Description,
        ),
        field(
            "Project",
            pick_or(&form.project, "select project"),
            ManualField::Project,
        ),
        field(
            "Client",
            pick_or(&form.client, "select client"),
            ManualField::Client,
        ),
        field(
            "Billable",
            if form.billable { "[x]" } else { "[ ]" }.to_string(),
            ManualField::Billable,
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(theme.highlight)),
            Span::raw(": Next field  "),
            Span::styled("Ctrl+S", Style::default().fg(theme.highlight)),
            Span::raw(": Save entry  "),
            Span::styled("Esc", Style::default().fg(theme.highlight)),
            Span::raw(": Cancel"),
        ]),
    ];

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused))
            .title(Span::styled(
                " Add Manual Time Entry ",
                Style::default().fg(theme.border_focused),
            ))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(dialog, area);
}
