use crate::app::{App, FocusedBox};
use crate::time_utils::format_display_date;
use crate::ui::{utils::centered_rect, Theme};
use flow_core::{format_currency, format_duration, format_hms};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Padding, Paragraph, Row, Table},
    Frame,
};

pub fn render_tracker_view(frame: &mut Frame, app: &App, body: Rect, theme: &Theme) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(10),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(body);

    render_timer_panel(frame, app, outer[0], theme);
    render_entries_panel(frame, app, outer[1], theme);
    render_controls(frame, outer[2], theme);

    if app.rate_overlay.is_some() {
        render_rate_overlay(frame, app, theme);
    }
}

fn field_line<'a>(label: &'a str, value: String, set: bool, theme: &Theme) -> Line<'a> {
    let value_style = if set {
        Style::default().fg(theme.text)
    } else {
        Style::default().fg(theme.muted)
    };
    Line::from(vec![
        Span::styled(format!("{:<13}", label), Style::default().fg(theme.muted)),
        Span::styled(value, value_style),
    ])
}

fn render_timer_panel(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let focused = app.focused_box == FocusedBox::Timer;
    let border = if focused {
        theme.border_focused
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            " Time Tracker ",
            Style::default().fg(theme.text),
        ))
        .padding(Padding::horizontal(2));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let billable_label = if app.billable {
        format!("${:.2}/h (billable)", app.rate())
    } else {
        "non-billable".to_string()
    };

    let fields = vec![
        field_line(
            "Project *",
            app.selected_project
                .clone()
                .unwrap_or_else(|| "Select project (p)".to_string()),
            app.selected_project.is_some(),
            theme,
        ),
        field_line(
            "Client *",
            app.selected_client
                .clone()
                .unwrap_or_else(|| "Select client (c)".to_string()),
            app.selected_client.is_some(),
            theme,
        ),
        field_line(
            "Activity *",
            if app.description_input.value.is_empty() {
                "What are you working on? (n)".to_string()
            } else {
                app.description_input.value.clone()
            },
            !app.description_input.value.is_empty(),
            theme,
        ),
        field_line("Rate", billable_label, app.billable, theme),
    ];
    frame.render_widget(Paragraph::new(fields), columns[0]);

    // Big clock + live earnings preview
    let mut clock_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format_hms(app.timer.elapsed_seconds()),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    if app.billable && app.timer.elapsed_seconds() > 0 {
        clock_lines.push(Line::from(Span::styled(
            format!("≈ {}", format_currency(app.current_earnings())),
            Style::default().fg(theme.success),
        )));
    }
    let phase = match app.timer.phase() {
        flow_core::TimerPhase::Idle => "idle",
        flow_core::TimerPhase::Running => "tracking",
        flow_core::TimerPhase::Paused => "paused",
    };
    clock_lines.push(Line::from(Span::styled(
        phase,
        Style::default().fg(theme.muted),
    )));

    frame.render_widget(
        Paragraph::new(clock_lines).alignment(Alignment::Center),
        columns[1],
    );
}

fn render_entries_panel(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let focused = app.focused_box == FocusedBox::Entries;
    let border = if focused {
        theme.border_focused
    } else {
        theme.border
    };

    let title = format!(
        " Recent Time Entries — Total: {}  Billable: {} ",
        format_duration(app.ledger.total_duration_seconds()),
        format_currency(app.ledger.total_billable()),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(title, Style::default().fg(theme.text)));

    if app.ledger.is_empty() {
        let empty = Paragraph::new("No time entries yet. Start tracking your time!")
            .style(Style::default().fg(theme.muted))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["Date", "Project / Client", "Description", "Duration", "Amount"])
        .style(Style::default().fg(theme.muted).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .ledger
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let amount = if entry.billable {
                format_currency(entry.amount())
            } else {
                "Non-billable".to_string()
            };
            let style = if focused && app.focused_entry == Some(i) {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            Row::new(vec![
                Cell::from(format_display_date(entry.date)),
                Cell::from(format!("{} / {}", entry.project, entry.client)),
                Cell::from(entry.description.clone()),
                Cell::from(format_duration(entry.duration_seconds)),
                Cell::from(amount),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(13),
            Constraint::Percentage(28),
            Constraint::Percentage(36),
            Constraint::Length(9),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

fn render_controls(frame: &mut Frame, area: Rect, theme: &Theme) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(theme.highlight));
    let text = |t: &'static str| Span::raw(t);
    let controls = Line::from(vec![
        key("Space"),
        text(": Start/Pause  "),
        key("S"),
        text(": Stop & save  "),
        key("M"),
        text(": Manual entry  "),
        key("P/C/N/R/B"),
        text(": Fields  "),
        key("Tab"),
        text(": Entries  "),
        key("X"),
        text(": Delete  "),
        key("T"),
        text(": Theme  "),
        key("Q"),
        text(": Quit"),
    ]);
    let bar = Paragraph::new(controls).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(" Controls ", Style::default().fg(theme.muted))),
    );
    frame.render_widget(bar, area);
}

fn render_rate_overlay(frame: &mut Frame, app: &App, theme: &Theme) {
    let Some(input) = &app.rate_overlay else {
        return;
    };
    let area = centered_rect(40, 5, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("Hourly rate ($): ", Style::default().fg(theme.muted)),
            Span::styled(
                input.value.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Enter: Apply   Esc: Cancel",
            Style::default().fg(theme.muted),
        )),
    ];
    let dialog = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused))
            .title(Span::styled(
                " Hourly Rate ",
                Style::default().fg(theme.border_focused),
            ))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(dialog, area);
}
