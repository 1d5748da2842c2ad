use crate::app::{App, LoginField};
use crate::time_utils::format_display_date;
use crate::ui::{utils::centered_rect, Theme};
use flow_core::domain::{ClientStatus, Project, ProjectStatus};
use flow_core::format_currency;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

/// Shown for protected views while session restoration is in flight.
pub fn render_loading(frame: &mut Frame, app: &mut App, body: Rect, theme: &Theme) {
    let area = centered_rect(26, 1, body);
    let throbber_area = Rect {
        x: area.x,
        y: area.y,
        width: 1,
        height: 1,
    };
    let label_area = Rect {
        x: area.x + 2,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(theme.accent))
        .throbber_style(Style::default().fg(theme.accent))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(throbber_widgets_tui::WhichUse::Spin);
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Restoring session...",
            Style::default().fg(theme.muted),
        )),
        label_area,
    );
}

pub fn render_login(frame: &mut Frame, app: &App, body: Rect, theme: &Theme) {
    let area = centered_rect(52, 13, body);
    frame.render_widget(Clear, area);

    let form = &app.login_form;
    let email_focused = form.focused == Some(LoginField::Email);
    let password_focused = form.focused == Some(LoginField::Password);

    let field_style = |focused: bool| {
        if focused {
            Style::default().fg(theme.highlight)
        } else {
            Style::default().fg(theme.muted)
        }
    };
    let value_style = |focused: bool| {
        if focused {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        }
    };

    let password_display = "•".repeat(form.password_input.value.len());

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Sign in to view your projects",
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Email:    ", field_style(email_focused)),
            Span::styled(form.email_input.value.clone(), value_style(email_focused)),
        ]),
        Line::from(vec![
            Span::styled("Password: ", field_style(password_focused)),
            Span::styled(password_display, value_style(password_focused)),
        ]),
        Line::from(""),
    ];

    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme.error),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Tab", Style::default().fg(theme.highlight)),
        Span::raw(": Switch field  "),
        Span::styled("Enter", Style::default().fg(theme.highlight)),
        Span::raw(": Sign in  "),
        Span::styled("Esc", Style::default().fg(theme.highlight)),
        Span::raw(": Back"),
    ]));
    lines.push(Line::from(Span::styled(
        "Demo: client@example.com / password123",
        Style::default().fg(theme.muted),
    )));

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused))
            .title(Span::styled(
                " Client Portal ",
                Style::default().fg(theme.border_focused),
            ))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(dialog, area);
}

fn progress_bar(progress: u8, width: usize, theme: &Theme) -> Vec<Span<'static>> {
    let filled = (progress as usize * width) / 100;
    vec![
        Span::styled("█".repeat(filled), Style::default().fg(theme.accent)),
        Span::styled(
            "░".repeat(width.saturating_sub(filled)),
            Style::default().fg(theme.border),
        ),
        Span::styled(format!(" {}%", progress), Style::default().fg(theme.muted)),
    ]
}

fn status_span(status: ProjectStatus, theme: &Theme) -> Span<'static> {
    let color = match status {
        ProjectStatus::Completed => theme.success,
        ProjectStatus::InProgress => theme.info,
        ProjectStatus::NotStarted => theme.muted,
    };
    Span::styled(status.label(), Style::default().fg(color))
}

pub fn render_dashboard(frame: &mut Frame, app: &App, body: Rect, theme: &Theme) {
    let Some(session) = &app.session else {
        return;
    };

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(body);

    let welcome = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("Welcome, {}", session.name),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  — {}", session.company),
                Style::default().fg(theme.muted),
            ),
        ]),
        Line::from(Span::styled(
            format!("Filter: {}  (F to change)", app.portal_filter.label()),
            Style::default().fg(theme.muted),
        )),
    ]);
    frame.render_widget(welcome, outer[0]);

    let projects = app.portal_projects();
    if projects.is_empty() {
        let empty = Paragraph::new("No projects match this filter")
            .style(Style::default().fg(theme.muted))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, outer[1]);
    } else {
        let items: Vec<ListItem> = projects
            .iter()
            .enumerate()
            .map(|(i, p)| project_card(p, i == app.portal_project_index, theme))
            .collect();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(Span::styled(
                    " Your Projects ",
                    Style::default().fg(theme.text),
                )),
        );
        frame.render_widget(list, outer[1]);
    }

    let controls = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(theme.highlight)),
        Span::raw(": Project details  "),
        Span::styled("C", Style::default().fg(theme.highlight)),
        Span::raw(": Account details  "),
        Span::styled("F", Style::default().fg(theme.highlight)),
        Span::raw(": Filter  "),
        Span::styled("L", Style::default().fg(theme.highlight)),
        Span::raw(": Log out  "),
        Span::styled("Esc", Style::default().fg(theme.highlight)),
        Span::raw(": Dashboard"),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(" Controls ", Style::default().fg(theme.muted))),
    );
    frame.render_widget(controls, outer[2]);
}

fn project_card(project: &Project, selected: bool, theme: &Theme) -> ListItem<'static> {
    let name_style = if selected {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    };
    let marker = if selected { "› " } else { "  " };

    let mut meta = vec![
        Span::raw("    "),
        status_span(project.status, theme),
        Span::styled(
            format!("  due {}", format_display_date(project.due_date)),
            Style::default().fg(theme.muted),
        ),
    ];
    if project.pending_approvals > 0 {
        meta.push(Span::styled(
            format!("  {} pending approval(s)", project.pending_approvals),
            Style::default().fg(theme.warning),
        ));
    }

    let mut progress = vec![Span::raw("    ")];
    progress.extend(progress_bar(project.progress, 24, theme));

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(marker.to_string(), name_style),
            Span::styled(project.name.clone(), name_style),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(project.description.clone(), Style::default().fg(theme.muted)),
        ]),
        Line::from(meta),
        Line::from(progress),
        Line::from(""),
    ])
}

pub fn render_client_details(frame: &mut Frame, app: &App, body: Rect, theme: &Theme) {
    let client = app
        .portal_detail_client
        .as_deref()
        .and_then(|id| app.provider.client(id));
    let Some(client) = client else {
        render_missing(frame, body, theme, "Client record unavailable");
        return;
    };

    let outer = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);

    let label = |l: &str| Span::styled(format!("{:<10}", l), Style::default().fg(theme.muted));
    let value = |v: String| Span::styled(v, Style::default().fg(theme.text));

    let status = match client.status {
        ClientStatus::Active => Span::styled("active", Style::default().fg(theme.success)),
        ClientStatus::Inactive => Span::styled("inactive", Style::default().fg(theme.muted)),
    };

    let info = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                client.company.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            status,
        ]),
        Line::from(""),
        Line::from(vec![label("Contact"), value(client.name.clone())]),
        Line::from(vec![label("Email"), value(client.email.clone())]),
        Line::from(vec![label("Phone"), value(client.phone.clone())]),
        Line::from(vec![
            label("Address"),
            value(format!(
                "{}, {}, {} {}, {}",
                client.address.street,
                client.address.city,
                client.address.state,
                client.address.zip_code,
                client.address.country
            )),
        ]),
        Line::from(vec![label("Website"), value(client.website.clone())]),
        Line::from(vec![label("Tax ID"), value(client.tax_id.clone())]),
        Line::from(""),
        Line::from(Span::styled(
            client.notes.clone(),
            Style::default().fg(theme.muted),
        )),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(
                " Account Details ",
                Style::default().fg(theme.text),
            ))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(info, outer[0]);

    // Project summary column
    let projects = app.provider.projects_for_client(&client.id);
    let mut lines: Vec<Line> = vec![Line::from("")];
    for p in &projects {
        lines.push(Line::from(vec![
            Span::styled(
                p.name.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            status_span(p.status, theme),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "  {:.0}h tracked of {:.0}h est — {}",
                p.total_tracked_hours,
                p.estimated_hours,
                format_currency(p.tracked_value())
            ),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Esc: Back to dashboard",
        Style::default().fg(theme.muted),
    )));

    let summary = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(" Projects ", Style::default().fg(theme.text)))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(summary, outer[1]);
}

pub fn render_project_details(frame: &mut Frame, app: &App, body: Rect, theme: &Theme) {
    let project = app
        .portal_detail_project
        .as_deref()
        .and_then(|id| app.provider.project(id));
    let Some(project) = project else {
        render_missing(frame, body, theme, "Project record unavailable");
        return;
    };

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(8), Constraint::Min(4)])
        .split(body);

    let mut progress = vec![Span::styled(
        "Progress  ",
        Style::default().fg(theme.muted),
    )];
    progress.extend(progress_bar(project.progress, 30, theme));

    let meta = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                project.name.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            status_span(project.status, theme),
        ]),
        Line::from(Span::styled(
            project.description.clone(),
            Style::default().fg(theme.muted),
        )),
        Line::from(progress),
        Line::from(vec![
            Span::styled("Timeline  ", Style::default().fg(theme.muted)),
            Span::styled(
                format!(
                    "{} → {}",
                    format_display_date(project.start_date),
                    format_display_date(project.due_date)
                ),
                Style::default().fg(theme.text),
            ),
        ]),
        Line::from(vec![
            Span::styled("Budget    ", Style::default().fg(theme.muted)),
            Span::styled(
                format!(
                    "{} at ${:.0}/h — {} tracked so far",
                    format_currency(project.budget),
                    project.hourly_rate,
                    format_currency(project.tracked_value())
                ),
                Style::default().fg(theme.text),
            ),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(
                " Project Details ",
                Style::default().fg(theme.text),
            ))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(meta, outer[0]);

    let items = app.provider.work_items(&project.id);
    let mut lines: Vec<Line> = Vec::new();
    if items.is_empty() {
        lines.push(Line::from(Span::styled(
            "No work logged yet",
            Style::default().fg(theme.muted),
        )));
    }
    for item in &items {
        let amount = item.hours * project.hourly_rate;
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<14}", format_display_date(item.date)),
                Style::default().fg(theme.muted),
            ),
            Span::styled(format!("{:<42}", item.description), Style::default().fg(theme.text)),
            Span::styled(format!("{:>5.1}h  ", item.hours), Style::default().fg(theme.text)),
            Span::styled(
                if item.billable {
                    format_currency(amount)
                } else {
                    "Non-billable".to_string()
                },
                Style::default().fg(theme.success),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc: Back to dashboard",
        Style::default().fg(theme.muted),
    )));

    let log = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(" Logged Work ", Style::default().fg(theme.text)))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(log, outer[1]);
}

pub fn render_not_found(frame: &mut Frame, app: &App, body: Rect, theme: &Theme) {
    let message = app
        .not_found_message
        .clone()
        .unwrap_or_else(|| "Page not found".to_string());
    let lines = vec![
        Line::from(Span::styled(
            "404",
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(theme.text))),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/Esc: Go back",
            Style::default().fg(theme.muted),
        )),
    ];
    let area = centered_rect(50, 7, body);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.warning)),
        ),
        area,
    );
}

fn render_missing(frame: &mut Frame, body: Rect, theme: &Theme, message: &str) {
    let empty = Paragraph::new(message.to_string())
        .style(Style::default().fg(theme.muted))
        .alignment(Alignment::Center);
    frame.render_widget(empty, body);
}
