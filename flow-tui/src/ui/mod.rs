use crate::app::{App, NotificationLevel, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

mod delete_dialog;
mod description_editor;
mod documents_view;
mod manual_entry;
mod portal_views;
mod reports_view;
mod selection_views;
mod tracker_view;

pub(crate) mod theme;
pub(crate) mod utils;

pub use theme::Theme;

pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = Theme::from_flag(app.config.dark_mode);

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, root[0], app, &theme);

    let body = root[1];

    // Route guard, render side: a protected view shows only the loading
    // indicator until session restoration has finished.
    if app.current_view.is_protected() && app.session_loading {
        portal_views::render_loading(frame, app, body, &theme);
        render_status_line(frame, root[2], app, &theme);
        return;
    }

    match app.current_view {
        View::Tracker => tracker_view::render_tracker_view(frame, app, body, &theme),
        View::SelectProject => {
            selection_views::render_selection(frame, app, body, &theme, "Select Project")
        }
        View::SelectClient => {
            selection_views::render_selection(frame, app, body, &theme, "Select Client")
        }
        View::EditDescription => {
            description_editor::render_description_editor(frame, app, body, &theme)
        }
        View::ManualEntry => manual_entry::render_manual_entry(frame, app, body, &theme),
        View::ConfirmDelete => delete_dialog::render_delete_confirm_dialog(frame, app, body, &theme),
        View::Documents => documents_view::render_documents_view(frame, app, body, &theme),
        View::Reports => reports_view::render_reports_view(frame, app, body, &theme),
        View::PortalLogin => portal_views::render_login(frame, app, body, &theme),
        View::PortalDashboard => portal_views::render_dashboard(frame, app, body, &theme),
        View::PortalClientDetails => portal_views::render_client_details(frame, app, body, &theme),
        View::PortalProjectDetails => {
            portal_views::render_project_details(frame, app, body, &theme)
        }
        View::NotFound => portal_views::render_not_found(frame, app, body, &theme),
    }

    render_status_line(frame, root[2], app, &theme);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let tab = |label: &str, active: bool| {
        if active {
            Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label), Style::default().fg(theme.muted))
        }
    };

    let in_portal = matches!(
        app.current_view,
        View::PortalLogin
            | View::PortalDashboard
            | View::PortalClientDetails
            | View::PortalProjectDetails
    );

    let line = Line::from(vec![
        Span::styled(
            " FreelanceFlow ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│", Style::default().fg(theme.border)),
        tab("1:Tracker", app.current_view == View::Tracker),
        tab("2:Documents", app.current_view == View::Documents),
        tab("3:Reports", app.current_view == View::Reports),
        tab("4:Client Portal", in_portal),
        Span::styled("│", Style::default().fg(theme.border)),
        Span::styled(
            if app.config.dark_mode {
                "  dark "
            } else {
                "  light "
            },
            Style::default().fg(theme.muted),
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(header, area);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let Some(notification) = app.latest_notification() else {
        return;
    };
    let color = match notification.level {
        NotificationLevel::Success => theme.success,
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
    };
    let prefix = match notification.level {
        NotificationLevel::Success => "✔",
        NotificationLevel::Info => "ℹ",
        NotificationLevel::Warning => "⚠",
        NotificationLevel::Error => "✖",
    };
    let line = Line::from(vec![
        Span::styled(format!(" {} ", prefix), Style::default().fg(color)),
        Span::styled(notification.text.clone(), Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
}
