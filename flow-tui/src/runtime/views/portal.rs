use crate::app::{self, App, LoginField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_login_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            app.login_form.focused = Some(match app.login_form.focused {
                Some(LoginField::Email) => LoginField::Password,
                _ => LoginField::Email,
            });
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            match app.login_form.focused {
                Some(LoginField::Password) => app.login_form.password_input.insert(c),
                _ => app.login_form.email_input.insert(c),
            }
        }
        KeyCode::Backspace => match app.login_form.focused {
            Some(LoginField::Password) => app.login_form.password_input.backspace(),
            _ => app.login_form.email_input.backspace(),
        },
        KeyCode::Enter => {
            enqueue_action(action_tx, Action::SubmitLogin);
        }
        KeyCode::Esc => app.navigate_to(app::View::Tracker),
        _ => {}
    }
}

pub(super) fn handle_dashboard_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('1') | KeyCode::Esc => app.navigate_to(app::View::Tracker),
        KeyCode::Char('t') | KeyCode::Char('T') => {
            enqueue_action(action_tx, Action::ToggleDarkMode);
        }
        KeyCode::Char('f') | KeyCode::Char('F') => app.portal_cycle_filter(),
        KeyCode::Down | KeyCode::Char('j') => app.portal_select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.portal_select_previous(),
        KeyCode::Enter => {
            let id = app
                .portal_projects()
                .get(app.portal_project_index)
                .map(|p| p.id.clone());
            if let Some(id) = id {
                app.open_portal_project(&id);
            }
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            let id = app.session.as_ref().map(|s| s.id.clone());
            if let Some(id) = id {
                app.open_portal_client(&id);
            }
        }
        KeyCode::Char('l') | KeyCode::Char('L') => {
            enqueue_action(action_tx, Action::Logout);
        }
        _ => {}
    }
}

pub(super) fn handle_client_details_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
            app.portal_detail_client = None;
            app.navigate_to(app::View::PortalDashboard);
        }
        _ => {}
    }
}

pub(super) fn handle_project_details_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
            app.portal_detail_project = None;
            app.navigate_to(app::View::PortalDashboard);
        }
        _ => {}
    }
}

pub(super) fn handle_not_found_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.not_found_message = None;
            let view = app.return_view;
            app.navigate_to(view);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}
