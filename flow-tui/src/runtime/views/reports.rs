use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_reports_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('1') | KeyCode::Esc => app.navigate_to(app::View::Tracker),
        KeyCode::Char('2') => app.navigate_to(app::View::Documents),
        KeyCode::Char('4') => app.navigate_to(app::View::PortalDashboard),
        KeyCode::Char('t') | KeyCode::Char('T') => {
            enqueue_action(action_tx, Action::ToggleDarkMode);
        }
        KeyCode::Char('f') | KeyCode::Char('F') => app.report_toggle_timeframe(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => app.report_previous_period(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => app.report_next_period(),
        _ => {}
    }
}
