use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_confirm_delete_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_delete();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.delete_context = None;
            app.navigate_to(app::View::Tracker);
        }
        _ => {}
    }
}
