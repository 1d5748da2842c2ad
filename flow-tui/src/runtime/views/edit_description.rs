use crate::app::{self, App, NotificationLevel};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_edit_description_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('x') | KeyCode::Char('X')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.description_input.clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.description_input.insert(c);
        }
        KeyCode::Backspace => app.description_input.backspace(),
        KeyCode::Left => app.description_input.move_left(),
        KeyCode::Right => app.description_input.move_right(),
        KeyCode::Enter => {
            app.navigate_to(app::View::Tracker);
            app.notify(NotificationLevel::Info, "Description updated");
        }
        KeyCode::Esc => app.navigate_to(app::View::Tracker),
        _ => {}
    }
}
