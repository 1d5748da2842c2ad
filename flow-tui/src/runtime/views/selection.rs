use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One handler serves both pickers; the app remembers which field the
/// result feeds back into.
pub(super) fn handle_selection_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.picker_input.clear();
            app.filter_picker();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.picker_input.insert(c);
            app.filter_picker();
        }
        KeyCode::Backspace => {
            app.picker_input.backspace();
            app.filter_picker();
        }
        KeyCode::Down => app.picker_select_next(),
        KeyCode::Up => app.picker_select_previous(),
        KeyCode::Enter => app.confirm_picker(),
        KeyCode::Esc => app.cancel_picker(),
        _ => {}
    }
}
