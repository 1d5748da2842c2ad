use crate::app::{self, App, PickerTarget, TextInput};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_tracker_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    // Rate overlay takes priority while open.
    if app.rate_overlay.is_some() {
        handle_rate_overlay_key(key, app);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // View switching
        KeyCode::Char('2') => app.navigate_to(app::View::Documents),
        KeyCode::Char('3') => app.navigate_to(app::View::Reports),
        KeyCode::Char('4') => app.navigate_to(app::View::PortalDashboard),
        KeyCode::Char('t') | KeyCode::Char('T') => {
            enqueue_action(action_tx, Action::ToggleDarkMode);
        }

        // Timer controls
        KeyCode::Char(' ') => {
            if app.timer.is_running() {
                app.pause_timer();
            } else {
                app.start_timer();
            }
        }
        KeyCode::Char('s') | KeyCode::Char('S') => app.stop_timer(),

        // Session fields
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.open_picker(PickerTarget::TrackerProject);
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.open_picker(PickerTarget::TrackerClient);
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.navigate_to(app::View::EditDescription);
        }
        KeyCode::Char('b') | KeyCode::Char('B') => {
            app.billable = !app.billable;
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.rate_overlay = Some(TextInput::from_str(&app.rate_input.value));
        }

        // Manual entry modal
        KeyCode::Char('m') | KeyCode::Char('M') => app.open_manual_entry(),

        // Entry list navigation
        KeyCode::Tab => {
            app.focused_box = match app.focused_box {
                app::FocusedBox::Timer => app::FocusedBox::Entries,
                app::FocusedBox::Entries => app::FocusedBox::Timer,
            };
            if app.focused_box == app::FocusedBox::Entries && app.focused_entry.is_none() {
                app.entries_select_next();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.focused_box == app::FocusedBox::Entries {
                app.entries_select_next();
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if app.focused_box == app::FocusedBox::Entries {
                app.entries_select_previous();
            }
        }
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            if app.focused_box == app::FocusedBox::Entries {
                app.request_delete_selected();
            }
        }
        KeyCode::Esc => {
            app.focused_box = app::FocusedBox::Timer;
            app.focused_entry = None;
        }
        _ => {}
    }
}

fn handle_rate_overlay_key(key: KeyEvent, app: &mut App) {
    let Some(input) = &mut app.rate_overlay else {
        return;
    };
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Enter => {
            let input = app.rate_overlay.take().unwrap_or_default();
            if input.value.trim().parse::<f64>().is_ok() {
                app.rate_input = input;
            } else {
                app.notify(app::NotificationLevel::Error, "Invalid hourly rate");
            }
        }
        KeyCode::Esc => {
            app.rate_overlay = None;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{NotificationLevel, TextInput, View};
    use crate::config::FlowConfig;
    use flow_core::provider::SampleData;
    use flow_core::TimerPhase;
    use std::sync::Arc;

    use super::super::super::action_queue::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::new(Arc::new(SampleData::new()), FlowConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        let (tx, _rx) = channel();
        handle_tracker_key(key(code), app, &tx);
    }

    #[test]
    fn space_without_required_fields_refuses_to_start() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char(' '));

        assert_eq!(app.timer.phase(), TimerPhase::Idle);
        let notification = app.latest_notification().expect("expected a notification");
        assert_eq!(notification.level, NotificationLevel::Error);
    }

    #[test]
    fn space_starts_once_session_fields_are_set() {
        let mut app = test_app();
        app.selected_project = Some("Website Redesign".to_string());
        app.selected_client = Some("Acme Inc".to_string());
        app.description_input = TextInput::from_str("Homepage");

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.timer.phase(), TimerPhase::Running);

        // Second space pauses rather than restarting.
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.timer.phase(), TimerPhase::Paused);
    }

    #[test]
    fn stopping_an_instant_timer_keeps_the_ledger_unchanged() {
        let mut app = test_app();
        app.selected_project = Some("Website Redesign".to_string());
        app.selected_client = Some("Acme Inc".to_string());
        app.description_input = TextInput::from_str("Homepage");
        let seeded = app.ledger.len();

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('s'));

        assert_eq!(app.ledger.len(), seeded);
    }

    #[test]
    fn delete_flow_removes_the_selected_entry() {
        let mut app = test_app();
        let seeded = app.ledger.len();
        assert!(seeded >= 1);

        press(&mut app, KeyCode::Tab); // focus entries, selects index 0
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.current_view, View::ConfirmDelete);

        app.confirm_delete();
        assert_eq!(app.ledger.len(), seeded - 1);
        assert_eq!(app.current_view, View::Tracker);
    }

    #[test]
    fn changing_current_rate_leaves_recorded_totals_alone() {
        let mut app = test_app();
        let before = app.ledger.total_billable();
        app.rate_input = TextInput::from_str("999.00");
        assert_eq!(app.ledger.total_billable(), before);
    }

    #[test]
    fn rate_overlay_rejects_garbage() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('r'));
        assert!(app.rate_overlay.is_some());

        // Only digits and dots are accepted into the field at all; confirm
        // an empty value and the old rate survives.
        press(&mut app, KeyCode::Backspace);
        app.rate_overlay = Some(TextInput::from_str(""));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.rate_input.value, "60.00");
    }
}
