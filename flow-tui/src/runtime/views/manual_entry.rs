use crate::app::{App, ManualField, PickerTarget};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_manual_entry_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.save_manual_entry();
        }
        KeyCode::Tab => {
            if let Some(form) = &mut app.manual_entry {
                form.focused = form.focused.next();
            }
        }
        KeyCode::BackTab => {
            if let Some(form) = &mut app.manual_entry {
                form.focused = form.focused.prev();
            }
        }
        KeyCode::Enter => {
            let focused = app.manual_entry.as_ref().map(|f| f.focused);
            match focused {
                Some(ManualField::Project) => app.open_picker(PickerTarget::ManualProject),
                Some(ManualField::Client) => app.open_picker(PickerTarget::ManualClient),
                Some(ManualField::Billable) => {
                    if let Some(form) = &mut app.manual_entry {
                        form.billable = !form.billable;
                    }
                }
                // Enter elsewhere saves, matching the modal's primary button.
                _ => app.save_manual_entry(),
            }
        }
        KeyCode::Char(' ') => {
            if let Some(form) = &mut app.manual_entry {
                match form.focused {
                    ManualField::Billable => form.billable = !form.billable,
                    ManualField::Description => form.description_input.insert(' '),
                    _ => {}
                }
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(form) = &mut app.manual_entry {
                match form.focused {
                    ManualField::Date if c.is_ascii_digit() || c == '-' => {
                        form.date_input.insert(c)
                    }
                    ManualField::Hours | ManualField::Minutes if c.is_ascii_digit() => {
                        let input = if form.focused == ManualField::Hours {
                            &mut form.hours_input
                        } else {
                            &mut form.minutes_input
                        };
                        input.insert(c);
                    }
                    ManualField::Description => form.description_input.insert(c),
                    _ => {}
                }
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = &mut app.manual_entry {
                match form.focused {
                    ManualField::Date => form.date_input.backspace(),
                    ManualField::Hours => form.hours_input.backspace(),
                    ManualField::Minutes => form.minutes_input.backspace(),
                    ManualField::Description => form.description_input.backspace(),
                    _ => {}
                }
            }
        }
        KeyCode::Esc => app.cancel_manual_entry(),
        _ => {}
    }
}
