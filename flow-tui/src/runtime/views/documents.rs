use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use flow_core::MoveDirection;

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_documents_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if app.editor.is_some() {
        handle_editor_key(key, app);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('1') | KeyCode::Esc => app.navigate_to(app::View::Tracker),
        KeyCode::Char('3') => app.navigate_to(app::View::Reports),
        KeyCode::Char('4') => app.navigate_to(app::View::PortalDashboard),
        KeyCode::Char('t') | KeyCode::Char('T') => {
            enqueue_action(action_tx, Action::ToggleDarkMode);
        }
        KeyCode::Tab => app.toggle_template_kind(),
        KeyCode::Down | KeyCode::Char('j') => app.template_select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.template_select_previous(),
        KeyCode::Enter => app.open_template_editor(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.new_template(),
        _ => {}
    }
}

fn handle_editor_key(key: KeyEvent, app: &mut App) {
    // Rename / content inputs take priority while open.
    if overlay_input_active(app) {
        handle_editor_input_key(key, app);
        return;
    }

    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.save_template_editor();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(editor) = &mut app.editor {
                let last = editor.template.sections.len().saturating_sub(1);
                editor.selected_section = (editor.selected_section + 1).min(last);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(editor) = &mut app.editor {
                editor.selected_section = editor.selected_section.saturating_sub(1);
            }
        }
        KeyCode::Char('J') => app.editor_move_section(MoveDirection::Down),
        KeyCode::Char('K') => app.editor_move_section(MoveDirection::Up),
        KeyCode::Char('a') | KeyCode::Char('A') => app.editor_add_section(),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.editor_delete_section(),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if let Some(editor) = &mut app.editor {
                if let Some(section) = editor.template.sections.get(editor.selected_section) {
                    editor.rename_input = Some(app::TextInput::from_str(&section.title));
                }
            }
        }
        KeyCode::Enter => {
            if let Some(editor) = &mut app.editor {
                if let Some(section) = editor.template.sections.get(editor.selected_section) {
                    editor.content_input = Some(app::TextInput::from_str(&section.content));
                }
            }
        }
        // Closing without Ctrl+S discards the working copy.
        KeyCode::Esc => app.close_template_editor(),
        _ => {}
    }
}

fn overlay_input_active(app: &App) -> bool {
    app.editor
        .as_ref()
        .map(|e| e.rename_input.is_some() || e.content_input.is_some())
        .unwrap_or(false)
}

fn handle_editor_input_key(key: KeyEvent, app: &mut App) {
    let mut commit_error: Option<String> = None;

    if let Some(editor) = &mut app.editor {
        let renaming = editor.rename_input.is_some();
        let input = match (&mut editor.rename_input, &mut editor.content_input) {
            (Some(input), _) => input,
            (None, Some(input)) => input,
            (None, None) => return,
        };

        match key.code {
            // Content is markdown; Shift+Enter inserts a line break there.
            KeyCode::Enter if !renaming && key.modifiers.contains(KeyModifiers::SHIFT) => {
                input.insert('\n');
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Enter => {
                let value = input.value.clone();
                let section_id = editor
                    .template
                    .sections
                    .get(editor.selected_section)
                    .map(|s| s.id.clone());
                if let Some(id) = section_id {
                    let result = if renaming {
                        editor.rename_input = None;
                        editor.template.rename_section(&id, &value)
                    } else {
                        editor.content_input = None;
                        editor.template.set_section_content(&id, &value)
                    };
                    if let Err(e) = result {
                        commit_error = Some(e.to_string());
                    }
                }
            }
            KeyCode::Esc => {
                editor.rename_input = None;
                editor.content_input = None;
            }
            _ => {}
        }
    }

    if let Some(message) = commit_error {
        app.notify(app::NotificationLevel::Error, message);
    }
}
