use anyhow::Result;

use crate::app::{App, NotificationLevel, View};
use crate::session_store;

use super::action_queue::Action;

pub(super) async fn run_action(action: Action, app: &mut App) -> Result<()> {
    match action {
        Action::RestoreSession => restore_session(app),
        Action::SubmitLogin => submit_login(app),
        Action::Logout => logout(app),
        Action::ToggleDarkMode => toggle_dark_mode(app),
    }
    Ok(())
}

/// Read the persisted session, if any, and only then let protected views
/// decide whether to redirect. This must complete before the guard acts,
/// otherwise a logged-in user would see a flash-redirect to the login form.
fn restore_session(app: &mut App) {
    match session_store::load_session() {
        Ok(session) => app.session = session,
        Err(e) => {
            app.session = None;
            app.notify(
                NotificationLevel::Warning,
                format!("Could not restore session: {}", e),
            );
        }
    }
    app.session_loading = false;
    app.enforce_route_guard();
}

fn submit_login(app: &mut App) {
    let email = app.login_form.email_input.value.trim().to_string();
    let password = app.login_form.password_input.value.clone();

    match flow_core::authenticate(&app.provider.credentials(), &email, &password) {
        Ok(session) => {
            if let Err(e) = session_store::save_session(&session) {
                app.notify(
                    NotificationLevel::Warning,
                    format!("Could not persist session: {}", e),
                );
            }
            let name = session.name.clone();
            app.session = Some(session);
            app.login_form.error = None;
            app.navigate_to(View::PortalDashboard);
            app.notify(NotificationLevel::Success, format!("Welcome back, {}", name));
        }
        Err(e) => {
            // Generic message; nothing persisted on failure.
            app.login_form.error = Some(e.to_string());
            app.login_form.password_input.clear();
        }
    }
}

fn logout(app: &mut App) {
    app.session = None;
    if let Err(e) = session_store::clear_session() {
        app.notify(
            NotificationLevel::Warning,
            format!("Could not clear saved session: {}", e),
        );
    }
    app.navigate_to(View::PortalLogin);
    app.notify(NotificationLevel::Info, "Logged out");
}

fn toggle_dark_mode(app: &mut App) {
    app.config.dark_mode = !app.config.dark_mode;
    if let Err(e) = app.config.save() {
        app.notify(
            NotificationLevel::Warning,
            format!("Could not save config: {}", e),
        );
    }
    let mode = if app.config.dark_mode { "Dark" } else { "Light" };
    app.notify(NotificationLevel::Info, format!("{} mode activated", mode));
}
