use crate::app::{self, App};
use crossterm::event::KeyEvent;

use super::action_queue::{Action, ActionTx};

mod confirm_delete;
mod documents;
mod edit_description;
mod manual_entry;
mod portal;
mod reports;
mod selection;
mod tracker;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match &app.current_view {
        app::View::Tracker => tracker::handle_tracker_key(key, app, action_tx),
        app::View::SelectProject | app::View::SelectClient => {
            selection::handle_selection_key(key, app)
        }
        app::View::EditDescription => {
            edit_description::handle_edit_description_key(key, app)
        }
        app::View::ManualEntry => manual_entry::handle_manual_entry_key(key, app),
        app::View::ConfirmDelete => confirm_delete::handle_confirm_delete_key(key, app),
        app::View::Documents => documents::handle_documents_key(key, app, action_tx),
        app::View::Reports => reports::handle_reports_key(key, app, action_tx),
        app::View::PortalLogin => portal::handle_login_key(key, app, action_tx),
        app::View::PortalDashboard => portal::handle_dashboard_key(key, app, action_tx),
        app::View::PortalClientDetails => portal::handle_client_details_key(key, app),
        app::View::PortalProjectDetails => portal::handle_project_details_key(key, app),
        app::View::NotFound => portal::handle_not_found_key(key, app),
    }
}
