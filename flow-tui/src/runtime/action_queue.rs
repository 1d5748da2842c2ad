use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Mutations with side effects beyond App state (session/config files).
/// Key handlers enqueue these; the event loop drains and runs them.
#[derive(Debug, Clone)]
pub(super) enum Action {
    /// One-shot startup restore of the persisted portal session.
    RestoreSession,
    SubmitLogin,
    Logout,
    ToggleDarkMode,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
