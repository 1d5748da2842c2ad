use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::handle_view_key;

/// Timer display resolution: elapsed time is re-sampled from the wall
/// clock at this cadence while the timer runs.
const TIMER_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    // Session restoration is a one-shot ordering dependency: it must run
    // to completion before any protected view decides to redirect.
    app.session_loading = true;
    let _ = action_tx.send(Action::RestoreSession);

    let mut last_sample = Instant::now();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.session_loading {
            app.throbber_state.calc_next();
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_view_key(key, app, &action_tx);
            }
        }

        // Sampling, not accumulating: the recomputation self-corrects for
        // missed ticks, and a stopped timer leaves nothing behind to cancel.
        if app.timer.is_running() && last_sample.elapsed() >= TIMER_SAMPLE_INTERVAL {
            app.timer.sample();
            last_sample = Instant::now();
        }

        app.prune_notifications();

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app).await?;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
