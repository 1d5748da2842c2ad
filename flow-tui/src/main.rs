mod app;
mod cli;
mod config;
mod runtime;
mod session_store;
mod time_utils;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::sync::Arc;

use app::App;
use cli::{Cli, Commands};
use config::FlowConfig;
use flow_core::provider::{DataProvider, SampleData};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run => run_dashboard(app::View::Tracker).await,
        Commands::Portal => run_dashboard(app::View::PortalDashboard).await,
        Commands::Login => login(),
        Commands::Logout => logout(),
        Commands::ConfigPath => config_path(),
    }
}

async fn run_dashboard(initial_view: app::View) -> Result<()> {
    let config = FlowConfig::load()?;
    let provider: Arc<dyn DataProvider> = Arc::new(SampleData::new());
    let mut app = App::new(provider, config);

    if initial_view != app::View::Tracker {
        // Restoration has not run yet; the guard must wait for it instead
        // of bouncing straight to the login form.
        app.session_loading = true;
        app.navigate_to(initial_view);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Terminal login flow for the client portal: prompt for credentials,
/// validate against the provider, persist the session on success.
fn login() -> Result<()> {
    let provider = SampleData::new();

    print!("Email: ");
    io::stdout().flush()?;
    let mut email = String::new();
    io::stdin().read_line(&mut email)?;
    let password = rpassword::prompt_password("Password: ")?;

    match flow_core::authenticate(&provider.credentials(), email.trim(), &password) {
        Ok(session) => {
            session_store::save_session(&session)?;
            println!("Logged in as {} ({}). Session saved.", session.name, session.company);
            Ok(())
        }
        Err(e) => {
            // Same generic message for unknown email and wrong password.
            anyhow::bail!("{}", e)
        }
    }
}

fn logout() -> Result<()> {
    session_store::clear_session()?;
    println!("Session cleared.");
    Ok(())
}

fn config_path() -> Result<()> {
    let path = FlowConfig::config_path()?;
    if !path.exists() {
        FlowConfig::default().save()?;
        println!("Created default config at {}", path.display());
    } else {
        println!("{}", path.display());
    }
    Ok(())
}
