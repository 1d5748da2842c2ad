use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "flow-tui")]
#[command(about = "Terminal dashboard for FreelanceFlow freelancer management")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the freelancer dashboard
    Run,
    /// Open the client portal
    Portal,
    /// Log in to the client portal from the terminal
    Login,
    /// Remove the saved portal session
    Logout,
    /// Print config path and create default file if missing
    ConfigPath,
}
