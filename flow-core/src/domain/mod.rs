mod client;
mod project;
mod report;
mod session;
mod template;
mod time_entry;

pub use client::*;
pub use project::*;
pub use report::*;
pub use session::*;
pub use template::*;
pub use time_entry::*;
