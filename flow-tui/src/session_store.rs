use anyhow::{Context, Result};
use flow_core::domain::ClientSession;
use std::path::{Path, PathBuf};
#[cfg(unix)]
use std::{io::Write, os::unix::fs::OpenOptionsExt};

fn root_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Cannot determine config directory")?
        .join("flow-tui"))
}

fn secure_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?
            .write_all(content.as_bytes())?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}

pub fn session_path() -> Result<PathBuf> {
    Ok(root_path()?.join("session"))
}

/// Read the persisted portal session. Absent or empty file means logged
/// out; the stored record is trusted without re-validating credentials.
pub fn load_session() -> Result<Option<ClientSession>> {
    let path = session_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let raw = std::fs::read_to_string(&path).context("Failed to read session file")?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let session: ClientSession =
        serde_json::from_str(raw).context("Failed to parse session file")?;
    Ok(Some(session))
}

pub fn save_session(session: &ClientSession) -> Result<()> {
    let path = session_path()?;
    let raw = serde_json::to_string(session)?;
    secure_write(path.as_path(), &raw)
}

pub fn clear_session() -> Result<()> {
    let path = session_path()?;
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}
