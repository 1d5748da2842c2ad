use serde::{Deserialize, Serialize};
use time::Date;

/// A completed unit of tracked work. Immutable once recorded; the only
/// mutation the ledger allows afterwards is deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: u64,
    pub date: Date,
    pub project: String,
    pub client: String,
    pub description: String,
    pub duration_seconds: u64,
    pub billable: bool,
    /// Hourly rate captured at recording time. Later changes to the
    /// current rate field never touch this.
    pub rate: f64,
}

impl TimeEntry {
    /// Billable amount for this entry alone, 0.0 when non-billable.
    pub fn amount(&self) -> f64 {
        if self.billable {
            self.duration_seconds as f64 / 3600.0 * self.rate
        } else {
            0.0
        }
    }
}

/// Everything needed to record a new entry; the ledger assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntryDraft {
    pub date: Date,
    pub project: String,
    pub client: String,
    pub description: String,
    pub duration_seconds: u64,
    pub billable: bool,
    pub rate: f64,
}
