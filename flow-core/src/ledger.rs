use crate::domain::{TimeEntry, TimeEntryDraft};
use crate::{FlowError, MIN_ENTRY_SECONDS};

/// In-memory collection of completed time entries, most-recent-first.
///
/// Entries are immutable once recorded; the ledger only appends at the head
/// and deletes by id. All money figures are derived from each entry's own
/// stored rate.
#[derive(Debug, Clone, Default)]
pub struct EntryLedger {
    entries: Vec<TimeEntry>,
    next_id: u64,
}

impl EntryLedger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a ledger from pre-existing entries (seed data). Ids continue
    /// above the highest seeded id.
    pub fn seeded(entries: Vec<TimeEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self { entries, next_id }
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a new entry at the head of the list and return its id.
    /// Rejects sub-minute durations, leaving the ledger unchanged.
    pub fn record(&mut self, draft: TimeEntryDraft) -> Result<u64, FlowError> {
        if draft.duration_seconds < MIN_ENTRY_SECONDS {
            return Err(FlowError::validation("Time entry too short (< 1 minute)"));
        }
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(
            0,
            TimeEntry {
                id,
                date: draft.date,
                project: draft.project,
                client: draft.client,
                description: draft.description,
                duration_seconds: draft.duration_seconds,
                billable: draft.billable,
                rate: draft.rate,
            },
        );
        tracing::debug!(id, "time entry recorded");
        Ok(id)
    }

    /// Remove an entry by id. Returns false (and changes nothing) when the
    /// id is unknown.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn entry(&self, id: u64) -> Option<&TimeEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Sum of all durations, billable or not.
    pub fn total_duration_seconds(&self) -> u64 {
        self.entries.iter().map(|e| e.duration_seconds).sum()
    }

    /// Sum of `duration/3600 × rate` over billable entries only, each at
    /// its own recorded rate.
    pub fn total_billable(&self) -> f64 {
        self.entries.iter().map(TimeEntry::amount).sum()
    }
}

/// Duration of a manual entry from its two integer form fields, with the
/// same minimum-duration rule as stopping the timer.
pub fn manual_duration(hours: u64, minutes: u64) -> Result<u64, FlowError> {
    let seconds = hours * 3600 + minutes * 60;
    if seconds < MIN_ENTRY_SECONDS {
        return Err(FlowError::validation("Time entry too short (< 1 minute)"));
    }
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn draft(duration_seconds: u64, billable: bool, rate: f64) -> TimeEntryDraft {
        TimeEntryDraft {
            date: date!(2024 - 03 - 01),
            project: "Website Redesign".to_string(),
            client: "Acme Inc".to_string(),
            description: "Homepage".to_string(),
            duration_seconds,
            billable,
            rate,
        }
    }

    #[test]
    fn new_entries_land_at_the_head() {
        let mut ledger = EntryLedger::new();
        ledger.record(draft(3600, true, 75.0)).unwrap();
        ledger.record(draft(1800, true, 75.0)).unwrap();
        assert_eq!(ledger.entries()[0].duration_seconds, 1800);
        assert_eq!(ledger.entries()[1].duration_seconds, 3600);
    }

    #[test]
    fn sub_minute_record_never_mutates() {
        let mut ledger = EntryLedger::new();
        let err = ledger.record(draft(59, true, 75.0)).unwrap_err();
        assert!(matches!(err, FlowError::Validation(_)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn billable_total_uses_each_entrys_own_rate() {
        let mut ledger = EntryLedger::new();
        ledger.record(draft(5400, true, 75.0)).unwrap(); // 1.5h @ 75
        ledger.record(draft(7200, true, 90.0)).unwrap(); // 2h   @ 90
        ledger.record(draft(3600, false, 500.0)).unwrap(); // excluded
        assert_eq!(ledger.total_billable(), 1.5 * 75.0 + 2.0 * 90.0);
        assert_eq!(ledger.total_duration_seconds(), 5400 + 7200 + 3600);
    }

    #[test]
    fn stop_scenario_adds_ninety_second_entry() {
        let mut ledger = EntryLedger::new();
        let before = ledger.total_billable();
        ledger.record(draft(90, true, 75.0)).unwrap();
        assert_eq!(ledger.entries()[0].duration_seconds, 90);
        assert_eq!(ledger.entries()[0].rate, 75.0);
        assert!((ledger.total_billable() - before - 1.875).abs() < 1e-9);
    }

    #[test]
    fn deleting_unknown_id_is_a_noop() {
        let mut ledger = EntryLedger::new();
        ledger.record(draft(3600, true, 75.0)).unwrap();
        assert!(!ledger.delete(999));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn delete_removes_by_identity() {
        let mut ledger = EntryLedger::new();
        let id = ledger.record(draft(3600, true, 75.0)).unwrap();
        ledger.record(draft(1800, false, 0.0)).unwrap();
        assert!(ledger.delete(id));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.entry(id).is_none());
    }

    #[test]
    fn seeded_ids_continue_above_seed() {
        let mut ledger = EntryLedger::seeded(vec![TimeEntry {
            id: 7,
            date: date!(2024 - 03 - 01),
            project: "Mobile App".to_string(),
            client: "TechStart".to_string(),
            description: "API integration".to_string(),
            duration_seconds: 7200,
            billable: true,
            rate: 90.0,
        }]);
        let id = ledger.record(draft(3600, true, 75.0)).unwrap();
        assert_eq!(id, 8);
    }

    #[test]
    fn manual_duration_combines_fields_and_validates() {
        assert_eq!(manual_duration(1, 30), Ok(5400));
        assert_eq!(manual_duration(0, 1), Ok(60));
        assert!(manual_duration(0, 0).is_err());
    }
}
