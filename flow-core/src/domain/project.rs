use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }
}

/// A client-facing project as browsed in the portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub client_id: String,
    pub status: ProjectStatus,
    /// Completion percentage, 0–100.
    pub progress: u8,
    pub start_date: Date,
    pub due_date: Date,
    pub budget: f64,
    pub hourly_rate: f64,
    pub estimated_hours: f64,
    pub total_tracked_hours: f64,
    pub pending_approvals: u32,
}

impl Project {
    /// Billable value of the work tracked so far.
    pub fn tracked_value(&self) -> f64 {
        self.total_tracked_hours * self.hourly_rate
    }
}

/// A logged unit of work attached to a project, shown on the portal's
/// project-detail page. Distinct from the tracker's [`super::TimeEntry`]:
/// these are provider fixtures, not entries the freelancer records live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub id: String,
    pub project_id: String,
    pub description: String,
    pub date: Date,
    pub hours: f64,
    pub billable: bool,
}
