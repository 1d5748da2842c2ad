mod sample;

pub use sample::SampleData;

use crate::domain::{
    Client, Credential, Project, ReportPeriod, Template, TemplateKind, TimeEntry, WorkItem,
};

/// Source of all business data consumed by the dashboard and the portal.
///
/// Views only ever see this trait; the bundled [`SampleData`] serves static
/// fixtures, and a real backend could slot in behind the same interface
/// without touching any consumer.
pub trait DataProvider: Send + Sync {
    /// Portal login records (plaintext demo credentials).
    fn credentials(&self) -> Vec<Credential>;

    fn clients(&self) -> Vec<Client>;

    fn client(&self, id: &str) -> Option<Client> {
        self.clients().into_iter().find(|c| c.id == id)
    }

    fn projects(&self) -> Vec<Project>;

    fn project(&self, id: &str) -> Option<Project> {
        self.projects().into_iter().find(|p| p.id == id)
    }

    fn projects_for_client(&self, client_id: &str) -> Vec<Project> {
        self.projects()
            .into_iter()
            .filter(|p| p.client_id == client_id)
            .collect()
    }

    /// Logged work items for one project (portal project-detail view).
    fn work_items(&self, project_id: &str) -> Vec<WorkItem>;

    /// Entries the tracker's ledger starts out with.
    fn seed_entries(&self) -> Vec<TimeEntry>;

    /// Choices offered by the tracker's project picker.
    fn project_names(&self) -> Vec<String>;

    /// Choices offered by the tracker's client picker.
    fn client_names(&self) -> Vec<String>;

    fn proposal_templates(&self) -> Vec<Template>;

    fn contract_templates(&self) -> Vec<Template>;

    /// Quarterly financial report periods, newest first.
    fn quarterly_reports(&self) -> Vec<ReportPeriod>;

    /// Annual financial report periods, newest first.
    fn annual_reports(&self) -> Vec<ReportPeriod>;
}

/// Templates of one kind, for callers that switch on [`TemplateKind`].
pub fn templates_of(provider: &dyn DataProvider, kind: TemplateKind) -> Vec<Template> {
    match kind {
        TemplateKind::Proposal => provider.proposal_templates(),
        TemplateKind::Contract => provider.contract_templates(),
    }
}
