use std::sync::Arc;
use std::time::{Duration, Instant};

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use flow_core::domain::{
    ClientSession, Project, ReportPeriod, Template, TemplateKind, TimeEntryDraft,
};
use flow_core::provider::{templates_of, DataProvider};
use flow_core::{manual_duration, EntryLedger, FlowError, MoveDirection, TimerSession};

use crate::config::FlowConfig;
use crate::time_utils::{format_iso_date, parse_date_str, today_local};

mod navigation;
mod state;

pub use state::{
    DeleteContext, FocusedBox, LoginField, LoginFormState, ManualEntryState, ManualField,
    Notification, NotificationLevel, PickerTarget, ProjectFilter, ReportControls,
    TemplateEditorState, TextInput, View,
};

/// How long a notification stays on screen before auto-dismissing.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

pub struct App {
    pub running: bool,
    pub provider: Arc<dyn DataProvider>,
    pub config: FlowConfig,
    pub current_view: View,
    pub notifications: Vec<Notification>,

    // Portal session. `session_loading` is true until the one-shot restore
    // completes; protected views must not redirect before it flips false.
    pub session: Option<ClientSession>,
    pub session_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,

    // Time tracker
    pub timer: TimerSession,
    pub ledger: EntryLedger,
    pub selected_project: Option<String>,
    pub selected_client: Option<String>,
    pub description_input: TextInput,
    pub billable: bool,
    pub rate_input: TextInput,
    pub rate_overlay: Option<TextInput>,
    pub focused_box: FocusedBox,
    pub focused_entry: Option<usize>,
    pub manual_entry: Option<ManualEntryState>,
    pub delete_context: Option<DeleteContext>,

    // Project/client pickers (fuzzy-filtered selection lists)
    pub picker_target: PickerTarget,
    pub picker_input: TextInput,
    pub picker_items: Vec<String>,
    pub filtered_items: Vec<String>,
    pub filtered_index: usize,

    // Document templates
    pub template_kind: TemplateKind,
    pub proposal_templates: Vec<Template>,
    pub contract_templates: Vec<Template>,
    pub selected_template: usize,
    pub editor: Option<TemplateEditorState>,

    // Financial reports
    pub report: ReportControls,
    pub quarterly_reports: Vec<ReportPeriod>,
    pub annual_reports: Vec<ReportPeriod>,

    // Client portal
    pub login_form: LoginFormState,
    pub portal_filter: ProjectFilter,
    pub portal_project_index: usize,
    pub portal_detail_client: Option<String>,
    pub portal_detail_project: Option<String>,
    pub not_found_message: Option<String>,
    pub return_view: View,
}

impl App {
    pub fn new(provider: Arc<dyn DataProvider>, config: FlowConfig) -> Self {
        let ledger = EntryLedger::seeded(provider.seed_entries());
        let proposal_templates = templates_of(provider.as_ref(), TemplateKind::Proposal);
        let contract_templates = templates_of(provider.as_ref(), TemplateKind::Contract);
        let quarterly_reports = provider.quarterly_reports();
        let annual_reports = provider.annual_reports();

        Self {
            running: true,
            provider,
            config,
            current_view: View::Tracker,
            notifications: Vec::new(),
            session: None,
            session_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            timer: TimerSession::new(),
            ledger,
            selected_project: None,
            selected_client: None,
            description_input: TextInput::new(),
            billable: true,
            rate_input: TextInput::from_str("60.00"),
            rate_overlay: None,
            focused_box: FocusedBox::Timer,
            focused_entry: None,
            manual_entry: None,
            delete_context: None,
            picker_target: PickerTarget::TrackerProject,
            picker_input: TextInput::new(),
            picker_items: Vec::new(),
            filtered_items: Vec::new(),
            filtered_index: 0,
            template_kind: TemplateKind::Proposal,
            proposal_templates,
            contract_templates,
            selected_template: 0,
            editor: None,
            report: ReportControls::default(),
            quarterly_reports,
            annual_reports,
            login_form: LoginFormState::default(),
            portal_filter: ProjectFilter::All,
            portal_project_index: 0,
            portal_detail_client: None,
            portal_detail_project: None,
            not_found_message: None,
            return_view: View::Tracker,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    // --- Notifications ---

    pub fn notify(&mut self, level: NotificationLevel, text: impl Into<String>) {
        self.notifications.push(Notification {
            level,
            text: text.into(),
            created: Instant::now(),
        });
    }

    /// Drop notifications older than their display window.
    pub fn prune_notifications(&mut self) {
        self.notifications
            .retain(|n| n.created.elapsed() < NOTIFICATION_TTL);
    }

    pub fn latest_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    // --- Timer ---

    /// Current hourly rate as typed into the rate field.
    pub fn rate(&self) -> f64 {
        self.rate_input.value.trim().parse().unwrap_or(0.0)
    }

    /// Live earnings preview for the running session, in dollars.
    pub fn current_earnings(&self) -> f64 {
        if self.billable {
            self.timer.elapsed_seconds() as f64 / 3600.0 * self.rate()
        } else {
            0.0
        }
    }

    fn session_fields_set(&self) -> bool {
        self.selected_project.is_some()
            && self.selected_client.is_some()
            && !self.description_input.value.trim().is_empty()
    }

    /// Start (or resume) the timer. Refuses with an error notification
    /// when project, client, or description is unset.
    pub fn start_timer(&mut self) {
        if self.timer.is_running() {
            self.notify(NotificationLevel::Info, "Timer already running");
            return;
        }
        if !self.session_fields_set() {
            self.notify(
                NotificationLevel::Error,
                "Please fill in all required fields",
            );
            return;
        }
        self.timer.start();
        self.notify(NotificationLevel::Success, "Timer started!");
    }

    pub fn pause_timer(&mut self) {
        if !self.timer.is_running() {
            return;
        }
        self.timer.pause();
        self.notify(NotificationLevel::Info, "Timer paused");
    }

    /// Stop the timer and record the entry. Sub-minute sessions are
    /// rejected and the timer keeps counting.
    pub fn stop_timer(&mut self) {
        if self.timer.elapsed_seconds() == 0 {
            self.notify(NotificationLevel::Warning, "No active timer to save");
            return;
        }
        let elapsed = match self.timer.stop() {
            Ok(elapsed) => elapsed,
            Err(FlowError::Validation(message)) => {
                self.notify(NotificationLevel::Warning, message);
                return;
            }
            Err(e) => {
                self.notify(NotificationLevel::Error, e.to_string());
                return;
            }
        };

        let draft = TimeEntryDraft {
            date: today_local(),
            project: self.selected_project.clone().unwrap_or_default(),
            client: self.selected_client.clone().unwrap_or_default(),
            description: self.description_input.value.clone(),
            duration_seconds: elapsed,
            billable: self.billable,
            rate: self.rate(),
        };
        match self.ledger.record(draft) {
            Ok(_) => self.notify(NotificationLevel::Success, "Time entry saved!"),
            Err(e) => self.notify(NotificationLevel::Error, e.to_string()),
        }
    }

    // --- Entry list ---

    pub fn entries_select_next(&mut self) {
        if self.ledger.is_empty() {
            return;
        }
        let last = self.ledger.len() - 1;
        self.focused_entry = Some(match self.focused_entry {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    pub fn entries_select_previous(&mut self) {
        if self.ledger.is_empty() {
            return;
        }
        self.focused_entry = Some(match self.focused_entry {
            None => 0,
            Some(i) => i.saturating_sub(1),
        });
    }

    /// Populate delete_context from the currently selected entry and open
    /// the confirmation dialog.
    pub fn request_delete_selected(&mut self) {
        let Some(index) = self.focused_entry else {
            return;
        };
        let Some(entry) = self.ledger.entries().get(index) else {
            return;
        };
        self.delete_context = Some(DeleteContext {
            entry_id: entry.id,
            label: format!("{} / {}", entry.project, entry.client),
            duration_seconds: entry.duration_seconds,
        });
        self.navigate_to(View::ConfirmDelete);
    }

    pub fn confirm_delete(&mut self) {
        if let Some(ctx) = self.delete_context.take() {
            if self.ledger.delete(ctx.entry_id) {
                self.notify(NotificationLevel::Info, "Time entry deleted");
            } else {
                // Unknown id: the ledger is untouched.
                self.notify(NotificationLevel::Warning, "Entry no longer exists");
            }
        }
        self.focused_entry = None;
        self.navigate_to(View::Tracker);
    }

    // --- Manual entry ---

    pub fn open_manual_entry(&mut self) {
        self.manual_entry = Some(ManualEntryState::new(&format_iso_date(today_local())));
        self.navigate_to(View::ManualEntry);
    }

    pub fn cancel_manual_entry(&mut self) {
        self.manual_entry = None;
        self.navigate_to(View::Tracker);
    }

    /// Validate and record the manual-entry form. On success the modal
    /// closes; on validation failure it stays open with a notification.
    pub fn save_manual_entry(&mut self) {
        let Some(form) = &self.manual_entry else {
            return;
        };

        let missing_duration =
            form.hours_input.value.trim().is_empty() && form.minutes_input.value.trim().is_empty();
        if form.project.is_none()
            || form.client.is_none()
            || form.description_input.value.trim().is_empty()
            || missing_duration
        {
            self.notify(
                NotificationLevel::Error,
                "Please fill in all required fields",
            );
            return;
        }

        let Some(date) = parse_date_str(&form.date_input.value) else {
            self.notify(NotificationLevel::Error, "Invalid date (use YYYY-MM-DD)");
            return;
        };

        let hours: u64 = form.hours_input.value.trim().parse().unwrap_or(0);
        let minutes: u64 = form.minutes_input.value.trim().parse().unwrap_or(0);
        let duration_seconds = match manual_duration(hours, minutes) {
            Ok(seconds) => seconds,
            Err(FlowError::Validation(message)) => {
                self.notify(NotificationLevel::Warning, message);
                return;
            }
            Err(e) => {
                self.notify(NotificationLevel::Error, e.to_string());
                return;
            }
        };

        let draft = TimeEntryDraft {
            date,
            project: form.project.clone().unwrap_or_default(),
            client: form.client.clone().unwrap_or_default(),
            description: form.description_input.value.clone(),
            duration_seconds,
            billable: form.billable,
            rate: self.rate(),
        };
        match self.ledger.record(draft) {
            Ok(_) => {
                self.manual_entry = None;
                self.notify(NotificationLevel::Success, "Manual time entry added!");
                self.navigate_to(View::Tracker);
            }
            Err(e) => self.notify(NotificationLevel::Error, e.to_string()),
        }
    }

    // --- Pickers ---

    pub fn open_picker(&mut self, target: PickerTarget) {
        self.picker_target = target;
        self.picker_items = match target {
            PickerTarget::TrackerProject | PickerTarget::ManualProject => {
                self.provider.project_names()
            }
            PickerTarget::TrackerClient | PickerTarget::ManualClient => {
                self.provider.client_names()
            }
        };
        self.picker_input.clear();
        self.filtered_items = self.picker_items.clone();
        self.filtered_index = 0;
        let view = match target {
            PickerTarget::TrackerProject | PickerTarget::ManualProject => View::SelectProject,
            PickerTarget::TrackerClient | PickerTarget::ManualClient => View::SelectClient,
        };
        self.navigate_to(view);
    }

    /// Filter picker items based on search input using fuzzy matching.
    pub fn filter_picker(&mut self) {
        if self.picker_input.value.is_empty() {
            self.filtered_items = self.picker_items.clone();
            self.filtered_index = 0;
            return;
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(String, i64)> = self
            .picker_items
            .iter()
            .filter_map(|item| {
                matcher
                    .fuzzy_match(item, &self.picker_input.value)
                    .map(|score| (item.clone(), score))
            })
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        self.filtered_items = scored.into_iter().map(|(item, _)| item).collect();
        self.filtered_index = 0;
    }

    pub fn picker_select_next(&mut self) {
        if !self.filtered_items.is_empty() {
            self.filtered_index = (self.filtered_index + 1) % self.filtered_items.len();
        }
    }

    pub fn picker_select_previous(&mut self) {
        if !self.filtered_items.is_empty() {
            self.filtered_index = if self.filtered_index == 0 {
                self.filtered_items.len() - 1
            } else {
                self.filtered_index - 1
            };
        }
    }

    /// Apply the highlighted picker item to its target field and return to
    /// the view the picker was opened from.
    pub fn confirm_picker(&mut self) {
        let Some(choice) = self.filtered_items.get(self.filtered_index).cloned() else {
            return;
        };
        match self.picker_target {
            PickerTarget::TrackerProject => {
                self.selected_project = Some(choice);
                self.navigate_to(View::Tracker);
            }
            PickerTarget::TrackerClient => {
                self.selected_client = Some(choice);
                self.navigate_to(View::Tracker);
            }
            PickerTarget::ManualProject => {
                if let Some(form) = &mut self.manual_entry {
                    form.project = Some(choice);
                }
                self.navigate_to(View::ManualEntry);
            }
            PickerTarget::ManualClient => {
                if let Some(form) = &mut self.manual_entry {
                    form.client = Some(choice);
                }
                self.navigate_to(View::ManualEntry);
            }
        }
    }

    pub fn cancel_picker(&mut self) {
        match self.picker_target {
            PickerTarget::TrackerProject | PickerTarget::TrackerClient => {
                self.navigate_to(View::Tracker)
            }
            PickerTarget::ManualProject | PickerTarget::ManualClient => {
                self.navigate_to(View::ManualEntry)
            }
        }
    }

    // --- Document templates ---

    pub fn templates_for_kind(&self) -> &[Template] {
        match self.template_kind {
            TemplateKind::Proposal => &self.proposal_templates,
            TemplateKind::Contract => &self.contract_templates,
        }
    }

    pub fn toggle_template_kind(&mut self) {
        self.template_kind = match self.template_kind {
            TemplateKind::Proposal => TemplateKind::Contract,
            TemplateKind::Contract => TemplateKind::Proposal,
        };
        self.selected_template = 0;
    }

    pub fn template_select_next(&mut self) {
        let len = self.templates_for_kind().len();
        if len > 0 {
            self.selected_template = (self.selected_template + 1).min(len - 1);
        }
    }

    pub fn template_select_previous(&mut self) {
        self.selected_template = self.selected_template.saturating_sub(1);
    }

    /// Open the section editor on a working copy of the selected template.
    pub fn open_template_editor(&mut self) {
        let Some(template) = self
            .templates_for_kind()
            .get(self.selected_template)
            .cloned()
        else {
            return;
        };
        self.editor = Some(TemplateEditorState {
            template,
            kind: self.template_kind,
            is_new: false,
            selected_section: 0,
            rename_input: None,
            content_input: None,
        });
    }

    /// Create a blank template and open the editor on it.
    pub fn new_template(&mut self) {
        let id = format!(
            "{}{}",
            match self.template_kind {
                TemplateKind::Proposal => "p",
                TemplateKind::Contract => "c",
            },
            self.templates_for_kind().len() + 1
        );
        let mut template = Template {
            id,
            name: "Untitled Template".to_string(),
            description: String::new(),
            last_modified: today_local(),
            sections: Vec::new(),
        };
        template.add_section();
        self.editor = Some(TemplateEditorState {
            template,
            kind: self.template_kind,
            is_new: true,
            selected_section: 0,
            rename_input: None,
            content_input: None,
        });
    }

    pub fn editor_add_section(&mut self) {
        if let Some(editor) = &mut self.editor {
            editor.template.add_section();
            editor.selected_section = editor.template.sections.len() - 1;
        }
    }

    pub fn editor_delete_section(&mut self) {
        let mut delete_error: Option<String> = None;
        if let Some(editor) = &mut self.editor {
            let Some(section) = editor.template.sections.get(editor.selected_section) else {
                return;
            };
            let id = section.id.clone();
            match editor.template.delete_section(&id) {
                Ok(()) => {
                    editor.selected_section = editor
                        .selected_section
                        .min(editor.template.sections.len() - 1);
                }
                Err(e) => delete_error = Some(e.to_string()),
            }
        }
        if let Some(message) = delete_error {
            self.notify(NotificationLevel::Error, message);
        }
    }

    pub fn editor_move_section(&mut self, direction: MoveDirection) {
        let Some(editor) = &mut self.editor else {
            return;
        };
        let Some(section) = editor.template.sections.get(editor.selected_section) else {
            return;
        };
        let id = section.id.clone();
        if editor.template.move_section(&id, direction).is_ok() {
            // Keep the cursor on the moved section.
            editor.selected_section = editor
                .template
                .sections
                .iter()
                .position(|s| s.id == id)
                .unwrap_or(editor.selected_section);
        }
    }

    /// Commit the working copy back into the template list, stamping
    /// last_modified.
    pub fn save_template_editor(&mut self) {
        let Some(mut editor) = self.editor.take() else {
            return;
        };
        editor.template.last_modified = today_local();
        let list = match editor.kind {
            TemplateKind::Proposal => &mut self.proposal_templates,
            TemplateKind::Contract => &mut self.contract_templates,
        };
        if editor.is_new {
            list.push(editor.template);
        } else if let Some(slot) = list.iter_mut().find(|t| t.id == editor.template.id) {
            *slot = editor.template;
        } else {
            list.push(editor.template);
        }
        self.notify(NotificationLevel::Success, "Template saved");
    }

    pub fn close_template_editor(&mut self) {
        self.editor = None;
    }

    // --- Reports ---

    pub fn current_report(&self) -> Option<&ReportPeriod> {
        match self.report.timeframe {
            flow_core::Timeframe::Quarterly => flow_core::find_quarter(
                &self.quarterly_reports,
                self.report.year,
                self.report.quarter,
            ),
            flow_core::Timeframe::Annual => {
                flow_core::find_annual(&self.annual_reports, self.report.year)
            }
        }
    }

    pub fn previous_report(&self) -> Option<&ReportPeriod> {
        match self.report.timeframe {
            flow_core::Timeframe::Quarterly => {
                let (year, quarter) =
                    flow_core::previous_quarter(self.report.year, self.report.quarter);
                flow_core::find_quarter(&self.quarterly_reports, year, quarter)
            }
            flow_core::Timeframe::Annual => {
                flow_core::find_annual(&self.annual_reports, self.report.year - 1)
            }
        }
    }

    pub fn report_toggle_timeframe(&mut self) {
        self.report.timeframe = match self.report.timeframe {
            flow_core::Timeframe::Quarterly => flow_core::Timeframe::Annual,
            flow_core::Timeframe::Annual => flow_core::Timeframe::Quarterly,
        };
    }

    pub fn report_previous_period(&mut self) {
        match self.report.timeframe {
            flow_core::Timeframe::Quarterly => {
                let (year, quarter) =
                    flow_core::previous_quarter(self.report.year, self.report.quarter);
                self.report.year = year;
                self.report.quarter = quarter;
            }
            flow_core::Timeframe::Annual => self.report.year -= 1,
        }
    }

    pub fn report_next_period(&mut self) {
        match self.report.timeframe {
            flow_core::Timeframe::Quarterly => {
                if self.report.quarter == 4 {
                    self.report.year += 1;
                    self.report.quarter = 1;
                } else {
                    self.report.quarter += 1;
                }
            }
            flow_core::Timeframe::Annual => self.report.year += 1,
        }
    }

    // --- Client portal ---

    /// The logged-in client's projects under the active status filter.
    pub fn portal_projects(&self) -> Vec<Project> {
        let Some(session) = &self.session else {
            return Vec::new();
        };
        self.provider
            .projects_for_client(&session.id)
            .into_iter()
            .filter(|p| match self.portal_filter {
                ProjectFilter::All => true,
                ProjectFilter::InProgress => {
                    p.status == flow_core::domain::ProjectStatus::InProgress
                }
                ProjectFilter::Completed => {
                    p.status == flow_core::domain::ProjectStatus::Completed
                }
            })
            .collect()
    }

    pub fn portal_cycle_filter(&mut self) {
        self.portal_filter = self.portal_filter.next();
        self.portal_project_index = 0;
    }

    pub fn portal_select_next(&mut self) {
        let len = self.portal_projects().len();
        if len > 0 {
            self.portal_project_index = (self.portal_project_index + 1).min(len - 1);
        }
    }

    pub fn portal_select_previous(&mut self) {
        self.portal_project_index = self.portal_project_index.saturating_sub(1);
    }

    /// Open project details, or the not-found view when the id does not
    /// resolve.
    pub fn open_portal_project(&mut self, id: &str) {
        if self.provider.project(id).is_some() {
            self.portal_detail_project = Some(id.to_string());
            self.navigate_to(View::PortalProjectDetails);
        } else {
            self.show_not_found(format!("Project not found: {}", id));
        }
    }

    pub fn open_portal_client(&mut self, id: &str) {
        if self.provider.client(id).is_some() {
            self.portal_detail_client = Some(id.to_string());
            self.navigate_to(View::PortalClientDetails);
        } else {
            self.show_not_found(format!("Client not found: {}", id));
        }
    }

    pub fn show_not_found(&mut self, message: String) {
        self.not_found_message = Some(message);
        self.return_view = if self.session.is_some() {
            View::PortalDashboard
        } else {
            View::Tracker
        };
        self.navigate_to(View::NotFound);
    }
}
