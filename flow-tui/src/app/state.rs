use flow_core::domain::{Template, TemplateKind};
use flow_core::Timeframe;
use std::time::Instant;

/// Every navigable surface of the dashboard and the client portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Tracker,
    SelectProject,
    SelectClient,
    EditDescription,
    ManualEntry,
    ConfirmDelete,
    Documents,
    Reports,
    PortalLogin,
    PortalDashboard,
    PortalClientDetails,
    PortalProjectDetails,
    NotFound,
}

impl View {
    /// Portal views that require an active client session.
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            View::PortalDashboard | View::PortalClientDetails | View::PortalProjectDetails
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusedBox {
    Timer,
    Entries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A transient, auto-dismissing status message. Presentation-only; carries
/// no retry semantics.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub text: String,
    pub created: Instant,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            let mut p = self.cursor + 1;
            while p <= self.value.len() && !self.value.is_char_boundary(p) {
                p += 1;
            }
            self.cursor = p;
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }
}

/// Which picker the selection view feeds its result back into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    TrackerProject,
    TrackerClient,
    ManualProject,
    ManualClient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualField {
    Date,
    Hours,
    Minutes,
    Description,
    Project,
    Client,
    Billable,
}

impl ManualField {
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Hours,
            Self::Hours => Self::Minutes,
            Self::Minutes => Self::Description,
            Self::Description => Self::Project,
            Self::Project => Self::Client,
            Self::Client => Self::Billable,
            Self::Billable => Self::Date,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Billable,
            Self::Hours => Self::Date,
            Self::Minutes => Self::Hours,
            Self::Description => Self::Minutes,
            Self::Project => Self::Description,
            Self::Client => Self::Project,
            Self::Billable => Self::Client,
        }
    }
}

/// Form state for the manual time-entry modal.
#[derive(Debug, Clone)]
pub struct ManualEntryState {
    pub date_input: TextInput,
    pub hours_input: TextInput,
    pub minutes_input: TextInput,
    pub description_input: TextInput,
    pub project: Option<String>,
    pub client: Option<String>,
    pub billable: bool,
    pub focused: ManualField,
}

impl ManualEntryState {
    pub fn new(today_iso: &str) -> Self {
        Self {
            date_input: TextInput::from_str(today_iso),
            hours_input: TextInput::new(),
            minutes_input: TextInput::new(),
            description_input: TextInput::new(),
            project: None,
            client: None,
            billable: true,
            focused: ManualField::Hours,
        }
    }
}

/// What the delete dialog is about to remove.
#[derive(Debug, Clone)]
pub struct DeleteContext {
    pub entry_id: u64,
    pub label: String,
    pub duration_seconds: u64,
}

/// Working copy of a template while the section editor is open. Changes
/// only land in the app's template list on save.
#[derive(Debug, Clone)]
pub struct TemplateEditorState {
    pub template: Template,
    pub kind: TemplateKind,
    /// Explicit flag distinguishing a freshly created template from an
    /// edit of an existing one.
    pub is_new: bool,
    pub selected_section: usize,
    pub rename_input: Option<TextInput>,
    pub content_input: Option<TextInput>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    pub email_input: TextInput,
    pub password_input: TextInput,
    pub focused: Option<LoginField>,
    pub error: Option<String>,
}

impl LoginFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
        self.focused = Some(LoginField::Email);
    }
}

/// Status filter on the portal's project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    InProgress,
    Completed,
}

impl ProjectFilter {
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All projects",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }
}

/// Period selection on the reports view.
#[derive(Debug, Clone, Copy)]
pub struct ReportControls {
    pub timeframe: Timeframe,
    pub year: i32,
    pub quarter: u8,
}

impl Default for ReportControls {
    fn default() -> Self {
        Self {
            timeframe: Timeframe::Quarterly,
            year: 2023,
            quarter: 4,
        }
    }
}
