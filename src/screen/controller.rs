use tracing::{error, info, warn};

use crate::api::{ApiError, DraftRecord, ModelRecord};
use crate::constants::{
    CREATED_ALERT_MESSAGE, CREATED_ALERT_TITLE, CREATE_FAILED_ALERT_MESSAGE,
    CREATE_FAILED_ALERT_TITLE,
};

/// Observable controller state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScreenState {
    #[default]
    Idle,
    /// A create request is in flight.
    Submitting,
}

/// One of the three editable draft fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Image,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// A message shown to the user once, on the next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAlert {
    pub kind: AlertKind,
    pub title: &'static str,
    pub message: &'static str,
}

impl ScreenAlert {
    #[must_use]
    pub const fn created() -> Self {
        Self {
            kind: AlertKind::Success,
            title: CREATED_ALERT_TITLE,
            message: CREATED_ALERT_MESSAGE,
        }
    }

    #[must_use]
    pub const fn create_failed() -> Self {
        Self {
            kind: AlertKind::Error,
            title: CREATE_FAILED_ALERT_TITLE,
            message: CREATE_FAILED_ALERT_MESSAGE,
        }
    }
}

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server answered 200; the list should be fetched again.
    Created,
    Failed,
}

impl SubmitOutcome {
    /// The alert telling the user how this submission ended.
    #[must_use]
    pub const fn alert(self) -> ScreenAlert {
        match self {
            Self::Created => ScreenAlert::created(),
            Self::Failed => ScreenAlert::create_failed(),
        }
    }
}

/// Everything needed to render the screen.
#[derive(Debug, Clone, Default)]
pub struct ScreenSnapshot {
    pub models: Vec<ModelRecord>,
    pub draft: DraftRecord,
    pub state: ScreenState,
    pub alert: Option<ScreenAlert>,
}

/// State behind the models screen: the last fetched list and the draft.
///
/// The controller performs no I/O. Its owner runs the requests it asks for
/// and feeds the results back through [`apply_list`](Self::apply_list) and
/// [`finish_submit`](Self::finish_submit).
#[derive(Debug, Default)]
pub struct ScreenController {
    models: Vec<ModelRecord>,
    draft: DraftRecord,
    state: ScreenState,
    alert: Option<ScreenAlert>,
    mounted: bool,
}

impl ScreenController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn models(&self) -> &[ModelRecord] {
        &self.models
    }

    #[must_use]
    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    #[must_use]
    pub fn state(&self) -> ScreenState {
        self.state
    }

    #[must_use]
    pub fn alert(&self) -> Option<&ScreenAlert> {
        self.alert.as_ref()
    }

    /// Mark the screen as displayed.
    ///
    /// Returns `true` only on the first call; the caller fetches the list then.
    pub fn mount(&mut self) -> bool {
        !std::mem::replace(&mut self.mounted, true)
    }

    /// Replace the list with a fetch result. Failures keep the current list.
    pub fn apply_list(&mut self, result: Result<Vec<ModelRecord>, ApiError>) {
        match result {
            Ok(models) => {
                info!(count = models.len(), "Model list updated");
                self.models = models;
            }
            Err(e) => {
                warn!(error = %e, kept = self.models.len(), "Failed to fetch models");
            }
        }
    }

    /// Overwrite one draft field. No validation happens here.
    pub fn edit(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Title => &mut self.draft.title,
            DraftField::Image => &mut self.draft.image,
            DraftField::Body => &mut self.draft.body,
        };
        *slot = value;
    }

    /// Replace the whole draft, as a form post does.
    pub fn replace_draft(&mut self, draft: DraftRecord) {
        self.draft = draft;
    }

    /// Start a submission and return the draft to send.
    ///
    /// Returns `None` while a previous submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<DraftRecord> {
        if self.state == ScreenState::Submitting {
            return None;
        }
        self.state = ScreenState::Submitting;
        Some(self.draft.clone())
    }

    /// Record the create result and go back to idle.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> SubmitOutcome {
        self.state = ScreenState::Idle;
        match result {
            Ok(()) => {
                self.alert = Some(ScreenAlert::created());
                self.draft.clear();
                SubmitOutcome::Created
            }
            Err(e) => {
                error!(error = %e, "Failed to create model");
                self.alert = Some(ScreenAlert::create_failed());
                SubmitOutcome::Failed
            }
        }
    }

    /// Current state for rendering. The pending alert is consumed.
    pub fn snapshot(&mut self) -> ScreenSnapshot {
        ScreenSnapshot {
            models: self.models.clone(),
            draft: self.draft.clone(),
            state: self.state,
            alert: self.alert.take(),
        }
    }
}
