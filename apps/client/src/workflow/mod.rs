//! Workflow coordinator: the gated, stateful pipeline tying together
//! authentication, resume ingestion, job discovery, profile capture and
//! resume generation.
//!
//! All mutable state lives in one [`WorkflowState`] aggregate with a single
//! writer (the coordinator's `&mut self` methods). Gating conditions are
//! derived from the aggregate on demand; nothing is cached that could drift.

pub mod auth;
pub mod busy;
pub mod notice;

mod discovery;
mod generate;
mod ingest;
mod profile;

use std::sync::Arc;

use crate::api::JobAssistantApi;
use crate::models::job::JobListing;
use crate::models::resume::{GeneratedResume, PendingFile, ResumeDocument};
use crate::models::user::UserProfile;

use self::auth::AuthState;
use self::busy::BusyFlags;
use self::notice::NoticeChannel;

/// Everything the workflow owns. Readable from the outside through
/// [`Workflow::state`]; written only by coordinator methods.
#[derive(Debug)]
pub struct WorkflowState {
    pub auth: AuthState,
    /// Bumped on login and logout. In-flight responses tagged with an older
    /// value are discarded when they arrive.
    pub epoch: u64,
    pub pending_file: Option<PendingFile>,
    pub resume: Option<ResumeDocument>,
    pub jobs: Vec<JobListing>,
    pub selected_job: Option<String>,
    pub profile: UserProfile,
    pub generated: Option<GeneratedResume>,
    pub busy: BusyFlags,
    pub notice: NoticeChannel,
}

impl WorkflowState {
    fn new() -> Self {
        Self {
            auth: AuthState::Unknown,
            epoch: 0,
            pending_file: None,
            resume: None,
            jobs: Vec::new(),
            selected_job: None,
            profile: UserProfile::default(),
            generated: None,
            busy: BusyFlags::default(),
            notice: NoticeChannel::default(),
        }
    }
}

pub struct Workflow {
    api: Arc<dyn JobAssistantApi>,
    state: WorkflowState,
}

impl Workflow {
    pub fn new(api: Arc<dyn JobAssistantApi>) -> Self {
        Self {
            api,
            state: WorkflowState::new(),
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// The live notice, if any. Reading drops an expired one.
    pub fn current_notice(&mut self) -> Option<String> {
        self.state.notice.current().map(str::to_string)
    }

    pub fn dismiss_notice(&mut self) {
        self.state.notice.clear();
    }

    /// True when a response tagged with `epoch` must not be applied: the
    /// session it belongs to has been replaced or torn down meanwhile.
    pub(crate) fn stale(&self, epoch: u64) -> bool {
        epoch != self.state.epoch || !self.state.auth.is_authenticated()
    }

    /// Tears down the session-scoped state. Busy flags and any live notice
    /// are stage-local and left alone.
    pub(crate) fn reset_session(&mut self) {
        self.state.epoch += 1;
        self.state.auth = AuthState::Anonymous;
        self.state.pending_file = None;
        self.state.resume = None;
        self.state.jobs.clear();
        self.state.selected_job = None;
        self.state.profile = UserProfile::default();
        self.state.generated = None;
    }
}
