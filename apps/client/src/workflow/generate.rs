use tracing::{debug, info};

use crate::api::GenerateRequest;
use crate::errors::ApiError;
use crate::models::resume::GeneratedResume;
use crate::workflow::busy::Stage;
use crate::workflow::Workflow;

pub(crate) const MSG_NO_RESUME: &str = "Please upload a resume first";
pub(crate) const MSG_NO_JOB: &str = "Please select a job first";
pub(crate) const MSG_PROFILE_INCOMPLETE: &str = "Please fill in required personal information";

impl Workflow {
    /// First unmet generation precondition, in gate order: résumé, then
    /// selection, then required profile fields.
    pub fn generation_blocker(&self) -> Option<&'static str> {
        if self.state.resume.is_none() {
            return Some(MSG_NO_RESUME);
        }
        if self.state.selected_job.is_none() {
            return Some(MSG_NO_JOB);
        }
        if !self.state.profile.required_complete() {
            return Some(MSG_PROFILE_INCOMPLETE);
        }
        None
    }

    pub fn can_generate(&self) -> bool {
        self.generation_blocker().is_none()
    }

    /// Requests a tailored résumé. Every precondition failure short-circuits
    /// with its own notice before any network traffic; a success fully
    /// replaces the previous artifact.
    pub async fn generate(&mut self) {
        if self.state.busy.is_busy(Stage::Generate) {
            debug!("generation already in flight; ignoring");
            return;
        }
        if !self.state.auth.is_authenticated() {
            debug!("generate requested outside an authenticated session; ignoring");
            return;
        }
        if let Some(blocker) = self.generation_blocker() {
            self.state.notice.report(blocker);
            return;
        }
        let (Some(resume), Some(job)) = (&self.state.resume, &self.state.selected_job) else {
            return; // unreachable past the blocker check
        };
        let request = GenerateRequest {
            user_info: self.state.profile.clone(),
            skills: resume.skills.join(", "),
            job_desc: job.clone(),
            resume_text: resume.full_text.clone(),
        };

        self.state.notice.clear();
        self.state.busy.begin(Stage::Generate);
        let epoch = self.state.epoch;
        let result = self.api.generate_resume(&request).await;
        self.state.busy.end(Stage::Generate);
        self.apply_generate(epoch, result);
    }

    pub(crate) fn apply_generate(&mut self, epoch: u64, result: Result<String, ApiError>) {
        if self.stale(epoch) {
            debug!("discarding generation response from a previous session");
            return;
        }
        match result {
            Ok(text) => {
                info!(chars = text.len(), "resume generated");
                self.state.generated = Some(GeneratedResume { text });
            }
            Err(e) => self.state.notice.report(e.user_message()),
        }
    }
}
