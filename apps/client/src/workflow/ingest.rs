use tracing::{debug, info};

use crate::errors::ApiError;
use crate::models::resume::{PendingFile, ResumeDocument};
use crate::workflow::busy::Stage;
use crate::workflow::Workflow;

pub(crate) const MSG_NOT_PDF: &str = "Please select a PDF file";
pub(crate) const MSG_NO_FILE: &str = "Please select a file first";
pub(crate) const MSG_TOO_LARGE: &str = "Resume file exceeds the 10MB limit";

/// Client-side mirror of the backend's upload cap; oversize files fail
/// locally instead of burning a network call.
pub(crate) const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub(crate) fn is_pdf_filename(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".pdf")
}

impl Workflow {
    /// Stages a candidate file locally. Rejection leaves any previously
    /// staged file untouched.
    pub fn select_file(&mut self, name: &str, bytes: Vec<u8>) {
        if !is_pdf_filename(name) {
            self.state.notice.report(MSG_NOT_PDF);
            return;
        }
        self.state.pending_file = Some(PendingFile {
            name: name.to_string(),
            bytes,
        });
    }

    /// Uploads the staged file under the upload busy flag.
    pub async fn upload_resume(&mut self) {
        if self.state.busy.is_busy(Stage::Upload) {
            debug!("upload already in flight; ignoring");
            return;
        }
        if !self.state.auth.is_authenticated() {
            debug!("upload requested outside an authenticated session; ignoring");
            return;
        }
        let Some(file) = self.state.pending_file.clone() else {
            self.state.notice.report(MSG_NO_FILE);
            return;
        };
        if file.bytes.len() > MAX_UPLOAD_BYTES {
            self.state.notice.report(MSG_TOO_LARGE);
            return;
        }

        self.state.notice.clear();
        self.state.busy.begin(Stage::Upload);
        let epoch = self.state.epoch;
        let PendingFile { name, bytes } = file;
        let result = self.api.upload_resume(&name, bytes).await;
        self.state.busy.end(Stage::Upload);
        self.apply_upload(epoch, result);
    }

    pub(crate) fn apply_upload(&mut self, epoch: u64, result: Result<ResumeDocument, ApiError>) {
        if self.stale(epoch) {
            debug!("discarding upload response from a previous session");
            return;
        }
        match result {
            Ok(document) => {
                info!(
                    filename = %document.filename,
                    skills = document.skills.len(),
                    "resume parsed"
                );
                self.state.resume = Some(document);
            }
            Err(e) => self.state.notice.report(e.user_message()),
        }
    }
}
