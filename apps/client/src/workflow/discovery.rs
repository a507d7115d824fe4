use tracing::{debug, info};

use crate::errors::ApiError;
use crate::models::job::JobListing;
use crate::workflow::busy::Stage;
use crate::workflow::Workflow;

impl Workflow {
    /// Runs a job search under the search busy flag. Success replaces the
    /// whole result set; the selection survives only if its title is still
    /// among the new results.
    pub async fn search_jobs(&mut self, query: &str, location: &str) {
        if self.state.busy.is_busy(Stage::Search) {
            debug!("search already in flight; ignoring");
            return;
        }
        if !self.state.auth.is_authenticated() {
            debug!("search requested outside an authenticated session; ignoring");
            return;
        }

        self.state.notice.clear();
        self.state.busy.begin(Stage::Search);
        let epoch = self.state.epoch;
        let result = self.api.search_jobs(query, location).await;
        self.state.busy.end(Stage::Search);
        self.apply_search(epoch, result);
    }

    pub(crate) fn apply_search(&mut self, epoch: u64, result: Result<Vec<JobListing>, ApiError>) {
        if self.stale(epoch) {
            debug!("discarding search response from a previous session");
            return;
        }
        match result {
            Ok(jobs) => {
                info!(count = jobs.len(), "job search completed");
                let selection_gone = self
                    .state
                    .selected_job
                    .as_ref()
                    .is_some_and(|selected| !jobs.iter().any(|job| &job.title == selected));
                if selection_gone {
                    debug!("selected job absent from new results; clearing selection");
                    self.state.selected_job = None;
                }
                self.state.jobs = jobs;
            }
            Err(e) => self.state.notice.report(e.user_message()),
        }
    }

    /// Pure local state change. Selecting the already-selected title keeps
    /// it selected; selection never toggles off.
    pub fn select_job(&mut self, title: &str) {
        self.state.selected_job = Some(title.to_string());
    }
}
