//! Demo collaborator: a canned, in-process stand-in for the backend.
//!
//! Serves canned responses in-process so the full workflow can be exercised
//! without a server. The coordinator is identical against [`FakeApi`] and
//! [`super::HttpApi`].

use async_trait::async_trait;
use tokio::time::{sleep, Duration};
use url::Url;

use crate::api::{AuthProbe, GenerateRequest, JobAssistantApi};
use crate::errors::ApiError;
use crate::models::job::JobListing;
use crate::models::resume::ResumeDocument;
use crate::models::user::UserAccount;

/// Simulated round-trip latency.
const DEMO_LATENCY: Duration = Duration::from_millis(300);

const DEMO_SKILLS: &[&str] = &["Python", "SQL", "Communication", "Project Management"];

const DEMO_RESUME_TEXT: &str = "Experienced support professional with a track \
record of resolving technical issues, maintaining ticket queues and improving \
first-response times across distributed teams.";

pub struct FakeApi;

impl FakeApi {
    pub fn new() -> Self {
        FakeApi
    }

    fn job_board() -> Vec<JobListing> {
        let listing = |title: &str, company: &str, link: &str| JobListing {
            title: title.to_string(),
            company: Some(company.to_string()),
            link: Url::parse(link).expect("static demo URL"),
        };
        vec![
            listing(
                "Help Desk Technician - Remote",
                "TechCorp",
                "https://example.com/job1",
            ),
            listing(
                "IT Support Specialist",
                "Global Systems",
                "https://example.com/job2",
            ),
            listing(
                "Technical Support Engineer",
                "CloudTech",
                "https://example.com/job3",
            ),
        ]
    }
}

#[async_trait]
impl JobAssistantApi for FakeApi {
    async fn check_auth(&self) -> Result<AuthProbe, ApiError> {
        // demo sessions never persist; always start at the login view
        Ok(AuthProbe {
            authenticated: false,
            user: None,
        })
    }

    async fn login(&self, email: &str, _password: &str) -> Result<UserAccount, ApiError> {
        sleep(DEMO_LATENCY).await;
        Ok(UserAccount {
            email: email.to_string(),
            full_name: Some("Demo User".to_string()),
        })
    }

    async fn logout(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn upload_resume(
        &self,
        filename: &str,
        _bytes: Vec<u8>,
    ) -> Result<ResumeDocument, ApiError> {
        sleep(DEMO_LATENCY).await;
        Ok(ResumeDocument {
            filename: filename.to_string(),
            skills: DEMO_SKILLS.iter().map(|s| s.to_string()).collect(),
            full_text: DEMO_RESUME_TEXT.to_string(),
        })
    }

    async fn search_jobs(
        &self,
        query: &str,
        _location: &str,
    ) -> Result<Vec<JobListing>, ApiError> {
        sleep(DEMO_LATENCY).await;
        let query_lower = query.to_lowercase();
        Ok(Self::job_board()
            .into_iter()
            .filter(|job| query_lower.is_empty() || job.title.to_lowercase().contains(&query_lower))
            .collect())
    }

    async fn generate_resume(&self, request: &GenerateRequest) -> Result<String, ApiError> {
        sleep(DEMO_LATENCY).await;
        Ok(format!(
            "{name}\n{email} | {phone}\n\nTARGET ROLE\n{job}\n\nCORE COMPETENCIES\n{skills}\n\nPROFESSIONAL EXPERIENCE\n{text}\n",
            name = request.user_info.full_name,
            email = request.user_info.email,
            phone = request.user_info.phone,
            job = request.job_desc,
            skills = request.skills,
            text = request.resume_text,
        ))
    }

    fn provider_login_url(&self) -> String {
        "https://accounts.google.com/o/oauth2/v2/auth?demo=1".to_string()
    }
}
