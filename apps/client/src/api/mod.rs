//! HTTP client for the job-assistant backend.
//!
//! All backend traffic goes through [`JobAssistantApi`]; no other module
//! builds requests itself. The coordinator holds the collaborator as
//! `Arc<dyn JobAssistantApi>`, so tests and demo mode swap the transport
//! without touching stage logic.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::errors::ApiError;
use crate::models::job::JobListing;
use crate::models::resume::ResumeDocument;
use crate::models::user::{UserAccount, UserProfile};

pub mod fake;

/// Result of the startup session probe (`GET /check-auth`).
#[derive(Debug, Clone, Deserialize)]
pub struct AuthProbe {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<UserAccount>,
}

/// Payload of `POST /generate_resume/`. Field spellings are the backend's.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    #[serde(rename = "userInfo")]
    pub user_info: UserProfile,
    pub skills: String,
    pub job_desc: String,
    #[serde(rename = "resumeText")]
    pub resume_text: String,
}

/// The backend the workflow talks to. One implementation speaks HTTP
/// ([`HttpApi`]); [`fake::FakeApi`] serves canned data for demo mode.
#[async_trait]
pub trait JobAssistantApi: Send + Sync {
    async fn check_auth(&self) -> Result<AuthProbe, ApiError>;

    async fn login(&self, email: &str, password: &str) -> Result<UserAccount, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;

    async fn upload_resume(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<ResumeDocument, ApiError>;

    async fn search_jobs(
        &self,
        query: &str,
        location: &str,
    ) -> Result<Vec<JobListing>, ApiError>;

    async fn generate_resume(&self, request: &GenerateRequest) -> Result<String, ApiError>;

    /// Where the browser-redirect provider login hands off to.
    /// Pure address computation; no request is made.
    fn provider_login_url(&self) -> String;
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    user: UserAccount,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    filename: String,
    parsed_data: ParsedResume,
}

#[derive(Debug, Deserialize)]
struct ParsedResume {
    #[serde(default)]
    skills: Vec<String>,
    full_text: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    jobs: Vec<JobListing>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    resume: String,
}

/// HTTP implementation. Session credentials ride on cookies, so the client
/// keeps a cookie store and every call carries them implicitly.
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
                .cookie_store(true)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: config.api_base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Maps a completed response to `T`: 2xx bodies decode, everything else is
/// classified by status.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status.as_u16(), &body));
    }
    response.json::<T>().await.map_err(ApiError::Decode)
}

/// Like [`decode`], for endpoints whose body we do not care about.
async fn ensure_success(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status.as_u16(), &body));
    }
    Ok(())
}

#[async_trait]
impl JobAssistantApi for HttpApi {
    async fn check_auth(&self) -> Result<AuthProbe, ApiError> {
        debug!("GET /check-auth");
        let response = self
            .client
            .get(self.url("/check-auth"))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        decode(response).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<UserAccount, ApiError> {
        debug!(email, "POST /login");
        let response = self
            .client
            .post(self.url("/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let login: LoginResponse = decode(response).await?;
        Ok(login.user)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        debug!("POST /logout");
        let response = self
            .client
            .post(self.url("/logout"))
            .send()
            .await
            .map_err(ApiError::Transport)?;
        ensure_success(response).await
    }

    async fn upload_resume(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<ResumeDocument, ApiError> {
        debug!(filename, size = bytes.len(), "POST /upload_resume/");
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);
        let response = self
            .client
            .post(self.url("/upload_resume/"))
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let upload: UploadResponse = decode(response).await?;
        Ok(ResumeDocument {
            filename: upload.filename,
            skills: upload.parsed_data.skills,
            full_text: upload.parsed_data.full_text,
        })
    }

    async fn search_jobs(
        &self,
        query: &str,
        location: &str,
    ) -> Result<Vec<JobListing>, ApiError> {
        debug!(query, location, "GET /search_jobs/");
        let response = self
            .client
            .get(self.url("/search_jobs/"))
            .query(&[("query", query), ("location", location)])
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let search: SearchResponse = decode(response).await?;
        Ok(search.jobs)
    }

    async fn generate_resume(&self, request: &GenerateRequest) -> Result<String, ApiError> {
        debug!(job = %request.job_desc, "POST /generate_resume/");
        let response = self
            .client
            .post(self.url("/generate_resume/"))
            .json(request)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let generated: GenerateResponse = decode(response).await?;
        Ok(generated.resume)
    }

    fn provider_login_url(&self) -> String {
        self.url("/auth/google")
    }
}
