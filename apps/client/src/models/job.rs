use serde::{Deserialize, Serialize};
use url::Url;

/// One posting from a job search. The active selection is a listing's
/// `title` (string identity), never an index or reference into the set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    pub link: Url,
}
