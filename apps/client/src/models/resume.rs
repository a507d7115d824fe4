/// A résumé file staged locally, validated but not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// The parsed résumé returned by a successful upload.
/// Immutable once stored; a later upload replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDocument {
    pub filename: String,
    pub skills: Vec<String>,
    pub full_text: String,
}

/// The tailored résumé text from one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedResume {
    pub text: String,
}
