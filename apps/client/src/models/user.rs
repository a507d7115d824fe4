use serde::{Deserialize, Serialize};

/// The user payload returned by `/check-auth` and `/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Personal details the user supplies for generation.
///
/// Serializes with the backend's camelCase field spellings (`fullName`,
/// `linkedIn`, ...). Every field is freely editable; only the first three
/// gate generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linked_in: String,
    pub years_of_experience: String,
    pub education: String,
    pub certifications: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FullName,
    Email,
    Phone,
    Location,
    LinkedIn,
    YearsOfExperience,
    Education,
    Certifications,
}

impl ProfileField {
    /// Parses a field name as typed at the prompt.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "name" | "fullname" => Some(ProfileField::FullName),
            "email" => Some(ProfileField::Email),
            "phone" => Some(ProfileField::Phone),
            "location" => Some(ProfileField::Location),
            "linkedin" => Some(ProfileField::LinkedIn),
            "experience" | "years" => Some(ProfileField::YearsOfExperience),
            "education" => Some(ProfileField::Education),
            "certifications" | "certs" => Some(ProfileField::Certifications),
            _ => None,
        }
    }
}

impl UserProfile {
    /// Unconditional assignment; no validation happens per edit.
    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::FullName => self.full_name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Phone => self.phone = value,
            ProfileField::Location => self.location = value,
            ProfileField::LinkedIn => self.linked_in = value,
            ProfileField::YearsOfExperience => self.years_of_experience = value,
            ProfileField::Education => self.education = value,
            ProfileField::Certifications => self.certifications = value,
        }
    }

    /// Derived on demand: full name, email and phone non-empty after trimming.
    pub fn required_complete(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
    }
}
