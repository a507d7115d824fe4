use crate::models::user::ProfileField;
use crate::workflow::Workflow;

impl Workflow {
    /// Unconditional local assignment; validity is derived when generation
    /// is requested, never on edit.
    pub fn set_profile_field(&mut self, field: ProfileField, value: impl Into<String>) {
        self.state.profile.set(field, value.into());
    }
}
