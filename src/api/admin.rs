//! Admin Subject API
//!
//! Mutating bindings. The backend enforces the admin role on every call;
//! hiding the controls client-side is display only.

use super::{post_json, post_unit, ApiConfig};
use crate::models::{RemoveSubjectRequest, Subject, SubjectRequest};

/// Client for the admin-gated subject endpoints
#[derive(Clone)]
pub struct AdminSubjectApi {
    config: ApiConfig,
}

impl AdminSubjectApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Create or update one subject; the backend decides by `subject.id`.
    pub async fn add_or_update_subject(&self, request: &SubjectRequest) -> Result<Subject, String> {
        post_json(&self.config, "admin/subjects", request).await
    }

    /// Remove one subject's entry for one language.
    pub async fn remove_subject(&self, request: &RemoveSubjectRequest) -> Result<(), String> {
        post_unit(&self.config, "admin/subjects/remove", request).await
    }
}
