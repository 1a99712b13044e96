//! Subject API
//!
//! Read-side bindings for the public subject endpoints.

use super::{get_json, ApiConfig};
use crate::models::SubjectsResponse;

/// Client for the public subject endpoints
#[derive(Clone)]
pub struct SubjectApi {
    config: ApiConfig,
}

impl SubjectApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Fetch all subjects carrying text in `language`.
    pub async fn get_subjects(&self, language: &str) -> Result<SubjectsResponse, String> {
        get_json(&self.config, &format!("subjects/{language}")).await
    }
}
