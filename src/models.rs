//! Frontend Models
//!
//! Data structures matching backend entities and wire bodies.

use serde::{Deserialize, Serialize};

/// Localized text block attached to a subject (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectText {
    pub text_string: String,
    pub text_title: String,
    pub language: String,
}

/// Subject data structure (matches backend)
///
/// A missing id means the subject has not been created yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: Option<i64>,
    pub name: String,
    pub text: Option<SubjectText>,
}

/// Body of the subject list endpoint.
///
/// The backend sends `null` instead of an empty array when a language has
/// no subjects; callers keep their current list in that case.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubjectsResponse {
    #[serde(default)]
    pub subjects: Option<Vec<Subject>>,
}

/// Upsert request for the admin subject endpoint.
///
/// Create and update share this shape; the backend distinguishes them by
/// the presence of `subject.id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectRequest {
    pub subject: Subject,
    pub language: String,
    pub text: SubjectText,
}

impl SubjectRequest {
    /// Build the upsert request for one submitted form.
    ///
    /// All three text sub-fields are always sent, unedited or not. A blank
    /// title is sent blank.
    pub fn upsert(id: Option<i64>, name: &str, title: &str, body: &str, language: &str) -> Self {
        let text = SubjectText {
            text_string: body.to_string(),
            text_title: title.to_string(),
            language: language.to_string(),
        };
        Self {
            subject: Subject {
                id,
                name: name.to_string(),
                text: Some(text.clone()),
            },
            language: language.to_string(),
            text,
        }
    }
}

/// Removal request, keyed by subject id and language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoveSubjectRequest {
    pub subject_id: i64,
    pub language: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_preserves_existing_id() {
        let request = SubjectRequest::upsert(Some(5), "Letters", "On letters", "Body", "en");
        assert_eq!(request.subject.id, Some(5));
    }

    #[test]
    fn upsert_for_new_subject_has_no_id() {
        let request = SubjectRequest::upsert(None, "Foo", "Bar", "Baz", "en");
        assert_eq!(request.subject.id, None);
        let wire = serde_json::to_value(&request).unwrap();
        assert!(wire["subject"]["id"].is_null());
    }

    #[test]
    fn upsert_stamps_language_everywhere() {
        let request = SubjectRequest::upsert(None, "Foo", "Bar", "Baz", "nl");
        assert_eq!(request.language, "nl");
        assert_eq!(request.text.language, "nl");
        assert_eq!(request.subject.text.as_ref().unwrap().language, "nl");
    }

    #[test]
    fn upsert_always_carries_all_text_fields() {
        let request = SubjectRequest::upsert(Some(1), "Name only", "", "", "en");
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["text"]["text_string"], "");
        assert_eq!(wire["text"]["text_title"], "");
        assert_eq!(wire["text"]["language"], "en");
    }

    #[test]
    fn blank_title_is_not_defaulted_to_name() {
        let request = SubjectRequest::upsert(None, "Amsterdam", "", "Some body", "en");
        assert_eq!(request.text.text_title, "");
        assert_eq!(request.subject.text.as_ref().unwrap().text_title, "");
    }

    #[test]
    fn remove_request_wire_shape() {
        let request = RemoveSubjectRequest { subject_id: 7, language: "en".to_string() };
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["subject_id"], 7);
        assert_eq!(wire["language"], "en");
    }

    #[test]
    fn null_subject_collection_deserializes_to_none() {
        let response: SubjectsResponse = serde_json::from_str(r#"{"subjects": null}"#).unwrap();
        assert_eq!(response.subjects, None);
        let response: SubjectsResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.subjects, None);
    }

    #[test]
    fn subject_collection_deserializes() {
        let body = r#"{"subjects": [
            {"id": 1, "name": "Travel", "text": {"text_string": "…", "text_title": "Travel", "language": "en"}},
            {"id": 2, "name": "Music", "text": null}
        ]}"#;
        let response: SubjectsResponse = serde_json::from_str(body).unwrap();
        let subjects = response.subjects.unwrap();
        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0].id, Some(1));
        assert_eq!(subjects[1].text, None);
    }
}
