//! UI Components
//!
//! Leptos components for the topics screen.

mod topic_edit_form;
mod topic_row;
mod topics_page;

pub use topic_edit_form::TopicEditForm;
pub use topic_row::TopicRow;
pub use topics_page::TopicsPage;
