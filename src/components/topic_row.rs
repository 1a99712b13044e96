//! Topic Row
//!
//! One subject in the list: a link to its text page plus admin-only
//! edit/delete actions.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::auth;
use crate::i18n;
use crate::models::Subject;
use crate::store::{use_session, SessionStoreFields};

#[component]
pub fn TopicRow(
    subject: Subject,
    #[prop(into)] on_edit: Callback<Subject>,
    #[prop(into)] on_delete: Callback<i64>,
) -> impl IntoView {
    let session = use_session();

    let id = subject.id;
    let name = subject.name.clone();
    // Subjects come from the list endpoint with ids; 0 only ever renders
    // for a row the backend could not have produced.
    let detail_href = format!("/get_text/subject/{}", id.unwrap_or_default());

    let actions = move || {
        auth::is_admin_value(&session.role().get()).then(|| {
            let edit_subject = subject.clone();
            view! {
                <span class="topic-actions">
                    <button class="edit-btn" on:click=move |_| on_edit.run(edit_subject.clone())>
                        {move || i18n::translate(&session.language().get(), "topics.edit")}
                    </button>
                    <button class="delete-btn" on:click=move |_| {
                        if let Some(id) = id {
                            on_delete.run(id);
                        }
                    }>
                        {move || i18n::translate(&session.language().get(), "topics.delete")}
                    </button>
                </span>
            }
        })
    };

    view! {
        <div class="topic-row">
            <A href=detail_href>{name}</A>
            {actions}
        </div>
    }
}
