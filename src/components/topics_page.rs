//! Topics Page
//!
//! Subject list with admin-only add/edit/delete controls and the inline
//! edit form. The list is the only cache: it reloads after every mutation
//! and on language switch, and a failed load keeps the last good state
//! visible.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiContext;
use crate::auth;
use crate::components::{TopicEditForm, TopicRow};
use crate::context::AppContext;
use crate::i18n;
use crate::models::{RemoveSubjectRequest, Subject};
use crate::store::{use_session, SessionStoreFields};

#[component]
pub fn TopicsPage() -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let (subjects, set_subjects) = signal(Vec::<Subject>::new());
    let (show_edit, set_show_edit) = signal(false);
    let (editing, set_editing) = signal::<Option<Subject>>(None);

    // Load on mount, after every mutation, and on language switch
    let load_api = api.clone();
    Effect::new(move |_| {
        ctx.track_topics();
        let language = session.language().get();
        let client = load_api.subjects.clone();
        spawn_local(async move {
            match client.get_subjects(&language).await {
                Ok(response) => {
                    if let Some(loaded) = response.subjects {
                        set_subjects.set(loaded);
                    }
                }
                Err(error) => {
                    web_sys::console::error_1(&format!("loading subjects failed: {error}").into());
                }
            }
        });
    });

    let start_add = move |_| {
        set_editing.set(None);
        set_show_edit.set(true);
    };

    let start_edit = Callback::new(move |subject: Subject| {
        set_editing.set(Some(subject));
        set_show_edit.set(true);
    });

    let delete_api = api;
    let delete = Callback::new(move |id: i64| {
        let request = RemoveSubjectRequest {
            subject_id: id,
            language: session.language().get_untracked(),
        };
        let client = delete_api.admin.clone();
        spawn_local(async move {
            match client.remove_subject(&request).await {
                Ok(()) => ctx.reload_topics(),
                Err(error) => {
                    web_sys::console::error_1(
                        &format!("removing subject {id} failed: {error}").into(),
                    );
                }
            }
        });
    });

    let is_admin = move || auth::is_admin_value(&session.role().get());

    view! {
        <div class="topics-page">
            {move || show_edit.get().then(|| view! {
                <TopicEditForm
                    subject=editing.get()
                    on_saved=Callback::new(move |_| {
                        set_show_edit.set(false);
                        ctx.reload_topics();
                    })
                    on_cancel=Callback::new(move |_| set_show_edit.set(false))
                />
            })}

            <Show when=move || is_admin() && !show_edit.get()>
                <button class="add-topic-btn" on:click=start_add>
                    {move || i18n::translate(&session.language().get(), "topics.add")}
                </button>
            </Show>

            <div class="topic-list">
                <For
                    each=move || subjects.get()
                    key=|subject| subject.id
                    children=move |subject| view! {
                        <TopicRow subject=subject on_edit=start_edit on_delete=delete/>
                    }
                />
            </div>
        </div>
    }
}
