//! Topic Edit Form
//!
//! Controlled form for creating or updating one subject. A `subject` of
//! `None` opens an empty "new" form; submit posts the upsert and reports
//! back through `on_saved`, a failed submit leaves the form open with the
//! entered values intact.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::ApiContext;
use crate::i18n;
use crate::models::{Subject, SubjectRequest};
use crate::store::{use_session, SessionStoreFields};

#[component]
pub fn TopicEditForm(
    subject: Option<Subject>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<ApiContext>();
    let session = use_session();

    let initial = subject.unwrap_or_default();
    let subject_id = initial.id;
    let heading_name = initial.name.clone();

    let (name, set_name) = signal(initial.name);
    let (title, set_title) = signal(
        initial
            .text
            .as_ref()
            .map(|text| text.text_title.clone())
            .unwrap_or_default(),
    );
    let (body, set_body) = signal(
        initial
            .text
            .map(|text| text.text_string)
            .unwrap_or_default(),
    );

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = SubjectRequest::upsert(
            subject_id,
            &name.get(),
            &title.get(),
            &body.get(),
            &session.language().get_untracked(),
        );
        let client = api.admin.clone();
        spawn_local(async move {
            match client.add_or_update_subject(&request).await {
                Ok(_) => on_saved.run(()),
                Err(error) => {
                    web_sys::console::error_1(&format!("saving subject failed: {error}").into());
                }
            }
        });
    };

    let tr = move |key: &'static str| i18n::translate(&session.language().get(), key);

    view! {
        <div class="topic-edit">
            <h3>{heading_name} " " {move || tr("topics.edit")}</h3>
            <form on:submit=submit>
                <label for="subject_name">{move || tr("form.name")}</label>
                <input
                    type="text"
                    id="subject_name"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />
                <label for="subject_title">{move || tr("form.title")}</label>
                <input
                    type="text"
                    id="subject_title"
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(input.value());
                    }
                />
                <label for="subject_text">{move || tr("form.text")}</label>
                <textarea
                    id="subject_text"
                    rows=10
                    prop:value=move || body.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_body.set(area.value());
                    }
                ></textarea>
                <div class="form-actions">
                    <button type="submit">{move || tr("form.submit")}</button>
                    <button type="button" on:click=move |_| on_cancel.run(())>
                        {move || tr("form.cancel")}
                    </button>
                </div>
            </form>
        </div>
    }
}
