//! Topics Admin App
//!
//! App shell: session store, API clients, and the reload context are
//! provided here, with a router and a minimal header carrying the
//! language switcher.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api::{ApiConfig, ApiContext};
use crate::components::TopicsPage;
use crate::context::AppContext;
use crate::i18n;
use crate::store::{self, Session, SessionStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let session = Store::new(Session::load());
    provide_context(session);
    provide_context(ApiContext::new(ApiConfig::from_window()));
    provide_context(AppContext::new());

    view! {
        <Router>
            <header class="top-bar">
                <h1>{move || i18n::translate(&session.language().get(), "topics.title")}</h1>
                <div class="language-switcher">
                    {i18n::LANGUAGES.iter().map(|(code, label)| {
                        let is_active = move || session.language().get() == *code;
                        view! {
                            <button
                                class=move || if is_active() { "lang-btn active" } else { "lang-btn" }
                                on:click=move |_| store::set_language(&session, code)
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </header>
            <main class="page">
                <Routes fallback=|| view! { <p class="not-found">"Not found"</p> }>
                    <Route path=path!("/") view=TopicsPage/>
                    <Route path=path!("/topics") view=TopicsPage/>
                </Routes>
            </main>
        </Router>
    }
}
