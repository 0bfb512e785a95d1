//! 商品名検索

use caguuu_common::view::{SEARCH_HEADING, SEARCH_LABEL, SEARCH_PLACEHOLDER};
use caguuu_common::Session;
use leptos::prelude::*;

/// 入力確定（Enter / フォーカス外れ）でセッションに反映する
#[component]
pub fn SearchBox(session: ReadSignal<Session>, set_session: WriteSignal<Session>) -> impl IntoView {
    view! {
        <section class="cag-section">
            <h2>{SEARCH_HEADING}</h2>
            <label class="cag-search">
                <span>{SEARCH_LABEL}</span>
                <input
                    type="search"
                    placeholder=SEARCH_PLACEHOLDER
                    prop:value=move || session.with(|s| s.search().to_string())
                    on:change=move |ev| {
                        let text = event_target_value(&ev);
                        set_session.update(move |s| s.set_search(&text));
                    }
                />
            </label>
        </section>
    }
}
