//! カテゴリ切り替えボタン

use super::NoticeBox;
use caguuu_common::view::{CategorySwitcher, CATEGORY_HEADING};
use caguuu_common::Session;
use leptos::prelude::*;

#[component]
pub fn CategorySwitch(switcher: CategorySwitcher, set_session: WriteSignal<Session>) -> impl IntoView {
    let body = match switcher {
        CategorySwitcher::Missing(notice) => view! { <NoticeBox notice=notice /> }.into_any(),
        CategorySwitcher::Buttons(buttons) => {
            let buttons = buttons
                .into_iter()
                .map(|button| {
                    let category = button.category.clone();
                    view! {
                        <button
                            class="cag-cat-btn"
                            class:selected=button.selected
                            on:click=move |_| {
                                let category = category.clone();
                                set_session.update(move |s| s.select_category(&category));
                            }
                        >
                            {button.label}
                        </button>
                    }
                })
                .collect::<Vec<_>>();
            view! { <div class="cag-cat-grid">{buttons}</div> }.into_any()
        }
    };

    view! {
        <section class="cag-section">
            <h2>{CATEGORY_HEADING}</h2>
            {body}
        </section>
    }
}
