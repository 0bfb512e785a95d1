//! ヘッダーコンポーネント

use caguuu_common::view::{APP_CAPTION, APP_TITLE};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>{APP_TITLE}</h1>
            <p class="caption">{APP_CAPTION}</p>
        </header>
    }
}
