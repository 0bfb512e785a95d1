//! お知らせ表示

use caguuu_common::view::Notice;
use leptos::prelude::*;

#[component]
pub fn NoticeBox(notice: Notice) -> impl IntoView {
    let class = format!("notice notice-{}", notice.level.as_str());
    view! {
        <div class=class role="status">{notice.message}</div>
    }
}
