//! メインアプリケーションコンポーネント

use crate::components::{CategorySwitch, Header, NoticeBox, ProductGrid, SearchBox};
use crate::fetch::{fetch_catalog, CATALOG_URL};
use caguuu_common::{render_page, CatalogError, Page, PageBody, Product, Session};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

type Loaded = Result<Vec<Product>, CatalogError>;

#[component]
pub fn App() -> impl IntoView {
    let (session, set_session) = signal(Session::default());
    let (catalog, set_catalog) = signal(None::<Loaded>);

    // 操作のたびにCSVを取り直す
    Effect::new(move |_| {
        session.track();
        wasm_bindgen_futures::spawn_local(async move {
            let loaded = fetch_catalog(CATALOG_URL).await;
            if let Err(err) = &loaded {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "カタログを表示できません: {}",
                    err
                )));
            }
            set_catalog.set(Some(loaded));
        });
    });

    let page = Memo::new(move |_| {
        catalog.with(|loaded| {
            loaded
                .as_ref()
                .map(|loaded| session.with(|s| render_page(loaded, s)))
        })
    });

    let failure = move || {
        page.with(|p| match p {
            Some(Page { body: PageBody::Failed(notice), .. }) => Some(notice.clone()),
            _ => None,
        })
    };
    let has_catalog = move || page.with(|p| matches!(p, Some(Page { body: PageBody::Catalog(_), .. })));

    view! {
        <div class="container">
            <Header />
            <Show when=move || page.with(Option::is_some) fallback=|| view! { <p class="loading">"読み込み中..."</p> }>
                {move || failure().map(|notice| view! { <NoticeBox notice=notice /> })}
            </Show>
            <Show when=has_catalog>
                {move || {
                    page.with(|p| match p {
                        Some(Page { body: PageBody::Catalog(view), .. }) => Some(view.switcher.clone()),
                        _ => None,
                    })
                    .map(|switcher| view! { <CategorySwitch switcher=switcher set_session=set_session /> })
                }}
                <SearchBox session=session set_session=set_session />
                {move || {
                    page.with(|p| match p {
                        Some(Page { body: PageBody::Catalog(view), .. }) => view.search_notice.clone(),
                        _ => None,
                    })
                    .map(|notice| view! { <NoticeBox notice=notice /> })
                }}
                {move || {
                    page.with(|p| match p {
                        Some(Page { body: PageBody::Catalog(view), .. }) => Some(view.listing.clone()),
                        _ => None,
                    })
                    .map(|listing| view! { <ProductGrid listing=listing set_session=set_session /> })
                }}
            </Show>
        </div>
    }
}
