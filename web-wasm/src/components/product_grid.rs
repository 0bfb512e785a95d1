//! 商品一覧と詳細パネル

use super::NoticeBox;
use caguuu_common::view::{
    DetailPanel, EcLink, Listing, ProductCard, DETAIL_BUTTON_LABEL, GRID_HEADING, SALES_HEADING,
};
use caguuu_common::Session;
use leptos::prelude::*;

#[component]
pub fn ProductGrid(listing: Listing, set_session: WriteSignal<Session>) -> impl IntoView {
    let body = match listing {
        Listing::Empty(notice) => view! { <NoticeBox notice=notice /> }.into_any(),
        Listing::Cards(cards) => {
            let cards = cards
                .into_iter()
                .map(|card| view! { <ProductCardView card=card set_session=set_session /> })
                .collect::<Vec<_>>();
            view! { <div class="cag-grid">{cards}</div> }.into_any()
        }
    };

    view! {
        <section class="cag-section">
            <h2>{GRID_HEADING}</h2>
            {body}
        </section>
    }
}

#[component]
fn ProductCardView(card: ProductCard, set_session: WriteSignal<Session>) -> impl IntoView {
    let ProductCard { key, product_name, variation, image_url, price_label, detail } = card;
    let is_open = detail.is_some();
    let alt = product_name.clone();

    view! {
        <article class="cag-card" class:open=is_open>
            <img class="cag-thumb" src=image_url alt=alt width="140" />
            <h3 class="cag-title">{product_name}</h3>
            {variation.map(|v| view! { <p class="cag-variation">{v}</p> })}
            <p class="cag-price">{price_label}</p>
            <button
                class="cag-detail-btn"
                on:click=move |_| {
                    let key = key.clone();
                    set_session.update(move |s| s.open_detail(key));
                }
            >
                {DETAIL_BUTTON_LABEL}
            </button>
            {detail.map(|detail| view! { <DetailView detail=detail /> })}
        </article>
    }
}

#[component]
fn DetailView(detail: DetailPanel) -> impl IntoView {
    let lines = detail
        .sales_lines
        .into_iter()
        .map(|line| view! { <p class="cag-sales-line">{line}</p> })
        .collect::<Vec<_>>();

    let link = match detail.link {
        EcLink::Open { url, label } => view! {
            <a class="cag-ec-btn" href=url target="_blank" rel="noopener noreferrer">
                {label}
            </a>
        }
        .into_any(),
        EcLink::Missing(notice) => view! { <NoticeBox notice=notice /> }.into_any(),
    };

    view! {
        <div class="cag-detail">
            <h4>{SALES_HEADING}</h4>
            <div class="cag-sales">{lines}</div>
            {link}
        </div>
    }
}
