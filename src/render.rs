//! 画面モデルのテキスト描画（ターミナル用）

use caguuu_common::view::{
    CatalogView, CategorySwitcher, DetailPanel, EcLink, Listing, Notice, NoticeLevel, Page,
    PageBody, ProductCard, CATEGORY_HEADING, DETAIL_BUTTON_LABEL, GRID_HEADING, SALES_HEADING,
    SEARCH_HEADING,
};
use std::fmt::Write;

const RULE: &str = "────────────────────────────────";

fn notice_mark(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "ℹ",
        NoticeLevel::Success => "✔",
        NoticeLevel::Warning => "⚠",
        NoticeLevel::Error => "✖",
    }
}

fn write_notice(out: &mut String, notice: &Notice, indent: &str) {
    let _ = writeln!(out, "{}{} {}", indent, notice_mark(notice.level), notice.message);
}

/// 1画面分をテキストにする
pub fn render_text(page: &Page) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", page.title);
    let _ = writeln!(out, "{}", page.caption);
    let _ = writeln!(out);

    match &page.body {
        PageBody::Failed(notice) => write_notice(&mut out, notice, ""),
        PageBody::Catalog(view) => write_catalog(&mut out, view),
    }
    out
}

fn write_catalog(out: &mut String, view: &CatalogView) {
    let _ = writeln!(out, "## {}", CATEGORY_HEADING);
    match &view.switcher {
        CategorySwitcher::Buttons(buttons) => {
            let labels: Vec<String> = buttons.iter().map(|b| format!("[{}]", b.label)).collect();
            let _ = writeln!(out, "{}", labels.join(" "));
        }
        CategorySwitcher::Missing(notice) => write_notice(out, notice, ""),
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## {}", SEARCH_HEADING);
    let value = if view.search.value.trim().is_empty() {
        format!("（{}）", view.search.placeholder)
    } else {
        view.search.value.clone()
    };
    let _ = writeln!(out, "{}: {}", view.search.label, value);
    if let Some(notice) = &view.search_notice {
        write_notice(out, notice, "");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## {}", GRID_HEADING);
    match &view.listing {
        Listing::Empty(notice) => write_notice(out, notice, ""),
        Listing::Cards(cards) => {
            for (i, card) in cards.iter().enumerate() {
                write_card(out, i + 1, card);
            }
            let _ = writeln!(out, "{}", RULE);
        }
    }
}

fn write_card(out: &mut String, number: usize, card: &ProductCard) {
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{:>2}. {}", number, card.product_name);
    if let Some(variation) = &card.variation {
        let _ = writeln!(out, "    〔{}〕", variation);
    }
    let _ = writeln!(out, "    {}", card.price_label);
    if !card.image_url.is_empty() {
        let _ = writeln!(out, "    画像: {}", card.image_url);
    }

    match &card.detail {
        Some(detail) => write_detail(out, detail),
        None => {
            let _ = writeln!(out, "    ▶ {}", DETAIL_BUTTON_LABEL);
        }
    }
}

fn write_detail(out: &mut String, detail: &DetailPanel) {
    let _ = writeln!(out, "    ▼ {}", SALES_HEADING);
    for line in &detail.sales_lines {
        let _ = writeln!(out, "      {}", line);
    }
    match &detail.link {
        EcLink::Open { url, label } => {
            let _ = writeln!(out, "    {} {}", label, url);
        }
        EcLink::Missing(notice) => write_notice(out, notice, "    "),
    }
}
