//! 対話式の接客モード
//!
//! 操作のたびにCSVを読み直し、絞り込み・描画をやり直す。

use crate::error::{AssistError, Result};
use crate::render::render_text;
use caguuu_common::view::{CatalogView, CategorySwitcher, SEARCH_LABEL};
use caguuu_common::{category_list, load_catalog, render_page, CatalogError, PageBody, Product, ProductKey, Session};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::path::Path;

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// カテゴリを切り替え
    Category(String),
    /// 検索語を入力
    Search,
    /// 詳細・トークを開く
    Open(ProductKey, String),
    /// 詳細を閉じる
    Close,
    /// CSVを読み直す
    Reload,
    /// 終了
    Quit,
}

impl BrowseAction {
    pub fn label(&self) -> String {
        match self {
            BrowseAction::Category(category) => format!("カテゴリ: {}", category),
            BrowseAction::Search => format!("🔍 {}", SEARCH_LABEL),
            BrowseAction::Open(_, name) => format!("📖 {} の詳細・トーク", name),
            BrowseAction::Close => "詳細を閉じる".to_string(),
            BrowseAction::Reload => "🔄 再読み込み".to_string(),
            BrowseAction::Quit => "終了".to_string(),
        }
    }
}

/// 画面に応じた操作一覧
pub fn browse_actions(page_body: &PageBody) -> Vec<BrowseAction> {
    let PageBody::Catalog(view) = page_body else {
        return vec![BrowseAction::Reload, BrowseAction::Quit];
    };

    let mut actions = Vec::new();
    let has_open = push_card_actions(&mut actions, view);
    if has_open {
        actions.push(BrowseAction::Close);
    }
    actions.push(BrowseAction::Search);
    if let CategorySwitcher::Buttons(buttons) = &view.switcher {
        actions.extend(
            buttons
                .iter()
                .filter(|b| !b.selected)
                .map(|b| BrowseAction::Category(b.category.clone())),
        );
    }
    actions.push(BrowseAction::Reload);
    actions.push(BrowseAction::Quit);
    actions
}

fn push_card_actions(actions: &mut Vec<BrowseAction>, view: &CatalogView) -> bool {
    let mut has_open = false;
    for card in view.cards() {
        if card.detail.is_some() {
            has_open = true;
        } else {
            actions.push(BrowseAction::Open(card.key.clone(), card.product_name.clone()));
        }
    }
    has_open
}

/// 操作をセッションに反映。終了なら false
pub fn apply_action(session: &mut Session, action: BrowseAction, search_input: Option<String>) -> bool {
    match action {
        BrowseAction::Category(category) => session.select_category(&category),
        BrowseAction::Search => {
            if let Some(text) = search_input {
                session.set_search(&text);
            }
        }
        BrowseAction::Open(key, _) => session.open_detail(key),
        BrowseAction::Close => session.close_detail(),
        BrowseAction::Reload => {}
        BrowseAction::Quit => return false,
    }
    true
}

fn initial_session(loaded: &std::result::Result<Vec<Product>, CatalogError>) -> Session {
    match loaded {
        Ok(products) => Session::new(&category_list(products)),
        Err(_) => Session::default(),
    }
}

/// 接客モードを実行
pub fn run_browse(csv_path: &Path) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut session: Option<Session> = None;

    loop {
        let loaded = load_catalog(csv_path);
        if let Err(err) = &loaded {
            tracing::warn!(path = %csv_path.display(), error = %err, "カタログを表示できません");
        }
        let current = session.get_or_insert_with(|| initial_session(&loaded));

        let page = render_page(&loaded, current);
        println!("{}", render_text(&page));

        let actions = browse_actions(&page.body);
        let labels: Vec<String> = actions.iter().map(BrowseAction::label).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("操作を選んでください")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| AssistError::Prompt(e.to_string()))?;

        let action = actions[choice].clone();
        let search_input = if action == BrowseAction::Search {
            Some(prompt_search(&theme, current.search())?)
        } else {
            None
        };

        tracing::debug!(?action, "操作");
        if !apply_action(current, action, search_input) {
            break;
        }
    }

    Ok(())
}

fn prompt_search(theme: &ColorfulTheme, current: &str) -> Result<String> {
    Input::<String>::with_theme(theme)
        .with_prompt(format!("{}（空欄で検索解除）", SEARCH_LABEL))
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| AssistError::Prompt(e.to_string()))
}
