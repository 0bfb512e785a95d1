//! 接客セッションの状態
//!
//! 1人のスタッフの操作中だけ保持する。再起動で初期値に戻る。

use crate::query::ALL_CATEGORIES;
use crate::types::ProductKey;

/// セッション状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    selected_category: String,
    search: String,
    open_detail: Option<ProductKey>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORIES.to_string(),
            search: String::new(),
            open_detail: None,
        }
    }
}

impl Session {
    /// カテゴリ一覧の先頭を選択した状態で開始
    pub fn new(categories: &[String]) -> Self {
        Self {
            selected_category: categories
                .first()
                .cloned()
                .unwrap_or_else(|| ALL_CATEGORIES.to_string()),
            ..Self::default()
        }
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// 検索欄の入力そのまま
    pub fn search(&self) -> &str {
        &self.search
    }

    /// 絞り込みに使う検索語（前後空白除去）
    pub fn search_text(&self) -> &str {
        self.search.trim()
    }

    pub fn open_detail_key(&self) -> Option<&ProductKey> {
        self.open_detail.as_ref()
    }

    /// カテゴリボタン: 選択を切り替え、開いている詳細を閉じる
    pub fn select_category(&mut self, category: &str) {
        self.selected_category = category.to_string();
        self.open_detail = None;
    }

    /// 検索欄の更新。検索語が変わったら詳細を閉じる
    pub fn set_search(&mut self, text: &str) {
        if text.trim() != self.search_text() {
            self.open_detail = None;
        }
        self.search = text.to_string();
    }

    /// 「詳細・トークを見る」
    pub fn open_detail(&mut self, key: ProductKey) {
        self.open_detail = Some(key);
    }

    pub fn close_detail(&mut self) {
        self.open_detail = None;
    }

    pub fn is_open(&self, key: &ProductKey) -> bool {
        self.open_detail.as_ref() == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> ProductKey {
        ProductKey {
            category: "ベッド".to_string(),
            product_name: name.to_string(),
            variation_text: String::new(),
            occurrence: 0,
        }
    }

    #[test]
    fn test_default_is_all_categories() {
        let session = Session::default();
        assert_eq!(session.selected_category(), ALL_CATEGORIES);
        assert_eq!(session.search(), "");
        assert!(session.open_detail_key().is_none());
    }

    #[test]
    fn test_new_uses_first_category() {
        let categories = vec![ALL_CATEGORIES.to_string(), "ソファ".to_string()];
        assert_eq!(Session::new(&categories).selected_category(), ALL_CATEGORIES);
        assert_eq!(Session::new(&[]).selected_category(), ALL_CATEGORIES);
    }

    #[test]
    fn test_select_category_clears_detail() {
        let mut session = Session::default();
        session.open_detail(key("跳ね上げ式収納ベッド"));
        assert!(session.is_open(&key("跳ね上げ式収納ベッド")));

        session.select_category("ソファ");
        assert_eq!(session.selected_category(), "ソファ");
        assert!(session.open_detail_key().is_none());
    }

    #[test]
    fn test_new_search_clears_detail() {
        let mut session = Session::default();
        session.open_detail(key("跳ね上げ式収納ベッド"));

        session.set_search("ベッド");
        assert_eq!(session.search_text(), "ベッド");
        assert!(session.open_detail_key().is_none());
    }

    #[test]
    fn test_same_search_keeps_detail() {
        let mut session = Session::default();
        session.set_search("ベッド");
        session.open_detail(key("跳ね上げ式収納ベッド"));

        // 空白だけの違いは同じ検索語
        session.set_search(" ベッド ");
        assert_eq!(session.search(), " ベッド ");
        assert!(session.is_open(&key("跳ね上げ式収納ベッド")));
    }

    #[test]
    fn test_only_one_detail_open() {
        let mut session = Session::default();
        session.open_detail(key("A"));
        session.open_detail(key("B"));

        assert!(!session.is_open(&key("A")));
        assert!(session.is_open(&key("B")));

        session.close_detail();
        assert!(!session.is_open(&key("B")));
    }
}
