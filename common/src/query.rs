//! 絞り込み・並び替え
//!
//! 検索語があればカテゴリを無視して全商品から商品名で探し、
//! なければ選択中カテゴリで絞り込む。結果は常に商品名の昇順。

use crate::types::Product;
use std::collections::BTreeSet;

/// 「全商品」カテゴリ（絞り込みなし）
pub const ALL_CATEGORIES: &str = "全商品";

/// 表示する商品を決める
///
/// 入力テーブルは変更しない。並び替えは安定ソート（同名は元の順）。
pub fn filter_products<'a>(
    products: &'a [Product],
    selected_category: &str,
    search_text: &str,
) -> Vec<&'a Product> {
    let query = search_text.trim();

    let mut filtered: Vec<&Product> = if !query.is_empty() {
        let needle = query.to_lowercase();
        products
            .iter()
            .filter(|p| p.product_name.to_lowercase().contains(&needle))
            .collect()
    } else if selected_category == ALL_CATEGORIES {
        products.iter().collect()
    } else {
        products
            .iter()
            .filter(|p| p.category == selected_category)
            .collect()
    };

    filtered.sort_by(|a, b| a.product_name.cmp(&b.product_name));
    filtered
}

/// カテゴリボタンの一覧（先頭は「全商品」、以降は昇順）
pub fn category_list(products: &[Product]) -> Vec<String> {
    let distinct: BTreeSet<&str> = products
        .iter()
        .map(|p| p.category.as_str())
        .filter(|c| !c.trim().is_empty())
        .collect();

    let mut categories = Vec::with_capacity(distinct.len() + 1);
    categories.push(ALL_CATEGORIES.to_string());
    categories.extend(distinct.into_iter().map(str::to_string));
    categories
}

/// 空でないカテゴリが1つでもあるか
pub fn has_categories(products: &[Product]) -> bool {
    products.iter().any(|p| !p.category.trim().is_empty())
}
