//! 表示用の整形ユーティリティ

use crate::query::ALL_CATEGORIES;

/// 未登録カテゴリのアイコン
pub const FALLBACK_ICON: &str = "📦";

const CATEGORY_ICONS: &[(&str, &str)] = &[
    (ALL_CATEGORIES, "🌏"),
    ("ベッド", "🛏️"),
    ("ソファ", "🛋️"),
    ("テーブル", "📚"),
    ("チェア", "🪑"),
    ("収納", "🧺"),
    ("デスク", "💻"),
    ("その他", "🎲"),
    ("照明", "💡"),
];

/// 「¥120,000」形式
pub fn format_yen(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("¥{}", grouped)
}

/// カテゴリ名からアイコンを引く
pub fn category_icon(category: &str) -> &'static str {
    CATEGORY_ICONS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, icon)| *icon)
        .unwrap_or(FALLBACK_ICON)
}

/// セールスポイントを行に分割
///
/// CSV内の文字列 `\n`（バックスラッシュ+n）と実際の改行の両方を改行とみなす。
pub fn sales_point_lines(text: &str) -> Vec<String> {
    text.replace("\\n", "\n")
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
