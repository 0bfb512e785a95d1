//! 商品データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Product: カタログの1行（読み込み時に正規化済み）
//! - ProductKey: 詳細パネルの開閉状態に使う安定キー

use serde::{Deserialize, Serialize};

/// カタログの1商品
///
/// 文字列フィールドは欠損時に空文字、価格は常に0以上の整数。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub category: String,         // カテゴリ

    pub product_name: String,     // 商品名（並び順・検索対象）

    pub variation_text: String,   // バリエーション（補足）

    pub price: u64,               // 通常税込価格（円）

    pub sales_point: String,      // セールスポイント（接客トーク）

    pub ec_url: String,           // ECページURL

    pub image_url: String,        // サムネイル画像URL

    /// 同じ (カテゴリ, 商品名, バリエーション) の行のうち何番目か（読み込み時に採番）
    #[serde(skip)]
    pub occurrence: usize,
}

impl Product {
    /// 詳細パネル用の安定キー
    pub fn key(&self) -> ProductKey {
        ProductKey {
            category: self.category.clone(),
            product_name: self.product_name.clone(),
            variation_text: self.variation_text.clone(),
            occurrence: self.occurrence,
        }
    }

    /// バリエーション表示テキスト（空白のみなら None）
    pub fn variation(&self) -> Option<&str> {
        let text = self.variation_text.trim();
        if text.is_empty() {
            None
        } else {
            Some(self.variation_text.as_str())
        }
    }

    /// ECページURL（前後空白を除去、未設定なら None）
    pub fn ec_link(&self) -> Option<&str> {
        let url = self.ec_url.trim();
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    }
}

/// 商品の識別キー
///
/// 表示位置ではなく (カテゴリ, 商品名, バリエーション) で商品を指す。
/// 同じ組み合わせの行が複数あるときは `occurrence` で区別する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductKey {
    pub category: String,
    pub product_name: String,
    pub variation_text: String,
    pub occurrence: usize,
}
