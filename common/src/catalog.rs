//! カタログ（products.csv）読み込みモジュール
//!
//! CSVを読み込み、欠損列・欠損値・価格を一度だけ正規化して
//! `Vec<Product>` にする。列は名前で対応付けるので順序は問わない。

use crate::error::CatalogError;
use crate::types::Product;
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// 既定のカタログファイル名
pub const DEFAULT_CSV_PATH: &str = "products.csv";

/// 表計算ソフト由来の欠損値表記（空セルを含む）
const NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan",
    "1.#IND", "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a",
    "nan", "null",
];

/// ヘッダー名 → 列番号
#[derive(Debug, Default)]
struct ColumnMap {
    category: Option<usize>,
    product_name: Option<usize>,
    variation_text: Option<usize>,
    price: Option<usize>,
    sales_point: Option<usize>,
    ec_url: Option<usize>,
    image_url: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut map = Self::default();
        for (index, raw) in headers.iter().enumerate() {
            let slot = match raw.trim_start_matches('\u{feff}').trim() {
                "category" => &mut map.category,
                "product_name" => &mut map.product_name,
                "variation_text" => &mut map.variation_text,
                "price" => &mut map.price,
                "sales_point" => &mut map.sales_point,
                "ec_url" => &mut map.ec_url,
                "image_url" => &mut map.image_url,
                _ => continue,
            };
            // 重複ヘッダーは先勝ち
            if slot.is_none() {
                *slot = Some(index);
            }
        }
        map
    }
}

/// CSVファイルから読み込み
pub fn load_catalog(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CatalogError::NotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::Load(e.to_string()),
    })?;

    let products = parse_catalog(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), rows = products.len(), "カタログを読み込みました");
    Ok(products)
}

/// CSVテキスト（任意のReader）から読み込み
pub fn parse_catalog<R: Read>(reader: R) -> Result<Vec<Product>, CatalogError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| CatalogError::Load(e.to_string()))?
        .clone();
    if headers.iter().all(|h| h.trim_start_matches('\u{feff}').trim().is_empty()) {
        return Err(CatalogError::Load("ヘッダー行がありません（空のファイル）".to_string()));
    }

    let columns = ColumnMap::from_headers(&headers);
    let mut products = Vec::new();
    let mut seen: HashMap<(String, String, String), usize> = HashMap::new();

    for result in rdr.records() {
        let record = result.map_err(|e| CatalogError::Load(e.to_string()))?;

        // 足りないセルは空扱い、多すぎる行はファイル破損とみなす
        if record.len() > headers.len() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(CatalogError::Load(format!(
                "{}行目: {}列のはずが{}列あります",
                line,
                headers.len(),
                record.len()
            )));
        }

        let category = text_cell(&record, columns.category);
        let product_name = text_cell(&record, columns.product_name);
        let variation_text = text_cell(&record, columns.variation_text);

        // 同じキーの行は出現順に番号を振る
        let count = seen
            .entry((category.clone(), product_name.clone(), variation_text.clone()))
            .or_insert(0);
        let occurrence = *count;
        *count += 1;

        products.push(Product {
            category,
            product_name,
            variation_text,
            price: parse_price(raw_cell(&record, columns.price)),
            sales_point: text_cell(&record, columns.sales_point),
            ec_url: text_cell(&record, columns.ec_url),
            image_url: text_cell(&record, columns.image_url),
            occurrence,
        });
    }

    Ok(products)
}

/// 価格セルを0以上の整数に変換
///
/// 数値として読めない値・負数・欠損は0。小数は切り捨て。
pub fn parse_price(cell: &str) -> u64 {
    let value = cell.trim();
    if is_null_marker(value) {
        return 0;
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => n.trunc() as u64,
        _ => 0,
    }
}

fn is_null_marker(value: &str) -> bool {
    NULL_MARKERS.contains(&value)
}

fn raw_cell(record: &StringRecord, index: Option<usize>) -> &str {
    index.and_then(|i| record.get(i)).unwrap_or("")
}

fn text_cell(record: &StringRecord, index: Option<usize>) -> String {
    let value = raw_cell(record, index);
    if is_null_marker(value) {
        String::new()
    } else {
        value.to_string()
    }
}
