//! サンプルカタログ（products.csv のひな形）
//!
//! 実行時には使わない。動作確認・デモ用。

use crate::error::Result;
use crate::types::Product;
use std::io::Write;

/// 出力列（variation_text は含めない）
pub const SAMPLE_HEADER: [&str; 6] = [
    "category",
    "product_name",
    "price",
    "sales_point",
    "ec_url",
    "image_url",
];

fn sample(category: &str, name: &str, price: u64, sales_point: &str, slug: &str, image: &str) -> Product {
    Product {
        category: category.to_string(),
        product_name: name.to_string(),
        variation_text: String::new(),
        price,
        sales_point: sales_point.to_string(),
        ec_url: format!("https://caguuu.com/products/{}", slug),
        image_url: format!("https://placehold.jp/200x200.png?text={}", image),
        occurrence: 0,
    }
}

/// 固定のサンプル商品6件
pub fn sample_products() -> Vec<Product> {
    vec![
        sample(
            "ベッド",
            "跳ね上げ式収納ベッド",
            85000,
            "★布団も入る大容量収納！\n★女性でも軽く持ち上がるガス圧式\n★通気性の良い床板で湿気対策",
            "bed01",
            "Bed01",
        ),
        sample(
            "ベッド",
            "コンセント付き宮棚ベッド",
            69000,
            "★スマホ充電OK！宮棚＋コンセント付き\n★圧迫感が少ないシンプルデザイン\n★組立てしやすい設計",
            "bed02",
            "Bed02",
        ),
        sample(
            "ソファ",
            "3人掛けレザーソファ",
            120000,
            "★傷に強い新素材レザー使用\n★ペットがいても安心\n★お手入れはサッと拭くだけ",
            "sofa01",
            "Sofa01",
        ),
        sample(
            "ソファ",
            "ゆったりカウチソファ（右カウチ）",
            158000,
            "★足を伸ばせるカウチでくつろぎ最大\n★座面が広く家族で使いやすい\n★カバーは外してお手入れ可能（※仕様に応じて）",
            "sofa02",
            "Sofa02",
        ),
        sample(
            "テーブル",
            "昇降リビングテーブル",
            49800,
            "★食事もPC作業もこれ1台\n★高さ調整で姿勢がラク\n★収納スペース付きで散らかりにくい",
            "table01",
            "Table01",
        ),
        sample(
            "テーブル",
            "丸型ダイニングテーブル（4人用）",
            78000,
            "★角がなく安心、動線がスムーズ\n★会話がしやすい丸テーブル\n★木目がきれいで部屋が明るく見える",
            "table02",
            "Table02",
        ),
    ]
}

/// ヘッダー付きCSVとして書き出す（UTF-8、改行を含むセルは引用符で囲む）
pub fn write_sample_csv<W: Write>(writer: W, products: &[Product]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(SAMPLE_HEADER)?;

    for p in products {
        let price = p.price.to_string();
        wtr.write_record([
            p.category.as_str(),
            p.product_name.as_str(),
            price.as_str(),
            p.sales_point.as_str(),
            p.ec_url.as_str(),
            p.image_url.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
