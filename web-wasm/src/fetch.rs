//! 商品カタログCSVの取得
//!
//! 画面を描き直すたびに取り直す。キャッシュは使わない。

use caguuu_common::{parse_catalog, CatalogError, Product};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, RequestMode, Response};

/// 配信元に置かれたカタログCSV
pub const CATALOG_URL: &str = "products.csv";

/// CSVを取得して商品一覧にする
pub async fn fetch_catalog(url: &str) -> Result<Vec<Product>, CatalogError> {
    let text = fetch_text(url).await?;
    parse_catalog(text.as_bytes())
}

async fn fetch_text(url: &str) -> Result<String, CatalogError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_cache(RequestCache::NoStore);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let window = web_sys::window()
        .ok_or_else(|| CatalogError::Load("window がありません".to_string()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if resp.status() == 404 {
        return Err(CatalogError::NotFound { path: url.to_string() });
    }
    if !resp.ok() {
        return Err(CatalogError::Load(format!("HTTP {}", resp.status())));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| CatalogError::Load("レスポンスが文字列ではありません".to_string()))
}

fn js_error(value: JsValue) -> CatalogError {
    CatalogError::Load(format!("{:?}", value))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_js_error_is_load() {
        let err = js_error(JsValue::from_str("boom"));
        assert!(matches!(err, CatalogError::Load(ref m) if m.contains("boom")));
        assert!(!err.is_not_found());
    }

    #[wasm_bindgen_test]
    fn test_fetched_text_parses_like_file() {
        let products = parse_catalog("category,product_name,price\nソファ,A,1000\n".as_bytes()).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price, 1000);
    }
}
