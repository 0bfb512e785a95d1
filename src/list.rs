//! 商品一覧を1回だけ描画する（`caguuu list`）

use crate::error::Result;
use caguuu_common::{
    category_list, filter_products, render_page, CatalogError, Page, Product, Session,
};

/// 指定条件のセッションと、その1画面分
///
/// `open` は表示中の商品のうち商品名が一致する最初の1件の詳細を開く。
pub fn list_page(
    loaded: &std::result::Result<Vec<Product>, CatalogError>,
    category: &str,
    search: &str,
    open: Option<&str>,
) -> (Session, Page) {
    let mut session = match loaded {
        Ok(products) => Session::new(&category_list(products)),
        Err(_) => Session::default(),
    };
    session.select_category(category);
    session.set_search(search);

    if let (Ok(products), Some(name)) = (loaded, open) {
        match shown_products(products, &session)
            .into_iter()
            .find(|p| p.product_name == name)
        {
            Some(product) => session.open_detail(product.key()),
            None => tracing::warn!(name, "表示中の商品に見つかりません"),
        }
    }

    let page = render_page(loaded, &session);
    (session, page)
}

/// 画面に並ぶ商品（並び順どおり）
pub fn shown_products<'a>(products: &'a [Product], session: &Session) -> Vec<&'a Product> {
    filter_products(products, session.selected_category(), session.search_text())
}

/// 画面に並ぶ商品をJSONにする
pub fn list_json(products: &[Product], session: &Session) -> Result<String> {
    Ok(serde_json::to_string_pretty(&shown_products(products, session))?)
}
