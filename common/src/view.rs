//! 画面モデル
//!
//! カタログとセッション状態から1回分の画面（`Page`）を組み立てる。
//! 状態は持たず、絞り込みは `query` に任せる。Web(HTML) と CLI(テキスト) は
//! この木をそれぞれの方法で描画するだけ。

use crate::error::CatalogError;
use crate::format::{category_icon, format_yen, sales_point_lines};
use crate::query::{category_list, filter_products, has_categories};
use crate::session::Session;
use crate::types::{Product, ProductKey};

pub const APP_TITLE: &str = "CAGUUU 接客サポート";
pub const APP_CAPTION: &str = "※接客中に片手で操作できる、商品トーク表示＆EC誘導ツール";

pub const CATEGORY_HEADING: &str = "カテゴリ";
pub const SEARCH_HEADING: &str = "商品を探す（文字入力が面倒なら不要）";
pub const SEARCH_LABEL: &str = "商品名で検索";
pub const SEARCH_PLACEHOLDER: &str = "例：ソファ / ベッド / 昇降";
pub const GRID_HEADING: &str = "商品一覧（タップして詳細）";
pub const DETAIL_BUTTON_LABEL: &str = "詳細・トークを見る";
pub const SALES_HEADING: &str = "セールスポイント（接客トーク）";
pub const EC_LINK_LABEL: &str = "🌐 納期・詳細ページを開く（EC）";

const SELECTED_MARK: &str = "✅";
const NO_CATEGORY_MESSAGE: &str = "category が見つかりません（products.csv を確認してください）。";
const EMPTY_RESULT_MESSAGE: &str = "該当する商品がありません。カテゴリや検索条件を変えてください。";
const NO_EC_URL_MESSAGE: &str = "ECページURLが設定されていません（ec_url）。";

/// お知らせの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

/// 画面内のお知らせ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into() }
    }
}

/// 1回分の画面
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: &'static str,
    pub caption: &'static str,
    pub body: PageBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageBody {
    /// 読み込み失敗（ヘッダーのみ表示）
    Failed(Notice),
    Catalog(CatalogView),
}

/// カタログ部分
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub switcher: CategorySwitcher,
    pub search: SearchBox,
    pub search_notice: Option<Notice>,
    pub listing: Listing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategorySwitcher {
    Buttons(Vec<CategoryButton>),
    /// カテゴリが1つもない
    Missing(Notice),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    pub category: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Empty(Notice),
    Cards(Vec<ProductCard>),
}

/// 商品カード
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub key: ProductKey,
    pub product_name: String,
    pub variation: Option<String>,
    pub image_url: String,
    pub price_label: String,
    pub detail: Option<DetailPanel>,
}

/// 詳細パネル（開いているカードにだけ付く）
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    pub sales_lines: Vec<String>,
    pub link: EcLink,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EcLink {
    Open { url: String, label: &'static str },
    Missing(Notice),
}

impl CatalogView {
    /// 表示中のカード（空なら空スライス）
    pub fn cards(&self) -> &[ProductCard] {
        match &self.listing {
            Listing::Cards(cards) => cards,
            Listing::Empty(_) => &[],
        }
    }
}

/// 読み込み結果とセッションから画面を組み立てる
pub fn render_page(loaded: &Result<Vec<Product>, CatalogError>, session: &Session) -> Page {
    let body = match loaded {
        Ok(products) => PageBody::Catalog(render_catalog(products, session)),
        Err(err) => PageBody::Failed(Notice::new(NoticeLevel::Error, err.to_string())),
    };

    Page {
        title: APP_TITLE,
        caption: APP_CAPTION,
        body,
    }
}

/// カタログ部分を組み立てる
pub fn render_catalog(products: &[Product], session: &Session) -> CatalogView {
    let switcher = if has_categories(products) {
        CategorySwitcher::Buttons(
            category_list(products)
                .into_iter()
                .map(|category| category_button(category, session.selected_category()))
                .collect(),
        )
    } else {
        CategorySwitcher::Missing(Notice::new(NoticeLevel::Warning, NO_CATEGORY_MESSAGE))
    };

    let query = session.search_text();
    let shown = filter_products(products, session.selected_category(), query);

    let search_notice = (!query.is_empty() && !shown.is_empty()).then(|| {
        Notice::new(
            NoticeLevel::Success,
            format!("全カテゴリから 「{}」 を検索しました", query),
        )
    });

    let listing = if shown.is_empty() {
        Listing::Empty(Notice::new(NoticeLevel::Info, EMPTY_RESULT_MESSAGE))
    } else {
        let mut detail_placed = false;
        let cards = shown
            .into_iter()
            .map(|product| {
                let key = product.key();
                let detail = if !detail_placed && session.is_open(&key) {
                    detail_placed = true;
                    Some(detail_panel(product))
                } else {
                    None
                };
                product_card(product, key, detail)
            })
            .collect();
        Listing::Cards(cards)
    };

    CatalogView {
        switcher,
        search: SearchBox {
            label: SEARCH_LABEL,
            placeholder: SEARCH_PLACEHOLDER,
            value: session.search().to_string(),
        },
        search_notice,
        listing,
    }
}

fn category_button(category: String, selected_category: &str) -> CategoryButton {
    let selected = category == selected_category;
    let mut label = format!("{} {}", category_icon(&category), category);
    if selected {
        label = format!("{} {}", SELECTED_MARK, label);
    }
    CategoryButton { category, label, selected }
}

fn product_card(product: &Product, key: ProductKey, detail: Option<DetailPanel>) -> ProductCard {
    ProductCard {
        key,
        product_name: product.product_name.clone(),
        variation: product.variation().map(str::to_string),
        image_url: product.image_url.clone(),
        price_label: format!("通常税込価格：{}", format_yen(product.price)),
        detail,
    }
}

fn detail_panel(product: &Product) -> DetailPanel {
    let link = match product.ec_link() {
        Some(url) => EcLink::Open {
            url: url.to_string(),
            label: EC_LINK_LABEL,
        },
        None => EcLink::Missing(Notice::new(NoticeLevel::Warning, NO_EC_URL_MESSAGE)),
    };

    DetailPanel {
        sales_lines: sales_point_lines(&product.sales_point),
        link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ALL_CATEGORIES;

    fn product(category: &str, name: &str, price: u64, ec_url: &str) -> Product {
        Product {
            category: category.to_string(),
            product_name: name.to_string(),
            price,
            sales_point: "★一行目\\n★二行目".to_string(),
            ec_url: ec_url.to_string(),
            image_url: format!("https://placehold.jp/{}.png", price),
            ..Default::default()
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("ベッド", "跳ね上げ式収納ベッド", 85000, "https://caguuu.com/products/bed01"),
            product("ソファ", "3人掛けレザーソファ", 120000, ""),
            product("ベッド", "コンセント付き宮棚ベッド", 69000, "https://caguuu.com/products/bed02"),
        ]
    }

    fn catalog_view(page: &Page) -> &CatalogView {
        match &page.body {
            PageBody::Catalog(view) => view,
            PageBody::Failed(notice) => panic!("unexpected failure: {}", notice.message),
        }
    }

    #[test]
    fn test_not_found_renders_header_and_error() {
        let loaded = Err(CatalogError::NotFound { path: "products.csv".to_string() });
        let page = render_page(&loaded, &Session::default());

        assert_eq!(page.title, APP_TITLE);
        match page.body {
            PageBody::Failed(notice) => {
                assert_eq!(notice.level, NoticeLevel::Error);
                assert!(notice.message.contains("caguuu generate"));
            }
            PageBody::Catalog(_) => panic!("catalog should not render"),
        }
    }

    #[test]
    fn test_load_error_includes_cause() {
        let loaded = Err(CatalogError::Load("2行目: 6列のはずが7列あります".to_string()));
        let page = render_page(&loaded, &Session::default());

        match page.body {
            PageBody::Failed(notice) => assert!(notice.message.contains("7列あります")),
            PageBody::Catalog(_) => panic!("catalog should not render"),
        }
    }

    #[test]
    fn test_category_buttons() {
        let page = render_page(&Ok(catalog()), &Session::default());
        let view = catalog_view(&page);

        let CategorySwitcher::Buttons(buttons) = &view.switcher else {
            panic!("expected buttons");
        };
        let labels: Vec<&str> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["✅ 🌏 全商品", "🛋️ ソファ", "🛏️ ベッド"]);
        assert!(buttons[0].selected);
        assert_eq!(buttons[0].category, ALL_CATEGORIES);
    }

    #[test]
    fn test_no_categories_warns() {
        let products = vec![product("", "名無し", 1000, "")];
        let page = render_page(&Ok(products), &Session::default());
        let view = catalog_view(&page);

        match &view.switcher {
            CategorySwitcher::Missing(notice) => assert_eq!(notice.level, NoticeLevel::Warning),
            CategorySwitcher::Buttons(_) => panic!("expected warning"),
        }
        // 一覧は表示される
        assert_eq!(view.cards().len(), 1);
    }

    #[test]
    fn test_cards_sorted_with_price_label() {
        let page = render_page(&Ok(catalog()), &Session::default());
        let cards = catalog_view(&page).cards();

        let names: Vec<&str> = cards.iter().map(|c| c.product_name.as_str()).collect();
        assert_eq!(names, vec!["3人掛けレザーソファ", "コンセント付き宮棚ベッド", "跳ね上げ式収納ベッド"]);
        assert_eq!(cards[2].price_label, "通常税込価格：¥85,000");
        assert!(cards.iter().all(|c| c.detail.is_none()));
    }

    #[test]
    fn test_variation_only_when_present() {
        let mut products = catalog();
        products[0].variation_text = "ダブル / ナチュラル".to_string();
        products[1].variation_text = "  ".to_string();

        let page = render_page(&Ok(products), &Session::default());
        let cards = catalog_view(&page).cards();

        let bed = cards.iter().find(|c| c.product_name == "跳ね上げ式収納ベッド").unwrap();
        let sofa = cards.iter().find(|c| c.product_name == "3人掛けレザーソファ").unwrap();
        assert_eq!(bed.variation.as_deref(), Some("ダブル / ナチュラル"));
        assert_eq!(sofa.variation, None);
    }

    #[test]
    fn test_open_detail_with_link() {
        let products = catalog();
        let mut session = Session::default();
        session.open_detail(products[0].key());

        let page = render_page(&Ok(products), &session);
        let cards = catalog_view(&page).cards();

        let opened: Vec<&ProductCard> = cards.iter().filter(|c| c.detail.is_some()).collect();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].product_name, "跳ね上げ式収納ベッド");

        let detail = opened[0].detail.as_ref().unwrap();
        assert_eq!(detail.sales_lines, vec!["★一行目", "★二行目"]);
        assert_eq!(
            detail.link,
            EcLink::Open {
                url: "https://caguuu.com/products/bed01".to_string(),
                label: EC_LINK_LABEL,
            }
        );
    }

    #[test]
    fn test_open_detail_without_link_warns() {
        let products = catalog();
        let mut session = Session::default();
        session.open_detail(products[1].key());

        let page = render_page(&Ok(products), &session);
        let card = catalog_view(&page)
            .cards()
            .iter()
            .find(|c| c.detail.is_some())
            .cloned()
            .unwrap();

        match card.detail.unwrap().link {
            EcLink::Missing(notice) => assert_eq!(notice.level, NoticeLevel::Warning),
            EcLink::Open { .. } => panic!("expected warning"),
        }
    }

    #[test]
    fn test_detail_follows_product_not_position() {
        let mut products = catalog();
        let mut session = Session::default();
        session.open_detail(products[0].key());

        // ファイル更新で並びが変わっても同じ商品に付く
        products.insert(0, product("ベッド", "あいうえおベッド", 50000, ""));
        let page = render_page(&Ok(products), &session);
        let card = catalog_view(&page)
            .cards()
            .iter()
            .find(|c| c.detail.is_some())
            .cloned()
            .unwrap();
        assert_eq!(card.product_name, "跳ね上げ式収納ベッド");
    }

    #[test]
    fn test_same_named_rows_open_clicked_card() {
        let csv = "category,product_name,price,sales_point,ec_url,image_url\n\
                   ソファ,カウチソファ,100000,★右カウチ,https://caguuu.com/products/couch-r,\n\
                   ソファ,カウチソファ,98000,★左カウチ,https://caguuu.com/products/couch-l,\n";
        let products = crate::catalog::parse_catalog(csv.as_bytes()).expect("パース失敗");
        let mut session = Session::default();
        session.select_category("ソファ");

        let second = render_catalog(&products, &session).cards()[1].key.clone();
        session.open_detail(second);

        let view = render_catalog(&products, &session);
        let cards = view.cards();
        assert!(cards[0].detail.is_none());
        assert_eq!(cards[1].price_label, "通常税込価格：¥98,000");

        let detail = cards[1].detail.as_ref().expect("押したカードに詳細がない");
        assert_eq!(detail.sales_lines, vec!["★左カウチ"]);
        assert_eq!(
            detail.link,
            EcLink::Open {
                url: "https://caguuu.com/products/couch-l".to_string(),
                label: EC_LINK_LABEL,
            }
        );
    }

    #[test]
    fn test_detail_hidden_when_filtered_out() {
        let products = catalog();
        let mut session = Session::default();
        session.set_search("ソファ");
        session.open_detail(products[0].key());

        let page = render_page(&Ok(products), &session);
        assert!(catalog_view(&page).cards().iter().all(|c| c.detail.is_none()));
    }

    #[test]
    fn test_search_notice_and_category_override() {
        let mut session = Session::default();
        session.select_category("ソファ");
        session.set_search("ベッド");

        let page = render_page(&Ok(catalog()), &session);
        let view = catalog_view(&page);

        assert_eq!(view.cards().len(), 2);
        let notice = view.search_notice.as_ref().unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert!(notice.message.contains("「ベッド」"));
        assert_eq!(view.search.value, "ベッド");
    }

    #[test]
    fn test_empty_result_shows_info() {
        let mut session = Session::default();
        session.set_search("照明");

        let page = render_page(&Ok(catalog()), &session);
        let view = catalog_view(&page);

        assert!(view.search_notice.is_none());
        match &view.listing {
            Listing::Empty(notice) => assert_eq!(notice.level, NoticeLevel::Info),
            Listing::Cards(_) => panic!("expected empty"),
        }
    }

    #[test]
    fn test_empty_catalog_shows_info() {
        let page = render_page(&Ok(Vec::new()), &Session::default());
        let view = catalog_view(&page);

        assert!(matches!(view.switcher, CategorySwitcher::Missing(_)));
        assert!(matches!(view.listing, Listing::Empty(_)));
    }
}
