//! CAGUUU Sales Assist Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod catalog;
pub mod query;
pub mod session;
pub mod format;
pub mod view;
pub mod sample;

pub use types::{Product, ProductKey};
pub use error::{CatalogError, Error, Result};
pub use catalog::{load_catalog, parse_catalog, parse_price, DEFAULT_CSV_PATH};
pub use query::{category_list, filter_products, has_categories, ALL_CATEGORIES};
pub use session::Session;
pub use format::{category_icon, format_yen, sales_point_lines};
pub use view::{render_catalog, render_page, Page, PageBody};
pub use sample::{sample_products, write_sample_csv};
