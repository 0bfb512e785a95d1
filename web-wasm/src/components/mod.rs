//! UIコンポーネント

mod category_switch;
mod header;
mod notice;
mod product_grid;
mod search_box;

pub use category_switch::CategorySwitch;
pub use header::Header;
pub use notice::NoticeBox;
pub use product_grid::ProductGrid;
pub use search_box::SearchBox;
