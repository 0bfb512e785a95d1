use caguuu_common::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("出力先が不正です: {0}")]
    InvalidOutput(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] caguuu_common::Error),
}

pub type Result<T> = std::result::Result<T, AssistError>;
