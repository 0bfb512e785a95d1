//! エラー型定義

use thiserror::Error;

/// カタログ読み込みエラー
///
/// UI状態（シグナル等）に保持できるよう Clone + PartialEq。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("'{path}' が見つかりません。先に `caguuu generate` を実行して products.csv を作成してください。")]
    NotFound { path: String },

    #[error("CSVの読み込みに失敗しました: {0}")]
    Load(String),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

/// CSV書き出しエラー
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_mentions_generator() {
        let error = CatalogError::NotFound { path: "products.csv".to_string() };
        let display = format!("{}", error);
        assert!(display.contains("products.csv"));
        assert!(display.contains("caguuu generate"));
        assert!(error.is_not_found());
    }

    #[test]
    fn test_load_message_includes_cause() {
        let error = CatalogError::Load("3行目の列数が多すぎます".to_string());
        let display = format!("{}", error);
        assert!(display.starts_with("CSVの読み込みに失敗しました"));
        assert!(display.contains("3行目の列数が多すぎます"));
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_write_failure_keeps_io_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "products.csv は読み取り専用");
        let error: Error = cause.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(format!("{}", error).ends_with("products.csv は読み取り専用"));
    }

    #[test]
    fn test_csv_error_converts() {
        let cause = csv::Reader::from_reader(&b"category\n\xff\n"[..])
            .records()
            .next()
            .unwrap()
            .unwrap_err();
        let error: Error = cause.into();
        assert!(matches!(error, Error::Csv(_)));
        assert!(error.to_string().starts_with("CSV error"));
    }
}
