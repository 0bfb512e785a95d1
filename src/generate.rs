//! サンプルカタログ生成

use crate::error::{AssistError, Result};
use caguuu_common::{sample_products, write_sample_csv};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// サンプルCSVを書き出し、(絶対パス, 行数) を返す
pub fn generate_sample(output: &Path) -> Result<(PathBuf, usize)> {
    if output.is_dir() {
        return Err(AssistError::InvalidOutput(format!(
            "{} はディレクトリです",
            output.display()
        )));
    }
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let products = sample_products();
    let file = File::create(output)?; // 上書き
    write_sample_csv(BufWriter::new(file), &products)?;

    let absolute = output.canonicalize()?;
    tracing::info!(path = %absolute.display(), rows = products.len(), "サンプルCSVを生成しました");
    Ok((absolute, products.len()))
}
