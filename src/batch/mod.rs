//! フォルダ一括処理

pub mod export;

use crate::error::ExtractError;
use crate::extractor::Extractor;
use crate::parser::CustomerInfo;
use crate::vision::GenerativeModel;
use std::path::{Path, PathBuf};

/// 対象とする拡張子（小文字）
const IMAGE_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".jpeg"];

/// 一括処理の結果
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 抽出に成功したレコード（フォルダの列挙順）
    pub records: Vec<CustomerInfo>,
    /// 失敗した画像と理由（Excelには出力しない）
    pub failures: Vec<(PathBuf, ExtractError)>,
}

impl BatchResult {
    pub fn processed(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// ファイル名が対応画像の拡張子で終わるか（大文字小文字を区別しない）
pub fn is_supported_image(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        let name = name.to_string_lossy().to_lowercase();
        IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
    })
}

/// フォルダ内の画像ファイルを列挙順のまま取得
///
/// シンボリックリンクはリンク先で判定する。読めないエントリはログに出して飛ばす。
pub fn list_image_files(folder: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                tracing::warn!("エントリの読み込みに失敗 ({}): {}", folder.display(), e);
                continue;
            }
        };
        if !is_supported_image(&path) {
            continue;
        }
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => files.push(path),
            Ok(_) => tracing::debug!("ファイルではないので除外: {}", path.display()),
            Err(e) => tracing::warn!("ファイル情報の取得に失敗 ({}): {}", path.display(), e),
        }
    }
    Ok(files)
}

/// フォルダ内の画像をすべて処理してExcelに出力
///
/// 個々の画像の失敗は飛ばして続行する。Excel出力の失敗はログに出すだけで返さない。
/// フォルダが読めない場合のみエラーを返す。
pub async fn process_image_folder<M: GenerativeModel>(
    extractor: &Extractor<M>,
    folder: &Path,
    output: &Path,
) -> Result<BatchResult, ExtractError> {
    let image_files = list_image_files(folder)?;
    tracing::info!(
        "{} 個の画像を処理します: {}",
        image_files.len(),
        folder.display()
    );

    let mut result = BatchResult::default();
    for (i, image_path) in image_files.into_iter().enumerate() {
        tracing::debug!("[{}] {}", i + 1, image_path.display());
        match extractor.extract(&image_path).await {
            Ok(info) => result.records.push(info),
            Err(e) => result.failures.push((image_path, e)),
        }
    }

    tracing::info!(
        "完了: {} 件成功, {} 件失敗",
        result.records.len(),
        result.failures.len()
    );

    match export::write_xlsx(&result.records, output) {
        Ok(()) => tracing::info!("Excelファイル '{}' を作成しました", output.display()),
        Err(e) => tracing::error!("Excelファイルの作成に失敗: {}", e),
    }

    Ok(result)
}
