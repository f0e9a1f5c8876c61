//! 顧客情報エクストラクター - メインエントリポイント

use anyhow::{Context, Result};
use customer_info_extractor::config::{DEFAULT_IMAGE_FOLDER, OUTPUT_FILE_NAME};
use customer_info_extractor::vision::GeminiClient;
use customer_info_extractor::{process_image_folder, Config, Extractor};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // ロギング初期化
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("customer_info_extractor=info")),
        )
        .with_target(false)
        .init();

    // 環境変数の読み込み
    let config = Config::from_env();

    let client = GeminiClient::new(config);
    tracing::info!("モデル: {}", client.model());
    let extractor = Extractor::new(client);

    let result = process_image_folder(
        &extractor,
        Path::new(DEFAULT_IMAGE_FOLDER),
        Path::new(OUTPUT_FILE_NAME),
    )
    .await
    .with_context(|| format!("画像フォルダの読み込みに失敗: {DEFAULT_IMAGE_FOLDER}"))?;

    for (path, e) in &result.failures {
        tracing::debug!("失敗: {} ({})", path.display(), e);
    }
    tracing::info!(
        "{} 件中 {} 件を出力しました",
        result.processed(),
        result.records.len()
    );

    Ok(())
}
