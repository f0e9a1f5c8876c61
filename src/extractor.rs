//! 画像1枚から顧客情報を抽出する

use crate::error::ExtractError;
use crate::imaging::load_as_jpeg;
use crate::parser::{parse_customer_info, CustomerInfo};
use crate::vision::prompt::CUSTOMER_INFO_PROMPT;
use crate::vision::GenerativeModel;
use std::path::Path;

/// 画像→モデル→JSON の抽出器
pub struct Extractor<M> {
    model: M,
}

impl<M: GenerativeModel> Extractor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    #[cfg(test)]
    pub(crate) fn model(&self) -> &M {
        &self.model
    }

    /// 画像から顧客情報を抽出（リトライなし）
    pub async fn extract(&self, image_path: &Path) -> Result<CustomerInfo, ExtractError> {
        let result = self.try_extract(image_path).await;
        if let Err(ref e) = result {
            if e.is_parse_error() {
                tracing::warn!("JSONに変換できません ({}): {}", image_path.display(), e);
            } else {
                tracing::error!("処理中にエラーが発生 ({}): {}", image_path.display(), e);
            }
        }
        result
    }

    async fn try_extract(&self, image_path: &Path) -> Result<CustomerInfo, ExtractError> {
        let jpeg = load_as_jpeg(image_path)?;

        let text = self
            .model
            .generate_content(CUSTOMER_INFO_PROMPT, &jpeg)
            .await?;
        let text = text.trim();
        tracing::info!("抽出結果 {}:\n{}", image_path.display(), text);

        parse_customer_info(text)
    }
}
