//! 画像＋テキストを受け付ける生成モデルとの通信

mod client;
pub mod prompt;

pub use client::GeminiClient;

use crate::error::ExtractError;
use std::future::Future;

/// 画像とプロンプトからテキストを生成するモデル
pub trait GenerativeModel {
    /// JPEG画像と指示文を送り、モデルの応答テキストを返す
    fn generate_content(
        &self,
        prompt: &str,
        jpeg: &[u8],
    ) -> impl Future<Output = Result<String, ExtractError>> + Send;
}
