//! 抽出処理のエラー型

use thiserror::Error;

/// 1枚の画像の抽出に失敗した理由
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("画像ファイルの読み込みに失敗: {0}")]
    Image(#[from] image::ImageError),

    #[error("ファイル操作に失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error("Gemini APIリクエストに失敗: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API エラー ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Gemini APIの応答にテキストがありません: {reason}")]
    EmptyResponse { reason: String },

    #[error("応答にJSONオブジェクトが見つかりません")]
    NoJson,

    #[error("JSONへの変換に失敗: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("抽出結果が空です")]
    EmptyRecord,
}

impl ExtractError {
    /// 応答テキストの解析段階で発生したエラーか
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::NoJson | Self::InvalidJson(_) | Self::EmptyRecord
        )
    }
}
