//! 設定の読み込み

use std::env;

/// 画像フォルダ（固定）
pub const DEFAULT_IMAGE_FOLDER: &str = "images";

/// 出力するExcelファイル名
pub const OUTPUT_FILE_NAME: &str = "customer_info.xlsx";

/// 既定のモデル名
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini API のベースURL
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Gemini API の接続設定
#[derive(Debug, Clone)]
pub struct Config {
    /// APIキー（未設定なら空文字。リクエスト時にエラーになる）
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// `.env` と環境変数から設定を読み込む
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_key = env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
            tracing::warn!("GEMINI_API_KEY が設定されていません");
            String::new()
        });

        let mut config = Self::new(api_key);
        if let Some(model) = non_empty_var("GEMINI_MODEL") {
            config.model = model;
        }
        if let Some(base) = non_empty_var("GEMINI_API_BASE") {
            config.api_base = base;
        }
        config
    }

    /// generateContent エンドポイントのURL
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_model() {
        let mut config = Config::new("key");
        config.api_base = "http://127.0.0.1:9000/".to_string();
        assert_eq!(
            config.endpoint(),
            "http://127.0.0.1:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn new_uses_defaults() {
        let config = Config::new("secret");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }
}
