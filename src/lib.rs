//! 顧客情報エクストラクター - Gemini API を使用した画像からの顧客情報抽出ツール
//!
//! # 機能
//! - フォルダ内の画像（PNG / JPEG）をGeminiに送信
//! - 応答テキストからJSONを切り出して顧客情報に変換
//! - 結果を `customer_info.xlsx` に一括出力

pub mod batch;
pub mod config;
pub mod error;
pub mod extractor;
pub mod imaging;
pub mod parser;
pub mod vision;

pub use batch::{process_image_folder, BatchResult};
pub use config::Config;
pub use error::ExtractError;
pub use extractor::Extractor;
pub use parser::CustomerInfo;
