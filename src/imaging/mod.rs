//! 画像処理モジュール - 画像の読み込みとJPEG再エンコード

use crate::error::ExtractError;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

/// 画像を読み込み、RGBに揃えてJPEGのバイト列にする
pub fn load_as_jpeg(image_path: impl AsRef<Path>) -> Result<Vec<u8>, ExtractError> {
    let image = image::open(image_path.as_ref())?;
    encode_jpeg(to_rgb(image))
}

/// RGB8以外（グレースケール、アルファ付き、16bitなど）はRGB8へ変換
pub fn to_rgb(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb8(_) => image,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

fn encode_jpeg(image: DynamicImage) -> Result<Vec<u8>, ExtractError> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Jpeg)?;
    Ok(buffer.into_inner())
}
