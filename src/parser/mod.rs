//! 応答解析モジュール - 顧客情報の抽出

mod json_span;

pub use json_span::locate_json_object;

use crate::error::ExtractError;
use serde::Serialize;
use serde_json::{Map, Value};

/// 画像から抽出された顧客情報
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomerInfo {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Phone Number")]
    pub phone_number: String,
    #[serde(rename = "Mobile Number")]
    pub mobile_number: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Street")]
    pub street: String,
    #[serde(rename = "Street Number")]
    pub street_number: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "ZIP Code")]
    pub zip_code: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Latitude")]
    pub latitude: String,
    #[serde(rename = "Longitude")]
    pub longitude: String,
}

impl CustomerInfo {
    /// 列の並び（Excelのヘッダー）
    pub const FIELDS: [&'static str; 12] = [
        "Name",
        "Phone Number",
        "Mobile Number",
        "Email",
        "Street",
        "Street Number",
        "City",
        "ZIP Code",
        "State",
        "Country",
        "Latitude",
        "Longitude",
    ];

    /// `FIELDS` と同じ順の値
    pub fn values(&self) -> [&str; 12] {
        [
            self.name.as_str(),
            self.phone_number.as_str(),
            self.mobile_number.as_str(),
            self.email.as_str(),
            self.street.as_str(),
            self.street_number.as_str(),
            self.city.as_str(),
            self.zip_code.as_str(),
            self.state.as_str(),
            self.country.as_str(),
            self.latitude.as_str(),
            self.longitude.as_str(),
        ]
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        let field = match key {
            "Name" => &mut self.name,
            "Phone Number" => &mut self.phone_number,
            "Mobile Number" => &mut self.mobile_number,
            "Email" => &mut self.email,
            "Street" => &mut self.street,
            "Street Number" => &mut self.street_number,
            "City" => &mut self.city,
            "ZIP Code" => &mut self.zip_code,
            "State" => &mut self.state,
            "Country" => &mut self.country,
            "Latitude" => &mut self.latitude,
            "Longitude" => &mut self.longitude,
            _ => return None,
        };
        Some(field)
    }

    /// JSONオブジェクトから作成
    ///
    /// 無いキーは空文字のまま。スキーマ外のキーは捨てる。
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let mut info = Self::default();
        for (key, value) in object {
            match info.field_mut(key) {
                Some(field) => *field = value_to_text(value),
                None => tracing::debug!("未知のキーを無視: {}", key),
            }
        }
        info
    }
}

/// 文字列以外の値もセルに入れられる形にする
fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// モデルの応答テキストから顧客情報を解析
pub fn parse_customer_info(text: &str) -> Result<CustomerInfo, ExtractError> {
    let json_str = locate_json_object(text).ok_or(ExtractError::NoJson)?;
    let object: Map<String, Value> = serde_json::from_str(json_str)?;
    if object.is_empty() {
        return Err(ExtractError::EmptyRecord);
    }
    Ok(CustomerInfo::from_json_object(&object))
}
