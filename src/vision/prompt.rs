//! モデルに渡す指示文

/// 顧客情報抽出用のプロンプト
pub const CUSTOMER_INFO_PROMPT: &str = "Extract customer information from this image \
and return ONLY a valid JSON object with this exact structure:\n\
{\n  \"Name\": \"\",\n  \"Phone Number\": \"\",\n  \"Mobile Number\": \"\",\n  \
\"Email\": \"\",\n  \
\"Street\": \"\",\n  \"Street Number\": \"\",\n  \"City\": \"\",\n  \"ZIP Code\": \"\",\n  \
\"State\": \"\",\n  \"Country\": \"\",\n  \"Latitude\": \"\",\n  \"Longitude\": \"\"\n}";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::CustomerInfo;

    #[test]
    fn prompt_schema_lists_every_field_in_order() {
        let start = CUSTOMER_INFO_PROMPT.find('{').unwrap();
        let schema: serde_json::Value =
            serde_json::from_str(&CUSTOMER_INFO_PROMPT[start..]).unwrap();
        let object = schema.as_object().unwrap();
        assert_eq!(object.len(), CustomerInfo::FIELDS.len());
        for field in CustomerInfo::FIELDS {
            assert_eq!(object[field], "");
        }

        let mut last = 0;
        for field in CustomerInfo::FIELDS {
            let pos = CUSTOMER_INFO_PROMPT.find(&format!("\"{field}\"")).unwrap();
            assert!(pos > last);
            last = pos;
        }
    }
}
