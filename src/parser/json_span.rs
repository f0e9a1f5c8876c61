//! 自由文の中からJSONオブジェクト部分を切り出す

/// 応答テキストからJSONオブジェクトらしい範囲を返す
///
/// 前後の空白を除いた全体が `{ ... }` ならそのまま、そうでなければ
/// 最初の `{` から最後の `}` までを返す。どちらかが無い、または `}` が
/// `{` より前にしか無い場合は `None`。
pub fn locate_json_object(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return Some(trimmed);
    }

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&trimmed[start..=end])
}
