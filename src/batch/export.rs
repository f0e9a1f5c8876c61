//! Excel出力

use crate::parser::CustomerInfo;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::path::Path;

/// 顧客情報をExcelに書き出す（既存ファイルは上書き）
///
/// 1行目はヘッダー、以降1レコード1行。レコードが無ければヘッダーのみ。
pub fn write_xlsx(records: &[CustomerInfo], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, field) in CustomerInfo::FIELDS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *field, &header_format)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, value) in record.values().iter().enumerate() {
            if !value.is_empty() {
                worksheet.write_string(row, col as u16, *value)?;
            }
        }
    }

    workbook.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read_entry(path: &Path, name: &str) -> String {
        let file = std::fs::File::open(path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customer_info.xlsx");
        let records = vec![
            CustomerInfo {
                name: "Jane Doe".to_string(),
                phone_number: "555-1234".to_string(),
                ..Default::default()
            },
            CustomerInfo {
                name: "John Roe".to_string(),
                city: "Kyoto".to_string(),
                ..Default::default()
            },
        ];

        write_xlsx(&records, &path).unwrap();

        let strings = read_entry(&path, "xl/sharedStrings.xml");
        for expected in ["ZIP Code", "Longitude", "Jane Doe", "555-1234", "John Roe", "Kyoto"] {
            assert!(strings.contains(expected), "missing {expected}");
        }
        let sheet = read_entry(&path, "xl/worksheets/sheet1.xml");
        assert!(sheet.contains(r#"<row r="3""#));
        assert!(!sheet.contains(r#"<row r="4""#));
    }

    #[test]
    fn empty_records_write_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");

        write_xlsx(&[], &path).unwrap();

        let sheet = read_entry(&path, "xl/worksheets/sheet1.xml");
        assert!(sheet.contains(r#"<row r="1""#));
        assert!(!sheet.contains(r#"<row r="2""#));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customer_info.xlsx");
        std::fs::write(&path, b"stale").unwrap();

        write_xlsx(&[], &path).unwrap();
        assert!(read_entry(&path, "xl/sharedStrings.xml").contains("Name"));
    }

    #[test]
    fn unwritable_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.xlsx");
        assert!(write_xlsx(&[], &path).is_err());
    }
}
