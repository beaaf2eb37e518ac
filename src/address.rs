//! Range Address Module
//!
//! シートタイトルとシート内レンジ表記から完全なレンジ参照を組み立て、
//! スプレッドシートのシート一覧からタイトルでシートを解決する。

use crate::error::SheetsError;
use crate::types::{SheetProperties, SpreadsheetSnapshot};

/// シートタイトルとレンジ表記の区切り文字
const SHEET_DELIMITER: char = '!';

/// 完全なレンジ参照を組み立てる
///
/// `"<sheetTitle>!<notation>"`を返します。タイトル中の特殊文字は
/// エスケープしません（呼び出し側の責任）。
///
/// # 使用例
///
/// ```rust
/// assert_eq!(gsheetzero::resolve("Sheet1", "A1:C10"), "Sheet1!A1:C10");
/// ```
pub fn resolve(sheet_title: &str, notation: &str) -> String {
    let mut reference = String::with_capacity(sheet_title.len() + notation.len() + 1);
    reference.push_str(sheet_title);
    reference.push(SHEET_DELIMITER);
    reference.push_str(notation);
    reference
}

/// タイトルでシートを検索
///
/// シート一覧を先頭から走査し、大文字小文字を区別して最初に一致した
/// シートを返します。重複タイトルがある場合も最初の一致のみを返します。
///
/// # 戻り値
///
/// * `Ok(&SheetProperties)` - 一致したシート
/// * `Err(SheetsError::SheetNotFound)` - 一致するシートがない場合（要求タイトルを保持）
pub fn find_sheet<'a>(
    spreadsheet: &'a SpreadsheetSnapshot,
    title: &str,
) -> Result<&'a SheetProperties, SheetsError> {
    spreadsheet
        .sheets
        .iter()
        .find(|sheet| sheet.title == title)
        .ok_or_else(|| SheetsError::SheetNotFound {
            title: title.to_string(),
        })
}
