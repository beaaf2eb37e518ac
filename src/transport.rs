//! Transport Module
//!
//! バックエンドとの通信を抽象化するトレイト。
//! 認証・接続管理・再試行・シリアライズは実装側の責務です。

use crate::api::{InsertDataOption, ValueInputOption, ValueRenderOption};
use crate::error::SheetsError;
use crate::request::Request;
use crate::types::{SpreadsheetSnapshot, ValueMatrix};

/// スプレッドシートAPIのトランスポート
///
/// `range`引数はすべて`"<sheetTitle>!<notation>"`形式の完全なレンジ参照です。
/// 実装が返したエラーは、呼び出し元へそのまま伝播されます。
pub trait Transport {
    /// スプレッドシートのメタデータ（シート一覧）を取得
    fn get_spreadsheet(&self, spreadsheet_id: &str) -> Result<SpreadsheetSnapshot, SheetsError>;

    /// レンジの値を取得（空レンジは空の行列）
    fn get_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        render_option: ValueRenderOption,
    ) -> Result<ValueMatrix, SheetsError>;

    /// レンジの左上から値を上書き
    fn update_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: &ValueMatrix,
        input_option: ValueInputOption,
    ) -> Result<(), SheetsError>;

    /// テーブル末尾の空行に値を追記
    fn append_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: &ValueMatrix,
        input_option: ValueInputOption,
        insert_data_option: Option<InsertDataOption>,
    ) -> Result<(), SheetsError>;

    /// レンジの値を消去（書式は保持）
    fn clear_values(&self, spreadsheet_id: &str, range: &str) -> Result<(), SheetsError>;

    /// 命令列を1つのアトミックな一括更新として送信
    fn batch_update(&self, spreadsheet_id: &str, requests: &[Request]) -> Result<(), SheetsError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get_spreadsheet(&self, spreadsheet_id: &str) -> Result<SpreadsheetSnapshot, SheetsError> {
        (**self).get_spreadsheet(spreadsheet_id)
    }

    fn get_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        render_option: ValueRenderOption,
    ) -> Result<ValueMatrix, SheetsError> {
        (**self).get_values(spreadsheet_id, range, render_option)
    }

    fn update_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: &ValueMatrix,
        input_option: ValueInputOption,
    ) -> Result<(), SheetsError> {
        (**self).update_values(spreadsheet_id, range, values, input_option)
    }

    fn append_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: &ValueMatrix,
        input_option: ValueInputOption,
        insert_data_option: Option<InsertDataOption>,
    ) -> Result<(), SheetsError> {
        (**self).append_values(
            spreadsheet_id,
            range,
            values,
            input_option,
            insert_data_option,
        )
    }

    fn clear_values(&self, spreadsheet_id: &str, range: &str) -> Result<(), SheetsError> {
        (**self).clear_values(spreadsheet_id, range)
    }

    fn batch_update(&self, spreadsheet_id: &str, requests: &[Request]) -> Result<(), SheetsError> {
        (**self).batch_update(spreadsheet_id, requests)
    }
}
