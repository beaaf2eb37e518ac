//! Service Module
//!
//! シート操作（取得・更新・追記・消去・行挿入）のファサード。
//! 各操作はレンジ参照を組み立て、必要に応じて値を変換してから
//! トランスポートに委譲します。

use log::debug;

use crate::address::{find_sheet, resolve};
use crate::api::ValueInputOption;
use crate::builder::ServiceConfig;
use crate::coercion::{to_loose, to_strings};
use crate::error::SheetsError;
use crate::request::insert_rows_batch;
use crate::transport::Transport;
use crate::types::{SheetContext, SheetProperties, SpreadsheetSnapshot, StringMatrix, ValueMatrix};

/// シート操作のエントリーポイント
///
/// トランスポートと設定のみを保持し、操作間で可変状態を共有しません。
/// トランスポートが`Sync`であれば、複数スレッドから同時に呼び出せます。
///
/// # 使用例
///
/// ```rust,no_run
/// use gsheetzero::{HttpTransportBuilder, Service};
///
/// # fn main() -> Result<(), gsheetzero::SheetsError> {
/// let service = Service::new(HttpTransportBuilder::new("ya29.token").build()?);
///
/// let spreadsheet = service.spreadsheet("1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms")?;
/// let sheet = spreadsheet.sheet("Class Data")?;
///
/// let rows = service.get(&sheet, "A2:E")?;
/// service.update(&sheet, "G2", &vec![vec!["done".to_string()]])?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Service<T> {
    transport: T,
    config: ServiceConfig,
}

impl<T: Transport> Service<T> {
    /// デフォルト設定でサービスを生成
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ServiceConfig::default())
    }

    pub(crate) fn with_config(transport: T, config: ServiceConfig) -> Self {
        Self { transport, config }
    }

    #[cfg(test)]
    pub(crate) fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// 内部のトランスポートへの参照
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// スプレッドシートのスナップショットを取得
    ///
    /// 取得したシート一覧は以後リモートと同期されません。
    pub fn spreadsheet(&self, spreadsheet_id: &str) -> Result<Spreadsheet, SheetsError> {
        debug!("fetching spreadsheet {}", spreadsheet_id);
        let snapshot = self.transport.get_spreadsheet(spreadsheet_id)?;
        Ok(Spreadsheet::new(snapshot))
    }

    /// レンジの値を型付きのまま取得
    ///
    /// 空レンジは空の行列を返します（エラーではありません）。
    pub fn get_raw(
        &self,
        sheet: &SheetContext,
        notation: &str,
    ) -> Result<ValueMatrix, SheetsError> {
        let range = resolve(sheet.title(), notation);
        debug!(
            "get {} from {} ({})",
            range,
            sheet.spreadsheet_id(),
            self.config.value_render_option.as_str()
        );
        self.transport.get_values(
            sheet.spreadsheet_id(),
            &range,
            self.config.value_render_option,
        )
    }

    /// レンジの値を文字列行列として取得
    pub fn get(&self, sheet: &SheetContext, notation: &str) -> Result<StringMatrix, SheetsError> {
        let values = self.get_raw(sheet, notation)?;
        Ok(to_strings(&values))
    }

    /// レンジの左上から型付きの値を上書き
    ///
    /// `input_option`は変換せずにそのまま転送されます。
    pub fn update_raw(
        &self,
        sheet: &SheetContext,
        notation: &str,
        values: &ValueMatrix,
        input_option: ValueInputOption,
    ) -> Result<(), SheetsError> {
        let range = resolve(sheet.title(), notation);
        debug!(
            "update {} in {} ({} rows, {})",
            range,
            sheet.spreadsheet_id(),
            values.len(),
            input_option.as_str()
        );
        self.transport
            .update_values(sheet.spreadsheet_id(), &range, values, input_option)
    }

    /// レンジの左上から文字列の値を上書き
    ///
    /// 値は`CellValue::Text`として送信され、`ValueInputOption::UserEntered`により
    /// バックエンド側で数値・論理値・数式として再解釈されます。
    pub fn update(
        &self,
        sheet: &SheetContext,
        notation: &str,
        values: &StringMatrix,
    ) -> Result<(), SheetsError> {
        self.update_raw(
            sheet,
            notation,
            &to_loose(values),
            ValueInputOption::UserEntered,
        )
    }

    /// テーブル末尾の空行に型付きの値を追記
    ///
    /// 空行の検出はバックエンドが行います。
    pub fn append_raw(
        &self,
        sheet: &SheetContext,
        notation: &str,
        values: &ValueMatrix,
        input_option: ValueInputOption,
    ) -> Result<(), SheetsError> {
        let range = resolve(sheet.title(), notation);
        debug!(
            "append {} in {} ({} rows, {})",
            range,
            sheet.spreadsheet_id(),
            values.len(),
            input_option.as_str()
        );
        self.transport.append_values(
            sheet.spreadsheet_id(),
            &range,
            values,
            input_option,
            self.config.insert_data_option,
        )
    }

    /// テーブル末尾の空行に文字列の値を追記
    pub fn append(
        &self,
        sheet: &SheetContext,
        notation: &str,
        values: &StringMatrix,
    ) -> Result<(), SheetsError> {
        self.append_raw(
            sheet,
            notation,
            &to_loose(values),
            ValueInputOption::UserEntered,
        )
    }

    /// レンジの値を消去（書式は保持）
    pub fn clear(&self, sheet: &SheetContext, notation: &str) -> Result<(), SheetsError> {
        let range = resolve(sheet.title(), notation);
        debug!("clear {} in {}", range, sheet.spreadsheet_id());
        self.transport.clear_values(sheet.spreadsheet_id(), &range)
    }

    /// `start_index`（0始まり）に行を挿入し、文字列の値を設定
    ///
    /// # 処理フロー
    ///
    /// 1. `start_index`から`rows.len()`行の空行を挿入（既存の行は下にずれる）
    /// 2. `(start_index, 0)`を起点に、すべてのセルを文字列型として書き込む
    /// 3. 両命令を1つの一括更新として送信
    ///
    /// 一括更新はバックエンドによってアトミックに適用されるため、
    /// 失敗した場合シートは変更されません。
    pub fn insert_rows(
        &self,
        sheet: &SheetContext,
        start_index: usize,
        rows: &StringMatrix,
    ) -> Result<(), SheetsError> {
        debug!(
            "insert {} rows at {} into sheet {} ({}) of {}",
            rows.len(),
            start_index,
            sheet.sheet_id(),
            sheet.title(),
            sheet.spreadsheet_id()
        );
        let requests = insert_rows_batch(sheet.sheet_id(), start_index, rows);
        self.transport
            .batch_update(sheet.spreadsheet_id(), &requests)
    }
}

/// 取得済みスプレッドシートのハンドル
///
/// 読み取り専用のスナップショットで、変更APIは持ちません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spreadsheet {
    snapshot: SpreadsheetSnapshot,
}

impl Spreadsheet {
    pub fn new(snapshot: SpreadsheetSnapshot) -> Self {
        Self { snapshot }
    }

    /// スプレッドシートID
    pub fn id(&self) -> &str {
        &self.snapshot.spreadsheet_id
    }

    /// シート一覧（バックエンドが返した順序）
    pub fn sheets(&self) -> &[SheetProperties] {
        &self.snapshot.sheets
    }

    /// タイトルでシートを解決し、操作用のコンテキストを返す
    ///
    /// 最初に一致したシートが使われます。
    pub fn sheet(&self, title: &str) -> Result<SheetContext, SheetsError> {
        let properties = find_sheet(&self.snapshot, title)?;
        Ok(SheetContext::new(
            self.snapshot.spreadsheet_id.clone(),
            properties.title.clone(),
            properties.sheet_id,
        ))
    }
}

impl From<SpreadsheetSnapshot> for Spreadsheet {
    fn from(snapshot: SpreadsheetSnapshot) -> Self {
        Self::new(snapshot)
    }
}
