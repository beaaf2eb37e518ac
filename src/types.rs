//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use serde::{Deserialize, Serialize};
use std::fmt;

/// セルの値を表す列挙型
///
/// バックエンドのワイヤ表現（JSONの文字列・数値・論理値・null）に対応します。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// 文字列
    Text(String),

    /// 数値（f64）
    Number(f64),

    /// 論理値
    Bool(bool),

    /// 空セル
    Empty,
}

impl CellValue {
    /// 値が空かどうかを判定
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// 文字列値であれば参照を返す
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// 既定のテキスト表現
///
/// 数値は`f64`の`Display`（指数表記なし、整数値は小数部なし）、
/// 論理値は`true`/`false`、空セルは空文字列になります。
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// 型付きセル値の行列（行ごとの長さは不揃いでもよい）
pub type ValueMatrix = Vec<Vec<CellValue>>;

/// 文字列セルの行列
pub type StringMatrix = Vec<Vec<String>>;

/// シートのプロパティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    /// シートの数値ID
    pub sheet_id: i64,

    /// シートタイトル
    pub title: String,

    /// スプレッドシート内での位置（0始まり）
    #[serde(default)]
    pub index: u32,
}

impl SheetProperties {
    pub fn new(sheet_id: i64, title: impl Into<String>, index: u32) -> Self {
        Self {
            sheet_id,
            title: title.into(),
            index,
        }
    }
}

/// 一度だけ取得したスプレッドシートのスナップショット
///
/// 取得後にリモートと同期されることはありません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetSnapshot {
    /// スプレッドシートID
    pub spreadsheet_id: String,

    /// シート一覧（バックエンドが返した順序）
    pub sheets: Vec<SheetProperties>,
}

impl SpreadsheetSnapshot {
    pub fn new(spreadsheet_id: impl Into<String>, sheets: Vec<SheetProperties>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            sheets,
        }
    }
}

/// 各操作に渡す不変のシートコンテキスト
///
/// スプレッドシートID・シートタイトル・シートIDの組。
/// 親スプレッドシートへの参照は持たず、値として自由に複製できます。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetContext {
    spreadsheet_id: String,
    title: String,
    sheet_id: i64,
}

impl SheetContext {
    /// スナップショットを取得せずにコンテキストを直接生成
    pub fn new(spreadsheet_id: impl Into<String>, title: impl Into<String>, sheet_id: i64) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            title: title.into(),
            sheet_id,
        }
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sheet_id(&self) -> i64 {
        self.sheet_id
    }
}
