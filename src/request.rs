//! Request Module
//!
//! バックエンドに送信するリクエストの形状を定義するモジュール。
//! すべて`serde`でバックエンドのJSONワイヤ形式にシリアライズできます。

use serde::{Deserialize, Serialize};

use crate::types::{StringMatrix, ValueMatrix};

/// 値レンジ（値の読み書きで使用するボディ）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    /// レンジ参照（A1記法）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    /// セル値の行列
    ///
    /// 空レンジの場合、バックエンドはこのフィールドを省略します。
    #[serde(default)]
    pub values: ValueMatrix,
}

impl ValueRange {
    /// 値のみを持つボディを生成（レンジはURL側で指定）
    pub fn from_values(values: ValueMatrix) -> Self {
        Self {
            range: None,
            values,
        }
    }
}

/// 一括更新リクエストの1命令
///
/// 一括更新に含まれる命令は、指定した順序でアトミックに適用されます。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum Request {
    /// 空の行（または列）を挿入し、既存の行を押し下げる
    InsertDimension(InsertDimensionRequest),

    /// セル値を設定する
    UpdateCells(UpdateCellsRequest),
}

/// 行・列の挿入命令
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertDimensionRequest {
    pub range: DimensionRange,
}

/// 挿入対象の次元範囲（開始は含み、終了は含まない）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionRange {
    pub sheet_id: i64,
    pub dimension: Dimension,
    pub start_index: usize,
    pub end_index: usize,
}

/// 次元
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    Rows,
    Columns,
}

/// セル値の設定命令
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCellsRequest {
    /// 書き込み開始位置（左上セル）
    pub start: GridCoordinate,

    /// 書き込む行データ
    pub rows: Vec<RowData>,

    /// 更新対象フィールドのマスク
    pub fields: String,
}

/// グリッド座標（0始まり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCoordinate {
    pub sheet_id: i64,
    pub row_index: usize,
    pub column_index: usize,
}

/// 1行分のセルデータ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowData {
    pub values: Vec<CellData>,
}

/// 1セル分のデータ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    pub user_entered_value: ExtendedValue,
}

/// 型を明示したセル値
///
/// 行挿入ではすべてのセルを文字列型として書き込むため、文字列のみを扱います。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtendedValue {
    StringValue(String),
}

/// `UpdateCells`で更新するフィールド
const USER_ENTERED_VALUE_FIELD: &str = "userEnteredValue";

/// 行挿入の一括更新命令を組み立てる
///
/// 次の2命令をこの順序で返します。
///
/// 1. `start_index`から`start_index + rows.len()`（終了は含まない）に空行を挿入
/// 2. `(start_index, 0)`を起点に、挿入した行へ文字列型の値を設定
///
/// 不揃いな行はパディングせずにそのまま書き込みます。
/// 終了位置は`usize::MAX`で飽和します（範囲外の判定はバックエンドに任せます）。
pub fn insert_rows_batch(sheet_id: i64, start_index: usize, rows: &StringMatrix) -> Vec<Request> {
    let row_data = rows
        .iter()
        .map(|row| RowData {
            values: row
                .iter()
                .map(|cell| CellData {
                    user_entered_value: ExtendedValue::StringValue(cell.clone()),
                })
                .collect(),
        })
        .collect();

    vec![
        Request::InsertDimension(InsertDimensionRequest {
            range: DimensionRange {
                sheet_id,
                dimension: Dimension::Rows,
                start_index,
                end_index: start_index.saturating_add(rows.len()),
            },
        }),
        Request::UpdateCells(UpdateCellsRequest {
            start: GridCoordinate {
                sheet_id,
                row_index: start_index,
                column_index: 0,
            },
            rows: row_data,
            fields: USER_ENTERED_VALUE_FIELD.to_string(),
        }),
    ]
}
