//! Value Coercion Module
//!
//! 文字列行列と型付きセル値行列の相互変換。
//!
//! 変換は非対称です。`to_loose`は常に`CellValue::Text`を生成し、
//! 数値や論理値を推測しません。そのため`to_strings(to_loose(x)) == x`は
//! 常に成り立ちますが、逆方向は成り立ちません。

use crate::types::{CellValue, StringMatrix, ValueMatrix};

/// 型付きセル値の行列を文字列行列に変換
///
/// 行数と各行のセル数はそのまま保持されます（パディングや切り詰めはしない）。
/// 各セルの書式は`CellValue`の`Display`実装に従います。
pub fn to_strings(values: &ValueMatrix) -> StringMatrix {
    values
        .iter()
        .map(|row| row.iter().map(CellValue::to_string).collect())
        .collect()
}

/// 文字列行列を型付きセル値の行列に変換
///
/// すべてのセルを`CellValue::Text`として包みます。
pub fn to_loose(values: &StringMatrix) -> ValueMatrix {
    values
        .iter()
        .map(|row| row.iter().cloned().map(CellValue::Text).collect())
        .collect()
}
