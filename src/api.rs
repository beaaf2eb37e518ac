//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。
//! いずれもバックエンドのクエリパラメータにそのまま対応します。

use serde::{Deserialize, Serialize};

/// 書き込み値の解釈方法
///
/// 書き込んだテキストをバックエンド側で型付きの値として再解釈するかを指定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ValueInputOption {
    /// 入力値をそのまま格納（再解釈なし）
    ///
    /// 例: `"=1+2"` は文字列 `=1+2` として格納されます。
    Raw,

    /// ユーザーがUIで入力した場合と同様に解釈
    ///
    /// 数字の文字列は数値に、`=`で始まる文字列は数式になります。
    /// `update` / `append` のデフォルトです。
    UserEntered,
}

impl ValueInputOption {
    /// クエリパラメータとしての表記
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

/// 読み込み値の表現方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ValueRenderOption {
    /// 表示書式を適用した文字列（デフォルト）
    ///
    /// 例: `1.23` が通貨書式なら `"$1.23"`
    #[default]
    FormattedValue,

    /// 書式を適用しない値
    ///
    /// 数値は数値、論理値は論理値として返されます。
    UnformattedValue,

    /// 数式セルは数式文字列を返す
    Formula,
}

impl ValueRenderOption {
    /// クエリパラメータとしての表記
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueRenderOption::FormattedValue => "FORMATTED_VALUE",
            ValueRenderOption::UnformattedValue => "UNFORMATTED_VALUE",
            ValueRenderOption::Formula => "FORMULA",
        }
    }
}

/// 追記時の既存データの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum InsertDataOption {
    /// テーブル直後の空セルに上書き
    Overwrite,

    /// 新しい行を挿入してから書き込む
    InsertRows,
}

impl InsertDataOption {
    /// クエリパラメータとしての表記
    pub fn as_str(&self) -> &'static str {
        match self {
            InsertDataOption::Overwrite => "OVERWRITE",
            InsertDataOption::InsertRows => "INSERT_ROWS",
        }
    }
}
