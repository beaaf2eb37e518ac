//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// gsheetzeroクレート全体で使用するエラー型
///
/// シートの解決、リクエストの構築、トランスポート呼び出し中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `SheetNotFound`: 指定したタイトルのシートがスプレッドシート内に存在しない
/// - `Transport`: 独自トランスポートが返した任意のエラー
/// - `Http`: HTTP通信中に発生したエラー（`http`フィーチャー有効時）
/// - `Api`: バックエンドが成功以外のステータスを返したエラー
/// - `Json`: レスポンスボディのJSON解析に失敗したエラー
/// - `Config`: 設定の検証に失敗したエラー
///
/// トランスポート由来のエラーはローカルで再試行・変換されず、
/// そのまま呼び出し元へ伝播します。
///
/// # 使用例
///
/// ```rust
/// use gsheetzero::SheetsError;
///
/// let error = SheetsError::SheetNotFound {
///     title: "Summary".to_string(),
/// };
/// assert_eq!(error.to_string(), "Sheet not found: Summary");
/// ```
#[derive(Error, Debug)]
pub enum SheetsError {
    /// 指定したタイトルに一致するシートが存在しない
    ///
    /// 要求されたタイトルをそのまま保持します。
    #[error("Sheet not found: {title}")]
    SheetNotFound {
        /// 要求されたシートタイトル
        title: String,
    },

    /// 独自トランスポートが返したエラー
    ///
    /// `Transport`トレイトを独自に実装する場合、任意のエラーをこの
    /// バリアントに包んで返します。
    #[error("Transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),

    /// HTTP通信中に発生したエラー
    ///
    /// 接続失敗、TLSエラー、タイムアウトなど。
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// バックエンドが成功以外のステータスを返したエラー
    ///
    /// 認証失敗、クォータ超過、不正なレンジ指定などはすべてここに含まれます。
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTPステータスコード
        status: u16,
        /// バックエンドが返したエラーメッセージ
        message: String,
    },

    /// JSONの解析エラー
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `HttpTransportBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SheetsError {
    /// 任意のエラーを`Transport`バリアントに包む
    pub fn transport<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        SheetsError::Transport(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_sheet_not_found_carries_title() {
        let error = SheetsError::SheetNotFound {
            title: "Data 2024".to_string(),
        };

        match &error {
            SheetsError::SheetNotFound { title } => assert_eq!(title, "Data 2024"),
            _ => panic!("Expected SheetNotFound error"),
        }
        assert_eq!(error.to_string(), "Sheet not found: Data 2024");
    }

    #[test]
    fn test_transport_error_wraps_source() {
        let io_err = io::Error::new(io::ErrorKind::ConnectionReset, "connection reset");
        let error = SheetsError::transport(io_err);

        let error_msg = error.to_string();
        assert!(error_msg.starts_with("Transport error"));
        assert!(error_msg.contains("connection reset"));
    }

    #[test]
    fn test_transport_error_from_str() {
        let error = SheetsError::transport("quota exceeded");
        assert!(matches!(error, SheetsError::Transport(_)));
        assert_eq!(error.to_string(), "Transport error: quota exceeded");
    }

    #[test]
    fn test_api_error_display() {
        let error = SheetsError::Api {
            status: 400,
            message: "Unable to parse range: Nope!A1".to_string(),
        };

        let error_msg = error.to_string();
        assert!(error_msg.contains("status 400"));
        assert!(error_msg.contains("Unable to parse range"));
    }

    // ?演算子による自動変換の確認
    #[test]
    fn test_error_conversion_from_serde_json() {
        fn parse() -> Result<serde_json::Value, SheetsError> {
            Ok(serde_json::from_str("{not json")?)
        }

        match parse() {
            Err(SheetsError::Json(_)) => {}
            other => panic!("Expected Json error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_error_display() {
        let error = SheetsError::Config("access token must not be empty".to_string());
        assert!(error.to_string().starts_with("Configuration error"));
    }
}
