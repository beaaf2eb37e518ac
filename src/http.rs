//! HTTP Transport Module
//!
//! `reqwest`（ブロッキングクライアント）によるSheets v4 REST APIのトランスポート実装。
//! アクセストークンは呼び出し側が用意します（取得・更新はこのクレートの範囲外）。

use std::time::Duration;

use log::trace;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::{InsertDataOption, ValueInputOption, ValueRenderOption};
use crate::error::SheetsError;
use crate::request::{Request, ValueRange};
use crate::transport::Transport;
use crate::types::{SheetProperties, SpreadsheetSnapshot, ValueMatrix};

/// Sheets v4 APIのデフォルトエンドポイント
pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets/";

/// スナップショット取得時に要求するフィールド
const SPREADSHEET_FIELDS: &str = "spreadsheetId,sheets.properties(sheetId,title,index)";

/// `HttpTransport`を段階的に構築するビルダー
///
/// # 使用例
///
/// ```rust,no_run
/// use std::time::Duration;
/// use gsheetzero::HttpTransportBuilder;
///
/// # fn main() -> Result<(), gsheetzero::SheetsError> {
/// let transport = HttpTransportBuilder::new("ya29.token")
///     .with_timeout(Duration::from_secs(30))
///     .with_user_agent("report-sync/1.0")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransportBuilder {
    access_token: String,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpTransportBuilder {
    /// ベアラートークンを指定してビルダーを生成する
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: None,
        }
    }

    /// エンドポイントのベースURLを指定する（プロキシやエミュレータ向け）
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// リクエストごとのタイムアウトを指定する
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// User-Agentヘッダーを指定する
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// 設定を検証し、`HttpTransport`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `SheetsError::Config(String)`: 設定の検証に失敗した場合
    ///   * アクセストークンが空
    ///   * ベースURLが解析できない、またはhttp(s)以外のスキーム
    ///   * タイムアウトが0
    /// * `SheetsError::Http`: HTTPクライアントの初期化に失敗した場合
    pub fn build(self) -> Result<HttpTransport, SheetsError> {
        // 1. トークンの検証
        if self.access_token.trim().is_empty() {
            return Err(SheetsError::Config(
                "Access token must not be empty".to_string(),
            ));
        }

        // 2. ベースURLの検証
        let base_url = Url::parse(&self.base_url).map_err(|e| {
            SheetsError::Config(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(SheetsError::Config(format!(
                "Base URL must be an http(s) URL: '{}'",
                self.base_url
            )));
        }

        // 3. タイムアウトの検証
        if self.timeout == Some(Duration::ZERO) {
            return Err(SheetsError::Config(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        // 4. クライアント生成
        let mut client = Client::builder();
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }
        if let Some(user_agent) = &self.user_agent {
            client = client.user_agent(user_agent.as_str());
        }

        Ok(HttpTransport {
            client: client.build()?,
            base_url,
            access_token: self.access_token,
        })
    }
}

/// Sheets v4 REST APIのトランスポート
///
/// 再試行やバックオフは行いません。失敗はそのまま`SheetsError`として返します。
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    access_token: String,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // トークンは出力しない
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// スプレッドシートリソース（必要なフィールドのみ）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpreadsheetResource {
    spreadsheet_id: String,
    #[serde(default)]
    sheets: Vec<SheetResource>,
}

#[derive(Debug, Deserialize)]
struct SheetResource {
    properties: SheetProperties,
}

impl From<SpreadsheetResource> for SpreadsheetSnapshot {
    fn from(resource: SpreadsheetResource) -> Self {
        SpreadsheetSnapshot::new(
            resource.spreadsheet_id,
            resource
                .sheets
                .into_iter()
                .map(|sheet| sheet.properties)
                .collect(),
        )
    }
}

#[derive(Serialize)]
struct ValuesBody<'a> {
    values: &'a ValueMatrix,
}

#[derive(Serialize)]
struct BatchUpdateBody<'a> {
    requests: &'a [Request],
}

#[derive(Serialize)]
struct ClearBody {}

/// エラーレスポンス `{"error": {"code": 400, "message": "..."}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// エラーレスポンスのボディからメッセージを取り出す
///
/// 既知の形式でなければボディ全体をそのまま返します。
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().to_string(),
    }
}

impl HttpTransport {
    /// ベースURLにパスセグメントを追加したURLを返す
    ///
    /// 各セグメントはパーセントエンコードされます（`/`や空白を含むシート名に対応）。
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SheetsError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                SheetsError::Config(format!("Base URL cannot be a base: '{}'", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn values_endpoint(
        &self,
        spreadsheet_id: &str,
        range: &str,
        action: Option<&str>,
    ) -> Result<Url, SheetsError> {
        let last = match action {
            Some(action) => format!("{}:{}", range, action),
            None => range.to_string(),
        };
        self.endpoint(&[spreadsheet_id, "values", last.as_str()])
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, SheetsError> {
        let response = request.bearer_auth(&self.access_token).send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.text() {
            Ok(body) => api_error_message(&body),
            Err(e) => {
                trace!("failed to read error body ({}): {}", status, e);
                format!("<unreadable error body: {}>", e)
            }
        };
        Err(SheetsError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn read_json<D: DeserializeOwned>(response: Response) -> Result<D, SheetsError> {
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Transport for HttpTransport {
    fn get_spreadsheet(&self, spreadsheet_id: &str) -> Result<SpreadsheetSnapshot, SheetsError> {
        let mut url = self.endpoint(&[spreadsheet_id])?;
        url.query_pairs_mut()
            .append_pair("fields", SPREADSHEET_FIELDS);
        trace!("GET {}", url);

        let response = self.send(self.client.get(url))?;
        let resource: SpreadsheetResource = Self::read_json(response)?;
        Ok(resource.into())
    }

    fn get_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        render_option: ValueRenderOption,
    ) -> Result<ValueMatrix, SheetsError> {
        let mut url = self.values_endpoint(spreadsheet_id, range, None)?;
        url.query_pairs_mut()
            .append_pair("valueRenderOption", render_option.as_str());
        trace!("GET {}", url);

        let response = self.send(self.client.get(url))?;
        let value_range: ValueRange = Self::read_json(response)?;
        Ok(value_range.values)
    }

    fn update_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: &ValueMatrix,
        input_option: ValueInputOption,
    ) -> Result<(), SheetsError> {
        let mut url = self.values_endpoint(spreadsheet_id, range, None)?;
        url.query_pairs_mut()
            .append_pair("valueInputOption", input_option.as_str());
        trace!("PUT {}", url);

        self.send(self.client.put(url).json(&ValuesBody { values }))?;
        Ok(())
    }

    fn append_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: &ValueMatrix,
        input_option: ValueInputOption,
        insert_data_option: Option<InsertDataOption>,
    ) -> Result<(), SheetsError> {
        let mut url = self.values_endpoint(spreadsheet_id, range, Some("append"))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("valueInputOption", input_option.as_str());
            if let Some(option) = insert_data_option {
                query.append_pair("insertDataOption", option.as_str());
            }
        }
        trace!("POST {}", url);

        self.send(self.client.post(url).json(&ValuesBody { values }))?;
        Ok(())
    }

    fn clear_values(&self, spreadsheet_id: &str, range: &str) -> Result<(), SheetsError> {
        let url = self.values_endpoint(spreadsheet_id, range, Some("clear"))?;
        trace!("POST {}", url);

        self.send(self.client.post(url).json(&ClearBody {}))?;
        Ok(())
    }

    fn batch_update(&self, spreadsheet_id: &str, requests: &[Request]) -> Result<(), SheetsError> {
        let segment = format!("{}:batchUpdate", spreadsheet_id);
        let url = self.endpoint(&[segment.as_str()])?;
        trace!("POST {} ({} requests)", url, requests.len());

        self.send(self.client.post(url).json(&BatchUpdateBody { requests }))?;
        Ok(())
    }
}
