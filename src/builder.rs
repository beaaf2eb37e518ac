//! Builder Module
//!
//! Fluent Builder APIを提供し、`Service`インスタンスを段階的に構築する。

use crate::api::{InsertDataOption, ValueRenderOption};
use crate::service::Service;
use crate::transport::Transport;

/// 操作の設定を保持する内部構造体
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ServiceConfig {
    /// 読み込み時の値の表現方法
    pub value_render_option: ValueRenderOption,

    /// 追記時の既存データの扱い（Option: Noneの場合はバックエンドの既定値）
    pub insert_data_option: Option<InsertDataOption>,
}

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use gsheetzero::{HttpTransportBuilder, InsertDataOption, ServiceBuilder, ValueRenderOption};
///
/// # fn main() -> Result<(), gsheetzero::SheetsError> {
/// let transport = HttpTransportBuilder::new("ya29.token").build()?;
/// let service = ServiceBuilder::new(transport)
///     .with_value_render_option(ValueRenderOption::UnformattedValue)
///     .with_insert_data_option(InsertDataOption::InsertRows)
///     .build();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ServiceBuilder<T> {
    transport: T,
    config: ServiceConfig,
}

impl<T: Transport> ServiceBuilder<T> {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 値の表現: `ValueRenderOption::FormattedValue`
    /// - 追記オプション: 指定なし（バックエンドの既定値）
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            config: ServiceConfig::default(),
        }
    }

    /// `get` / `get_raw`で使用する値の表現方法を指定する
    pub fn with_value_render_option(mut self, option: ValueRenderOption) -> Self {
        self.config.value_render_option = option;
        self
    }

    /// `append` / `append_raw`で使用する追記オプションを指定する
    pub fn with_insert_data_option(mut self, option: InsertDataOption) -> Self {
        self.config.insert_data_option = Some(option);
        self
    }

    /// `Service`インスタンスを生成する
    pub fn build(self) -> Service<T> {
        Service::with_config(self.transport, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ValueInputOption;
    use crate::error::SheetsError;
    use crate::request::Request;
    use crate::types::{SpreadsheetSnapshot, ValueMatrix};

    struct NullTransport;

    impl Transport for NullTransport {
        fn get_spreadsheet(&self, id: &str) -> Result<SpreadsheetSnapshot, SheetsError> {
            Ok(SpreadsheetSnapshot::new(id, Vec::new()))
        }
        fn get_values(
            &self,
            _: &str,
            _: &str,
            _: ValueRenderOption,
        ) -> Result<ValueMatrix, SheetsError> {
            Ok(Vec::new())
        }
        fn update_values(
            &self,
            _: &str,
            _: &str,
            _: &ValueMatrix,
            _: ValueInputOption,
        ) -> Result<(), SheetsError> {
            Ok(())
        }
        fn append_values(
            &self,
            _: &str,
            _: &str,
            _: &ValueMatrix,
            _: ValueInputOption,
            _: Option<InsertDataOption>,
        ) -> Result<(), SheetsError> {
            Ok(())
        }
        fn clear_values(&self, _: &str, _: &str) -> Result<(), SheetsError> {
            Ok(())
        }
        fn batch_update(&self, _: &str, _: &[Request]) -> Result<(), SheetsError> {
            Ok(())
        }
    }

    #[test]
    fn test_service_builder_new() {
        let builder = ServiceBuilder::new(NullTransport);
        assert_eq!(
            builder.config.value_render_option,
            ValueRenderOption::FormattedValue
        );
        assert!(builder.config.insert_data_option.is_none());
    }

    #[test]
    fn test_builder_method_chaining() {
        let builder = ServiceBuilder::new(NullTransport)
            .with_value_render_option(ValueRenderOption::Formula)
            .with_insert_data_option(InsertDataOption::InsertRows);

        assert_eq!(builder.config.value_render_option, ValueRenderOption::Formula);
        assert_eq!(
            builder.config.insert_data_option,
            Some(InsertDataOption::InsertRows)
        );
    }

    #[test]
    fn test_build_carries_config() {
        let service = ServiceBuilder::new(NullTransport)
            .with_value_render_option(ValueRenderOption::UnformattedValue)
            .build();
        assert_eq!(
            service.config().value_render_option,
            ValueRenderOption::UnformattedValue
        );
    }
}
