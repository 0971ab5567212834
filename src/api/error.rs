/// インフラ層のエラー定義
///
/// Imgur API およびダウンロード元との HTTP 通信で発生するエラーを構造化して定義。
/// ステータスコードとレスポンス本文を保持し、呼び出し側が成功結果と区別できるようにする。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfraError {
    /// ネットワークエラー
    #[error("network error: {message}")]
    Network { message: String },

    /// API通信エラー（2xx 以外のステータス）
    #[error("API error: {endpoint} - {message}")]
    Api {
        endpoint: String,
        message: String,
        status_code: Option<u16>,
    },

    /// タイムアウトエラー
    #[error("operation timed out: {operation}")]
    Timeout { operation: String },

    /// レスポンス本文が想定外
    #[error("invalid response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },
}

impl InfraError {
    /// ネットワークエラーを作成
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// APIエラーを作成
    pub fn api(
        endpoint: impl Into<String>,
        message: impl Into<String>,
        status_code: Option<u16>,
    ) -> Self {
        Self::Api {
            endpoint: endpoint.into(),
            message: message.into(),
            status_code,
        }
    }

    /// タイムアウトエラーを作成
    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::Timeout {
            operation: operation.into(),
        }
    }

    /// 不正レスポンスエラーを作成
    pub fn invalid_response(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// HTTPステータスコード（API エラーの場合のみ）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }

    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Api { status_code, .. } => ErrorSeverity::for_http_status(*status_code),
            _ => ErrorSeverity::SystemError,
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Api {
                status_code: Some(401 | 403),
                ..
            } => Some(
                "Imgur rejected the credentials. Check the client id/secret or generate a new refresh token.",
            ),
            Self::Api {
                status_code: Some(429),
                ..
            } => Some("Imgur rate limit reached. Wait a while before uploading again."),
            Self::Network { .. } | Self::Timeout { .. } => {
                Some("Check your network connection and try again.")
            }
            _ => None,
        }
    }
}
