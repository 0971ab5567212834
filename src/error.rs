/// ライブラリ全体のエラー型
///
/// 各層のエラー（設定・通信・ローカルI/O）を1つにまとめる。
/// 呼び出し側は variant で失敗の種類を区別できる。
use crate::api::error::InfraError;
use crate::config::error::ConfigError;
use crate::domain::error::DomainError;
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// 設定エラー（認証情報の欠落など）
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// 通信エラー（2xx 以外を含む）
    #[error(transparent)]
    Infra(#[from] InfraError),

    /// ローカルI/Oエラー
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// ライブラリの結果型
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTPステータスコード（API エラーの場合のみ）
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Infra(e) => e.status_code(),
            _ => None,
        }
    }

    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(e) => e.severity(),
            Self::Infra(e) => e.severity(),
            Self::Domain(e) => e.severity(),
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config(e) => e.hint(),
            Self::Infra(e) => e.hint(),
            Self::Domain(e) => e.hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_layer_errors() {
        let err: Error = ConfigError::missing_credential("IMGUR_REFRESH_TOKEN").into();
        assert_eq!(err.severity(), ErrorSeverity::ConfigError);
        assert_eq!(err.to_string(), "missing required credential: IMGUR_REFRESH_TOKEN");

        let err: Error = DomainError::file_not_found("a.png").into();
        assert_eq!(err.severity().exit_code(), 1);
        assert!(err.status_code().is_none());

        let err: Error = InfraError::api("/3/image", "boom", Some(500)).into();
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.severity().exit_code(), 3);
    }
}
