/// Config層のエラー定義
///
/// 認証情報の読み込みと env ファイルのパースに関するエラーを構造化して定義。
/// 外部エラー(dotenvy::Error)の発信元を #[source] で保持する。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// 必須の認証情報が未設定または空
    #[error("missing required credential: {name}")]
    MissingCredential { name: &'static str },

    /// env ファイルの読み込み・パース失敗
    #[error("failed to load env file: {path}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

impl ConfigError {
    /// 認証情報欠落エラーを生成
    pub fn missing_credential(name: &'static str) -> Self {
        Self::MissingCredential { name }
    }

    /// env ファイルエラーを生成
    pub fn env_file(path: impl Into<String>, source: dotenvy::Error) -> Self {
        Self::EnvFile {
            path: path.into(),
            source,
        }
    }

    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::ConfigError
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::MissingCredential { .. } => Some(
                "Set IMGUR_CLIENT_ID, IMGUR_CLIENT_SECRET and IMGUR_REFRESH_TOKEN in the environment or in a .env file.",
            ),
            Self::EnvFile { .. } => {
                Some("Check the env file syntax: one KEY=value pair per line.")
            }
        }
    }
}
