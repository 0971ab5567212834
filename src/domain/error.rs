/// ドメイン層のエラー定義
///
/// アップロード入力の正規化中に発生するローカルI/Oエラーを定義。
/// 元の io::Error は #[source] で保持する。
use crate::error_severity::ErrorSeverity;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// ファイルが見つからない
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// ファイルを読み込めない（権限不足、ディレクトリ指定など）
    #[error("failed to read file: {path}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl DomainError {
    /// ファイルが見つからないエラーを生成
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// 読み込み失敗エラーを生成
    pub fn unreadable(path: impl Into<String>, source: io::Error) -> Self {
        Self::Unreadable {
            path: path.into(),
            source,
        }
    }

    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::UserError
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::FileNotFound { .. } => Some(
                "Please check the file path. Inputs that are not absolute URLs are treated as file paths.",
            ),
            Self::Unreadable { .. } => {
                Some("Check file permissions and make sure the path is a regular file.")
            }
        }
    }
}
