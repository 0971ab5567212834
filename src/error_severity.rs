//! エラー深刻度
//!
//! config / api / domain の各層のエラーが共通で返す分類。
//! バイナリ側はこれを使って終了コードを決定する。
//!
//! **依存方向の原則:**
//! - 各層はこのモジュールに依存してOK
//! - このモジュールは他のモジュールに依存しない（独立）

use std::fmt;

/// エラーの深刻度と対応する終了コード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// ユーザーの入力エラー
    ///
    /// 指定したファイルが存在しない、読めないなど、ユーザーが直す可能性がある。
    ///
    /// **Exit Code: 1**
    UserError,

    /// 設定エラー
    ///
    /// 認証情報が未設定、またはImgurに拒否された。
    ///
    /// **Exit Code: 2**
    ConfigError,

    /// システムエラー
    ///
    /// ネットワーク障害、Imgur側の失敗など、ユーザーが直せない外部要因。
    ///
    /// **Exit Code: 3**
    SystemError,
}

impl ErrorSeverity {
    /// 対応する Unix 終了コードを返す
    pub fn exit_code(self) -> i32 {
        match self {
            Self::UserError => 1,
            Self::ConfigError => 2,
            Self::SystemError => 3,
        }
    }

    /// HTTPステータスコードから深刻度を決める
    ///
    /// 401/403 は認証情報の問題として扱う。
    pub fn for_http_status(status_code: Option<u16>) -> Self {
        match status_code {
            Some(401) | Some(403) => Self::ConfigError,
            _ => Self::SystemError,
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserError => write!(f, "user error"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SystemError => write!(f, "system error"),
        }
    }
}
