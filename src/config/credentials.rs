/// 認証情報モジュール
///
/// Imgur OAuth2 の refresh token フローに必要な3つの値を保持します。
/// 値は明示的に渡すか、環境変数・env ファイルから読み込みます。
/// どれか1つでも欠けていれば、ネットワーク通信の前に ConfigError を返します（Fail Fast）。
use crate::config::error::ConfigError;
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// クライアントIDの環境変数名
pub const CLIENT_ID_VAR: &str = "IMGUR_CLIENT_ID";

/// クライアントシークレットの環境変数名
pub const CLIENT_SECRET_VAR: &str = "IMGUR_CLIENT_SECRET";

/// リフレッシュトークンの環境変数名
pub const REFRESH_TOKEN_VAR: &str = "IMGUR_REFRESH_TOKEN";

/// Imgur API の認証情報
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl Credentials {
    /// 認証情報を明示的に作成
    ///
    /// 検証は行いません。`validate()` または `ImgurClient::new` で検証されます。
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// 任意の参照関数から認証情報を読み込む
    ///
    /// # Arguments
    /// * `lookup` - 変数名を受け取り値を返す関数（空文字列は未設定として扱う）
    ///
    /// # Errors
    /// 最初に見つかった欠落変数名を含む ConfigError::MissingCredential
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::missing_credential(name))
        };

        Ok(Self {
            client_id: read(CLIENT_ID_VAR)?,
            client_secret: read(CLIENT_SECRET_VAR)?,
            refresh_token: read(REFRESH_TOKEN_VAR)?,
        })
    }

    /// プロセス環境変数から認証情報を読み込む
    ///
    /// カレントディレクトリ（および親ディレクトリ）の `.env` があれば先に読み込みます。
    /// 既に設定済みの環境変数は上書きされません。
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded env file"),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::env_file(".env", e)),
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 指定した env ファイルから認証情報を読み込む
    ///
    /// プロセス環境は変更しません。同じ変数がプロセス環境にあればそちらを優先します。
    ///
    /// # Errors
    /// ファイルが存在しない・パースできない場合は ConfigError::EnvFile
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let to_error = |e| ConfigError::env_file(path.display().to_string(), e);

        let mut values = HashMap::new();
        for item in dotenvy::from_path_iter(path).map_err(to_error)? {
            let (key, value) = item.map_err(to_error)?;
            values.insert(key, value);
        }
        debug!(path = %path.display(), entries = values.len(), "read env file");

        Self::from_file_values(&values, |name| env::var(name).ok())
    }

    /// env ファイルの値と環境変数の参照関数を合成して読み込む
    ///
    /// 空でない環境変数があればファイルの値より優先する。
    fn from_file_values<F>(
        values: &HashMap<String, String>,
        env_lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|name| {
            env_lookup(name)
                .filter(|value| !value.is_empty())
                .or_else(|| values.get(name).cloned())
        })
    }

    /// ユーザー設定ディレクトリ内の env ファイルのパス
    ///
    /// Linux:   /home/<user>/.config/quickimgur/.env
    /// macOS:   /Users/<User>/Library/Application Support/quickimgur/.env
    /// Windows: C:\Users\<User>\AppData\Roaming\quickimgur\.env
    pub fn user_env_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("quickimgur").join(".env"))
    }

    /// 認証情報を検証
    ///
    /// # Errors
    /// 空の値がある場合に ConfigError::MissingCredential を返します。
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            (CLIENT_ID_VAR, &self.client_id),
            (CLIENT_SECRET_VAR, &self.client_secret),
            (REFRESH_TOKEN_VAR, &self.refresh_token),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::missing_credential(name));
            }
        }
        Ok(())
    }

    /// マスキングしたクライアントID
    pub fn masked_client_id(&self) -> String {
        mask_secret(&self.client_id)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &mask_secret(&self.client_id))
            .field("client_secret", &mask_secret(&self.client_secret))
            .field("refresh_token", &mask_secret(&self.refresh_token))
            .finish()
    }
}

/// 秘密値をマスキングして表示用に変換
///
/// 8文字以下は全て `*`、それより長い場合は先頭4文字と末尾4文字のみ残す。
pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}***{}", head, tail)
    }
}
