/// 認証済みクライアントの準備
///
/// 認証情報を次の順で探す:
/// 1. プロセス環境変数
/// 2. カレントディレクトリの `.env`
/// 3. ユーザー設定ディレクトリの `quickimgur/.env`
use anyhow::{Context, Result};
use quickimgur::config::error::ConfigError;
use quickimgur::{Credentials, ImgurClient};
use tracing::debug;

/// 認証情報を解決する
pub fn load_credentials() -> Result<Credentials> {
    let err = match Credentials::from_env() {
        Ok(credentials) => return Ok(credentials),
        Err(e) => e,
    };

    if matches!(err, ConfigError::MissingCredential { .. })
        && let Some(path) = Credentials::user_env_path()
        && path.exists()
    {
        debug!(path = %path.display(), "falling back to user env file");
        return Credentials::from_env_file(&path)
            .with_context(|| format!("Failed to load credentials from {}", path.display()));
    }

    Err(err.into())
}

/// 認証情報を読み込み、アクセストークンを取得したクライアントを返す
pub fn connect() -> Result<ImgurClient> {
    let credentials = load_credentials()?;
    ImgurClient::new(credentials).context("Failed to authenticate with Imgur")
}
