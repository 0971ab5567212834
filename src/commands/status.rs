/// ステータスコマンド
///
/// 現在の認証情報でアクセストークンを取得できるかを確認します。
use crate::commands::result::{CommandResult, StatusResult};
use crate::commands::session;
use anyhow::Result;
use quickimgur::ImgurClient;

/// ステータスコマンドを実行
///
/// 認証情報が欠けている場合はエラー、Imgur に拒否された場合は
/// `is_authenticated: false` の結果を返します。
pub fn execute() -> Result<CommandResult> {
    let credentials = session::load_credentials()?;
    let client_id = credentials.masked_client_id();

    match ImgurClient::new(credentials) {
        Ok(_) => Ok(CommandResult::Status(StatusResult {
            is_authenticated: true,
            client_id,
            error: None,
        })),
        Err(quickimgur::Error::Infra(e)) => Ok(CommandResult::Status(StatusResult {
            is_authenticated: false,
            client_id,
            error: Some(e.to_string()),
        })),
        Err(e) => Err(e.into()),
    }
}
