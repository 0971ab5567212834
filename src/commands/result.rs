/// コマンド実行結果を表す型
///
/// 各コマンドはこの型を返し、プレゼンテーション層で
/// 人間向けと機械向けの出力フォーマットを決定する。
use serde::Serialize;
use serde_json::Value;

/// コマンド実行結果の統一型
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandResult {
    Image(UploadResult),
    Video(UploadResult),
    Status(StatusResult),
    Help,
}

/// アップロードコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct UploadResult {
    /// コマンドラインで指定された入力（URL・パス・"-"）
    pub input: String,
    /// Imgur のレスポンス（加工しない）
    pub response: Value,
}

/// ステータスコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct StatusResult {
    /// アクセストークンを取得できたか
    pub is_authenticated: bool,
    /// マスキングされたクライアントID
    pub client_id: String,
    /// 認証に失敗した場合の理由
    pub error: Option<String>,
}

impl CommandResult {
    /// コマンド名（機械向け出力用）
    pub fn command_name(&self) -> &'static str {
        match self {
            CommandResult::Image(_) => "image",
            CommandResult::Video(_) => "video",
            CommandResult::Status(_) => "status",
            CommandResult::Help => "help",
        }
    }
}
