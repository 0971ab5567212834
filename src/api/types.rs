/// API通信用の型定義
///
/// Imgur のトークンレスポンスと、アップロード時のオプションを定義します。
/// アップロードレスポンス自体はスキーマを持たず serde_json::Value のまま返します。
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 認証トークンレスポンス
///
/// POST /oauth2/token のレスポンス型。`access_token` 以外は型を固定せず、
/// Imgur が想定外の型で返しても認証を失敗させない。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// アクセストークン（API呼び出し用）
    pub access_token: String,

    /// リフレッシュトークン（Imgur は同じ値を返す）
    #[serde(default)]
    pub refresh_token: Option<Value>,

    /// アクセストークンの有効期限（秒）
    #[serde(default)]
    pub expires_in: Option<Value>,

    /// トークンタイプ（通常 "bearer"）
    #[serde(default)]
    pub token_type: Option<Value>,

    /// トークン所有者のユーザー名
    #[serde(default)]
    pub account_username: Option<Value>,

    /// トークン所有者のアカウントID
    #[serde(default)]
    pub account_id: Option<Value>,
}

impl TokenResponse {
    /// トークンレスポンスが有効かチェック
    pub fn is_valid(&self) -> bool {
        !self.access_token.trim().is_empty()
    }
}

/// 画像アップロードのオプション
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageUploadOptions {
    /// タイトル（受け付けるがリクエストには含めない）
    pub title: Option<String>,
    /// 説明（受け付けるがリクエストには含めない）
    pub description: Option<String>,
    /// URL 入力でもダウンロードして base64 で送る
    pub force_base64: bool,
}

/// 動画アップロードのオプション
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoUploadOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    /// 音声を無効化する
    pub disable_audio: bool,
    /// URL 入力でもダウンロードして base64 で送る
    pub force_base64: bool,
}
