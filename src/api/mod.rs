/// Imgur API クライアントモジュール
///
/// - `client`: 同期HTTPクライアント（送信・ステータス確認・JSONデコード）
/// - `auth`: refresh token によるアクセストークン取得
/// - `imgur`: 画像・動画アップロード
/// - `types`: トークンレスポンスとアップロードオプション
pub mod auth;
pub mod client;
pub mod error;
pub mod imgur;
pub mod types;
