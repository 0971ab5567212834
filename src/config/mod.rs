/// 設定管理モジュール
///
/// このモジュールは2層の設定構造を提供します:
/// 1. AppConfig - ビルド時に埋め込まれる静的設定（APP_CONFIG）
/// 2. Credentials - 実行時に環境変数または env ファイルから読み込まれる認証情報
///
/// # 使用例
///
/// ```no_run
/// use quickimgur::config::{APP_CONFIG, Credentials};
///
/// let endpoint = &APP_CONFIG.api.endpoint;
/// let credentials = Credentials::from_env()?;
/// # Ok::<(), quickimgur::config::error::ConfigError>(())
/// ```
pub mod app;
pub mod credentials;
pub mod error;

pub use app::APP_CONFIG;
pub use credentials::Credentials;
