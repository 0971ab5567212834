/// アプリケーション設定モジュール
///
/// ビルド時に config.toml から読み込まれる静的設定を管理します。
/// これらの設定は実行時には変更できません。
use serde::Deserialize;
use std::sync::LazyLock;

/// ビルド時に埋め込まれた設定（初回アクセス時にパース）
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::load);

/// アプリケーション全体の設定
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

/// API関連の設定
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Imgur API のベースURL
    pub endpoint: String,

    /// OAuth2 トークンエンドポイントのパス
    pub token_path: String,

    /// 画像・動画アップロードエンドポイントのパス
    pub upload_path: String,
}

/// ロギング関連の設定
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// RUST_LOG 未設定時のログレベル (trace, debug, info, warn, error)
    pub level: String,
}

impl AppConfig {
    /// ビルド時に埋め込まれたconfig.tomlから設定を読み込む
    ///
    /// # Panics
    /// 設定ファイルのパースに失敗した場合はパニックします。
    /// これはビルド時設定なので、実行時エラーではなくコンパイルエラーとして扱うべきです。
    pub fn load() -> Self {
        const CONFIG_STR: &str = include_str!("../../config.toml");
        toml::from_str(CONFIG_STR)
            .expect("Failed to parse embedded config.toml. This is a build-time configuration error.")
    }
}
