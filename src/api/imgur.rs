/// Imgur クライアント
///
/// 生成時に認証情報を検証し、アクセストークンを1回だけ取得する。
/// 以降のアップロードはすべてそのトークンを Bearer ヘッダーに付けて送る。
/// トークンの再取得は行わないため、期限切れ後はクライアントを作り直す必要がある。
use crate::api::auth::{AccessToken, AuthManager};
use crate::api::client::ApiClient;
use crate::api::types::{ImageUploadOptions, VideoUploadOptions};
use crate::config::{APP_CONFIG, Credentials};
use crate::domain::payload::{PreparedPayload, UploadPayload, prepare_payload};
use crate::error::Result;
use serde_json::Value;
use tracing::{debug, info};

/// アップロードフォーム（フィールド名と値の組）
pub type UploadForm = Vec<(&'static str, String)>;

/// Imgur クライアント
#[derive(Debug)]
pub struct ImgurClient {
    api: ApiClient,
    auth: AuthManager,
    access_token: AccessToken,
}

impl ImgurClient {
    /// プロダクション環境のクライアントを作成
    ///
    /// # Errors
    /// - 認証情報が欠けている: ConfigError（ネットワーク通信は行わない）
    /// - トークン取得失敗: InfraError
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_base_url(credentials, APP_CONFIG.api.endpoint.as_str())
    }

    /// ベースURLを指定してクライアントを作成
    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Result<Self> {
        credentials.validate()?;

        let api = ApiClient::new(base_url)?;
        let auth = AuthManager::new(credentials);
        let access_token = auth.authenticate(&api)?;

        Ok(Self {
            api,
            auth,
            access_token,
        })
    }

    /// 環境変数（と `.env`）から認証情報を読み込んでクライアントを作成
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// 取得済みのアクセストークン
    pub fn access_token(&self) -> &str {
        self.access_token.as_str()
    }

    /// 使用中の認証情報
    pub fn credentials(&self) -> &Credentials {
        self.auth.credentials()
    }

    /// マスキングしたクライアントID
    pub fn masked_client_id(&self) -> String {
        self.auth.get_masked_client_id()
    }

    /// 画像をアップロード
    ///
    /// `title` と `description` は受け付けるが、リクエストには含めない。
    ///
    /// # Returns
    /// Imgur のレスポンス（JSON をそのまま返す）
    pub fn upload_image(
        &self,
        payload: impl Into<UploadPayload>,
        options: &ImageUploadOptions,
    ) -> Result<Value> {
        let prepared = prepare_payload(&self.api, payload.into(), options.force_base64)?;

        if options.title.is_some() || options.description.is_some() {
            debug!("title/description are not sent for image uploads");
        }

        self.post_upload("image", &image_form(&prepared))
    }

    /// 動画をアップロード
    ///
    /// `title` / `description` は空でない場合のみ送信し、`disable_audio` は常に送信する。
    pub fn upload_video(
        &self,
        payload: impl Into<UploadPayload>,
        options: &VideoUploadOptions,
    ) -> Result<Value> {
        let prepared = prepare_payload(&self.api, payload.into(), options.force_base64)?;

        self.post_upload("video", &video_form(&prepared, options))
    }

    /// アップロードエンドポイントへ送信し、JSON を返す
    fn post_upload(&self, kind: &str, form: &UploadForm) -> Result<Value> {
        let endpoint = APP_CONFIG.api.upload_path.as_str();
        let auth_header = self.access_token.bearer_header();

        let response = self.api.post_form(endpoint, form, Some(&auth_header))?;
        let response = ApiClient::check_response(response, endpoint)?;
        let body: Value = ApiClient::parse_json(response, endpoint)?;

        info!(
            kind,
            link = body["data"]["link"].as_str().unwrap_or("-"),
            "upload completed"
        );
        Ok(body)
    }
}

/// 画像アップロードのフォームを構築
pub fn image_form(prepared: &PreparedPayload) -> UploadForm {
    vec![
        ("image", prepared.data.clone()),
        ("type", prepared.upload_type.as_str().to_string()),
    ]
}

/// 動画アップロードのフォームを構築
pub fn video_form(prepared: &PreparedPayload, options: &VideoUploadOptions) -> UploadForm {
    let mut form = vec![
        ("video", prepared.data.clone()),
        ("type", prepared.upload_type.as_str().to_string()),
    ];

    if let Some(title) = non_empty(&options.title) {
        form.push(("title", title.to_string()));
    }
    if let Some(description) = non_empty(&options.description) {
        form.push(("description", description.to_string()));
    }
    // 送信値は小文字の "true" / "false"（先頭大文字の "True" / "False" ではない）
    form.push(("disable_audio", options.disable_audio.to_string()));

    form
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
