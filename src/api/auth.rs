/// 認証マネージャー
///
/// Imgur の OAuth2 refresh token フローを扱います。
/// refresh token をアクセストークンに交換し、Bearer 認証ヘッダーを生成します。
/// 交換はクライアント生成時に1回だけ行い、期限切れ時の再取得は行いません。
use crate::api::client::ApiClient;
use crate::api::error::InfraError;
use crate::api::types::TokenResponse;
use crate::config::APP_CONFIG;
use crate::config::credentials::{Credentials, mask_secret};
use std::fmt;
use tracing::info;

/// refresh token グラントの grant_type
const GRANT_TYPE: &str = "refresh_token";

/// 取得済みのアクセストークン
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bearer 認証ヘッダーの値を生成
    ///
    /// # Returns
    /// "Bearer <access_token>" 形式の文字列
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&mask_secret(&self.0)).finish()
    }
}

/// 認証マネージャー
#[derive(Debug, Clone)]
pub struct AuthManager {
    credentials: Credentials,
}

impl AuthManager {
    /// 新しい認証マネージャーを作成
    ///
    /// # Arguments
    /// * `credentials` - 検証済みの Imgur 認証情報
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// トークンエンドポイントに送るフォーム
    pub fn token_form(&self) -> [(&'static str, &str); 4] {
        [
            ("refresh_token", self.credentials.refresh_token.as_str()),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("grant_type", GRANT_TYPE),
        ]
    }

    /// refresh token をアクセストークンに交換
    ///
    /// # Errors
    /// - 2xx 以外: InfraError::Api（リトライなし）
    /// - `access_token` を含まない・空の本文: InfraError::InvalidResponse
    pub fn authenticate(&self, client: &ApiClient) -> Result<AccessToken, InfraError> {
        let endpoint = APP_CONFIG.api.token_path.as_str();

        let response = client.post_form(endpoint, &self.token_form(), None)?;
        let response = ApiClient::check_response(response, endpoint)?;
        let token: TokenResponse = ApiClient::parse_json(response, endpoint)?;

        if !token.is_valid() {
            return Err(InfraError::invalid_response(endpoint, "access_token is empty"));
        }

        info!(
            client_id = %self.get_masked_client_id(),
            account = token
                .account_username
                .as_ref()
                .and_then(|v| v.as_str())
                .unwrap_or("-"),
            "obtained access token"
        );

        Ok(AccessToken::new(token.access_token))
    }

    /// 認証情報を取得
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// クライアントIDをマスキングして表示
    pub fn get_masked_client_id(&self) -> String {
        self.credentials.masked_client_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> AuthManager {
        AuthManager::new(Credentials::new("my_client_id", "my_secret", "my_refresh"))
    }

    #[test]
    fn test_token_form() {
        let manager = manager();
        let form = manager.token_form();
        assert_eq!(
            form,
            [
                ("refresh_token", "my_refresh"),
                ("client_id", "my_client_id"),
                ("client_secret", "my_secret"),
                ("grant_type", "refresh_token"),
            ]
        );
    }

    #[test]
    fn test_bearer_header_generation() {
        let token = AccessToken::new("abc123");
        assert_eq!(token.bearer_header(), "Bearer abc123");
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn test_access_token_debug_is_masked() {
        let token = AccessToken::new("0123456789abcdef");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("0123456789abcdef"));
        assert!(debug.contains("0123***cdef"));
    }

    #[test]
    fn test_client_id_masking() {
        let masked = manager().get_masked_client_id();
        assert_eq!(masked, "my_c***t_id");
    }

    #[test]
    fn test_authenticate_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/oauth2/token")
            .match_body(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("refresh_token".into(), "my_refresh".into()),
                mockito::Matcher::UrlEncoded("client_id".into(), "my_client_id".into()),
                mockito::Matcher::UrlEncoded("client_secret".into(), "my_secret".into()),
                mockito::Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token": "fresh_token", "token_type": "bearer"}"#)
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let token = manager().authenticate(&client).unwrap();

        mock.assert();
        assert_eq!(token.as_str(), "fresh_token");
    }

    #[test]
    fn test_authenticate_ignores_unused_field_types() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/oauth2/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token": "tok", "account_id": "not-a-number", "expires_in": null}"#)
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let token = manager().authenticate(&client).unwrap();

        assert_eq!(token.as_str(), "tok");
    }

    #[test]
    fn test_authenticate_rejected() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/oauth2/token")
            .with_status(400)
            .with_body(r#"{"data":{"error":"Invalid refresh token"},"success":false,"status":400}"#)
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let err = manager().authenticate(&client).unwrap_err();

        mock.assert();
        assert_eq!(err.status_code(), Some(400));
    }

    #[test]
    fn test_authenticate_body_without_token() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/oauth2/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"token_type": "bearer"}"#)
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let err = manager().authenticate(&client).unwrap_err();

        assert!(matches!(err, InfraError::InvalidResponse { .. }));
    }
}
