/// HTTPクライアント
///
/// Imgur API との通信を担当する同期（ブロッキング）HTTPクライアント。
/// エラーハンドリングと Authorization ヘッダーの付与を含みます。
/// タイムアウトは reqwest のデフォルトのまま使用します。
use crate::api::error::InfraError;
use crate::config::APP_CONFIG;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// APIクライアントの結果型
type ApiResult<T> = Result<T, InfraError>;

/// APIクライアント
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// 新しいAPIクライアントを作成
    ///
    /// # Arguments
    /// * `base_url` - APIのベースURL（例: "https://api.imgur.com"）。末尾の `/` は取り除く
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| InfraError::network(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// デフォルトのプロダクション環境クライアントを作成
    pub fn production() -> ApiResult<Self> {
        Self::new(APP_CONFIG.api.endpoint.as_str())
    }

    /// ベースURL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// フォームエンコードのPOSTリクエストを送信
    ///
    /// # Arguments
    /// * `endpoint` - エンドポイントパス（例: "/3/image"）
    /// * `form` - リクエストボディ（application/x-www-form-urlencoded）
    /// * `auth_header` - Authorization ヘッダーの値（オプション）
    pub fn post_form<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        form: &T,
        auth_header: Option<&str>,
    ) -> ApiResult<Response> {
        let url = self.build_url(endpoint);
        let request = self.build_request(self.client.post(&url).form(form), auth_header);

        Self::send_with_error_handling(request, endpoint, "POST")
    }

    /// 完全なURLからバイト列をダウンロード
    ///
    /// ベースURLや認証ヘッダーは使用しません。2xx 以外はエラー。
    pub fn download(&self, url: &str) -> ApiResult<Vec<u8>> {
        let request = self.client.get(url);
        let response = Self::send_with_error_handling(request, url, "GET")?;
        let response = Self::check_response(response, url)?;

        let bytes = response
            .bytes()
            .map_err(|e| InfraError::network(format!("Failed to read body from {}: {}", url, e)))?;

        debug!(url, size = bytes.len(), "downloaded remote media");
        Ok(bytes.to_vec())
    }

    /// URLを構築
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// 認証ヘッダーを付与したリクエストを構築
    fn build_request(&self, mut request: RequestBuilder, auth_header: Option<&str>) -> RequestBuilder {
        if let Some(auth) = auth_header {
            request = request.header("Authorization", auth);
        }
        request
    }

    /// リクエストを送信し、エラーハンドリングを行う
    fn send_with_error_handling(
        request: RequestBuilder,
        endpoint: &str,
        method: &str,
    ) -> ApiResult<Response> {
        debug!(method, endpoint, "sending request");

        request.send().map_err(|e| {
            if e.is_timeout() {
                InfraError::timeout(format!("{} {}", method, endpoint))
            } else if e.is_connect() {
                InfraError::network(format!("Connection failed for {} {}: {}", method, endpoint, e))
            } else {
                InfraError::network(format!("Request failed for {} {}: {}", method, endpoint, e))
            }
        })
    }

    /// レスポンスをチェックしてエラーを返す
    ///
    /// # Arguments
    /// * `response` - HTTPレスポンス
    /// * `endpoint` - エンドポイント名（エラーメッセージ用）
    pub fn check_response(response: Response, endpoint: &str) -> ApiResult<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let error_body = response
            .text()
            .unwrap_or_else(|_| "Unable to read error response".to_string());

        debug!(endpoint, status_code, "request rejected");
        Err(InfraError::api(endpoint, error_body, Some(status_code)))
    }

    /// JSONレスポンスをデシリアライズ
    pub fn parse_json<T: DeserializeOwned>(response: Response, endpoint: &str) -> ApiResult<T> {
        response.json().map_err(|e| {
            InfraError::invalid_response(endpoint, format!("Failed to parse JSON response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new("https://api.imgur.com").unwrap();
        assert_eq!(client.base_url(), "https://api.imgur.com");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://127.0.0.1:1234/").unwrap();
        assert_eq!(client.build_url("/3/image"), "http://127.0.0.1:1234/3/image");
    }

    #[test]
    fn test_production_client() {
        let client = ApiClient::production().unwrap();
        assert_eq!(client.base_url(), APP_CONFIG.api.endpoint);
    }

    #[test]
    fn test_download_rejects_non_success() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/missing.png")
            .with_status(404)
            .with_body("not here")
            .create();

        let client = ApiClient::new(server.url()).unwrap();
        let err = client
            .download(&format!("{}/missing.png", server.url()))
            .unwrap_err();

        mock.assert();
        assert_eq!(err.status_code(), Some(404));
        assert!(matches!(err, InfraError::Api { ref message, .. } if message == "not here"));
    }
}
