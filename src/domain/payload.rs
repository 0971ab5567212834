/// ドメインサービス: アップロード入力の正規化
///
/// URL・ファイルパス・メモリバッファ・生バイト列のいずれかを受け取り、
/// Imgur が受け付ける2つの形式のどちらかに変換する。
/// - URL はそのまま渡し、Imgur 側で取得させる（`type=url`）
/// - それ以外はバイト列を base64 エンコードする（`type=base64`）
use crate::api::client::ApiClient;
use crate::domain::error::DomainError;
use crate::error::Error;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Url;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use tracing::debug;

/// アップロード入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadPayload {
    /// 絶対URL（スキームとホストを持つ）
    Url(String),
    /// ローカルファイルのパス
    Path(PathBuf),
    /// メモリ上のバッファ（カーソル位置に関係なく全体を使う）
    Buffer(Cursor<Vec<u8>>),
    /// 生バイト列
    Bytes(Vec<u8>),
}

impl UploadPayload {
    /// 文字列入力を分類する
    ///
    /// 絶対URLなら `Url`、それ以外はすべてファイルパスとして `Path` になる。
    /// 空文字列も `Path` に分類され、正規化時に FileNotFound になる。
    pub fn from_input(input: &str) -> Self {
        if is_url(input) {
            Self::Url(input.to_string())
        } else {
            Self::Path(PathBuf::from(input))
        }
    }
}

impl From<&str> for UploadPayload {
    fn from(input: &str) -> Self {
        Self::from_input(input)
    }
}

impl From<String> for UploadPayload {
    fn from(input: String) -> Self {
        Self::from_input(&input)
    }
}

impl From<PathBuf> for UploadPayload {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for UploadPayload {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<Cursor<Vec<u8>>> for UploadPayload {
    fn from(buffer: Cursor<Vec<u8>>) -> Self {
        Self::Buffer(buffer)
    }
}

impl From<Vec<u8>> for UploadPayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for UploadPayload {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

/// 送信形式の判別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadType {
    Url,
    Base64,
}

impl UploadType {
    /// フォームの `type` フィールドに入れる値
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Base64 => "base64",
        }
    }
}

impl fmt::Display for UploadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 正規化済みの入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedPayload {
    pub upload_type: UploadType,
    /// URL そのもの、または base64 文字列
    pub data: String,
}

impl PreparedPayload {
    fn url(url: String) -> Self {
        Self {
            upload_type: UploadType::Url,
            data: url,
        }
    }

    fn base64(bytes: &[u8]) -> Self {
        Self {
            upload_type: UploadType::Base64,
            data: general_purpose::STANDARD.encode(bytes),
        }
    }
}

/// 文字列が絶対URL（`scheme://host` の形）かを判定
///
/// WHATWG パーサーは `http:example.com` のように `//` が無くてもホストを補うため、
/// 入力そのものがスキームの直後に `://` を持つことも要求する。
pub fn is_url(input: &str) -> bool {
    let Ok(url) = Url::parse(input) else {
        return false;
    };

    let scheme_len = url.scheme().len();
    let written_with_authority = input
        .get(..scheme_len)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case(url.scheme()))
        && input
            .get(scheme_len..)
            .is_some_and(|rest| rest.starts_with("://"));

    written_with_authority && url.host_str().is_some_and(|host| !host.is_empty())
}

/// アップロード入力を正規化する
///
/// # Arguments
/// * `client` - `force_base64` 時のダウンロードに使う HTTP クライアント
/// * `payload` - アップロード入力
/// * `force_base64` - URL でもダウンロードして base64 で送る
///
/// # Errors
/// - ダウンロード失敗: InfraError
/// - ファイルが存在しない・読めない: DomainError
pub fn prepare_payload(
    client: &ApiClient,
    payload: UploadPayload,
    force_base64: bool,
) -> Result<PreparedPayload, Error> {
    let bytes = match payload {
        UploadPayload::Url(url) if !force_base64 => {
            debug!(%url, "passing URL through to Imgur");
            return Ok(PreparedPayload::url(url));
        }
        UploadPayload::Url(url) => client.download(&url)?,
        UploadPayload::Path(path) => read_file(&path)?,
        UploadPayload::Buffer(buffer) => buffer.into_inner(),
        UploadPayload::Bytes(bytes) => bytes,
    };

    debug!(size = bytes.len(), "encoding payload as base64");
    Ok(PreparedPayload::base64(&bytes))
}

/// ファイル全体を読み込む
fn read_file(path: &Path) -> Result<Vec<u8>, DomainError> {
    fs::read(path).map_err(|e| {
        let display = path.display().to_string();
        if e.kind() == io::ErrorKind::NotFound {
            DomainError::file_not_found(display)
        } else {
            DomainError::unreadable(display, e)
        }
    })
}
