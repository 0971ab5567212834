//! Imgur への画像・動画アップロードクライアント
//!
//! OAuth2 の refresh token でアクセストークンを取得し、
//! URL・ファイルパス・メモリバッファ・バイト列のいずれかをアップロードする。
//!
//! ```no_run
//! use quickimgur::{Credentials, ImgurClient, ImageUploadOptions};
//!
//! let client = ImgurClient::new(Credentials::from_env()?)?;
//! let response = client.upload_image("cat.png", &ImageUploadOptions::default())?;
//! println!("{}", response["data"]["link"]);
//! # Ok::<(), quickimgur::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod error_severity;

pub use api::imgur::ImgurClient;
pub use api::types::{ImageUploadOptions, VideoUploadOptions};
pub use config::Credentials;
pub use domain::payload::{PreparedPayload, UploadPayload, UploadType};
pub use error::{Error, Result};
pub use error_severity::ErrorSeverity;
