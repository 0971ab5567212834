/// アップロードコマンド
///
/// 入力（URL・ファイルパス・stdin）を Imgur に画像または動画としてアップロードする。
use crate::commands::result::{CommandResult, UploadResult};
use crate::commands::session;
use crate::presentation::input;
use anyhow::{Context, Result};
use quickimgur::{ImageUploadOptions, UploadPayload, VideoUploadOptions};

/// stdin から読み込むことを示す入力
pub const STDIN_INPUT: &str = "-";

/// アップロードコマンドの引数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadArgs {
    pub input: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub disable_audio: bool,
    pub force_base64: bool,
}

impl UploadArgs {
    fn image_options(&self) -> ImageUploadOptions {
        ImageUploadOptions {
            title: self.title.clone(),
            description: self.description.clone(),
            force_base64: self.force_base64,
        }
    }

    fn video_options(&self) -> VideoUploadOptions {
        VideoUploadOptions {
            title: self.title.clone(),
            description: self.description.clone(),
            disable_audio: self.disable_audio,
            force_base64: self.force_base64,
        }
    }
}

/// 画像アップロードを実行する
///
/// # エラー
/// このレイヤーでは anyhow::Result を返し、ライブラリのエラーに文脈を付ける。
pub fn execute_image(args: &UploadArgs) -> Result<CommandResult> {
    let client = session::connect()?;
    let payload = resolve_payload(&args.input)?;

    let response = client
        .upload_image(payload, &args.image_options())
        .with_context(|| format!("Failed to upload image: {}", args.input))?;

    Ok(CommandResult::Image(UploadResult {
        input: args.input.clone(),
        response,
    }))
}

/// 動画アップロードを実行する
pub fn execute_video(args: &UploadArgs) -> Result<CommandResult> {
    let client = session::connect()?;
    let payload = resolve_payload(&args.input)?;

    let response = client
        .upload_video(payload, &args.video_options())
        .with_context(|| format!("Failed to upload video: {}", args.input))?;

    Ok(CommandResult::Video(UploadResult {
        input: args.input.clone(),
        response,
    }))
}

/// コマンドライン入力をアップロード入力に変換
fn resolve_payload(input: &str) -> Result<UploadPayload> {
    if input == STDIN_INPUT {
        let bytes = input::read_payload_from_stdin()?;
        return Ok(UploadPayload::Bytes(bytes));
    }
    Ok(UploadPayload::from_input(input))
}
