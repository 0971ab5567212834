/// プレゼンテーション層: コマンド結果の出力
///
/// コマンド実行結果をユーザー向け（人間可読, stderr）または
/// 機械向け（JSON, stdout）形式で出力する責務を担います。
/// CLI使用方法の表示もこのモジュールが担当します。
use crate::commands::result::{CommandResult, StatusResult, UploadResult};
use anyhow::Result;
use quickimgur::domain::formatter::{TimeDisplay, format_timestamp_value};
use serde_json::Value;

/// ヘルプテキスト（単一の情報源）
const HELP_TEXT: &str = "quickimgur
Upload images and videos to Imgur from the command line

Usage:
  quickimgur [--machine] <command> [args...]

Global Flags:
  --machine        - Output machine-readable JSON to stdout (for scripting)
                     Works for both success and error cases

Available commands:
  image <input> [--title T] [--description D] [--force-base64]
                   - Upload an image
  video <input> [--title T] [--description D] [--disable-audio] [--force-base64]
                   - Upload a video
  status           - Check that the credentials can obtain an access token
  help             - Display this help message

Input:
  <input> is an absolute URL, a file path, or '-' to read from stdin.
  URLs are fetched by Imgur unless --force-base64 is given, in which case
  they are downloaded locally and sent as base64.

Credentials:
  IMGUR_CLIENT_ID, IMGUR_CLIENT_SECRET and IMGUR_REFRESH_TOKEN are read from
  the environment, ./.env, or <config dir>/quickimgur/.env.

Logging:
  RUST_LOG=debug quickimgur image cat.png   - Verbose logs on stderr";

/// コマンド使用方法を表示する
pub fn print_usage() {
    eprintln!("{}", HELP_TEXT);
}

/// コマンド結果を適切な形式で出力する
///
/// # Arguments
/// * `result` - コマンド実行結果
/// * `machine_output` - 機械可読出力フラグ
pub fn output_result(result: &CommandResult, machine_output: bool) -> Result<()> {
    if machine_output {
        println!("{}", serde_json::to_string(&machine_readable(result))?);
    } else {
        output_human_readable(result);
    }

    Ok(())
}

/// エラーを適切な形式で出力する
///
/// 機械向けの場合は stdout に JSON、人間向けの場合は stderr にメッセージと原因連鎖を出す。
pub fn output_error(error: &anyhow::Error, exit_code: i32, hint: Option<&str>, machine_output: bool) {
    if machine_output {
        let causes: Vec<String> = error.chain().skip(1).map(|c| c.to_string()).collect();
        let json = serde_json::json!({
            "success": false,
            "error": error.to_string(),
            "causes": causes,
            "exit_code": exit_code,
            "hint": hint,
        });
        println!("{}", json);
        return;
    }

    eprintln!("Error: {}", error);

    let chain: Vec<_> = error.chain().skip(1).collect();
    if !chain.is_empty() {
        eprintln!("\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            eprintln!("  {}: {}", i + 1, cause);
        }
    }

    if let Some(hint) = hint {
        eprintln!("\nHint: {}", hint);
    }
}

/// 人間向けの詳細メッセージを出力（stderr）
///
/// stdout はパイプライン用に空けておき、アップロードしたリンクだけを出す。
fn output_human_readable(result: &CommandResult) {
    match result {
        CommandResult::Image(r) | CommandResult::Video(r) => {
            eprintln!("\nUpload completed successfully!");
            eprintln!("---");
            for line in upload_summary(r) {
                eprintln!("{}", line);
            }
            eprintln!("---");

            if let Some(link) = r.response["data"]["link"].as_str() {
                println!("{}", link);
            }
        }
        CommandResult::Status(r) => {
            for line in status_summary(r) {
                eprintln!("{}", line);
            }
        }
        CommandResult::Help => {
            eprintln!("{}", HELP_TEXT);
        }
    }
}

/// アップロード結果の要約行
///
/// レスポンスのスキーマは検証しないため、存在するフィールドだけを表示する。
fn upload_summary(result: &UploadResult) -> Vec<String> {
    let data = &result.response["data"];
    let mut lines = vec![format!("Input:        {}", result.input)];

    let text_fields = [
        ("Link:         ", "link"),
        ("ID:           ", "id"),
        ("Type:         ", "type"),
        ("Delete hash:  ", "deletehash"),
    ];
    for (label, key) in text_fields {
        if let Some(value) = data[key].as_str() {
            lines.push(format!("{}{}", label, value));
        }
    }

    if let Some(size) = data["size"].as_u64() {
        lines.push(format!(
            "Size:         {} bytes ({:.2} MB)",
            size,
            size as f64 / 1_048_576.0
        ));
    }

    if let Some(uploaded_at) = format_timestamp_value(&data["datetime"], TimeDisplay::Local) {
        lines.push(format!("Uploaded at:  {}", uploaded_at));
    }

    lines
}

/// ステータス結果の表示行
fn status_summary(result: &StatusResult) -> Vec<String> {
    if result.is_authenticated {
        vec![
            "Authenticated".to_string(),
            format!("Client ID: {}", result.client_id),
            String::new(),
            "Your credentials are valid and working.".to_string(),
        ]
    } else {
        let mut lines = vec![
            "✗ Authentication failed".to_string(),
            format!("  Client ID: {}", result.client_id),
        ];
        if let Some(error) = &result.error {
            lines.push(format!("  Error: {}", error));
        }
        lines.push(String::new());
        lines.push("Your refresh token may be invalid or revoked.".to_string());
        lines
    }
}

/// 機械可読JSONを構築
///
/// アップロード結果は Imgur のレスポンスをそのまま `response` に入れる。
fn machine_readable(result: &CommandResult) -> Value {
    match result {
        CommandResult::Image(r) | CommandResult::Video(r) => {
            serde_json::json!({
                "success": true,
                "command": result.command_name(),
                "input": r.input,
                "response": r.response
            })
        }
        CommandResult::Status(r) => {
            serde_json::json!({
                "success": true,
                "command": "status",
                "is_authenticated": r.is_authenticated,
                "client_id": r.client_id,
                "error": r.error
            })
        }
        CommandResult::Help => {
            serde_json::json!({
                "success": true,
                "command": "help"
            })
        }
    }
}
