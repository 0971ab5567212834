use crate::commands::{self, CommandResult, upload::UploadArgs};
use anyhow::{Context, Result, bail};

/// 機械可読出力のグローバルフラグ
pub const MACHINE_FLAG: &str = "--machine";

/// 解析済みのコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Image(UploadArgs),
    Video(UploadArgs),
    Status,
    Help,
}

/// 解析済みのCLI呼び出し
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub machine_output: bool,
    /// コマンドが指定されていない場合は None（使用方法を表示する）
    pub command: Option<Command>,
}

/// 引数に `--machine` が含まれているか
///
/// 引数の解析に失敗した場合でもエラー出力の形式を決められるよう、単独で判定する。
pub fn is_machine_mode(args: &[String]) -> bool {
    args.iter().skip(1).any(|arg| arg == MACHINE_FLAG)
}

/// CLI引数を解析する
pub fn parse_args(args: &[String]) -> Result<Invocation> {
    let machine_output = is_machine_mode(args);
    let rest: Vec<&str> = args
        .iter()
        .skip(1)
        .map(String::as_str)
        .filter(|arg| *arg != MACHINE_FLAG)
        .collect();

    let Some((command, command_args)) = rest.split_first() else {
        return Ok(Invocation {
            machine_output,
            command: None,
        });
    };

    let command = match *command {
        "image" => Command::Image(parse_upload_args(command_args, false)?),
        "video" => Command::Video(parse_upload_args(command_args, true)?),
        "status" => Command::Status,
        "help" | "--help" | "-h" => Command::Help,
        other => bail!(
            "Unknown command: '{}'. Use 'help' to see available commands.",
            other
        ),
    };

    Ok(Invocation {
        machine_output,
        command: Some(command),
    })
}

/// image / video コマンドの引数を解析する
fn parse_upload_args(args: &[&str], is_video: bool) -> Result<UploadArgs> {
    let mut parsed = UploadArgs::default();
    let mut input = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match *arg {
            "--title" => {
                let value = iter.next().context("--title requires a value")?;
                parsed.title = Some(value.to_string());
            }
            "--description" => {
                let value = iter.next().context("--description requires a value")?;
                parsed.description = Some(value.to_string());
            }
            "--force-base64" => parsed.force_base64 = true,
            "--disable-audio" if is_video => parsed.disable_audio = true,
            "--disable-audio" => bail!("--disable-audio is only supported for video uploads"),
            flag if flag.starts_with("--") => bail!("Unknown option: '{}'", flag),
            value => {
                if input.is_some() {
                    bail!("Unexpected argument: '{}'. Only one input can be uploaded at a time.", value);
                }
                input = Some(value.to_string());
            }
        }
    }

    parsed.input = input.context("Please specify a URL, a file path, or '-' for stdin")?;
    Ok(parsed)
}

/// 解析済みのコマンドを実行する
pub fn dispatch(command: &Command) -> Result<CommandResult> {
    match command {
        Command::Image(args) => {
            commands::upload::execute_image(args).context("Image upload command failed")
        }
        Command::Video(args) => {
            commands::upload::execute_video(args).context("Video upload command failed")
        }
        Command::Status => commands::status::execute().context("Status command failed"),
        Command::Help => Ok(commands::help::execute()),
    }
}
