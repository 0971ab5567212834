mod cli;
mod commands;
mod presentation;

use anyhow::Result;
use quickimgur::api::error::InfraError;
use quickimgur::config::APP_CONFIG;
use quickimgur::config::error::ConfigError;
use quickimgur::domain::error::DomainError;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let machine_output = cli::is_machine_mode(&args);

    if let Err(e) = run(&args) {
        handle_error(e, machine_output);
    }
}

/// ログ出力の初期化
///
/// RUST_LOG が設定されていればそれを使い、なければ config.toml のレベルを使う。
/// stdout は結果出力用なので、ログは stderr に出す。
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&APP_CONFIG.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// アプリケーションのメイン処理
fn run(args: &[String]) -> Result<()> {
    let invocation = cli::parse_args(args)?;

    let Some(command) = invocation.command else {
        presentation::output::print_usage();
        return Ok(());
    };

    let result = cli::dispatch(&command)?;
    presentation::output::output_result(&result, invocation.machine_output)
}

/// エラーハンドリングとユーザーへの表示
///
/// anyhow::Error から元のエラー型を downcast して、
/// エラーの種類に応じた exit code とメッセージを決定する。
fn handle_error(error: anyhow::Error, machine_output: bool) {
    let exit_code = determine_exit_code(&error);
    let hint = get_error_hint(&error);

    presentation::output::output_error(&error, exit_code, hint.as_deref(), machine_output);

    std::process::exit(exit_code);
}

/// エラーチェーンから適切な終了コードを決定
fn determine_exit_code(error: &anyhow::Error) -> i32 {
    for cause in error.chain() {
        if let Some(err) = cause.downcast_ref::<quickimgur::Error>() {
            return err.severity().exit_code();
        }
        if let Some(err) = cause.downcast_ref::<ConfigError>() {
            return err.severity().exit_code();
        }
        if let Some(err) = cause.downcast_ref::<InfraError>() {
            return err.severity().exit_code();
        }
        if let Some(err) = cause.downcast_ref::<DomainError>() {
            return err.severity().exit_code();
        }
    }

    // 引数エラーなど、型を持たないエラー
    1
}

/// エラーに対するユーザー向けヒントを取得
fn get_error_hint(error: &anyhow::Error) -> Option<String> {
    for cause in error.chain() {
        let hint = if let Some(err) = cause.downcast_ref::<quickimgur::Error>() {
            err.hint()
        } else if let Some(err) = cause.downcast_ref::<ConfigError>() {
            err.hint()
        } else if let Some(err) = cause.downcast_ref::<InfraError>() {
            err.hint()
        } else if let Some(err) = cause.downcast_ref::<DomainError>() {
            err.hint()
        } else {
            None
        };

        if let Some(hint) = hint {
            return Some(hint.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_from_library_error() {
        let err: anyhow::Error = quickimgur::Error::from(ConfigError::missing_credential(
            "IMGUR_CLIENT_ID",
        ))
        .into();
        assert_eq!(determine_exit_code(&err), 2);
        assert!(get_error_hint(&err).is_some());
    }

    #[test]
    fn test_exit_code_through_context() {
        let err = Err::<(), _>(DomainError::file_not_found("a.png"))
            .context("Image upload command failed")
            .unwrap_err();
        assert_eq!(determine_exit_code(&err), 1);
    }

    #[test]
    fn test_exit_code_for_api_failure() {
        let err: anyhow::Error =
            quickimgur::Error::from(InfraError::api("/3/image", "oops", Some(500))).into();
        assert_eq!(determine_exit_code(&err), 3);
    }

    #[test]
    fn test_exit_code_for_untyped_error() {
        let err = anyhow::anyhow!("Unknown command: 'album'");
        assert_eq!(determine_exit_code(&err), 1);
        assert!(get_error_hint(&err).is_none());
    }
}
