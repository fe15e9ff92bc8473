mod cli;
mod commands;
mod presentation;

use doodstream::config::APP_CONFIG;
use doodstream::config::error::ConfigError;
use doodstream::{ApiError, DomainError};
use presentation::output;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    init_logging();

    let options = match cli::parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => return,
        Err(e) => {
            // 解析に失敗した場合も --machine が指定されていれば JSON で返す
            handle_error(e, args.iter().any(|arg| arg == "--machine"));
            return;
        }
    };
    let machine_output = options.machine;

    let outcome = match cli::dispatch(options.command).await {
        Ok(result) => output::output_result(&result, machine_output),
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        handle_error(e, machine_output);
    }
}

/// tracing の初期化
///
/// 出力先は stderr（stdout はコマンド結果用）。
/// RUST_LOG が未設定なら埋め込み設定の `logging.level` を使う。
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&APP_CONFIG.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// エラーを表示して終了する
///
/// anyhow::Error から元のエラー型を downcast して、
/// エラーの種類に応じた exit code とヒントを決定する。
fn handle_error(error: anyhow::Error, machine_output: bool) {
    let exit_code = determine_exit_code(&error);
    let hint = get_error_hint(&error);
    let code = get_error_code(&error);

    output::output_error(&error, code, exit_code, hint, machine_output);

    std::process::exit(exit_code);
}

/// エラーチェーンから終了コードを決定
fn determine_exit_code(error: &anyhow::Error) -> i32 {
    for cause in error.chain() {
        if let Some(api_err) = cause.downcast_ref::<ApiError>() {
            return api_err.severity().exit_code();
        }

        if let Some(domain_err) = cause.downcast_ref::<DomainError>() {
            return domain_err.severity().exit_code();
        }

        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_err.severity().exit_code();
        }
    }

    // 引数の誤りなど、型付きでないエラー
    1
}

/// エラーに対するユーザー向けヒントを取得
fn get_error_hint(error: &anyhow::Error) -> Option<&'static str> {
    error.chain().find_map(|cause| {
        if let Some(api_err) = cause.downcast_ref::<ApiError>() {
            api_err.hint()
        } else if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            config_err.hint()
        } else {
            None
        }
    })
}

/// 機械可読なエラーコード（ApiError のみ）
fn get_error_code(error: &anyhow::Error) -> Option<&'static str> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ApiError>().map(ApiError::code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use doodstream::AuthErrorCode;

    #[test]
    fn test_exit_code_for_unauthorized() {
        let error = Err::<(), _>(ApiError::unauthorized(AuthErrorCode::InvalidApiKey))
            .context("Account command failed")
            .unwrap_err();

        assert_eq!(determine_exit_code(&error), 2);
        assert_eq!(get_error_code(&error), Some("INVALID_API_KEY"));
        assert!(get_error_hint(&error).is_some());
    }

    #[test]
    fn test_exit_code_for_missing_upload_file() {
        let error = Err::<(), _>(ApiError::from(DomainError::file_not_found("clip.mp4")))
            .context("Upload command failed")
            .unwrap_err();

        assert_eq!(determine_exit_code(&error), 1);
        assert_eq!(get_error_code(&error), Some("NOT_FOUND"));
    }

    #[test]
    fn test_exit_code_for_missing_api_key() {
        let error = Err::<(), _>(ConfigError::api_key_not_found("none"))
            .context("API key is not configured")
            .unwrap_err();

        assert_eq!(determine_exit_code(&error), 2);
        assert_eq!(get_error_code(&error), None);
    }

    #[test]
    fn test_exit_code_for_untyped_error() {
        let error = anyhow::anyhow!("Unknown command: 'nope'");
        assert_eq!(determine_exit_code(&error), 1);
        assert!(get_error_hint(&error).is_none());
    }
}
