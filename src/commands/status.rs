use crate::commands::client_for;
use crate::commands::result::{CommandResult, StatusResult};
use anyhow::{Context, Result};
use doodstream::ApiResponse;
use doodstream::config::error::ConfigError;
use doodstream::config::{ApiKeySource, UserConfig};
use serde_json::Value;

/// 認証状態を確認する
///
/// キーが設定されていれば `account/info` を呼び、認証エラーなら未認証として報告する。
/// 認証以外の失敗（ネットワーク等）はエラーとして返す。
pub async fn execute() -> Result<CommandResult> {
    let config = UserConfig::load()
        .context("Failed to load user configuration. Please check your config.toml file.")?;

    let resolved = match config.resolve_api_key() {
        Ok(resolved) => resolved,
        Err(ConfigError::ApiKeyNotFound { .. }) => {
            return Ok(CommandResult::Status(StatusResult {
                is_authenticated: false,
                api_key: None,
                key_source: None,
                account: None,
                message: None,
            }));
        }
        Err(e) => return Err(e.into()),
    };

    let key_source = match resolved.source {
        ApiKeySource::Environment => "environment",
        ApiKeySource::ConfigFile => "config_file",
    };
    let masked = resolved.key.masked();

    let client = client_for(resolved.key)?;
    let (is_authenticated, account) = match client.account_info().await {
        Ok(response) => (true, account_details(response)),
        Err(e) if e.is_unauthorized() => (false, AccountDetails::default()),
        Err(e) => return Err(e).context("Failed to check API key"),
    };

    Ok(CommandResult::Status(StatusResult {
        is_authenticated,
        api_key: Some(masked),
        key_source: Some(key_source),
        account: account.account,
        message: account.message,
    }))
}

/// `account/info` から取り出した表示用の情報
#[derive(Debug, Default, PartialEq)]
struct AccountDetails {
    account: Option<Value>,
    /// `status` が 200 以外の場合のリモートの `msg`
    message: Option<String>,
}

/// キーは受け入れられたがアカウント情報が返らない場合（クォータ超過等）に
/// 理由を表示できるよう、`msg` を残す。
fn account_details(response: Value) -> AccountDetails {
    let Ok(envelope) = ApiResponse::<Value>::from_value(response) else {
        return AccountDetails::default();
    };

    if envelope.is_ok() {
        AccountDetails {
            account: envelope.result,
            message: None,
        }
    } else {
        AccountDetails {
            account: None,
            message: Some(
                envelope
                    .msg
                    .unwrap_or_else(|| format!("status {}", envelope.status.unwrap_or_default())),
            ),
        }
    }
}
