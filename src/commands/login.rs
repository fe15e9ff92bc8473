/// ログインコマンド
///
/// APIキーを受け取り、`account/info` で有効性を確認してから
/// ユーザー設定に保存します。
use crate::commands::client_for;
use crate::commands::result::{CommandResult, LoginResult};
use crate::presentation::input;
use anyhow::{Context, Result, bail};
use doodstream::config::UserConfig;
use doodstream::{ApiKey, ApiResponse};

/// ログインコマンドを実行
///
/// # Arguments
/// * `use_stdin` - true の場合、標準入力の1行目をAPIキーとして読む
pub async fn execute(use_stdin: bool) -> Result<CommandResult> {
    let raw_key = if use_stdin {
        input::read_api_key_from_stdin()?
    } else {
        input::read_api_key_interactive()?
    };
    let api_key = ApiKey::new(raw_key);

    eprintln!("Verifying API key...");
    let client = client_for(api_key.clone())?;
    let response = client
        .account_info()
        .await
        .context("Authentication failed. Please verify your API key is correct.")?;

    // 認証以外のエラーはボディで返ってくるので status を確認する
    let envelope: ApiResponse = ApiResponse::from_value(response)
        .context("Unexpected response while verifying API key")?;
    if !envelope.is_ok() {
        bail!(
            "API key verification failed: {}",
            envelope.msg.as_deref().unwrap_or("unknown error")
        );
    }

    let mut config = UserConfig::load().context("Failed to load configuration file")?;
    let was_logged_in = config.has_api_key();

    config.set_api_key(api_key.expose());
    config.save().context("Failed to save configuration file")?;

    Ok(CommandResult::Login(LoginResult {
        was_logged_in,
        api_key: api_key.masked(),
    }))
}
