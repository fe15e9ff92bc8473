pub mod account;
pub mod files;
pub mod folders;
pub mod login;
pub mod logout;
pub mod remote;
pub mod result;
pub mod status;
pub mod upload;

pub use result::CommandResult;

use anyhow::{Context, Result};
use doodstream::config::{APP_CONFIG, UserConfig};
use doodstream::{ApiKey, Client};
use std::time::Duration;

/// 保存済み（または環境変数）のAPIキーでクライアントを作成する
pub fn build_client() -> Result<Client> {
    let user_config = UserConfig::load()
        .context("Failed to load user configuration. Please check your config.toml file.")?;

    let resolved = user_config
        .resolve_api_key()
        .context("API key is not configured")?;

    client_for(resolved.key)
}

/// 指定したAPIキーでクライアントを作成する
///
/// タイムアウトは埋め込み設定の値を使う。
pub fn client_for(api_key: ApiKey) -> Result<Client> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(APP_CONFIG.api.timeout_seconds))
        .build()
        .context("Failed to create HTTP client")?;

    Ok(Client::with_http_client(
        api_key,
        APP_CONFIG.api.endpoint.clone(),
        http,
    ))
}
