use crate::commands::result::{CommandResult, LogoutResult};
use anyhow::{Context, Result};
use doodstream::config::UserConfig;

/// 保存済みのAPIキーを削除する
///
/// 環境変数 `DOODSTREAM_API_KEY` には触れない。
pub fn execute() -> Result<CommandResult> {
    let mut config = UserConfig::load().context("Failed to load configuration file")?;
    let was_logged_in = config.has_api_key();

    if was_logged_in {
        config.clear_api_key();
        config.save().context("Failed to save configuration file")?;
    }

    Ok(CommandResult::Logout(LogoutResult { was_logged_in }))
}
