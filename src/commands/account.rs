/// アカウント関連コマンド（account / reports / dmca）
use crate::commands::{CommandResult, build_client};
use anyhow::{Context, Result};
use doodstream::{AccountReportsOptions, DmcaListOptions};

pub async fn info() -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .account_info()
        .await
        .context("Failed to fetch account information")?;

    Ok(CommandResult::api("account_info", response))
}

pub async fn reports(options: &AccountReportsOptions) -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .account_reports(options)
        .await
        .context("Failed to fetch account reports")?;

    Ok(CommandResult::api("account_reports", response))
}

pub async fn dmca(options: &DmcaListOptions) -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .dmca_list(options)
        .await
        .context("Failed to fetch DMCA list")?;

    Ok(CommandResult::api("dmca_list", response))
}
