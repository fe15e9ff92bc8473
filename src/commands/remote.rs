/// リモートアップロード（URL転送）関連コマンド
use crate::commands::{CommandResult, build_client};
use anyhow::{Context, Result};
use doodstream::{RemoteActionsOptions, RemoteAddOptions};

pub async fn add(url: &str, options: &RemoteAddOptions) -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .remote_add(url, options)
        .await
        .context("Failed to add remote upload")?;

    Ok(CommandResult::api("remote_add", response))
}

pub async fn list() -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .remote_list()
        .await
        .context("Failed to list remote uploads")?;

    Ok(CommandResult::api("remote_list", response))
}

pub async fn status(file_code: &str) -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .remote_status(file_code)
        .await
        .with_context(|| format!("Failed to fetch remote upload status for {}", file_code))?;

    Ok(CommandResult::api("remote_status", response))
}

pub async fn slots() -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .remote_slots()
        .await
        .context("Failed to fetch remote upload slots")?;

    Ok(CommandResult::api("remote_slots", response))
}

pub async fn actions(restart_errors: bool, options: &RemoteActionsOptions) -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .remote_actions(restart_errors, options)
        .await
        .context("Failed to perform remote upload action")?;

    Ok(CommandResult::api("remote_actions", response))
}
