/// フォルダ関連コマンド
use crate::commands::{CommandResult, build_client};
use anyhow::{Context, Result};
use doodstream::{CreateFolderOptions, ListFolderOptions};

pub async fn create(name: &str, options: &CreateFolderOptions) -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .create_folder(name, options)
        .await
        .with_context(|| format!("Failed to create folder '{}'", name))?;

    Ok(CommandResult::api("create_folder", response))
}

pub async fn rename(folder_id: &str, name: &str) -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .rename_folder(folder_id, name)
        .await
        .with_context(|| format!("Failed to rename folder {}", folder_id))?;

    Ok(CommandResult::api("rename_folder", response))
}

pub async fn list(folder_id: &str, options: &ListFolderOptions) -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .list_folder(folder_id, options)
        .await
        .with_context(|| format!("Failed to list folder {}", folder_id))?;

    Ok(CommandResult::api("list_folder", response))
}
