/// ファイル関連コマンド
use crate::commands::{CommandResult, build_client};
use anyhow::{Context, Result};
use doodstream::{CloneOptions, ListFilesOptions};

pub async fn list(options: &ListFilesOptions) -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .list_files(options)
        .await
        .context("Failed to list files")?;

    Ok(CommandResult::api("list_files", response))
}

pub async fn status(file_code: &str) -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .file_status(file_code)
        .await
        .with_context(|| format!("Failed to check file {}", file_code))?;

    Ok(CommandResult::api("file_status", response))
}

pub async fn info(file_code: &str) -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .file_info(file_code)
        .await
        .with_context(|| format!("Failed to fetch file {}", file_code))?;

    Ok(CommandResult::api("file_info", response))
}

pub async fn image(file_code: &str) -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .file_image(file_code)
        .await
        .with_context(|| format!("Failed to fetch images for {}", file_code))?;

    Ok(CommandResult::api("file_image", response))
}

pub async fn rename(file_code: &str, title: &str) -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .rename_file(file_code, title)
        .await
        .with_context(|| format!("Failed to rename file {}", file_code))?;

    Ok(CommandResult::api("rename_file", response))
}

pub async fn move_to(file_code: &str, folder_id: &str) -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .move_file(file_code, folder_id)
        .await
        .with_context(|| format!("Failed to move file {}", file_code))?;

    Ok(CommandResult::api("move_file", response))
}

pub async fn clone(file_code: &str, options: &CloneOptions) -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .clone_video(file_code, options)
        .await
        .with_context(|| format!("Failed to clone file {}", file_code))?;

    Ok(CommandResult::api("clone_video", response))
}

pub async fn search(term: &str) -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .search_file(term)
        .await
        .context("Failed to search files")?;

    Ok(CommandResult::api("search_file", response))
}
