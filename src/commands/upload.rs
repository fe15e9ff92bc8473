use crate::commands::{CommandResult, build_client};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// アップロード先サーバーを表示する
pub async fn server() -> Result<CommandResult> {
    let client = build_client()?;
    let response = client
        .upload_url()
        .await
        .context("Failed to fetch upload server")?;

    Ok(CommandResult::api("upload_url", response))
}

/// ローカルファイルをアップロードする
///
/// パスの検証はクライアント側で行われ、失敗時は通信しない。
pub async fn local(file_path: &Path) -> Result<CommandResult> {
    let client = build_client()?;

    info!(path = %file_path.display(), "uploading local file");
    let response = client
        .local_upload(file_path)
        .await
        .with_context(|| format!("Failed to upload {}", file_path.display()))?;

    Ok(CommandResult::api("local_upload", response))
}
