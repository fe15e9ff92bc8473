/// ドメインサービス: アップロード対象ファイルの事前検証
///
/// ローカルアップロードはこの検証を通過したファイルに対してのみ
/// アップロード先サーバーの取得を行う。
use crate::domain::error::DomainError;
use std::fs;
use std::path::{Path, PathBuf};

/// 検証済みのアップロード対象ファイル
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub path: PathBuf,
    /// multipart の `file` パートに付けるファイル名
    pub file_name: String,
    pub size: u64,
}

/// アップロード対象のファイルを検証する
///
/// # エラー
/// - パスが存在しない: `DomainError::FileNotFound`
/// - 通常ファイルではない: `DomainError::NotAFile`
pub fn validate_upload_file(file_path: &Path) -> Result<UploadFile, DomainError> {
    if !file_path.exists() {
        return Err(DomainError::file_not_found(file_path));
    }

    // exists() と metadata() の間に消えた場合も FileNotFound として扱う
    let metadata =
        fs::metadata(file_path).map_err(|_| DomainError::file_not_found(file_path))?;

    if !metadata.is_file() {
        return Err(DomainError::not_a_file(file_path));
    }

    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    Ok(UploadFile {
        path: file_path.to_path_buf(),
        file_name,
        size: metadata.len(),
    })
}
