/// ドメイン層のエラー定義
///
/// ローカルファイルの事前検証で発生するエラー。
/// どちらもネットワーク通信の前に検出される。
use crate::error_severity::ErrorSeverity;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// ファイルが存在しない
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// パスは存在するが通常ファイルではない（ディレクトリ等）
    #[error("Provided path is not a file: {}", path.display())]
    NotAFile { path: PathBuf },
}

impl DomainError {
    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Self::FileNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn not_a_file(path: impl AsRef<Path>) -> Self {
        Self::NotAFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 機械可読なエラーコード
    pub fn code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "NOT_FOUND",
            Self::NotAFile { .. } => "UNSUPPORTED_MEDIA_TYPE",
        }
    }

    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::UserError
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::FileNotFound { .. } => {
                Some("Please check the file path and ensure the file exists.")
            }
            Self::NotAFile { .. } => Some("Please specify a regular file, not a directory."),
        }
    }
}
