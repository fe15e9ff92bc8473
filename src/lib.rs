//! Doodstream API クライアント
//!
//! Doodstream の HTTP API をエンドポイント単位のメソッドとして公開する。
//! 各メソッドはクエリ文字列を組み立てて一回だけリクエストを送り、
//! レスポンスボディ（JSON）をそのまま返す。
//! 認証エラーを示す2つの既知メッセージだけは型付きエラーに正規化する。
//!
//! ```no_run
//! use doodstream::{Client, ListFilesOptions};
//!
//! # async fn run() -> Result<(), doodstream::ApiError> {
//! let client = Client::new("your-api-key");
//! let account = client.account_info().await?;
//! let files = client
//!     .list_files(&ListFilesOptions {
//!         per_page: Some(50),
//!         ..Default::default()
//!     })
//!     .await?;
//! # let _ = (account, files);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod error_severity;

pub use api::auth::ApiKey;
pub use api::client::{Client, DEFAULT_BASE_URL};
pub use api::error::{ApiError, AuthErrorCode, ErrorKind};
pub use api::options::{
    AccountReportsOptions, CloneOptions, CreateFolderOptions, DmcaListOptions, ListFilesOptions,
    ListFolderOptions, RemoteActionsOptions, RemoteAddOptions,
};
pub use api::types::ApiResponse;
pub use domain::error::DomainError;
pub use error_severity::ErrorSeverity;
