/// 設定管理モジュール
///
/// このモジュールは2層の設定構造を提供します:
/// 1. AppConfig - ビルド時に埋め込まれる静的設定（APP_CONFIG）
/// 2. UserConfig - 実行時に読み込まれるユーザー設定（APIキー）
///
/// # 使用例
///
/// ```no_run
/// use doodstream::config::{APP_CONFIG, UserConfig};
///
/// let endpoint = &APP_CONFIG.api.endpoint;
/// let api_key = UserConfig::load()?.resolve_api_key()?;
/// # let _ = (endpoint, api_key);
/// # Ok::<(), doodstream::config::error::ConfigError>(())
/// ```
pub mod app;
pub mod error;
pub mod user;

pub use app::APP_CONFIG;
pub use user::{ApiKeySource, UserConfig};
