/// ユーザー設定モジュール
///
/// 実行時にユーザーディレクトリから読み込まれる動的設定を管理します。
/// Windows: C:\Users\<User>\AppData\Roaming\doodstream\config.toml
/// macOS:   /Users/<User>/Library/Application Support/doodstream/config.toml
/// Linux:   /home/<user>/.config/doodstream/config.toml
///
/// 初回読み込み時にデフォルト内容の config.toml を作成します。
/// APIキーを含むため、Unix では所有者のみ読み書き可能(0600)にします。
use crate::api::auth::ApiKey;
use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// 保存済みキーより優先される環境変数
pub const API_KEY_ENV: &str = "DOODSTREAM_API_KEY";

const DEFAULT_CONFIG_CONTENT: &str = r#"# Doodstream CLI - User Configuration
# The API key is stored here by 'doodstream login'.
# The DOODSTREAM_API_KEY environment variable takes precedence when set.
"#;

/// ユーザー設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Doodstream API キー
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// 解決済みのAPIキーとその取得元
#[derive(Debug, Clone)]
pub struct ResolvedApiKey {
    pub key: ApiKey,
    pub source: ApiKeySource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeySource {
    Environment,
    ConfigFile,
}

impl UserConfig {
    /// ユーザー設定ファイルのパスを取得
    ///
    /// # Errors
    /// 設定ディレクトリが取得できない場合に ConfigError::DirectoryNotFound を返します。
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .ok_or_else(|| ConfigError::directory_not_found("Failed to get user config directory"))
            .map(|config_dir| config_dir.join("doodstream").join("config.toml"))
    }

    /// 既定の場所からユーザー設定を読み込む
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定したパスからユーザー設定を読み込む
    ///
    /// ファイルが存在しない場合はデフォルト内容で作成します。
    /// 読み込み後に検証を行います。
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            write_config_file(config_path, DEFAULT_CONFIG_CONTENT)?;
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            ConfigError::file_system(
                format!("Failed to read config file: {}", config_path.display()),
                e,
            )
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::parse_error(
                format!("Failed to parse config file ({})", config_path.display()),
                e,
            )
        })?;

        config.validate()?;

        Ok(config)
    }

    /// 既定の場所へ保存する
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// 指定したパスへ保存する
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        let body = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::serialize_error("Failed to serialize config", e))?;

        write_config_file(config_path, &format!("{}\n{}", DEFAULT_CONFIG_CONTENT, body))
    }

    /// 保存されているAPIキーが空でないことを確認する
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(key) = &self.api_key {
            if key.trim().is_empty() {
                return Err(ConfigError::validation_error(
                    "api_key cannot be empty. Please run 'doodstream login' again.",
                ));
            }
        }
        Ok(())
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = Some(key.into());
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn clear_api_key(&mut self) {
        self.api_key = None;
    }

    /// 使用するAPIキーを決定する
    ///
    /// `DOODSTREAM_API_KEY` が空でなければそれを、なければ保存済みのキーを使う。
    ///
    /// # Errors
    /// どちらもない場合に ConfigError::ApiKeyNotFound を返します。
    pub fn resolve_api_key(&self) -> Result<ResolvedApiKey, ConfigError> {
        self.resolve_api_key_with(env::var(API_KEY_ENV).ok())
    }

    fn resolve_api_key_with(&self, env_value: Option<String>) -> Result<ResolvedApiKey, ConfigError> {
        if let Some(key) = env_value.filter(|v| !v.trim().is_empty()) {
            return Ok(ResolvedApiKey {
                key: ApiKey::new(key.trim()),
                source: ApiKeySource::Environment,
            });
        }

        self.api_key
            .as_deref()
            .map(|key| ResolvedApiKey {
                key: ApiKey::new(key),
                source: ApiKeySource::ConfigFile,
            })
            .ok_or_else(|| {
                ConfigError::api_key_not_found(
                    "No API key configured. Please run 'doodstream login' first.",
                )
            })
    }
}

/// 親ディレクトリを作成して書き込む
///
/// 新規作成時は最初から所有者のみ読み書き可能(0600)で開く。
/// 既存ファイルのパーミッションが緩い場合は書き込み前に絞る。
fn write_config_file(config_path: &Path, content: &str) -> Result<(), ConfigError> {
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ConfigError::file_system(
                format!("Failed to create config directory: {}", parent.display()),
                e,
            )
        })?;
    }

    let write_error = |e: io::Error| {
        ConfigError::file_system(
            format!("Failed to write config file: {}", config_path.display()),
            e,
        )
    };

    let mut file = open_private(config_path).map_err(write_error)?;
    restrict_permissions(&file, config_path)?;
    file.write_all(content.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)
}

#[cfg(unix)]
fn open_private(config_path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(config_path)
}

#[cfg(not(unix))]
fn open_private(config_path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(config_path)
}

#[cfg(unix)]
fn restrict_permissions(file: &File, config_path: &Path) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(0o600))
        .map_err(|e| {
            ConfigError::file_system(
                format!("Failed to set permissions (0600) for {}", config_path.display()),
                e,
            )
        })
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &File, _config_path: &Path) -> Result<(), ConfigError> {
    Ok(())
}
