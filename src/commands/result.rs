/// コマンド実行結果を表す型
///
/// 各コマンドはこの型を返し、プレゼンテーション層で
/// 人間向けと機械向けの出力フォーマットを決定する。
use serde::Serialize;
use serde_json::Value;

/// コマンド実行結果の統一型
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandResult {
    Login(LoginResult),
    Logout(LogoutResult),
    Status(StatusResult),
    Api(ApiCallResult),
    Help,
}

/// ログインコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    /// 既にキーが保存されていたか（上書きの場合true）
    pub was_logged_in: bool,
    /// マスク済みのAPIキー
    pub api_key: String,
}

/// ログアウトコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct LogoutResult {
    pub was_logged_in: bool,
}

/// ステータスコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct StatusResult {
    /// キーがリモートに受け入れられたか
    pub is_authenticated: bool,
    /// マスク済みのAPIキー（設定されている場合）
    pub api_key: Option<String>,
    /// キーの取得元（"environment" / "config_file"）
    pub key_source: Option<&'static str>,
    /// `account/info` の `result`
    pub account: Option<Value>,
    /// アカウント情報が返らなかった理由（リモートの `msg`）
    pub message: Option<String>,
}

/// APIを1回呼び出すコマンドの結果
///
/// レスポンスボディは加工せずに保持する。
#[derive(Debug, Clone, Serialize)]
pub struct ApiCallResult {
    /// 呼び出した操作名（例: "file_info"）
    pub operation: &'static str,
    pub response: Value,
}

impl CommandResult {
    pub fn api(operation: &'static str, response: Value) -> Self {
        Self::Api(ApiCallResult {
            operation,
            response,
        })
    }
}
