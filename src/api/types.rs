/// API レスポンスの共通エンベロープ
///
/// Doodstream のレスポンスは概ね `{ "msg", "status", "server_time", "result" }` の形をとる。
/// クライアントのメソッドは `serde_json::Value` をそのまま返すので、
/// この型は呼び出し側が必要に応じて使う読み取り用のビュー。
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 成功時の `status` 値
pub const STATUS_OK: u16 = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = Value> {
    /// "OK" またはエラーメッセージ
    #[serde(default)]
    pub msg: Option<String>,

    /// アプリケーションレベルのステータス（HTTP ステータスとは別）
    #[serde(default)]
    pub status: Option<u16>,

    /// サーバー時刻（"YYYY-MM-DD HH:MM:SS"）
    #[serde(default)]
    pub server_time: Option<String>,

    /// エンドポイント固有のペイロード
    #[serde(default = "Option::default")]
    pub result: Option<T>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// クライアントが返した `Value` を解釈する
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

impl<T> ApiResponse<T> {
    /// `status` が 200 かどうか
    pub fn is_ok(&self) -> bool {
        self.status == Some(STATUS_OK)
    }
}
